// ==========================================
// 玻璃窑炉烧制曲线系统 - 配置层
// ==========================================
// 职责: 曲线生成默认参数与查表策略
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod generator_settings;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use generator_settings::{FallbackDurations, GeneratorSettings, LookupPolicy};
