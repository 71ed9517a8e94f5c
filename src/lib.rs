// ==========================================
// 玻璃窑炉烧制曲线系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite(配置)
// 系统定位: 由玻璃属性与时间表生成 5 段烧制曲线模板
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据集层 - 玻璃属性与时间表
pub mod dataset;

// 引擎层 - 曲线计算
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    FiringCurve, FiringType, GlassRecord, Phase, TemperatureRange, TemplatePhases,
    TemplateRequest, TemplateStage, TimeTableKind,
};

// 数据集
pub use dataset::{DatasetError, GlassPropertiesTable, LookupError, OvenTimeTable, TimeTable};

// 引擎
pub use engine::{
    CurveError, CurveGenerator, CurveProfile, CurveRecalculator, PhaseDurationCalculator,
    VelocityCalculator,
};

// 配置
pub use config::{ConfigManager, GeneratorSettings, LookupPolicy};

// API
pub use api::{ApiError, CurveApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "玻璃窑炉烧制曲线系统";
