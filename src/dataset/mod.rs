// ==========================================
// 玻璃窑炉烧制曲线系统 - 数据集层
// ==========================================
// 职责: 玻璃属性与时间查找表的加载、校验、查询
// 红线: 数据集只读; 查表缺失必须上抛
// ==========================================

pub mod error;
pub mod glass_table;
pub mod loader;
pub mod time_table;
pub mod validator;

// 重导出核心类型
pub use error::{DatasetError, DatasetResult, LookupError};
pub use glass_table::GlassPropertiesTable;
pub use loader::DatasetDocument;
pub use time_table::{LayerMinutes, OvenTimeTable, RadiusTable, TimeTable};
