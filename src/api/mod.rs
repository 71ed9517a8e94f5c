// ==========================================
// 玻璃窑炉烧制曲线系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供界面层/命令行调用
// ==========================================

pub mod curve_api;
pub mod error;

// 重导出核心类型
pub use curve_api::CurveApi;
pub use error::{ApiError, ApiResult};
