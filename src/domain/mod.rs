// ==========================================
// 玻璃窑炉烧制曲线系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod curve;
pub mod glass;
pub mod phase;
pub mod types;

// 重导出核心类型
pub use curve::{FiringCurve, TemplateRequest};
pub use glass::{GlassRecord, TemperatureRange};
pub use phase::{Phase, TemplatePhases, TEMPLATE_PHASE_COUNT};
pub use types::{FiringType, TemplateStage, TimeTableKind};
