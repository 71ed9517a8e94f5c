// ==========================================
// 玻璃窑炉烧制曲线系统 - 引擎层
// ==========================================
// 职责: 速率/时长计算与模板曲线生成
// 红线: 引擎无 I/O、无可变共享状态,同输入必同输出
// ==========================================

pub mod duration;
pub mod error;
pub mod generator;
pub mod profile;
pub mod recalc;
pub mod velocity;

// 重导出核心引擎
pub use duration::PhaseDurationCalculator;
pub use error::{CurveError, CurveResult};
pub use generator::{CurveGenerator, LookupTimes};
pub use profile::{CurveProfile, ProfilePoint};
pub use recalc::{CurveRecalculator, PhaseViolation, ViolationKind};
pub use velocity::{
    PhaseVelocities, VelocityCalculator, VelocityInputs, LAST_COOLING_VELOCITY, MAX_VELOCITY,
    SECOND_HEATING_VELOCITY,
};
