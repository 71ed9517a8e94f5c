// ==========================================
// 玻璃窑炉烧制曲线系统 - 速率计算
// ==========================================
// 职责: 由温差与查表时长推导 5 段速率 (°C/min)
// 红线: 一律向零截断（整数除法语义），不四舍五入
// ==========================================

use serde::{Deserialize, Serialize};

/// 升温速率上限 (°C/min)
pub const MAX_VELOCITY: i32 = 999;

/// 熔点 → 顶温: 视为尽快升温
pub const SECOND_HEATING_VELOCITY: i32 = MAX_VELOCITY;

/// 下退火点 → 室温: 固定慢速降温
pub const LAST_COOLING_VELOCITY: i32 = -20;

/// 速率计算输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VelocityInputs {
    pub initial_melt_point: i32,
    pub room_temp: i32,
    pub heat_up_minutes: u32,
    pub upper_anneal_temp: i32,
    pub top_temp: i32,
    pub hold_table_minutes: u32,
    pub lower_anneal_temp: i32,
    pub stress_relief_minutes: u32,
}

/// 5 段速率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseVelocities {
    pub first_heating: i32,
    pub second_heating: i32,
    pub first_cooling: i32,
    pub second_cooling: i32,
    pub last_cooling: i32,
}

impl PhaseVelocities {
    /// 按模板阶段顺序
    pub fn as_array(&self) -> [i32; 5] {
        [
            self.first_heating,
            self.second_heating,
            self.first_cooling,
            self.second_cooling,
            self.last_cooling,
        ]
    }
}

// ==========================================
// VelocityCalculator - 速率计算器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityCalculator;

impl VelocityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算 5 段速率
    ///
    /// 1) first_heating  = min(trunc(60 * (熔点 - 室温) / 升温时长), 999)
    /// 2) second_heating = 999
    /// 3) first_cooling  = trunc(60 * (上退火点 - 顶温) / 保温表时长)
    /// 4) second_cooling = trunc(60 * (下退火点 - 上退火点) / 退火时长)
    /// 5) last_cooling   = -20
    pub fn calculate(&self, inputs: &VelocityInputs) -> PhaseVelocities {
        let first_heating = saturate(
            truncated_rate(
                temperature_delta(inputs.room_temp, inputs.initial_melt_point),
                inputs.heat_up_minutes,
            )
            .min(i64::from(MAX_VELOCITY)),
        );

        let first_cooling = saturate(truncated_rate(
            temperature_delta(inputs.top_temp, inputs.upper_anneal_temp),
            inputs.hold_table_minutes,
        ));

        let second_cooling = saturate(truncated_rate(
            temperature_delta(inputs.upper_anneal_temp, inputs.lower_anneal_temp),
            inputs.stress_relief_minutes,
        ));

        PhaseVelocities {
            first_heating,
            second_heating: SECOND_HEATING_VELOCITY,
            first_cooling,
            second_cooling,
            last_cooling: LAST_COOLING_VELOCITY,
        }
    }
}

/// end - start（i64，任意 i32 输入不溢出）
fn temperature_delta(start: i32, end: i32) -> i64 {
    i64::from(end) - i64::from(start)
}

/// trunc(60 * delta / minutes)
///
/// minutes 为 0 时按最大速率处理（数据集校验已拒绝 0 分钟记录）
fn truncated_rate(delta: i64, minutes: u32) -> i64 {
    if minutes == 0 {
        return i64::from(MAX_VELOCITY) * delta.signum();
    }
    // i64 整数除法向零截断
    60 * delta / i64::from(minutes)
}

fn saturate(rate: i64) -> i32 {
    rate.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
