// ==========================================
// 玻璃窑炉烧制曲线系统 - 阶段时长计算
// ==========================================
// 公式: duration = ceil(|Δ| / (|v| / 60)) + hold
// 红线: 向上取整，保证按给定速率一定能到达目标温度
// ==========================================

/// 阶段时长计算器
///
/// 使用整数运算 ceil(|Δ| * 60 / |v|)，与浮点公式数学等价，
/// 但不会因浮点误差多出 1 分钟。
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseDurationCalculator;

impl PhaseDurationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 阶段总时长（分钟）
    ///
    /// velocity 为 0 时为纯保温段，时长等于 hold_time
    pub fn duration(&self, start_temp: i32, end_temp: i32, velocity: i32, hold_time: u32) -> u32 {
        self.ramp_minutes(start_temp, end_temp, velocity)
            .saturating_add(hold_time)
    }

    /// 升降温所需分钟数（不含保温）
    pub fn ramp_minutes(&self, start_temp: i32, end_temp: i32, velocity: i32) -> u32 {
        if velocity == 0 {
            return 0;
        }

        let delta = (i64::from(end_temp) - i64::from(start_temp)).abs();
        let rate = i64::from(velocity).abs();
        let minutes = (delta * 60 + rate - 1) / rate;

        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}
