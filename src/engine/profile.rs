// ==========================================
// 玻璃窑炉烧制曲线系统 - 曲线温度剖面
// ==========================================
// 职责: 把阶段序列展开为 (分钟, 温度) 折线点,供图表层使用
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::phase::Phase;

/// 折线点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub minute: u64,
    pub temp: i32,
}

// ==========================================
// CurveProfile - 温度剖面
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveProfile {
    pub points: Vec<ProfilePoint>,
    pub total_minutes: u64,
    pub peak_temp: i32,
}

impl CurveProfile {
    /// 由阶段序列构建剖面
    ///
    /// 每段产生: 升降温终点; 有保温时再追加保温终点
    pub fn from_phases(start_temp: i32, phases: &[Phase]) -> Self {
        let mut points = vec![ProfilePoint {
            minute: 0,
            temp: start_temp,
        }];
        let mut clock: u64 = 0;
        let mut peak_temp = start_temp;

        for phase in phases {
            clock += u64::from(phase.ramp_minutes());
            points.push(ProfilePoint {
                minute: clock,
                temp: phase.target_temp,
            });

            if phase.hold_time > 0 {
                clock += u64::from(phase.duration.min(phase.hold_time));
                points.push(ProfilePoint {
                    minute: clock,
                    temp: phase.target_temp,
                });
            }

            peak_temp = peak_temp.max(phase.target_temp);
        }

        Self {
            points,
            total_minutes: clock,
            peak_temp,
        }
    }

    /// 指定时刻的温度（线性插值，超出范围取端点）
    pub fn temperature_at(&self, minute: f64) -> f64 {
        let first = self.points[0];
        if minute <= first.minute as f64 {
            return f64::from(first.temp);
        }

        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (t0, t1) = (a.minute as f64, b.minute as f64);
            if minute <= t1 {
                if t1 <= t0 {
                    return f64::from(b.temp);
                }
                let ratio = (minute - t0) / (t1 - t0);
                return f64::from(a.temp) + ratio * (f64::from(b.temp) - f64::from(a.temp));
            }
        }

        self.points
            .last()
            .map(|p| f64::from(p.temp))
            .unwrap_or_else(|| f64::from(first.temp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases() -> Vec<Phase> {
        vec![
            Phase::new(600, 35, 0, Some(999)),
            Phase::new(730, 18, 10, Some(999)),
            Phase::new(20, 60, 0, None),
        ]
    }

    #[test]
    fn test_breakpoints() {
        let profile = CurveProfile::from_phases(20, &phases());
        let minutes: Vec<u64> = profile.points.iter().map(|p| p.minute).collect();
        let temps: Vec<i32> = profile.points.iter().map(|p| p.temp).collect();
        assert_eq!(minutes, vec![0, 35, 43, 53, 113]);
        assert_eq!(temps, vec![20, 600, 730, 730, 20]);
        assert_eq!(profile.total_minutes, 113);
        assert_eq!(profile.peak_temp, 730);
    }

    #[test]
    fn test_total_matches_duration_sum() {
        let phases = phases();
        let profile = CurveProfile::from_phases(20, &phases);
        let sum: u64 = phases.iter().map(|p| u64::from(p.duration)).sum();
        assert_eq!(profile.total_minutes, sum);
    }

    #[test]
    fn test_temperature_at() {
        let profile = CurveProfile::from_phases(20, &phases());
        assert_eq!(profile.temperature_at(-5.0), 20.0);
        assert_eq!(profile.temperature_at(35.0), 600.0);
        assert_eq!(profile.temperature_at(48.0), 730.0);
        assert_eq!(profile.temperature_at(83.0), 375.0);
        assert_eq!(profile.temperature_at(10_000.0), 20.0);
    }

    #[test]
    fn test_empty_curve() {
        let profile = CurveProfile::from_phases(25, &[]);
        assert_eq!(profile.points.len(), 1);
        assert_eq!(profile.total_minutes, 0);
        assert_eq!(profile.temperature_at(10.0), 25.0);
    }

    #[test]
    fn test_temperature_at_full_i32_span() {
        let profile =
            CurveProfile::from_phases(i32::MIN, &[Phase::new(i32::MAX, 10, 0, Some(999))]);
        assert_eq!(profile.temperature_at(5.0), -0.5);
        assert_eq!(profile.peak_temp, i32::MAX);
    }
}
