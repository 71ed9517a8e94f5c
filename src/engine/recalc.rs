// ==========================================
// 玻璃窑炉烧制曲线系统 - 手工曲线重算与校验
// ==========================================
// 职责: 人工编辑后的曲线（任意段数）按速率重算时长,并给出违规清单
// 红线: 没有速率的阶段保留原时长,不猜测
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::phase::Phase;
use crate::engine::duration::PhaseDurationCalculator;
use crate::engine::error::{CurveError, CurveResult};
use crate::engine::velocity::MAX_VELOCITY;

/// 违规类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    EmptyCurve,                // 曲线为空
    DurationShorterThanHold,   // 总时长小于保温
    VelocityDirectionMismatch, // 速率符号与升降方向不一致
    VelocityAboveLimit,        // 速率超过上限
    DurationTooShort,          // 按速率到不了目标温度
}

/// 阶段违规详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseViolation {
    /// 阶段序号（从 0 开始；空曲线为 0）
    pub index: usize,
    pub kind: ViolationKind,
    pub reason: String,
}

// ==========================================
// CurveRecalculator - 曲线重算器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveRecalculator {
    duration_calculator: PhaseDurationCalculator,
}

impl CurveRecalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按速率重算各段时长
    ///
    /// 每段起点为上一段目标温度（第一段为 start_temp）
    pub fn recalculate(&self, start_temp: i32, phases: &[Phase]) -> Vec<Phase> {
        let mut previous = start_temp;

        phases
            .iter()
            .map(|phase| {
                let mut updated = *phase;
                if let Some(velocity) = phase.velocity {
                    updated.duration = self.duration_calculator.duration(
                        previous,
                        phase.target_temp,
                        velocity,
                        phase.hold_time,
                    );
                }
                previous = phase.target_temp;
                updated
            })
            .collect()
    }

    /// 校验曲线，返回全部违规
    #[instrument(skip(self, phases), fields(phase_count = phases.len()))]
    pub fn validate(&self, start_temp: i32, phases: &[Phase]) -> Vec<PhaseViolation> {
        if phases.is_empty() {
            return vec![PhaseViolation {
                index: 0,
                kind: ViolationKind::EmptyCurve,
                reason: "曲线没有任何阶段".to_string(),
            }];
        }

        let mut violations = Vec::new();
        let mut previous = start_temp;

        for (index, phase) in phases.iter().enumerate() {
            let mut push = |kind: ViolationKind, reason: String| {
                violations.push(PhaseViolation {
                    index,
                    kind,
                    reason,
                })
            };

            if phase.duration < phase.hold_time {
                push(
                    ViolationKind::DurationShorterThanHold,
                    format!("时长 {} 小于保温 {}", phase.duration, phase.hold_time),
                );
            }

            if let Some(velocity) = phase.velocity {
                let delta = i64::from(phase.target_temp) - i64::from(previous);

                if delta != 0 && delta.signum() != i64::from(velocity.signum()) {
                    push(
                        ViolationKind::VelocityDirectionMismatch,
                        format!(
                            "{} → {} 与速率 {} 方向不一致",
                            previous, phase.target_temp, velocity
                        ),
                    );
                } else if velocity.unsigned_abs() > MAX_VELOCITY.unsigned_abs() {
                    push(
                        ViolationKind::VelocityAboveLimit,
                        format!("速率 {} 超过上限 {}", velocity, MAX_VELOCITY),
                    );
                } else if velocity != 0 {
                    let required = self.duration_calculator.duration(
                        previous,
                        phase.target_temp,
                        velocity,
                        phase.hold_time,
                    );
                    if phase.duration < required {
                        push(
                            ViolationKind::DurationTooShort,
                            format!("时长 {} 少于所需 {}", phase.duration, required),
                        );
                    }
                }
            }

            previous = phase.target_temp;
        }

        violations
    }

    /// 校验曲线，遇到第一条违规即返回错误
    pub fn ensure_valid(&self, start_temp: i32, phases: &[Phase]) -> CurveResult<()> {
        match self.validate(start_temp, phases).into_iter().next() {
            Some(violation) => Err(CurveError::InvalidPhase {
                index: violation.index,
                reason: violation.reason,
            }),
            None => Ok(()),
        }
    }
}
