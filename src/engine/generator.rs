// ==========================================
// 玻璃窑炉烧制曲线系统 - 模板曲线生成引擎
// ==========================================
// 职责: 编排查表、速率计算、时长计算,生成固定 5 段模板曲线
// 输入: TemplateRequest (玻璃/烧制方式/炉型/尺寸/保温/室温)
// 输出: 5 个 Phase（调用方负责持久化与展示）
// 红线: 纯函数,同输入必同输出; 查表缺失直接失败,不输出部分结果
// ==========================================

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::generator_settings::LookupPolicy;
use crate::dataset::error::LookupError;
use crate::dataset::glass_table::GlassPropertiesTable;
use crate::domain::curve::TemplateRequest;
use crate::domain::phase::{Phase, TemplatePhases};
use crate::domain::types::{TemplateStage, TimeTableKind};
use crate::engine::duration::PhaseDurationCalculator;
use crate::engine::error::CurveResult;
use crate::engine::velocity::{PhaseVelocities, VelocityCalculator, VelocityInputs};

/// 模板曲线的三项查表时长
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTimes {
    pub heat_up_minutes: u32,
    pub hold_minutes: u32,
    pub stress_relief_minutes: u32,
}

// ==========================================
// CurveGenerator - 模板曲线生成器
// ==========================================
pub struct CurveGenerator {
    dataset: Arc<GlassPropertiesTable>,
    lookup_policy: LookupPolicy,
    velocity_calculator: VelocityCalculator,
    duration_calculator: PhaseDurationCalculator,
}

impl CurveGenerator {
    /// 创建生成器（严格查表）
    pub fn new(dataset: Arc<GlassPropertiesTable>) -> Self {
        Self {
            dataset,
            lookup_policy: LookupPolicy::Strict,
            velocity_calculator: VelocityCalculator::new(),
            duration_calculator: PhaseDurationCalculator::new(),
        }
    }

    /// 指定查表缺失策略
    pub fn with_lookup_policy(mut self, lookup_policy: LookupPolicy) -> Self {
        self.lookup_policy = lookup_policy;
        self
    }

    pub fn dataset(&self) -> &GlassPropertiesTable {
        &self.dataset
    }

    pub fn lookup_policy(&self) -> LookupPolicy {
        self.lookup_policy
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成模板曲线
    ///
    /// 步骤:
    /// 1) 查玻璃
    /// 2) 按烧制方式计算顶温
    /// 3) 查升温/保温/退火时长
    /// 4) 退火点向下取整
    /// 5) 计算 5 段速率
    /// 6) 计算 5 段时长（仅第 2 段带保温）
    /// 7) 按固定顺序输出
    ///
    /// # 返回
    /// - Err(CurveError::UnknownGlass): 玻璃不存在
    /// - Err(CurveError::MissingLookup): 严格模式下任一时间表缺失
    #[instrument(
        skip(self, request),
        fields(
            glass = %request.glass_name,
            firing_type = %request.firing_type,
            oven = %request.oven_type,
            radius_cm = request.radius_cm,
            layers = request.layer_count
        )
    )]
    pub fn generate_template_phases(&self, request: &TemplateRequest) -> CurveResult<TemplatePhases> {
        // 1. 查玻璃
        let glass = self.dataset.lookup(&request.glass_name)?;

        // 2. 顶温
        let top_temp = glass.top_temp(request.firing_type);

        // 3. 查表
        let times = self.lookup_times(&glass.category, request)?;

        // 4. 退火点取整
        let upper_anneal_temp = glass.upper_anneal_floor();
        let lower_anneal_temp = glass.lower_anneal_floor();
        let melt_point = self.dataset.initial_melt_point();

        // 5. 速率
        let velocities = self.velocity_calculator.calculate(&VelocityInputs {
            initial_melt_point: melt_point,
            room_temp: request.room_temp,
            heat_up_minutes: times.heat_up_minutes,
            upper_anneal_temp,
            top_temp,
            hold_table_minutes: times.hold_minutes,
            lower_anneal_temp,
            stress_relief_minutes: times.stress_relief_minutes,
        });

        debug!(
            top_temp,
            melt_point,
            upper_anneal_temp,
            lower_anneal_temp,
            heat_up_minutes = times.heat_up_minutes,
            hold_minutes = times.hold_minutes,
            stress_relief_minutes = times.stress_relief_minutes,
            ?velocities,
            "模板曲线参数"
        );

        // 6-7. 各段时长，固定顺序
        let waypoints = [
            request.room_temp,
            melt_point,
            top_temp,
            upper_anneal_temp,
            lower_anneal_temp,
            request.room_temp,
        ];

        Ok(self.build_phases(&waypoints, &velocities, request.top_hold_minutes))
    }

    fn build_phases(
        &self,
        waypoints: &[i32; 6],
        velocities: &PhaseVelocities,
        top_hold_minutes: u32,
    ) -> TemplatePhases {
        let rates = velocities.as_array();

        TemplateStage::ALL.map(|stage| {
            let index = stage as usize;
            let (start, end) = (waypoints[index], waypoints[index + 1]);
            let hold_time = if stage == TemplateStage::HeatToTop {
                top_hold_minutes
            } else {
                0
            };
            let velocity = rates[index];

            Phase::new(
                end,
                self.duration_calculator
                    .duration(start, end, velocity, hold_time),
                hold_time,
                Some(velocity),
            )
        })
    }

    // ==========================================
    // 查表
    // ==========================================

    /// 查三项时长
    pub fn lookup_times(&self, category: &str, request: &TemplateRequest) -> CurveResult<LookupTimes> {
        Ok(LookupTimes {
            heat_up_minutes: self.resolve_time(TimeTableKind::HeatUp, category, request)?,
            hold_minutes: self.resolve_time(TimeTableKind::Hold, category, request)?,
            stress_relief_minutes: self.resolve_time(
                TimeTableKind::StressRelief,
                category,
                request,
            )?,
        })
    }

    fn resolve_time(
        &self,
        table: TimeTableKind,
        category: &str,
        request: &TemplateRequest,
    ) -> CurveResult<u32> {
        let result = self.dataset.lookup_time(
            table,
            category,
            Some(request.oven_type.as_str()),
            request.radius_cm,
            request.layer_count,
        );

        match (result, self.lookup_policy) {
            (Ok(minutes), _) => Ok(minutes),
            (Err(err @ LookupError::MissingLookup { .. }), LookupPolicy::Fallback(fallback)) => {
                let minutes = match table {
                    TimeTableKind::HeatUp => fallback.heat_up_minutes,
                    TimeTableKind::Hold => fallback.hold_minutes,
                    TimeTableKind::StressRelief => fallback.stress_relief_minutes,
                };
                warn!(%err, minutes, "时间表缺失，使用兜底时长");
                Ok(minutes)
            }
            (Err(err), _) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::generator_settings::FallbackDurations;
    use crate::dataset::time_table::{OvenTimeTable, TimeTable};
    use crate::domain::glass::{GlassRecord, TemperatureRange};
    use crate::domain::types::FiringType;
    use crate::engine::error::CurveError;

    fn generator() -> CurveGenerator {
        let glass = GlassRecord {
            name: "TestGlass".to_string(),
            category: "C1".to_string(),
            full_fuse_top_range: TemperatureRange::new(700.0, 760.0),
            slump_top_range: TemperatureRange::new(620.0, 660.0),
            tack_fuse_top: 700.0,
            upper_anneal_temp: 520.7,
            lower_anneal_temp: 460.3,
        };
        let dataset = GlassPropertiesTable::new(
            600,
            vec![glass],
            OvenTimeTable::new().with_entry("C1", "t", 10, 1, 30),
            TimeTable::new().with_entry("C1", 10, 1, 20),
            TimeTable::new().with_entry("C1", 10, 1, 60),
        )
        .unwrap();
        CurveGenerator::new(Arc::new(dataset))
    }

    fn request(radius_cm: u32) -> TemplateRequest {
        TemplateRequest::new("TestGlass", FiringType::FullFuse, "t", radius_cm, 1, 10, 20)
    }

    #[test]
    fn test_phase_targets_follow_waypoints() {
        let phases = generator().generate_template_phases(&request(10)).unwrap();
        let targets: Vec<i32> = phases.iter().map(|p| p.target_temp).collect();
        assert_eq!(targets, vec![600, 730, 520, 460, 20]);
    }

    #[test]
    fn test_reference_durations() {
        let phases = generator().generate_template_phases(&request(10)).unwrap();
        let durations: Vec<u32> = phases.iter().map(|p| p.duration).collect();
        assert_eq!(durations, vec![35, 18, 20, 60, 1320]);
    }

    #[test]
    fn test_strict_policy_fails_on_missing_radius() {
        let err = generator().generate_template_phases(&request(999)).unwrap_err();
        assert!(matches!(
            err,
            CurveError::MissingLookup {
                table: TimeTableKind::HeatUp,
                radius_cm: 999,
                ..
            }
        ));
    }

    #[test]
    fn test_fallback_policy_substitutes_durations() {
        let lenient = generator()
            .with_lookup_policy(LookupPolicy::Fallback(FallbackDurations::default()));
        let phases = lenient.generate_template_phases(&request(999)).unwrap();

        // 兜底 30/20/60 与参考表一致，结果相同
        let reference = generator().generate_template_phases(&request(10)).unwrap();
        assert_eq!(phases, reference);
    }

    #[test]
    fn test_fallback_does_not_hide_unknown_glass() {
        let lenient = generator()
            .with_lookup_policy(LookupPolicy::Fallback(FallbackDurations::default()));
        let mut req = request(10);
        req.glass_name = "Nonexistent".to_string();
        assert!(matches!(
            lenient.generate_template_phases(&req),
            Err(CurveError::UnknownGlass { .. })
        ));
    }
}
