// ==========================================
// 玻璃窑炉烧制曲线系统 - 曲线 API
// ==========================================
// 职责: 界面层字符串参数 → 强类型请求 → 引擎
// 1. 模板曲线生成
// 2. 模板曲线记录组装
// 3. 手工曲线重算与校验
// ==========================================

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::config::generator_settings::GeneratorSettings;
use crate::dataset::glass_table::GlassPropertiesTable;
use crate::domain::curve::{FiringCurve, TemplateRequest};
use crate::domain::phase::Phase;
use crate::domain::types::FiringType;
use crate::engine::generator::CurveGenerator;
use crate::engine::profile::CurveProfile;
use crate::engine::recalc::CurveRecalculator;

// ==========================================
// CurveApi - 曲线 API
// ==========================================
pub struct CurveApi {
    generator: CurveGenerator,
    recalculator: CurveRecalculator,
    settings: GeneratorSettings,
}

impl CurveApi {
    /// 创建新的CurveApi实例
    ///
    /// 查表策略取自 settings.lookup_policy
    pub fn new(dataset: Arc<GlassPropertiesTable>, settings: GeneratorSettings) -> Self {
        let generator = CurveGenerator::new(dataset).with_lookup_policy(settings.lookup_policy);
        Self {
            generator,
            recalculator: CurveRecalculator::new(),
            settings,
        }
    }

    /// 从数据集文件创建
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): 数据集文件不存在
    /// - Err(ApiError::DatasetError): 格式不支持、解析失败或数据不合格
    pub fn from_dataset_path(path: &Path, settings: GeneratorSettings) -> ApiResult<Self> {
        let dataset = GlassPropertiesTable::from_path(path)?;
        Ok(Self::new(Arc::new(dataset), settings))
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// 生成模板曲线（界面层参数形式）
    ///
    /// # 参数
    /// - firing_type: "f" / "s" / "t"
    /// - oven_type: 为空时使用默认炉型
    /// - radius_cm / layer_count: 数字字符串
    /// - top_hold_minutes: 数字字符串，为空时使用默认保温
    ///
    /// # 返回
    /// - Ok(Vec<Phase>): 5 段模板曲线
    /// - Err(ApiError::InvalidInput): 参数无法解析
    /// - Err(ApiError::NotFound / MissingLookup): 数据缺失
    #[allow(clippy::too_many_arguments)]
    pub fn generate_template_phases(
        &self,
        glass_name: &str,
        firing_type: &str,
        oven_type: &str,
        radius_cm: &str,
        layer_count: &str,
        top_hold_minutes: &str,
        room_temp: i32,
    ) -> ApiResult<Vec<Phase>> {
        let request = self.parse_request(
            glass_name,
            firing_type,
            oven_type,
            radius_cm,
            layer_count,
            top_hold_minutes,
            room_temp,
        )?;
        self.generate(&request)
    }

    /// 解析界面层参数
    #[allow(clippy::too_many_arguments)]
    pub fn parse_request(
        &self,
        glass_name: &str,
        firing_type: &str,
        oven_type: &str,
        radius_cm: &str,
        layer_count: &str,
        top_hold_minutes: &str,
        room_temp: i32,
    ) -> ApiResult<TemplateRequest> {
        let glass_name = glass_name.trim();
        if glass_name.is_empty() {
            return Err(ApiError::InvalidInput("玻璃名称不能为空".to_string()));
        }

        let firing_type = FiringType::from_code(firing_type).ok_or_else(|| {
            ApiError::InvalidInput(format!("烧制方式必须为 f/s/t，实际 '{}'", firing_type))
        })?;

        let oven_type = match oven_type.trim() {
            "" => self.settings.default_oven_type.clone(),
            oven => oven.to_string(),
        };

        let top_hold_minutes = if top_hold_minutes.trim().is_empty() {
            self.settings.default_top_hold_minutes
        } else {
            parse_u32("top_hold_minutes", top_hold_minutes)?
        };

        Ok(TemplateRequest {
            glass_name: glass_name.to_string(),
            firing_type,
            oven_type,
            radius_cm: parse_u32("radius_cm", radius_cm)?,
            layer_count: parse_u32("layer_count", layer_count)?,
            top_hold_minutes,
            room_temp,
        })
    }

    /// 生成模板曲线（强类型请求）
    pub fn generate(&self, request: &TemplateRequest) -> ApiResult<Vec<Phase>> {
        let phases = self.generator.generate_template_phases(request)?;
        Ok(phases.to_vec())
    }

    /// 生成并组装模板曲线记录
    pub fn create_template(
        &self,
        name: &str,
        request: &TemplateRequest,
        config_snapshot_json: Option<String>,
    ) -> ApiResult<FiringCurve> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("曲线名称不能为空".to_string()));
        }

        let phases = self.generate(request)?;
        let curve = FiringCurve::template(name, request, phases, config_snapshot_json);

        info!(
            curve_id = %curve.curve_id,
            glass = %curve.glass_name,
            total_minutes = curve.total_minutes(),
            "模板曲线已创建"
        );

        Ok(curve)
    }

    /// 手工曲线重算（重算后必须通过校验）
    pub fn recalculate_curve(&self, start_temp: i32, phases: &[Phase]) -> ApiResult<Vec<Phase>> {
        let recalculated = self.recalculator.recalculate(start_temp, phases);
        let violations = self.recalculator.validate(start_temp, &recalculated);

        if !violations.is_empty() {
            return Err(ApiError::ValidationError {
                reason: format!("{} 处违规", violations.len()),
                violations,
            });
        }

        Ok(recalculated)
    }

    /// 温度剖面（图表层使用）
    pub fn curve_profile(&self, start_temp: i32, phases: &[Phase]) -> CurveProfile {
        CurveProfile::from_phases(start_temp, phases)
    }

    /// 玻璃名称列表
    pub fn list_glasses(&self) -> Vec<String> {
        self.generator
            .dataset()
            .glass_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

fn parse_u32(field: &str, raw: &str) -> ApiResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ApiError::InvalidInput(format!("{} 必须为非负整数，实际 '{}'", field, raw)))
}
