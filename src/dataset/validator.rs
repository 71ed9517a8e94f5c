// ==========================================
// 玻璃窑炉烧制曲线系统 - 数据集校验器
// ==========================================
// 职责: 加载后一次性校验玻璃属性与时间表
// 红线: 不合格数据拒绝加载,不做修补
// ==========================================

use crate::dataset::error::{DatasetError, DatasetResult};
use crate::dataset::time_table::{OvenTimeTable, TimeTable};
use crate::domain::glass::{GlassRecord, TemperatureRange};
use crate::domain::types::TimeTableKind;

/// 校验熔点
pub fn validate_melt_point(initial_melt_point: i32) -> DatasetResult<()> {
    if initial_melt_point <= 0 {
        return Err(DatasetError::InvalidMeltPoint(initial_melt_point));
    }
    Ok(())
}

/// 校验单条玻璃记录
///
/// 规则:
/// 1) 名称、分类非空
/// 2) 所有温度为有限正数
/// 3) 区间下限不高于上限
/// 4) 上退火点 > 下退火点
pub fn validate_glass(glass: &GlassRecord) -> DatasetResult<()> {
    let invalid = |message: String| DatasetError::InvalidGlass {
        glass: glass.name.clone(),
        message,
    };

    if glass.name.trim().is_empty() {
        return Err(invalid("名称为空".to_string()));
    }
    if glass.category.trim().is_empty() {
        return Err(invalid("分类为空".to_string()));
    }

    check_range("full_fuse_top_range", &glass.full_fuse_top_range).map_err(invalid)?;
    check_range("slump_top_range", &glass.slump_top_range).map_err(invalid)?;

    for (field, value) in [
        ("tack_fuse_top", glass.tack_fuse_top),
        ("upper_anneal_temp", glass.upper_anneal_temp),
        ("lower_anneal_temp", glass.lower_anneal_temp),
    ] {
        check_temperature(field, value).map_err(invalid)?;
    }

    if glass.upper_anneal_temp <= glass.lower_anneal_temp {
        return Err(invalid(format!(
            "上退火点 {} 必须高于下退火点 {}",
            glass.upper_anneal_temp, glass.lower_anneal_temp
        )));
    }

    Ok(())
}

/// 校验升温时间表（分钟必须 > 0）
pub fn validate_oven_time_table(table: &OvenTimeTable) -> DatasetResult<()> {
    for (category, oven, radius, layers, minutes) in table.entries() {
        if minutes == 0 {
            return Err(DatasetError::InvalidTimeTable {
                table: TimeTableKind::HeatUp,
                category: category.to_string(),
                message: format!("oven={}, radius={}, layers={}: 时长为 0", oven, radius, layers),
            });
        }
    }
    Ok(())
}

/// 校验保温/退火时间表（分钟必须 > 0）
pub fn validate_time_table(kind: TimeTableKind, table: &TimeTable) -> DatasetResult<()> {
    for (category, radius, layers, minutes) in table.entries() {
        if minutes == 0 {
            return Err(DatasetError::InvalidTimeTable {
                table: kind,
                category: category.to_string(),
                message: format!("radius={}, layers={}: 时长为 0", radius, layers),
            });
        }
    }
    Ok(())
}

fn check_temperature(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} 必须为正数，实际 {}", field, value));
    }
    Ok(())
}

fn check_range(field: &str, range: &TemperatureRange) -> Result<(), String> {
    check_temperature(field, range.low())?;
    check_temperature(field, range.high())?;
    if range.low() > range.high() {
        return Err(format!(
            "{} 区间颠倒: [{}, {}]",
            field,
            range.low(),
            range.high()
        ));
    }
    Ok(())
}
