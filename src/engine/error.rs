// ==========================================
// 玻璃窑炉烧制曲线系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 查表缺失终止本次生成,不输出部分结果
// ==========================================

use crate::dataset::error::LookupError;
use crate::domain::types::TimeTableKind;
use thiserror::Error;

/// 曲线引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("未知玻璃: {glass_name}")]
    UnknownGlass { glass_name: String },

    #[error(
        "时间表缺少数据: table={table}, category={category}, oven={oven_type:?}, radius={radius_cm}, layers={layer_count}"
    )]
    MissingLookup {
        table: TimeTableKind,
        category: String,
        oven_type: Option<String>,
        radius_cm: u32,
        layer_count: u32,
    },

    #[error("阶段数据错误 (第 {index} 段): {reason}")]
    InvalidPhase { index: usize, reason: String },
}

// ==========================================
// 从 LookupError 转换
// ==========================================
impl From<LookupError> for CurveError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::UnknownGlass(glass_name) => CurveError::UnknownGlass { glass_name },
            LookupError::MissingLookup {
                table,
                category,
                oven_type,
                radius_cm,
                layer_count,
            } => CurveError::MissingLookup {
                table,
                category,
                oven_type,
                radius_cm,
                layer_count,
            },
        }
    }
}

/// Result 类型别名
pub type CurveResult<T> = Result<T, CurveError>;
