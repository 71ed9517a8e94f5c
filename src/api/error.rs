// ==========================================
// 玻璃窑炉烧制曲线系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/数据集错误为用户友好的错误消息
// ==========================================

use crate::dataset::error::DatasetError;
use crate::engine::error::CurveError;
use crate::engine::recalc::PhaseViolation;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 数据错误
    // ==========================================
    #[error("查表数据缺失: {0}")]
    MissingLookup(String),

    #[error("数据集错误: {0}")]
    DatasetError(String),

    /// 曲线校验失败（带违规清单）
    #[error("曲线校验失败: {reason}")]
    ValidationError {
        reason: String,
        violations: Vec<PhaseViolation>,
    },
}

// ==========================================
// 从 CurveError 转换
// ==========================================
impl From<CurveError> for ApiError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::UnknownGlass { glass_name } => {
                ApiError::NotFound(format!("玻璃(name={})不存在", glass_name))
            }
            err @ CurveError::MissingLookup { .. } => ApiError::MissingLookup(err.to_string()),
            CurveError::InvalidPhase { index, reason } => ApiError::ValidationError {
                reason: format!("第 {} 段: {}", index, reason),
                violations: Vec::new(),
            },
        }
    }
}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::FileNotFound(path) => ApiError::NotFound(format!("数据集文件 {}", path)),
            other => ApiError::DatasetError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
