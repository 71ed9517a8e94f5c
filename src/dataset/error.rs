// ==========================================
// 玻璃窑炉烧制曲线系统 - 数据集错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::TimeTableKind;
use thiserror::Error;

/// 数据集加载/校验错误
#[derive(Error, Debug)]
pub enum DatasetError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .json）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("JSON 解析失败: {0}")]
    JsonParseError(String),

    // ===== 数据质量错误 =====
    #[error("玻璃名称重复: {0}")]
    DuplicateGlass(String),

    #[error("玻璃数据错误 (玻璃 {glass}): {message}")]
    InvalidGlass { glass: String, message: String },

    #[error("时间表数据错误 (表 {table}, 分类 {category}): {message}")]
    InvalidTimeTable {
        table: TimeTableKind,
        category: String,
        message: String,
    },

    #[error("熔点必须为正数，实际 {0}")]
    InvalidMeltPoint(i32),
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::JsonParseError(err.to_string())
    }
}

/// Result 类型别名
pub type DatasetResult<T> = Result<T, DatasetError>;

/// 查表失败
///
/// 缺失数据必须上抛,不允许静默使用默认时长
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("未知玻璃: {0}")]
    UnknownGlass(String),

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
}
