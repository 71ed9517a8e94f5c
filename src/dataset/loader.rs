// ==========================================
// 玻璃窑炉烧制曲线系统 - 数据集加载器
// ==========================================
// 支持: JSON (.json)
// 流程: 文件检查 → 解析 → 校验 → 构造只读数据集
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::dataset::error::{DatasetError, DatasetResult};
use crate::dataset::glass_table::GlassPropertiesTable;
use crate::dataset::time_table::{OvenTimeTable, TimeTable};
use crate::domain::glass::GlassRecord;

// ==========================================
// DatasetDocument - 数据集文件结构
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDocument {
    /// 熔点常量 (°C)
    pub initial_melt_point: i32,

    /// 玻璃属性列表
    pub glasses: Vec<GlassRecord>,

    /// 升温时间表: 分类 → 炉型 → 半径 → 层数 → 分钟
    #[serde(default)]
    pub heat_up_times: OvenTimeTable,

    /// 保温时间表: 分类 → 半径 → 层数 → 分钟
    #[serde(default)]
    pub hold_times: TimeTable,

    /// 退火时间表: 分类 → 半径 → 层数 → 分钟
    #[serde(default)]
    pub stress_relief_times: TimeTable,
}

impl TryFrom<DatasetDocument> for GlassPropertiesTable {
    type Error = DatasetError;

    fn try_from(doc: DatasetDocument) -> DatasetResult<Self> {
        GlassPropertiesTable::new(
            doc.initial_melt_point,
            doc.glasses,
            doc.heat_up_times,
            doc.hold_times,
            doc.stress_relief_times,
        )
    }
}

impl GlassPropertiesTable {
    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> DatasetResult<Self> {
        let doc: DatasetDocument = serde_json::from_str(raw)?;
        debug!(glass_count = doc.glasses.len(), "数据集解析完成");
        GlassPropertiesTable::try_from(doc)
    }

    /// 从 JSON 文件加载
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        // 检查文件存在
        if !path.exists() {
            return Err(DatasetError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(DatasetError::UnsupportedFormat(ext.to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let table = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            glass_count = table.len(),
            melt_point = table.initial_melt_point(),
            "玻璃数据集加载完成"
        );

        Ok(table)
    }

    /// 导出为数据集文件结构
    pub fn to_document(&self) -> DatasetDocument {
        DatasetDocument {
            initial_melt_point: self.initial_melt_point(),
            glasses: self.glasses().cloned().collect(),
            heat_up_times: self.heat_up_times().clone(),
            hold_times: self.hold_times().clone(),
            stress_relief_times: self.stress_relief_times().clone(),
        }
    }
}
