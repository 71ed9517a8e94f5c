// ==========================================
// 玻璃窑炉烧制曲线系统 - 玻璃属性实体
// ==========================================
// 职责: 单个玻璃产品的分类与温度常量
// 红线: 所有温度为摄氏度，上退火点必须高于下退火点
// ==========================================

use crate::domain::types::FiringType;
use serde::{Deserialize, Serialize};

// ==========================================
// TemperatureRange - 温度区间
// ==========================================
// 序列化为 [下限, 上限] 二元数组
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange(pub f64, pub f64);

impl TemperatureRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self(low, high)
    }

    pub fn low(&self) -> f64 {
        self.0
    }

    pub fn high(&self) -> f64 {
        self.1
    }

    /// 区间中点，四舍五入到整数
    pub fn midpoint_rounded(&self) -> i32 {
        ((self.0 + self.1) / 2.0).round() as i32
    }
}

// ==========================================
// GlassRecord - 玻璃属性记录
// ==========================================
// 旧数据集字段名通过 alias 兼容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassRecord {
    /// 玻璃名称（唯一）
    pub name: String,

    /// 分类（时间表的查找键）
    pub category: String,

    /// 全熔顶温区间
    #[serde(alias = "f_topptemp")]
    pub full_fuse_top_range: TemperatureRange,

    /// 塌陷顶温区间
    #[serde(alias = "s_topptemp")]
    pub slump_top_range: TemperatureRange,

    /// 半熔顶温
    #[serde(alias = "t_topptemp")]
    pub tack_fuse_top: f64,

    /// 上退火点
    #[serde(alias = "o_astemp")]
    pub upper_anneal_temp: f64,

    /// 下退火点
    #[serde(alias = "n_astemp")]
    pub lower_anneal_temp: f64,
}

impl GlassRecord {
    /// 按烧制方式计算顶温
    ///
    /// - 全熔 / 塌陷: 区间两端取平均后四舍五入
    /// - 半熔: 直接使用存储值（有小数时四舍五入）
    pub fn top_temp(&self, firing_type: FiringType) -> i32 {
        match firing_type {
            FiringType::FullFuse => self.full_fuse_top_range.midpoint_rounded(),
            FiringType::Slump => self.slump_top_range.midpoint_rounded(),
            FiringType::TackFuse => self.tack_fuse_top.round() as i32,
        }
    }

    /// 上退火点（向下取整）
    pub fn upper_anneal_floor(&self) -> i32 {
        self.upper_anneal_temp.floor() as i32
    }

    /// 下退火点（向下取整）
    pub fn lower_anneal_floor(&self) -> i32 {
        self.lower_anneal_temp.floor() as i32
    }
}
