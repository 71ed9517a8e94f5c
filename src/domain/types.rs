// ==========================================
// 玻璃窑炉烧制曲线系统 - 领域类型定义
// ==========================================
// 职责: 烧制方式、时间表类型等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 烧制方式 (Firing Type)
// ==========================================
// 同一种玻璃在不同烧制方式下顶温不同
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiringType {
    FullFuse, // 全熔
    Slump,    // 塌陷
    TackFuse, // 半熔(粘熔)
}

impl FiringType {
    pub const ALL: [FiringType; 3] = [FiringType::FullFuse, FiringType::Slump, FiringType::TackFuse];

    /// 单字符代码（界面层使用: f / s / t）
    pub fn code(&self) -> &'static str {
        match self {
            FiringType::FullFuse => "f",
            FiringType::Slump => "s",
            FiringType::TackFuse => "t",
        }
    }

    /// 从单字符代码解析
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "f" | "F" => Some(FiringType::FullFuse),
            "s" | "S" => Some(FiringType::Slump),
            "t" | "T" => Some(FiringType::TackFuse),
            _ => None,
        }
    }
}

impl fmt::Display for FiringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiringType::FullFuse => write!(f, "FULL_FUSE"),
            FiringType::Slump => write!(f, "SLUMP"),
            FiringType::TackFuse => write!(f, "TACK_FUSE"),
        }
    }
}

impl FromStr for FiringType {
    type Err = String;

    /// 同时接受单字符代码和完整名称（大小写不敏感）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(firing_type) = FiringType::from_code(s) {
            return Ok(firing_type);
        }

        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "FULL_FUSE" => Ok(FiringType::FullFuse),
            "SLUMP" => Ok(FiringType::Slump),
            "TACK_FUSE" => Ok(FiringType::TackFuse),
            other => Err(format!("未知烧制方式: {}", other)),
        }
    }
}

// ==========================================
// 时间表类型 (Time Table Kind)
// ==========================================
// 仅升温时间表额外按炉型区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeTableKind {
    HeatUp,       // 升温时间
    Hold,         // 保温时间
    StressRelief, // 退火(去应力)时间
}

impl TimeTableKind {
    /// 是否按炉型区分
    pub fn keyed_by_oven(&self) -> bool {
        matches!(self, TimeTableKind::HeatUp)
    }
}

impl fmt::Display for TimeTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeTableKind::HeatUp => write!(f, "HEAT_UP"),
            TimeTableKind::Hold => write!(f, "HOLD"),
            TimeTableKind::StressRelief => write!(f, "STRESS_RELIEF"),
        }
    }
}

// ==========================================
// 模板阶段 (Template Stage)
// ==========================================
// 模板曲线固定 5 段，顺序不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateStage {
    HeatToMeltPoint,   // 室温 → 熔点
    HeatToTop,         // 熔点 → 顶温 (保温)
    CoolToUpperAnneal, // 顶温 → 上退火点
    CoolToLowerAnneal, // 上退火点 → 下退火点
    CoolToRoom,        // 下退火点 → 室温
}

impl TemplateStage {
    pub const ALL: [TemplateStage; 5] = [
        TemplateStage::HeatToMeltPoint,
        TemplateStage::HeatToTop,
        TemplateStage::CoolToUpperAnneal,
        TemplateStage::CoolToLowerAnneal,
        TemplateStage::CoolToRoom,
    ];

    /// 是否为降温段
    pub fn is_cooling(&self) -> bool {
        !matches!(self, TemplateStage::HeatToMeltPoint | TemplateStage::HeatToTop)
    }
}

impl fmt::Display for TemplateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateStage::HeatToMeltPoint => write!(f, "HEAT_TO_MELT_POINT"),
            TemplateStage::HeatToTop => write!(f, "HEAT_TO_TOP"),
            TemplateStage::CoolToUpperAnneal => write!(f, "COOL_TO_UPPER_ANNEAL"),
            TemplateStage::CoolToLowerAnneal => write!(f, "COOL_TO_LOWER_ANNEAL"),
            TemplateStage::CoolToRoom => write!(f, "COOL_TO_ROOM"),
        }
    }
}
