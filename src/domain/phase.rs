// ==========================================
// 玻璃窑炉烧制曲线系统 - 曲线阶段实体
// ==========================================
// 职责: 烧制曲线的基本单元（升/降温到目标温度，可选保温）
// ==========================================

use serde::{Deserialize, Serialize};

/// 模板曲线的阶段数
pub const TEMPLATE_PHASE_COUNT: usize = 5;

// ==========================================
// Phase - 曲线阶段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// 目标温度 (°C)
    pub target_temp: i32,

    /// 阶段总时长（分钟，含保温）
    pub duration: u32,

    /// 保温时长（分钟）
    pub hold_time: u32,

    /// 升降温速率 (°C/min，负数为降温)，手工编辑的阶段可能没有
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<i32>,
}

impl Phase {
    pub fn new(target_temp: i32, duration: u32, hold_time: u32, velocity: Option<i32>) -> Self {
        Self {
            target_temp,
            duration,
            hold_time,
            velocity,
        }
    }

    /// 升降温所占分钟数（总时长减去保温）
    pub fn ramp_minutes(&self) -> u32 {
        self.duration.saturating_sub(self.hold_time)
    }
}

/// 模板曲线: 固定 5 段
pub type TemplatePhases = [Phase; TEMPLATE_PHASE_COUNT];
