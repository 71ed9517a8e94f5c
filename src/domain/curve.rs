// ==========================================
// 玻璃窑炉烧制曲线系统 - 烧制曲线领域模型
// ==========================================
// 职责: 模板生成请求 + 模板曲线记录
// 红线: 曲线记录只是快照,持久化由调用方负责
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::phase::Phase;
use crate::domain::types::FiringType;

// ==========================================
// TemplateRequest - 模板生成请求（强类型）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub glass_name: String,     // 玻璃名称
    pub firing_type: FiringType, // 烧制方式
    pub oven_type: String,      // 炉型（升温时间表查找键）
    pub radius_cm: u32,         // 半径 (cm)
    pub layer_count: u32,       // 层数
    pub top_hold_minutes: u32,  // 顶温保温（分钟）
    pub room_temp: i32,         // 室温 (°C)
}

impl TemplateRequest {
    pub fn new(
        glass_name: impl Into<String>,
        firing_type: FiringType,
        oven_type: impl Into<String>,
        radius_cm: u32,
        layer_count: u32,
        top_hold_minutes: u32,
        room_temp: i32,
    ) -> Self {
        Self {
            glass_name: glass_name.into(),
            firing_type,
            oven_type: oven_type.into(),
            radius_cm,
            layer_count,
            top_hold_minutes,
            room_temp,
        }
    }
}

// ==========================================
// FiringCurve - 模板曲线记录
// ==========================================
// 用途: 项目的基准曲线,后续版本由此派生
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiringCurve {
    pub curve_id: String,                     // 曲线ID (UUID v4)
    pub name: String,                         // 曲线名称
    pub glass_name: String,                   // 玻璃名称
    pub firing_type: FiringType,              // 烧制方式
    pub oven_type: String,                    // 炉型
    pub radius_cm: u32,                       // 半径 (cm)
    pub layer_count: u32,                     // 层数
    pub room_temp: i32,                       // 室温 (°C)
    pub phases: Vec<Phase>,                   // 阶段列表
    pub config_snapshot_json: Option<String>, // 生成时的配置快照 (JSON)
    pub created_at: DateTime<Utc>,            // 创建时间
}

impl FiringCurve {
    /// 由模板请求和生成结果组装曲线记录
    pub fn template(
        name: impl Into<String>,
        request: &TemplateRequest,
        phases: Vec<Phase>,
        config_snapshot_json: Option<String>,
    ) -> Self {
        Self {
            curve_id: Uuid::new_v4().to_string(),
            name: name.into(),
            glass_name: request.glass_name.clone(),
            firing_type: request.firing_type,
            oven_type: request.oven_type.clone(),
            radius_cm: request.radius_cm,
            layer_count: request.layer_count,
            room_temp: request.room_temp,
            phases,
            config_snapshot_json,
            created_at: Utc::now(),
        }
    }

    /// 总时长（分钟）
    pub fn total_minutes(&self) -> u64 {
        self.phases.iter().map(|p| u64::from(p.duration)).sum()
    }

    /// 最高目标温度
    pub fn peak_temp(&self) -> Option<i32> {
        self.phases.iter().map(|p| p.target_temp).max()
    }
}
