use serde::{Deserialize, Serialize};

/// 查表缺失时的兜底时长（分钟）
///
/// 仅在 LookupPolicy::Fallback 下使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackDurations {
    pub heat_up_minutes: u32,
    pub hold_minutes: u32,
    pub stress_relief_minutes: u32,
}

impl Default for FallbackDurations {
    fn default() -> Self {
        Self {
            heat_up_minutes: 30,
            hold_minutes: 20,
            stress_relief_minutes: 60,
        }
    }
}

/// 查表缺失处理策略
///
/// 默认严格失败；兜底需显式开启（config_kv: lookup_fallback_enabled=true）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupPolicy {
    #[default]
    Strict,
    Fallback(FallbackDurations),
}

impl LookupPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, LookupPolicy::Strict)
    }
}

/// 曲线生成的默认参数（界面未填写时使用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// 默认室温 (°C)
    #[serde(default = "default_room_temp")]
    pub default_room_temp: i32,

    /// 默认炉型
    #[serde(default = "default_oven_type")]
    pub default_oven_type: String,

    /// 默认顶温保温（分钟）
    #[serde(default = "default_top_hold_minutes")]
    pub default_top_hold_minutes: u32,

    /// 查表缺失处理策略
    #[serde(default)]
    pub lookup_policy: LookupPolicy,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_room_temp: default_room_temp(),
            default_oven_type: default_oven_type(),
            default_top_hold_minutes: default_top_hold_minutes(),
            lookup_policy: LookupPolicy::Strict,
        }
    }
}

fn default_room_temp() -> i32 {
    20
}

fn default_oven_type() -> String {
    "t".to_string()
}

fn default_top_hold_minutes() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let settings = GeneratorSettings::default();
        assert!(settings.lookup_policy.is_strict());
        assert_eq!(settings.default_room_temp, 20);
        assert_eq!(settings.default_oven_type, "t");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: GeneratorSettings =
            serde_json::from_str(r#"{"default_room_temp": 18}"#).unwrap();
        assert_eq!(settings.default_room_temp, 18);
        assert_eq!(settings.default_top_hold_minutes, 10);
        assert_eq!(settings.lookup_policy, LookupPolicy::Strict);
    }

    #[test]
    fn test_policy_serde_shape() {
        let policy = LookupPolicy::Fallback(FallbackDurations::default());
        let json = serde_json::to_value(policy).unwrap();
        assert_eq!(json["mode"], "FALLBACK");
        assert_eq!(json["hold_minutes"], 20);
    }
}
