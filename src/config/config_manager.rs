// ==========================================
// 玻璃窑炉烧制曲线系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::generator_settings::{FallbackDurations, GeneratorSettings, LookupPolicy};
use crate::db::{configure_sqlite_connection, init_config_schema, open_sqlite_connection};
use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（配置表不存在时自动创建）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        init_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 与建表（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            configure_sqlite_connection(&conn_guard)?;
            init_config_schema(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（UPSERT）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;

        tracing::debug!(config_key = key, value, "配置已更新");
        Ok(())
    }

    /// 读取配置并解析，缺失时用默认值，格式错误时告警并用默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> Result<T, Box<dyn Error>>
    where
        T: FromStr + Display + Copy,
    {
        let Some(raw) = self.get_config_value(key)? else {
            return Ok(default);
        };

        match raw.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %raw,
                    default = %default,
                    "配置值格式错误，使用默认值"
                );
                Ok(default)
            }
        }
    }

    /// 正整数分钟配置（0 视为无效）
    fn get_minutes_or_default(&self, key: &str, default: u32) -> Result<u32, Box<dyn Error>> {
        let value = self.get_parsed_or_default(key, default)?;
        if value == 0 {
            tracing::warn!(config_key = key, default, "时长配置为 0，使用默认值");
            return Ok(default);
        }
        Ok(value)
    }

    /// 获取所有配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 生成模板曲线时记录配置快照，便于追溯
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt = conn
            .prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        let json_value = json!(config_map);
        Ok(serde_json::to_string(&json_value)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// - 覆盖现有的 global 配置；快照中不存在的键保持不变
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, Box<dyn Error>> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for (key, value) in config_map.iter() {
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
        }

        tx.commit()?;
        Ok(count)
    }

    // ===== 曲线生成默认参数 =====

    /// 默认室温（°C，默认 20）
    pub fn get_default_room_temp(&self) -> Result<i32, Box<dyn Error>> {
        self.get_parsed_or_default(config_keys::DEFAULT_ROOM_TEMP, 20)
    }

    /// 默认炉型（默认 "t"）
    pub fn get_default_oven_type(&self) -> Result<String, Box<dyn Error>> {
        let value = self.get_config_value(config_keys::DEFAULT_OVEN_TYPE)?;
        Ok(value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "t".to_string()))
    }

    /// 默认顶温保温（分钟，默认 10）
    pub fn get_default_top_hold_minutes(&self) -> Result<u32, Box<dyn Error>> {
        self.get_parsed_or_default(config_keys::DEFAULT_TOP_HOLD_MINUTES, 10)
    }

    /// 数据集文件路径（未配置返回 None）
    pub fn get_dataset_path(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self
            .get_config_value(config_keys::DATASET_PATH)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    // ===== 查表兜底 =====

    /// 是否启用查表兜底（默认 false）
    pub fn is_lookup_fallback_enabled(&self) -> Result<bool, Box<dyn Error>> {
        let value = self.get_config_value(config_keys::LOOKUP_FALLBACK_ENABLED)?;
        Ok(matches!(
            value.as_deref().map(|v| v.trim().to_lowercase()).as_deref(),
            Some("1" | "true" | "yes" | "on")
        ))
    }

    /// 兜底时长（默认 30 / 20 / 60 分钟）
    pub fn get_fallback_durations(&self) -> Result<FallbackDurations, Box<dyn Error>> {
        let defaults = FallbackDurations::default();
        Ok(FallbackDurations {
            heat_up_minutes: self.get_minutes_or_default(
                config_keys::FALLBACK_HEAT_UP_MINUTES,
                defaults.heat_up_minutes,
            )?,
            hold_minutes: self
                .get_minutes_or_default(config_keys::FALLBACK_HOLD_MINUTES, defaults.hold_minutes)?,
            stress_relief_minutes: self.get_minutes_or_default(
                config_keys::FALLBACK_STRESS_RELIEF_MINUTES,
                defaults.stress_relief_minutes,
            )?,
        })
    }

    /// 汇总曲线生成配置
    pub fn load_generator_settings(&self) -> Result<GeneratorSettings, Box<dyn Error>> {
        let lookup_policy = if self.is_lookup_fallback_enabled()? {
            LookupPolicy::Fallback(self.get_fallback_durations()?)
        } else {
            LookupPolicy::Strict
        };

        Ok(GeneratorSettings {
            default_room_temp: self.get_default_room_temp()?,
            default_oven_type: self.get_default_oven_type()?,
            default_top_hold_minutes: self.get_default_top_hold_minutes()?,
            lookup_policy,
        })
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 曲线生成默认参数
    pub const DEFAULT_ROOM_TEMP: &str = "default_room_temp";
    pub const DEFAULT_OVEN_TYPE: &str = "default_oven_type";
    pub const DEFAULT_TOP_HOLD_MINUTES: &str = "default_top_hold_minutes";

    // 数据集
    pub const DATASET_PATH: &str = "dataset_path";

    // 查表兜底（默认关闭）
    pub const LOOKUP_FALLBACK_ENABLED: &str = "lookup_fallback_enabled";
    pub const FALLBACK_HEAT_UP_MINUTES: &str = "fallback_heat_up_minutes";
    pub const FALLBACK_HOLD_MINUTES: &str = "fallback_hold_minutes";
    pub const FALLBACK_STRESS_RELIEF_MINUTES: &str = "fallback_stress_relief_minutes";
}
