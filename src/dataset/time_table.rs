// ==========================================
// 玻璃窑炉烧制曲线系统 - 时间查找表
// ==========================================
// 结构: 分类 → (炉型) → 半径 → 层数 → 分钟
// 红线: 加载后只读,缺失键显式返回 None
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 层数 → 分钟
pub type LayerMinutes = BTreeMap<u32, u32>;

/// 半径 → 层数表
pub type RadiusTable = BTreeMap<u32, LayerMinutes>;

// ==========================================
// TimeTable - 按分类的时间表（保温 / 退火）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeTable {
    categories: BTreeMap<String, RadiusTable>,
}

impl TimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一条记录（同键覆盖）
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        radius_cm: u32,
        layer_count: u32,
        minutes: u32,
    ) -> &mut Self {
        self.categories
            .entry(category.into())
            .or_default()
            .entry(radius_cm)
            .or_default()
            .insert(layer_count, minutes);
        self
    }

    /// 链式构造
    pub fn with_entry(
        mut self,
        category: impl Into<String>,
        radius_cm: u32,
        layer_count: u32,
        minutes: u32,
    ) -> Self {
        self.insert(category, radius_cm, layer_count, minutes);
        self
    }

    pub fn get(&self, category: &str, radius_cm: u32, layer_count: u32) -> Option<u32> {
        self.categories
            .get(category)?
            .get(&radius_cm)?
            .get(&layer_count)
            .copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// 平铺所有记录: (分类, 半径, 层数, 分钟)
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32, u32, u32)> + '_ {
        self.categories.iter().flat_map(|(category, radii)| {
            radii.iter().flat_map(move |(radius, layers)| {
                layers
                    .iter()
                    .map(move |(layer, minutes)| (category.as_str(), *radius, *layer, *minutes))
            })
        })
    }
}

// ==========================================
// OvenTimeTable - 按分类+炉型的时间表（升温）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OvenTimeTable {
    categories: BTreeMap<String, BTreeMap<String, RadiusTable>>,
}

impl OvenTimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        category: impl Into<String>,
        oven_type: impl Into<String>,
        radius_cm: u32,
        layer_count: u32,
        minutes: u32,
    ) -> &mut Self {
        self.categories
            .entry(category.into())
            .or_default()
            .entry(oven_type.into())
            .or_default()
            .entry(radius_cm)
            .or_default()
            .insert(layer_count, minutes);
        self
    }

    pub fn with_entry(
        mut self,
        category: impl Into<String>,
        oven_type: impl Into<String>,
        radius_cm: u32,
        layer_count: u32,
        minutes: u32,
    ) -> Self {
        self.insert(category, oven_type, radius_cm, layer_count, minutes);
        self
    }

    pub fn get(
        &self,
        category: &str,
        oven_type: &str,
        radius_cm: u32,
        layer_count: u32,
    ) -> Option<u32> {
        self.categories
            .get(category)?
            .get(oven_type)?
            .get(&radius_cm)?
            .get(&layer_count)
            .copied()
    }

    /// 某分类下可用的炉型
    pub fn oven_types(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|ovens| ovens.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// 平铺所有记录: (分类, 炉型, 半径, 层数, 分钟)
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, u32, u32, u32)> + '_ {
        self.categories.iter().flat_map(|(category, ovens)| {
            ovens.iter().flat_map(move |(oven, radii)| {
                radii.iter().flat_map(move |(radius, layers)| {
                    layers.iter().map(move |(layer, minutes)| {
                        (category.as_str(), oven.as_str(), *radius, *layer, *minutes)
                    })
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_table_lookup() {
        let table = TimeTable::new()
            .with_entry("C1", 10, 1, 20)
            .with_entry("C1", 10, 2, 35)
            .with_entry("C2", 15, 1, 40);

        assert_eq!(table.get("C1", 10, 1), Some(20));
        assert_eq!(table.get("C1", 10, 2), Some(35));
        assert_eq!(table.get("C1", 15, 1), None);
        assert_eq!(table.get("C3", 10, 1), None);
        assert_eq!(table.entries().count(), 3);
    }

    #[test]
    fn test_oven_time_table_lookup() {
        let table = OvenTimeTable::new()
            .with_entry("C1", "t", 10, 1, 30)
            .with_entry("C1", "e", 10, 1, 45);

        assert_eq!(table.get("C1", "t", 10, 1), Some(30));
        assert_eq!(table.get("C1", "e", 10, 1), Some(45));
        assert_eq!(table.get("C1", "x", 10, 1), None);
        assert_eq!(table.oven_types("C1"), vec!["e", "t"]);
        assert!(table.oven_types("C9").is_empty());
    }

    #[test]
    fn test_numeric_keys_from_json() {
        // JSON 对象键为字符串，反序列化为数值键
        let table: TimeTable =
            serde_json::from_str(r#"{"C1": {"10": {"1": 20, "2": 35}}}"#).unwrap();
        assert_eq!(table.get("C1", 10, 2), Some(35));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"C1":{"10":{"1":20,"2":35}}}"#);
    }
}
