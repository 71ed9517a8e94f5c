// ==========================================
// 玻璃窑炉烧制曲线系统 - 玻璃属性数据集
// ==========================================
// 职责: 玻璃属性 + 三张时间表 + 熔点常量的只读容器
// 红线: 构造后不可变,由调用方显式注入引擎（无全局单例）
// ==========================================

use std::collections::{BTreeMap, BTreeSet};

use crate::dataset::error::{DatasetError, DatasetResult, LookupError};
use crate::dataset::time_table::{OvenTimeTable, TimeTable};
use crate::dataset::validator;
use crate::domain::glass::GlassRecord;
use crate::domain::types::TimeTableKind;

// ==========================================
// GlassPropertiesTable - 玻璃属性数据集
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct GlassPropertiesTable {
    initial_melt_point: i32,
    glasses: BTreeMap<String, GlassRecord>,
    heat_up_times: OvenTimeTable,
    hold_times: TimeTable,
    stress_relief_times: TimeTable,
}

impl GlassPropertiesTable {
    /// 构造并校验数据集
    ///
    /// # 返回
    /// - Err(DatasetError::DuplicateGlass): 玻璃名称重复
    /// - Err(DatasetError::InvalidGlass / InvalidTimeTable / InvalidMeltPoint): 数据不合格
    pub fn new(
        initial_melt_point: i32,
        glasses: Vec<GlassRecord>,
        heat_up_times: OvenTimeTable,
        hold_times: TimeTable,
        stress_relief_times: TimeTable,
    ) -> DatasetResult<Self> {
        let mut by_name = BTreeMap::new();
        for glass in glasses {
            if by_name.contains_key(&glass.name) {
                return Err(DatasetError::DuplicateGlass(glass.name));
            }
            by_name.insert(glass.name.clone(), glass);
        }

        let table = Self {
            initial_melt_point,
            glasses: by_name,
            heat_up_times,
            hold_times,
            stress_relief_times,
        };
        table.validate()?;

        Ok(table)
    }

    /// 校验熔点、全部玻璃记录与三张时间表
    pub fn validate(&self) -> DatasetResult<()> {
        validator::validate_melt_point(self.initial_melt_point)?;
        for glass in self.glasses.values() {
            validator::validate_glass(glass)?;
        }
        validator::validate_oven_time_table(&self.heat_up_times)?;
        validator::validate_time_table(TimeTableKind::Hold, &self.hold_times)?;
        validator::validate_time_table(TimeTableKind::StressRelief, &self.stress_relief_times)?;
        Ok(())
    }

    /// 所有玻璃共用的第一阶段目标温度
    pub fn initial_melt_point(&self) -> i32 {
        self.initial_melt_point
    }

    /// 按名称查找玻璃
    pub fn lookup(&self, glass_name: &str) -> Result<&GlassRecord, LookupError> {
        self.glasses
            .get(glass_name)
            .ok_or_else(|| LookupError::UnknownGlass(glass_name.to_string()))
    }

    /// 查时间表
    ///
    /// # 参数
    /// - table: 时间表类型
    /// - oven_type: 仅升温表使用，其它表忽略
    ///
    /// # 返回
    /// - Err(LookupError::MissingLookup): 分类/炉型/半径/层数任一缺失
    pub fn lookup_time(
        &self,
        table: TimeTableKind,
        category: &str,
        oven_type: Option<&str>,
        radius_cm: u32,
        layer_count: u32,
    ) -> Result<u32, LookupError> {
        let found = match table {
            TimeTableKind::HeatUp => oven_type.and_then(|oven| {
                self.heat_up_times
                    .get(category, oven, radius_cm, layer_count)
            }),
            TimeTableKind::Hold => self.hold_times.get(category, radius_cm, layer_count),
            TimeTableKind::StressRelief => {
                self.stress_relief_times
                    .get(category, radius_cm, layer_count)
            }
        };

        found.ok_or_else(|| LookupError::MissingLookup {
            table,
            category: category.to_string(),
            oven_type: if table.keyed_by_oven() {
                oven_type.map(str::to_string)
            } else {
                None
            },
            radius_cm,
            layer_count,
        })
    }

    /// 玻璃名称（按字典序）
    pub fn glass_names(&self) -> Vec<&str> {
        self.glasses.keys().map(String::as_str).collect()
    }

    pub fn glasses(&self) -> impl Iterator<Item = &GlassRecord> + '_ {
        self.glasses.values()
    }

    /// 玻璃分类（去重，按字典序）
    pub fn categories(&self) -> Vec<&str> {
        let categories: BTreeSet<&str> =
            self.glasses.values().map(|g| g.category.as_str()).collect();
        categories.into_iter().collect()
    }

    /// 某分类下升温表可用的炉型
    pub fn oven_types(&self, category: &str) -> Vec<&str> {
        self.heat_up_times.oven_types(category)
    }

    pub fn heat_up_times(&self) -> &OvenTimeTable {
        &self.heat_up_times
    }

    pub fn hold_times(&self) -> &TimeTable {
        &self.hold_times
    }

    pub fn stress_relief_times(&self) -> &TimeTable {
        &self.stress_relief_times
    }

    pub fn len(&self) -> usize {
        self.glasses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glasses.is_empty()
    }
}
