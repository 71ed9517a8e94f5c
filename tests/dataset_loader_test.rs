// ==========================================
// 数据集加载集成测试
// ==========================================
// 测试目标: 验证 JSON 数据集文件的加载与校验
// ==========================================


use std::path::Path;

use kiln_curve::dataset::{DatasetError, GlassPropertiesTable, LookupError};
use kiln_curve::domain::{FiringType, TimeTableKind};
use test_helpers::{write_temp_file, SAMPLE_DATASET_JSON};

// ==========================================
// 测试用例 1: 示例数据集
// ==========================================

#[test]
fn test_load_sample_dataset_from_file() {
    let file = write_temp_file(".json", SAMPLE_DATASET_JSON).unwrap();
    let dataset = GlassPropertiesTable::from_path(file.path()).expect("加载应该成功");

    assert_eq!(dataset.initial_melt_point(), 600);
    assert_eq!(dataset.len(), 4);
    assert_eq!(
        dataset.glass_names(),
        vec!["Bullseye 90", "Bullseye 90 Tekta", "Float Glass", "Spectrum 96"]
    );
    assert_eq!(dataset.oven_types("COE90"), vec!["s", "t"]);

    let glass = dataset.lookup("Spectrum 96").unwrap();
    assert_eq!(glass.category, "COE96");
    assert_eq!(glass.upper_anneal_floor(), 510);
    assert_eq!(glass.lower_anneal_floor(), 440);
    assert_eq!(glass.top_temp(FiringType::FullFuse), 775);
}

#[test]
fn test_sample_time_table_entries() {
    let dataset = GlassPropertiesTable::from_json_str(SAMPLE_DATASET_JSON).unwrap();

    let heat_up = dataset.lookup_time(TimeTableKind::HeatUp, "COE90", Some("t"), 10, 2);
    let hold = dataset.lookup_time(TimeTableKind::Hold, "COE90", None, 10, 2);
    let relief = dataset.lookup_time(TimeTableKind::StressRelief, "COE90", None, 10, 2);

    assert_eq!(heat_up, Ok(80));
    assert_eq!(hold, Ok(30));
    assert_eq!(relief, Ok(110));
}

// ==========================================
// 测试用例 2: 文件错误
// ==========================================

#[test]
fn test_missing_file() {
    let result = GlassPropertiesTable::from_path(Path::new("/nonexistent/glass_dataset.json"));
    assert!(matches!(result, Err(DatasetError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp_file(".csv", "name,category\n").unwrap();
    let result = GlassPropertiesTable::from_path(file.path());

    match result {
        Err(DatasetError::UnsupportedFormat(ext)) => assert_eq!(ext, "csv"),
        other => panic!("期望 UnsupportedFormat，实际 {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    let file = write_temp_file(".json", "{ \"initial_melt_point\": 600, ").unwrap();
    let result = GlassPropertiesTable::from_path(file.path());
    assert!(matches!(result, Err(DatasetError::JsonParseError(_))));
}

// ==========================================
// 测试用例 3: 数据质量错误
// ==========================================

const GLASS: &str = r#"{
    "name": "G",
    "category": "C1",
    "f_topptemp": [700, 760],
    "s_topptemp": [620, 660],
    "t_topptemp": 700,
    "o_astemp": 520,
    "n_astemp": 460
}"#;

fn document(melt_point: i32, glasses: &[&str], tables: &str) -> String {
    format!(
        r#"{{ "initial_melt_point": {}, "glasses": [{}] {} }}"#,
        melt_point,
        glasses.join(","),
        tables
    )
}

#[test]
fn test_duplicate_glass_rejected() {
    let raw = document(600, &[GLASS, GLASS], "");
    let result = GlassPropertiesTable::from_json_str(&raw);

    match result {
        Err(DatasetError::DuplicateGlass(name)) => assert_eq!(name, "G"),
        other => panic!("期望 DuplicateGlass，实际 {:?}", other),
    }
}

#[test]
fn test_zero_minutes_rejected() {
    let raw = document(
        600,
        &[GLASS],
        r#", "hold_times": { "C1": { "10": { "1": 0 } } }"#,
    );
    let result = GlassPropertiesTable::from_json_str(&raw);

    assert!(matches!(
        result,
        Err(DatasetError::InvalidTimeTable {
            table: TimeTableKind::Hold,
            ..
        })
    ));
}

#[test]
fn test_non_positive_melt_point_rejected() {
    let raw = document(0, &[GLASS], "");
    let result = GlassPropertiesTable::from_json_str(&raw);
    assert!(matches!(result, Err(DatasetError::InvalidMeltPoint(0))));
}

#[test]
fn test_reversed_anneal_points_rejected() {
    let glass = GLASS.replace("\"o_astemp\": 520", "\"o_astemp\": 400");
    let raw = document(600, &[glass.as_str()], "");
    let result = GlassPropertiesTable::from_json_str(&raw);
    assert!(matches!(result, Err(DatasetError::InvalidGlass { .. })));
}

#[test]
fn test_missing_tables_default_to_empty() {
    let raw = document(600, &[GLASS], "");
    let dataset = GlassPropertiesTable::from_json_str(&raw).unwrap();

    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.lookup_time(TimeTableKind::HeatUp, "C1", Some("t"), 10, 1),
        Err(LookupError::MissingLookup {
            table: TimeTableKind::HeatUp,
            category: "C1".to_string(),
            oven_type: Some("t".to_string()),
            radius_cm: 10,
            layer_count: 1,
        })
    );
}
