// ==========================================
// CurveApi 集成测试
// ==========================================
// 测试目标: 验证界面层参数解析、错误转换、模板记录与手工曲线重算
// ==========================================


use kiln_curve::api::{ApiError, CurveApi};
use kiln_curve::config::GeneratorSettings;
use kiln_curve::domain::{FiringType, Phase};
use kiln_curve::engine::ViolationKind;
use std::path::Path;

use test_helpers::{
    reference_dataset, reference_request, sample_dataset, write_temp_file, SAMPLE_DATASET_JSON,
};

fn api() -> CurveApi {
    CurveApi::new(reference_dataset(), GeneratorSettings::default())
}

// ==========================================
// 测试用例 1: 参数解析
// ==========================================

#[test]
fn test_generate_from_string_parameters() {
    let phases = api()
        .generate_template_phases("TestGlass", "f", "t", "10", "1", "10", 20)
        .expect("生成应该成功");

    assert_eq!(phases.len(), 5);
    assert_eq!(phases[1].target_temp, 730);
    assert_eq!(phases[1].duration, 18);
}

#[test]
fn test_blank_oven_and_hold_use_defaults() {
    let request = api()
        .parse_request(" TestGlass ", "S", "", " 10 ", "1", " ", 20)
        .unwrap();

    assert_eq!(request.glass_name, "TestGlass");
    assert_eq!(request.firing_type, FiringType::Slump);
    assert_eq!(request.oven_type, "t");
    assert_eq!(request.radius_cm, 10);
    assert_eq!(request.top_hold_minutes, 10);
}

#[test]
fn test_invalid_parameters() {
    let api = api();

    let cases = [
        ("", "f", "10", "1", "10"),
        ("TestGlass", "x", "10", "1", "10"),
        ("TestGlass", "f", "ten", "1", "10"),
        ("TestGlass", "f", "10", "-1", "10"),
        ("TestGlass", "f", "10", "1", "1.5"),
    ];

    for (glass, firing, radius, layers, hold) in cases {
        let result = api.generate_template_phases(glass, firing, "t", radius, layers, hold, 20);
        assert!(
            matches!(result, Err(ApiError::InvalidInput(_))),
            "{:?} 应该被拒绝",
            (glass, firing, radius, layers, hold)
        );
    }
}

#[test]
fn test_extreme_room_temp_is_handled() {
    let api = api();

    let cold = api
        .generate_template_phases("TestGlass", "f", "t", "10", "1", "10", i32::MIN)
        .unwrap();
    assert_eq!(cold[0].velocity, Some(999));
    assert_eq!(cold[4].target_temp, i32::MIN);

    let hot = api
        .generate_template_phases("TestGlass", "f", "t", "10", "1", "10", i32::MAX)
        .unwrap();
    assert_eq!(hot[0].velocity, Some(i32::MIN));
    assert_eq!(hot[4].target_temp, i32::MAX);
}

// ==========================================
// 测试用例 2: 错误转换
// ==========================================

#[test]
fn test_unknown_glass_is_not_found() {
    let result = api().generate_template_phases("Nonexistent", "f", "t", "10", "1", "10", 20);

    match result {
        Err(ApiError::NotFound(message)) => assert!(message.contains("Nonexistent")),
        other => panic!("期望 NotFound，实际 {:?}", other),
    }
}

#[test]
fn test_missing_lookup_is_reported() {
    let result = api().generate_template_phases("TestGlass", "f", "t", "999", "1", "10", 20);

    match result {
        Err(ApiError::MissingLookup(message)) => assert!(message.contains("999")),
        other => panic!("期望 MissingLookup，实际 {:?}", other),
    }
}

#[test]
fn test_open_from_dataset_file() {
    let file = write_temp_file(".json", SAMPLE_DATASET_JSON).unwrap();
    let api = CurveApi::from_dataset_path(file.path(), GeneratorSettings::default()).unwrap();

    let phases = api
        .generate_template_phases("Bullseye 90", "f", "t", "10", "2", "10", 20)
        .unwrap();
    assert_eq!(phases[1].target_temp, 796);
}

#[test]
fn test_dataset_file_errors_mapped() {
    let missing =
        CurveApi::from_dataset_path(Path::new("/nonexistent/glass.json"), GeneratorSettings::default());
    assert!(matches!(missing, Err(ApiError::NotFound(_))));

    let file = write_temp_file(".json", "{ not json").unwrap();
    let malformed = CurveApi::from_dataset_path(file.path(), GeneratorSettings::default());
    assert!(matches!(malformed, Err(ApiError::DatasetError(_))));
}

// ==========================================
// 测试用例 3: 模板记录
// ==========================================

#[test]
fn test_create_template_record() {
    let request = reference_request();
    let curve = api()
        .create_template("  Reference fuse  ", &request, Some("{}".to_string()))
        .unwrap();

    assert_eq!(curve.name, "Reference fuse");
    assert_eq!(curve.glass_name, "TestGlass");
    assert_eq!(curve.firing_type, FiringType::FullFuse);
    assert_eq!(curve.phases.len(), 5);
    assert_eq!(curve.total_minutes(), 35 + 18 + 20 + 60 + 1320);
    assert_eq!(curve.peak_temp(), Some(730));
    assert_eq!(curve.config_snapshot_json.as_deref(), Some("{}"));
    assert!(!curve.curve_id.is_empty());

    let other = api().create_template("Reference fuse", &request, None).unwrap();
    assert_ne!(other.curve_id, curve.curve_id);
    assert_eq!(other.phases, curve.phases);
}

#[test]
fn test_create_template_requires_name() {
    let result = api().create_template("   ", &reference_request(), None);
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

// ==========================================
// 测试用例 4: 手工曲线重算
// ==========================================

#[test]
fn test_recalculate_edited_template() {
    let api = api();
    let mut phases = api.generate(&reference_request()).unwrap();

    // 人工放慢退火段
    phases[3].velocity = Some(-30);
    let recalculated = api.recalculate_curve(20, &phases).unwrap();

    assert_eq!(recalculated[3].duration, 120);
    assert_eq!(recalculated[0], phases[0]);
    assert_eq!(recalculated[4], phases[4]);
}

#[test]
fn test_recalculate_rejects_wrong_direction() {
    let phases = vec![
        Phase::new(600, 0, 0, Some(300)),
        Phase::new(500, 0, 0, Some(100)),
    ];

    match api().recalculate_curve(20, &phases) {
        Err(ApiError::ValidationError { violations, .. }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].index, 1);
            assert_eq!(violations[0].kind, ViolationKind::VelocityDirectionMismatch);
        }
        other => panic!("期望 ValidationError，实际 {:?}", other),
    }
}

#[test]
fn test_recalculate_rejects_empty_curve() {
    match api().recalculate_curve(20, &[]) {
        Err(ApiError::ValidationError { violations, .. }) => {
            assert_eq!(violations[0].kind, ViolationKind::EmptyCurve);
        }
        other => panic!("期望 ValidationError，实际 {:?}", other),
    }
}

#[test]
fn test_recalculate_extreme_edits_reported() {
    let api = api();

    match api.recalculate_curve(20, &[Phase::new(10, 100, 0, Some(i32::MIN))]) {
        Err(ApiError::ValidationError { violations, .. }) => {
            assert_eq!(violations[0].kind, ViolationKind::VelocityAboveLimit);
        }
        other => panic!("期望 ValidationError，实际 {:?}", other),
    }

    // 温差超出 i32，重算后时长饱和
    let phases = api
        .recalculate_curve(-10, &[Phase::new(i32::MAX, 0, 0, Some(999))])
        .unwrap();
    assert!(phases[0].duration > 100_000_000);
}

// ==========================================
// 测试用例 5: 剖面与玻璃列表
// ==========================================

#[test]
fn test_curve_profile_of_template() {
    let api = api();
    let phases = api.generate(&reference_request()).unwrap();
    let profile = api.curve_profile(20, &phases);

    assert_eq!(profile.total_minutes, 1453);
    assert_eq!(profile.peak_temp, 730);
    assert_eq!(profile.temperature_at(0.0), 20.0);
    assert_eq!(profile.temperature_at(1453.0), 20.0);
}

#[test]
fn test_list_glasses() {
    let api = CurveApi::new(sample_dataset(), GeneratorSettings::default());
    assert_eq!(
        api.list_glasses(),
        vec![
            "Bullseye 90".to_string(),
            "Bullseye 90 Tekta".to_string(),
            "Float Glass".to_string(),
            "Spectrum 96".to_string(),
        ]
    );
}
