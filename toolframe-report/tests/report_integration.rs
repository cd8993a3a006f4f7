use toolframe_assembly::AssemblyDoc;
use toolframe_core::Quaternion;
use toolframe_report::{LengthUnit, PoseReport};

// The shape of document the tool is run against day to day: a probe head
// whose TCP frame is yawed 90 degrees and offset, stored in centimeters.
const PROBE_DOC: &str = r#"{
    "name": "ProbeStation",
    "children": [
        {
            "name": "Head",
            "transform": {
                "origin": [12.5, 0.0, 30.0],
                "x_axis": [1.0, 0.0, 0.0],
                "y_axis": [0.0, 1.0, 0.0],
                "z_axis": [0.0, 0.0, 1.0]
            },
            "children": [
                {
                    "name": "TCP",
                    "transform": {
                        "origin": [0.0, 0.0, 2.5],
                        "x_axis": [0.0, 1.0, 0.0],
                        "y_axis": [-1.0, 0.0, 0.0],
                        "z_axis": [0.0, 0.0, 1.0]
                    }
                },
                { "name": "tcp_camera" }
            ]
        }
    ]
}"#;

fn reports() -> Vec<PoseReport> {
    let assembly = AssemblyDoc::from_json_str(PROBE_DOC)
        .unwrap()
        .to_assembly();
    PoseReport::for_target(&assembly, "TCP", LengthUnit::Centimeters).unwrap()
}

#[test]
fn exact_match_shadows_fallback() {
    let reports = reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].path, "ProbeStation/Head/TCP");
}

#[test]
fn translation_is_reported_in_millimeters() {
    let report = &reports()[0];
    assert!((report.translation_mm.x - 125.0).abs() < 1e-9);
    assert!(report.translation_mm.y.abs() < 1e-9);
    assert!((report.translation_mm.z - 325.0).abs() < 1e-9);
}

#[test]
fn orientation_decomposes_to_yaw() {
    let report = &reports()[0];

    assert!((report.euler_deg[2] - 90.0).abs() < 1e-9);
    assert!(report.euler_deg[0].abs() < 1e-9);
    assert!(report.euler_deg[1].abs() < 1e-9);

    let expected = Quaternion::new(
        0.0,
        0.0,
        std::f64::consts::FRAC_1_SQRT_2,
        std::f64::consts::FRAC_1_SQRT_2,
    );
    assert!((report.quaternion.dot(&expected).abs() - 1.0).abs() < 1e-12);
}

#[test]
fn abb_literal_matches_the_controller_format() {
    let report = &reports()[0];
    assert_eq!(
        report.abb_pose,
        "[[125.000, 0.000, 325.000], [0.707106781, 0.000000000, 0.000000000, 0.707106781]]"
    );
}

#[test]
fn fallback_found_when_exact_name_is_absent() {
    let assembly = AssemblyDoc::from_json_str(PROBE_DOC)
        .unwrap()
        .to_assembly();
    let reports =
        PoseReport::for_target(&assembly, "Camera", LengthUnit::Centimeters).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].target, "tcp_camera");
    assert_eq!(reports[0].path, "ProbeStation/Head/tcp_camera");
}

#[test]
fn unknown_target_is_an_error() {
    let assembly = AssemblyDoc::from_json_str(PROBE_DOC)
        .unwrap()
        .to_assembly();
    let result = PoseReport::for_target(&assembly, "Spindle", LengthUnit::Centimeters);
    assert!(result.is_err());
}

#[test]
fn text_rendering_names_the_occurrence() {
    let report = &reports()[0];
    let text = report.render_text();

    assert!(text.contains("TCP position (mm): [125.000, 0.000, 325.000]"));
    assert!(text.contains("(Occurrence used: ProbeStation/Head/TCP)"));
}
