use toolframe_assembly::search::find_by_name;
use toolframe_assembly::{AssemblyDoc, Transform3};
use toolframe_core::constants::HALF_PI;
use toolframe_core::Vector3;

// A welding cell: the robot base is offset in the cell, the torch mount is
// rotated 90 degrees about Z, and the TCP sits ahead of the mount.
const CELL_DOC: &str = r#"{
    "name": "Cell",
    "children": [
        {
            "name": "Robot",
            "transform": {
                "origin": [100.0, 50.0, 0.0],
                "x_axis": [1.0, 0.0, 0.0],
                "y_axis": [0.0, 1.0, 0.0],
                "z_axis": [0.0, 0.0, 1.0]
            },
            "children": [
                {
                    "name": "TorchMount",
                    "transform": {
                        "origin": [0.0, 0.0, 40.0],
                        "x_axis": [0.0, 1.0, 0.0],
                        "y_axis": [-1.0, 0.0, 0.0],
                        "z_axis": [0.0, 0.0, 1.0]
                    },
                    "children": [
                        {
                            "name": "TCP",
                            "transform": {
                                "origin": [5.0, 0.0, 0.0],
                                "x_axis": [1.0, 0.0, 0.0],
                                "y_axis": [0.0, 1.0, 0.0],
                                "z_axis": [0.0, 0.0, 1.0]
                            }
                        }
                    ]
                }
            ]
        },
        { "name": "Table" }
    ]
}"#;

fn load_cell() -> toolframe_assembly::Assembly {
    AssemblyDoc::from_json_str(CELL_DOC).unwrap().to_assembly()
}

#[test]
fn cell_has_four_occurrences_below_root() {
    let assembly = load_cell();
    assert_eq!(assembly.len(), 5);
    assert_eq!(assembly.all_occurrences().len(), 4);
}

#[test]
fn tcp_found_exactly_once() {
    let assembly = load_cell();
    let outcome = find_by_name(&assembly, "TCP");
    assert_eq!(outcome.exact.len(), 1);
    assert!(!outcome.is_ambiguous());
}

#[test]
fn tcp_path_walks_the_tree() {
    let assembly = load_cell();
    let tcp = find_by_name(&assembly, "TCP").resolve().unwrap();
    assert_eq!(assembly.path(tcp), "Cell/Robot/TorchMount/TCP");
}

#[test]
fn tcp_world_origin_composes_the_chain() {
    let assembly = load_cell();
    let tcp = find_by_name(&assembly, "TCP").resolve().unwrap();

    // Mount turns +X into +Y, so the TCP's local [5,0,0] lands on +Y
    let origin = assembly.world_transform(tcp).origin();
    assert!((origin.x - 100.0).abs() < 1e-12);
    assert!((origin.y - 55.0).abs() < 1e-12);
    assert!((origin.z - 40.0).abs() < 1e-12);
}

#[test]
fn tcp_world_orientation_is_the_mount_yaw() {
    let assembly = load_cell();
    let tcp = find_by_name(&assembly, "TCP").resolve().unwrap();

    let e = assembly.world_transform(tcp).to_euler_zyx();
    assert!(e.rx.abs() < 1e-12);
    assert!(e.ry.abs() < 1e-12);
    assert!((e.rz - HALF_PI).abs() < 1e-12);
}

#[test]
fn world_transform_matches_manual_composition() {
    let assembly = load_cell();
    let tcp = find_by_name(&assembly, "TCP").resolve().unwrap();

    let mut manual = Transform3::identity();
    let mut chain = vec![tcp];
    let mut current = tcp;
    while let Some(parent) = assembly.occurrence(current).parent {
        chain.push(parent);
        current = parent;
    }
    for id in chain.iter().rev() {
        manual = manual.compose(&assembly.occurrence(*id).transform);
    }

    let world = assembly.world_transform(tcp);
    assert!((world.origin() - manual.origin()).magnitude() < 1e-12);
    assert!(world.rotation().max_difference(&manual.rotation()) < 1e-12);
}

#[test]
fn identity_nodes_do_not_disturb_the_pose() {
    let assembly = load_cell();
    let table = find_by_name(&assembly, "Table").resolve().unwrap();
    let world = assembly.world_transform(table);
    assert_eq!(world.origin(), Vector3::zeros());
}
