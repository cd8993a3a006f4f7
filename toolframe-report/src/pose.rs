//! Pose report assembly and rendering.
//!
//! A [`PoseReport`] captures everything the original popup showed for one
//! occurrence: the world translation in millimeters, the unit quaternion,
//! the Euler ZYX triple in radians and degrees, the ABB pose literal, and
//! the occurrence path that was used. Text rendering mirrors that popup;
//! JSON rendering serializes the same fields for scripting.

use crate::errors::ReportResult;
use crate::units::LengthUnit;
use serde::Serialize;
use toolframe_assembly::search::find_by_name;
use toolframe_assembly::{Assembly, AssemblyError, OccurrenceId};
use toolframe_core::{EulerZyx, Quaternion, Vector3};

/// Formats the ABB controller pose literal.
///
/// Translation in millimeters with 3 decimals, quaternion with 9 decimals
/// in scalar-first order: `[[tx, ty, tz], [qw, qx, qy, qz]]`.
///
/// ```
/// use toolframe_core::{Quaternion, Vector3};
/// use toolframe_report::format_abb_pose;
///
/// let pose = format_abb_pose(&Vector3::new(10.0, 20.0, 30.0), &Quaternion::identity());
/// assert_eq!(
///     pose,
///     "[[10.000, 20.000, 30.000], [1.000000000, 0.000000000, 0.000000000, 0.000000000]]"
/// );
/// ```
pub fn format_abb_pose(translation_mm: &Vector3, quaternion: &Quaternion) -> String {
    format!(
        "[[{:.3}, {:.3}, {:.3}], [{:.9}, {:.9}, {:.9}, {:.9}]]",
        translation_mm.x,
        translation_mm.y,
        translation_mm.z,
        quaternion.w,
        quaternion.x,
        quaternion.y,
        quaternion.z,
    )
}

/// The decomposed world pose of one occurrence, ready to present.
#[derive(Debug, Clone, Serialize)]
pub struct PoseReport {
    /// Component name the report is about.
    pub target: String,
    /// Full occurrence path, `Root/Asm/SubAsm/TCP`.
    pub path: String,
    /// World translation converted to millimeters.
    pub translation_mm: Vector3,
    /// Unit quaternion of the world orientation (x, y, z, w fields).
    pub quaternion: Quaternion,
    /// Euler ZYX triple in radians.
    pub euler: EulerZyx,
    /// Euler ZYX triple in degrees, `[rx, ry, rz]`.
    pub euler_deg: [f64; 3],
    /// ABB controller pose literal.
    pub abb_pose: String,
}

impl PoseReport {
    /// Builds the report for a known occurrence.
    pub fn for_occurrence(assembly: &Assembly, id: OccurrenceId, units: LengthUnit) -> Self {
        let world = assembly.world_transform(id);
        let (origin, x_axis, y_axis, z_axis) = world.as_coordinate_system();

        let quaternion = Quaternion::from_basis(&x_axis, &y_axis, &z_axis);
        let euler = EulerZyx::from_basis(&x_axis, &y_axis, &z_axis);
        let (dx, dy, dz) = euler.to_degrees();
        let translation_mm = units.point_to_millimeters(origin);
        let abb_pose = format_abb_pose(&translation_mm, &quaternion);

        Self {
            target: assembly.occurrence(id).name.clone(),
            path: assembly.path(id),
            translation_mm,
            quaternion,
            euler,
            euler_deg: [dx, dy, dz],
            abb_pose,
        }
    }

    /// Builds reports for every occurrence matching a component name.
    ///
    /// Exact name matches win over case-insensitive fallback matches, as
    /// in [`find_by_name`]. Reports come back in document order; the first
    /// one is the occurrence the original tool would have used. Fails with
    /// [`AssemblyError::TargetNotFound`] when nothing matches at all.
    pub fn for_target(
        assembly: &Assembly,
        target: &str,
        units: LengthUnit,
    ) -> ReportResult<Vec<Self>> {
        let outcome = find_by_name(assembly, target);
        if outcome.is_empty() {
            return Err(AssemblyError::TargetNotFound(target.to_string()).into());
        }

        Ok(outcome
            .best()
            .iter()
            .map(|&id| Self::for_occurrence(assembly, id, units))
            .collect())
    }

    /// Renders the report as the original popup laid it out.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Top-level -> {} transform\n", self.target));
        out.push_str(&format!(
            "{} position (mm): [{:.3}, {:.3}, {:.3}]\n",
            self.target, self.translation_mm.x, self.translation_mm.y, self.translation_mm.z
        ));
        out.push_str(&format!(
            "Quaternion (x,y,z,w): [{:.9}, {:.9}, {:.9}, {:.9}]\n",
            self.quaternion.x, self.quaternion.y, self.quaternion.z, self.quaternion.w
        ));
        out.push_str(&format!(
            "Euler ZYX (deg): X={:.3}, Y={:.3}, Z={:.3}\n",
            self.euler_deg[0], self.euler_deg[1], self.euler_deg[2]
        ));
        out.push_str(&format!("ABB pose: {}\n", self.abb_pose));
        out.push_str(&format!("(Occurrence used: {})\n", self.path));
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
