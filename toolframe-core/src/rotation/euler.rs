//! Intrinsic ZYX Euler angles.
//!
//! The second form a pose report presents: roll, pitch, and yaw angles
//! `(rx, ry, rz)` in radians such that the orientation is
//! `Rz(rz) * Ry(ry) * Rx(rx)` (active right-handed axis rotations, yaw
//! applied last). This is the triple an operator reads off a teach pendant.
//!
//! # Gimbal Lock
//!
//! When the pitch reaches ±90 degrees the roll and yaw axes align and only
//! their difference is observable. The extraction resolves the ambiguity by
//! a fixed convention: yaw is reported as zero and roll absorbs the free
//! parameter. Downstream consumers rely on this exact convention, so it is
//! part of the contract rather than an implementation detail.
//!
//! ```
//! use toolframe_core::{EulerZyx, Vector3};
//!
//! // Frame rotated 90 degrees about Z
//! let e = EulerZyx::from_basis(
//!     &Vector3::new(0.0, 1.0, 0.0),
//!     &Vector3::new(-1.0, 0.0, 0.0),
//!     &Vector3::new(0.0, 0.0, 1.0),
//! );
//!
//! assert!(e.rx.abs() < 1e-15);
//! assert!(e.ry.abs() < 1e-15);
//! assert!((e.rz - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use crate::constants::{HALF_PI, RAD_TO_DEG};
use crate::matrix::{RotationMatrix3, Vector3};
use std::fmt;

/// Intrinsic ZYX Euler angles in radians.
///
/// `rx` is roll about X, `ry` pitch about Y, `rz` yaw about Z, composed as
/// `Rz(rz) * Ry(ry) * Rx(rx)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerZyx {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl EulerZyx {
    /// Creates an Euler triple from roll, pitch, yaw in radians.
    #[inline]
    pub fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    /// Returns the zero rotation.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Extracts the Euler angles of an orthonormal right-handed frame.
    ///
    /// The axes are the columns of the frame's rotation matrix.
    /// Orthonormality is the caller's precondition; malformed input yields
    /// a well-defined but meaningless triple, never a panic.
    pub fn from_basis(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3) -> Self {
        Self::from_matrix(&RotationMatrix3::from_columns(x_axis, y_axis, z_axis))
    }

    /// Extracts the Euler angles of a rotation matrix.
    ///
    /// The pitch term `-asin(m20)` is clamped into [-1, 1] first so that
    /// floating round-off on an otherwise valid frame cannot push the asin
    /// argument out of domain. At the clamp boundary (pitch exactly ±90
    /// degrees) the extraction switches to the gimbal-lock branch: yaw is
    /// fixed at zero and roll is solved from the surviving matrix elements
    /// as `atan2(-m01, m11)`.
    pub fn from_matrix(matrix: &RotationMatrix3) -> Self {
        let m = matrix.elements();
        let m20 = m[2][0].clamp(-1.0, 1.0);

        if m20.abs() < 1.0 {
            Self::new(
                libm::atan2(m[2][1], m[2][2]),
                -libm::asin(m20),
                libm::atan2(m[1][0], m[0][0]),
            )
        } else {
            // Gimbal lock: roll absorbs the degree of freedom yaw loses
            let ry = if m20 <= -1.0 { HALF_PI } else { -HALF_PI };
            Self::new(libm::atan2(-m[0][1], m[1][1]), ry, 0.0)
        }
    }

    /// Rebuilds the rotation matrix `Rz(rz) * Ry(ry) * Rx(rx)`.
    pub fn to_matrix(&self) -> RotationMatrix3 {
        RotationMatrix3::from_euler_zyx(self)
    }

    /// Returns `(rx, ry, rz)` converted to degrees.
    pub fn to_degrees(&self) -> (f64, f64, f64) {
        (
            self.rx * RAD_TO_DEG,
            self.ry * RAD_TO_DEG,
            self.rz * RAD_TO_DEG,
        )
    }
}

impl fmt::Display for EulerZyx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EulerZyx({:.9}, {:.9}, {:.9})",
            self.rx, self.ry, self.rz
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_triples() -> Vec<EulerZyx> {
        let rolls = [-2.8, -1.3, -0.4, 0.0, 0.7, 1.9, 2.6];
        let pitches = [-1.2, -0.6, 0.0, 0.5, 1.1];
        let yaws = [-2.9, -1.5, 0.0, 0.8, 2.2];

        let mut triples = Vec::new();
        for &rx in &rolls {
            for &ry in &pitches {
                for &rz in &yaws {
                    triples.push(EulerZyx::new(rx, ry, rz));
                }
            }
        }
        triples
    }

    #[test]
    fn test_identity_basis() {
        let e = EulerZyx::from_basis(
            &Vector3::x_axis(),
            &Vector3::y_axis(),
            &Vector3::z_axis(),
        );
        assert_eq!(e.rx, 0.0);
        assert_eq!(e.ry, 0.0);
        assert_eq!(e.rz, 0.0);
    }

    #[test]
    fn test_yaw_90_degrees() {
        let e = EulerZyx::from_basis(
            &Vector3::new(0.0, 1.0, 0.0),
            &Vector3::new(-1.0, 0.0, 0.0),
            &Vector3::new(0.0, 0.0, 1.0),
        );

        assert_eq!(e.rx, 0.0);
        assert_eq!(e.ry, 0.0);
        assert!((e.rz - HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_roundtrip_away_from_lock() {
        for e in sample_triples() {
            let m = e.to_matrix();
            let back = m.to_euler_zyx();

            // Angles in the sweep are unique, so they come back directly
            assert!((back.rx - e.rx).abs() < 1e-9, "rx for {}", e);
            assert!((back.ry - e.ry).abs() < 1e-9, "ry for {}", e);
            assert!((back.rz - e.rz).abs() < 1e-9, "rz for {}", e);

            // And the matrices agree regardless
            assert!(m.max_difference(&back.to_matrix()) < 1e-9);
        }
    }

    #[test]
    fn test_gimbal_lock_positive_pitch() {
        // x points down the world -Z: m20 = -1, pitch +90°
        let x = Vector3::new(0.0, 0.0, -1.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(1.0, 0.0, 0.0);

        let e = EulerZyx::from_basis(&x, &y, &z);
        assert_eq!(e.ry, HALF_PI);
        assert_eq!(e.rz, 0.0);
        assert_eq!(e.rx, 0.0);

        // The convention reconstructs this frame exactly
        let back = e.to_matrix();
        let (bx, by, bz) = back.columns();
        assert!((bx - x).magnitude() < 1e-12);
        assert!((by - y).magnitude() < 1e-12);
        assert!((bz - z).magnitude() < 1e-12);
    }

    #[test]
    fn test_gimbal_lock_negative_pitch() {
        // x points up the world +Z: m20 = 1, pitch -90°
        let x = Vector3::new(0.0, 0.0, 1.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(-1.0, 0.0, 0.0);

        let e = EulerZyx::from_basis(&x, &y, &z);
        assert_eq!(e.ry, -HALF_PI);
        assert_eq!(e.rz, 0.0);
        assert_eq!(e.rx, 0.0);

        let back = e.to_matrix();
        let (bx, by, bz) = back.columns();
        assert!((bx - x).magnitude() < 1e-12);
        assert!((by - y).magnitude() < 1e-12);
        assert!((bz - z).magnitude() < 1e-12);
    }

    #[test]
    fn test_gimbal_lock_negative_pitch_with_twist() {
        // Roll and yaw collapse onto one axis at pitch -90°; the extraction
        // reports their sum as roll and zero yaw, and that triple rebuilds
        // the frame exactly.
        let source = EulerZyx::new(0.4, -HALF_PI, 0.3);
        let m = source.to_matrix();
        assert_eq!(m.get(2, 0), 1.0);

        let e = m.to_euler_zyx();
        assert_eq!(e.ry, -HALF_PI);
        assert_eq!(e.rz, 0.0);
        assert!((e.rx - 0.7).abs() < 1e-12);

        assert!(m.max_difference(&e.to_matrix()) < 1e-12);
    }

    #[test]
    fn test_gimbal_lock_positive_pitch_with_twist() {
        // At pitch +90° the lock branch still produces a defined triple
        // with zero yaw, and the x axis it implies matches the source.
        let source = EulerZyx::new(0.4, HALF_PI, 0.3);
        let m = source.to_matrix();
        assert_eq!(m.get(2, 0), -1.0);

        let e = m.to_euler_zyx();
        assert_eq!(e.ry, HALF_PI);
        assert_eq!(e.rz, 0.0);
        assert!((e.rx + 0.1).abs() < 1e-12);
        assert!(e.rx.is_finite());

        let (bx, _, _) = e.to_matrix().columns();
        let (sx, _, _) = m.columns();
        assert!((bx - sx).magnitude() < 1e-12);
    }

    #[test]
    fn test_clamp_guards_asin_domain() {
        // Round-off can push m20 just past ±1; the clamp keeps asin in
        // domain and routes the frame to the lock branch.
        let mut m = RotationMatrix3::identity();
        m.set(2, 0, 1.0 + 1e-12);
        let e = m.to_euler_zyx();

        assert!(e.rx.is_finite());
        assert!(e.ry.is_finite());
        assert_eq!(e.ry, -HALF_PI);
        assert_eq!(e.rz, 0.0);
    }

    #[test]
    fn test_to_degrees() {
        let e = EulerZyx::new(crate::constants::PI, HALF_PI, 0.0);
        let (dx, dy, dz) = e.to_degrees();
        assert!((dx - 180.0).abs() < 1e-12);
        assert!((dy - 90.0).abs() < 1e-12);
        assert_eq!(dz, 0.0);
    }

    #[test]
    fn test_zero() {
        assert_eq!(EulerZyx::zero(), EulerZyx::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_display() {
        let e = EulerZyx::new(0.1, 0.2, 0.3);
        let s = format!("{}", e);
        assert!(s.contains("EulerZyx("));
        assert!(s.contains("0.100000000"));
    }
}
