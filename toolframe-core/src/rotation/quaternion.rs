//! Unit quaternions for orientation interchange.
//!
//! Robot controllers take orientation as a unit quaternion, so a pose
//! report's final step is converting the occurrence frame's rotation matrix
//! into one. The conversion here is the standard stable algorithm: it picks
//! its formula by the matrix trace and diagonal so the square root and the
//! division are always taken on a well-conditioned quantity.
//!
//! # Sign
//!
//! A quaternion and its negation represent the same rotation. The
//! conversion does not canonicalize the sign -- which of `q` and `-q` comes
//! out depends on which branch fires. Controllers accept either; comparisons
//! in tests should too (compare via the absolute dot product).
//!
//! ```
//! use toolframe_core::{Quaternion, Vector3};
//!
//! // Frame rotated 90 degrees about Z
//! let q = Quaternion::from_basis(
//!     &Vector3::new(0.0, 1.0, 0.0),
//!     &Vector3::new(-1.0, 0.0, 0.0),
//!     &Vector3::new(0.0, 0.0, 1.0),
//! );
//!
//! let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
//! assert!((q.z - half_sqrt2).abs() < 1e-12);
//! assert!((q.w - half_sqrt2).abs() < 1e-12);
//! assert!((q.norm() - 1.0).abs() < 1e-12);
//! ```

use crate::matrix::{RotationMatrix3, Vector3};
use crate::{FrameError, FrameResult, MathErrorKind};
use std::fmt;

/// A quaternion `x*i + y*j + z*k + w` representing a 3D rotation.
///
/// Produced unit-norm (up to floating tolerance) by
/// [`from_basis`](Self::from_basis) and [`from_matrix`](Self::from_matrix)
/// when the input frame is orthonormal and right-handed. The components are
/// stored x, y, z, w; note that some controller pose formats order the
/// scalar part first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// Creates a quaternion from raw components.
    ///
    /// No normalization is performed; use [`normalize`](Self::normalize)
    /// if the components do not already describe a unit quaternion.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Converts an orthonormal right-handed frame to a unit quaternion.
    ///
    /// The axes are the columns of the frame's rotation matrix, exactly as
    /// a host document stores a coordinate system. Orthonormality is the
    /// caller's precondition: a malformed basis produces a well-defined but
    /// meaningless quaternion, never a panic.
    pub fn from_basis(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3) -> Self {
        Self::from_matrix(&RotationMatrix3::from_columns(x_axis, y_axis, z_axis))
    }

    /// Converts a rotation matrix to a unit quaternion.
    ///
    /// Branch selection follows the standard stable scheme: when the trace
    /// is positive, the scalar part is the largest component and anchors
    /// the division; otherwise the largest diagonal element selects which
    /// vector component anchors it. Each branch divides by `S = 2*sqrt(..)`
    /// of a quantity at least 1, so no branch ever divides by a near-zero
    /// denominator.
    ///
    /// The result is unit-norm up to sign for any proper rotation matrix.
    pub fn from_matrix(matrix: &RotationMatrix3) -> Self {
        let m = matrix.elements();
        let trace = m[0][0] + m[1][1] + m[2][2];

        if trace > 0.0 {
            let s = libm::sqrt(trace + 1.0) * 2.0;
            Self::new(
                (m[2][1] - m[1][2]) / s,
                (m[0][2] - m[2][0]) / s,
                (m[1][0] - m[0][1]) / s,
                0.25 * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = libm::sqrt(1.0 + m[0][0] - m[1][1] - m[2][2]) * 2.0;
            Self::new(
                0.25 * s,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[2][1] - m[1][2]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = libm::sqrt(1.0 + m[1][1] - m[0][0] - m[2][2]) * 2.0;
            Self::new(
                (m[0][1] + m[1][0]) / s,
                0.25 * s,
                (m[1][2] + m[2][1]) / s,
                (m[0][2] - m[2][0]) / s,
            )
        } else {
            let s = libm::sqrt(1.0 + m[2][2] - m[0][0] - m[1][1]) * 2.0;
            Self::new(
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                0.25 * s,
                (m[1][0] - m[0][1]) / s,
            )
        }
    }

    /// Reconstructs the rotation matrix this quaternion represents.
    ///
    /// Uses the standard unit-quaternion formula; the quaternion must be
    /// unit-norm for the result to be a proper rotation.
    pub fn to_matrix(&self) -> RotationMatrix3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);

        RotationMatrix3::from_array([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
            ],
            [
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - x * w),
            ],
            [
                2.0 * (x * z - y * w),
                2.0 * (y * z + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }

    /// Returns the Euclidean norm of the four components.
    ///
    /// 1.0 (within floating tolerance) for any quaternion produced from an
    /// orthonormal frame.
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w)
    }

    /// Returns a unit quaternion in the same direction.
    ///
    /// Fails with a `DivisionByZero` math error when the norm is too small
    /// to divide by meaningfully.
    pub fn normalize(&self) -> FrameResult<Self> {
        let n = self.norm();
        if n < 1e-12 {
            return Err(FrameError::math_error(
                "Quaternion::normalize",
                MathErrorKind::DivisionByZero,
                "norm is near zero",
            ));
        }
        Ok(Self::new(self.x / n, self.y / n, self.z / n, self.w / n))
    }

    /// Returns the conjugate `(-x, -y, -z, w)`, the inverse rotation for a
    /// unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Four-component dot product.
    ///
    /// For unit quaternions, `|dot|` near 1 means the two represent the
    /// same rotation (possibly with opposite sign). This is the
    /// sign-insensitive comparison.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.9}, {:.9}, {:.9}, {:.9})",
            self.x, self.y, self.z, self.w
        )
    }
}
