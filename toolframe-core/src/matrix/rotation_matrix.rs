//! 3x3 rotation matrices for occurrence orientation.
//!
//! A rotation matrix is a 3x3 orthogonal matrix with determinant +1. In an
//! assembly it carries the orientation of an occurrence's coordinate frame:
//! its columns are the frame's x, y, and z axes expressed in the parent
//! frame. Composing the matrices of nested occurrences yields the
//! world-frame orientation that a pose report decomposes into a quaternion
//! and Euler angles.
//!
//! # Composing Transformations
//!
//! Rotation matrices compose by multiplication. To apply rotation A, then
//! rotation B, compute `B * A` (the rightmost matrix acts first on the
//! vector).
//!
//! ```
//! use toolframe_core::RotationMatrix3;
//!
//! // Orientation of a fixture tilted about X, then turned about Z
//! let mut fixture = RotationMatrix3::identity();
//! fixture.rotate_x(0.05);
//! fixture.rotate_z(0.41);
//!
//! let mut tool = RotationMatrix3::identity();
//! tool.rotate_y(-0.2);
//!
//! // Tool orientation in the world frame: fixture * tool
//! let world = fixture * tool;
//! assert!(world.is_rotation_matrix(1e-14));
//! ```
//!
//! # Rotation Convention
//!
//! Rotations follow the active right-handed convention used by CAD hosts
//! and robot controllers: a positive angle turns a vector counterclockwise
//! when viewed from the positive end of the rotation axis looking toward
//! the origin.
//!
//! - `rotate_x(phi)`: rotation about the X-axis by angle phi (radians)
//! - `rotate_y(theta)`: rotation about the Y-axis by angle theta (radians)
//! - `rotate_z(psi)`: rotation about the Z-axis by angle psi (radians)
//!
//! A positive rotation of 90 degrees about Z takes the vector `[1, 0, 0]`
//! to `[0, 1, 0]`.
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element
//! at row `i`, column `j` is accessed as `matrix[(i, j)]` or
//! `matrix.get(i, j)`. When the matrix multiplies a column vector, the
//! result is the standard matrix-vector product:
//!
//! ```text
//! | r00 r01 r02 |   | x |   | r00*x + r01*y + r02*z |
//! | r10 r11 r12 | * | y | = | r10*x + r11*y + r12*z |
//! | r20 r21 r22 |   | z |   | r20*x + r21*y + r22*z |
//! ```
//!
//! # Inverting Rotations
//!
//! For a proper rotation matrix, the inverse equals the transpose. This is
//! much cheaper than a general matrix inverse and numerically stable:
//!
//! ```
//! use toolframe_core::RotationMatrix3;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.5);
//!
//! let product = m * m.transpose();
//! assert!((product.get(0, 0) - 1.0).abs() < 1e-15);
//! ```
//!
//! # Decomposition
//!
//! [`to_quaternion`](RotationMatrix3::to_quaternion) and
//! [`to_euler_zyx`](RotationMatrix3::to_euler_zyx) produce the two report
//! forms of an orientation; [`from_euler_zyx`](RotationMatrix3::from_euler_zyx)
//! reconstructs the matrix from the Euler triple.

use crate::rotation::{EulerZyx, Quaternion};
use std::fmt;

/// A 3x3 rotation matrix carrying an occurrence's orientation.
///
/// This type represents proper rotation matrices (orthogonal with
/// determinant +1). All angles are in radians. The matrix uses row-major
/// storage.
///
/// # Construction
///
/// ```
/// use toolframe_core::{RotationMatrix3, Vector3};
///
/// // Build up rotations from the identity
/// let mut m = RotationMatrix3::identity();
/// m.rotate_z(0.1);
/// m.rotate_x(0.05);
///
/// // Or directly from the frame's axes (matrix columns)
/// let m = RotationMatrix3::from_columns(
///     &Vector3::new(0.0, 1.0, 0.0),
///     &Vector3::new(-1.0, 0.0, 0.0),
///     &Vector3::new(0.0, 0.0, 1.0),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

use super::Vector3;

impl RotationMatrix3 {
    /// Creates the 3x3 identity matrix.
    ///
    /// The identity leaves any vector unchanged and is the orientation of
    /// an occurrence aligned with its parent frame.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a rotation matrix from a 3x3 array of elements.
    ///
    /// The array is interpreted as row-major: `elements[i][j]` is row `i`,
    /// column `j`.
    ///
    /// This does not validate that the matrix is a proper rotation. Use
    /// [`is_rotation_matrix`](Self::is_rotation_matrix) to check if needed.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Creates a rotation matrix whose columns are the given frame axes.
    ///
    /// This is the bridge from a coordinate frame as a host document stores
    /// it (three axis vectors) to the matrix form the decomposition
    /// routines work on. The axes are taken as-is; orthonormality and
    /// handedness are the caller's responsibility.
    ///
    /// ```
    /// use toolframe_core::{RotationMatrix3, Vector3};
    ///
    /// // A frame rotated 90 degrees about Z
    /// let m = RotationMatrix3::from_columns(
    ///     &Vector3::new(0.0, 1.0, 0.0),
    ///     &Vector3::new(-1.0, 0.0, 0.0),
    ///     &Vector3::new(0.0, 0.0, 1.0),
    /// );
    /// assert_eq!(m.get(1, 0), 1.0);
    /// assert_eq!(m.get(0, 1), -1.0);
    /// ```
    pub fn from_columns(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3) -> Self {
        Self::from_array([
            [x_axis.x, y_axis.x, z_axis.x],
            [x_axis.y, y_axis.y, z_axis.y],
            [x_axis.z, y_axis.z, z_axis.z],
        ])
    }

    /// Returns the matrix columns as frame axes `(x_axis, y_axis, z_axis)`.
    ///
    /// Inverse of [`from_columns`](Self::from_columns).
    pub fn columns(&self) -> (Vector3, Vector3, Vector3) {
        let m = &self.elements;
        (
            Vector3::new(m[0][0], m[1][0], m[2][0]),
            Vector3::new(m[0][1], m[1][1], m[2][1]),
            Vector3::new(m[0][2], m[1][2], m[2][2]),
        )
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    ///
    /// You can also use indexing syntax: `matrix[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    /// Returns a reference to the underlying 3x3 array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Applies a rotation about the X-axis to this matrix (in place).
    ///
    /// The rotation angle `phi` is in radians. This modifies `self` to
    /// become `Rx(phi) * self`, where `Rx` is the active X-axis rotation:
    ///
    /// ```text
    /// Rx(phi) = | 1      0         0     |
    ///           | 0   cos(phi) -sin(phi) |
    ///           | 0   sin(phi)  cos(phi) |
    /// ```
    ///
    /// ```
    /// use toolframe_core::RotationMatrix3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let mut m = RotationMatrix3::identity();
    /// m.rotate_x(FRAC_PI_2);  // 90 degrees
    ///
    /// // [0, 1, 0] rotates to [0, 0, 1]
    /// let v = m.apply_to_vector([0.0, 1.0, 0.0]);
    /// assert!(v[0].abs() < 1e-15);
    /// assert!(v[1].abs() < 1e-15);
    /// assert!((v[2] - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);

        let a10 = c * self.elements[1][0] - s * self.elements[2][0];
        let a11 = c * self.elements[1][1] - s * self.elements[2][1];
        let a12 = c * self.elements[1][2] - s * self.elements[2][2];
        let a20 = s * self.elements[1][0] + c * self.elements[2][0];
        let a21 = s * self.elements[1][1] + c * self.elements[2][1];
        let a22 = s * self.elements[1][2] + c * self.elements[2][2];

        self.elements[1][0] = a10;
        self.elements[1][1] = a11;
        self.elements[1][2] = a12;
        self.elements[2][0] = a20;
        self.elements[2][1] = a21;
        self.elements[2][2] = a22;
    }

    /// Applies a rotation about the Y-axis to this matrix (in place).
    ///
    /// The rotation angle `theta` is in radians. This modifies `self` to
    /// become `Ry(theta) * self`, where `Ry` is the active Y-axis rotation:
    ///
    /// ```text
    /// Ry(theta) = |  cos(theta)  0  sin(theta) |
    ///             |      0       1      0      |
    ///             | -sin(theta)  0  cos(theta) |
    /// ```
    ///
    /// ```
    /// use toolframe_core::RotationMatrix3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let mut m = RotationMatrix3::identity();
    /// m.rotate_y(FRAC_PI_2);  // 90 degrees
    ///
    /// // [0, 0, 1] rotates to [1, 0, 0]
    /// let v = m.apply_to_vector([0.0, 0.0, 1.0]);
    /// assert!((v[0] - 1.0).abs() < 1e-15);
    /// assert!(v[1].abs() < 1e-15);
    /// assert!(v[2].abs() < 1e-15);
    /// ```
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);

        let a00 = c * self.elements[0][0] + s * self.elements[2][0];
        let a01 = c * self.elements[0][1] + s * self.elements[2][1];
        let a02 = c * self.elements[0][2] + s * self.elements[2][2];
        let a20 = -s * self.elements[0][0] + c * self.elements[2][0];
        let a21 = -s * self.elements[0][1] + c * self.elements[2][1];
        let a22 = -s * self.elements[0][2] + c * self.elements[2][2];

        self.elements[0][0] = a00;
        self.elements[0][1] = a01;
        self.elements[0][2] = a02;
        self.elements[2][0] = a20;
        self.elements[2][1] = a21;
        self.elements[2][2] = a22;
    }

    /// Applies a rotation about the Z-axis to this matrix (in place).
    ///
    /// The rotation angle `psi` is in radians. This modifies `self` to
    /// become `Rz(psi) * self`, where `Rz` is the active Z-axis rotation:
    ///
    /// ```text
    /// Rz(psi) = | cos(psi) -sin(psi)  0 |
    ///           | sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    ///
    /// ```
    /// use toolframe_core::RotationMatrix3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let mut m = RotationMatrix3::identity();
    /// m.rotate_z(FRAC_PI_2);  // 90 degrees
    ///
    /// // [1, 0, 0] rotates to [0, 1, 0]
    /// let v = m.apply_to_vector([1.0, 0.0, 0.0]);
    /// assert!(v[0].abs() < 1e-15);
    /// assert!((v[1] - 1.0).abs() < 1e-15);
    /// assert!(v[2].abs() < 1e-15);
    /// ```
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);

        let a00 = c * self.elements[0][0] - s * self.elements[1][0];
        let a01 = c * self.elements[0][1] - s * self.elements[1][1];
        let a02 = c * self.elements[0][2] - s * self.elements[1][2];
        let a10 = s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0][0] = a00;
        self.elements[0][1] = a01;
        self.elements[0][2] = a02;
        self.elements[1][0] = a10;
        self.elements[1][1] = a11;
        self.elements[1][2] = a12;
    }

    /// Builds the matrix for an intrinsic ZYX Euler rotation.
    ///
    /// Composes `Rz(rz) * Ry(ry) * Rx(rx)`, the convention produced by
    /// [`to_euler_zyx`](Self::to_euler_zyx).
    ///
    /// ```
    /// use toolframe_core::{EulerZyx, RotationMatrix3};
    ///
    /// let e = EulerZyx::new(0.1, 0.2, 0.3);
    /// let m = RotationMatrix3::from_euler_zyx(&e);
    /// let back = m.to_euler_zyx();
    ///
    /// assert!((back.rx - 0.1).abs() < 1e-12);
    /// assert!((back.ry - 0.2).abs() < 1e-12);
    /// assert!((back.rz - 0.3).abs() < 1e-12);
    /// ```
    pub fn from_euler_zyx(euler: &EulerZyx) -> Self {
        let mut m = Self::identity();
        m.rotate_x(euler.rx);
        m.rotate_y(euler.ry);
        m.rotate_z(euler.rz);
        m
    }

    /// Decomposes this orientation into a unit quaternion.
    ///
    /// Shorthand for [`Quaternion::from_matrix`]. The result is unit-norm
    /// up to sign for any proper rotation matrix; see the quaternion docs
    /// for the branch selection that keeps the computation stable.
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_matrix(self)
    }

    /// Decomposes this orientation into intrinsic ZYX Euler angles.
    ///
    /// Shorthand for [`EulerZyx::from_matrix`]. Gimbal lock is handled by a
    /// dedicated branch; see the Euler docs for the convention.
    pub fn to_euler_zyx(&self) -> EulerZyx {
        EulerZyx::from_matrix(self)
    }

    /// Multiplies this matrix by another, returning the product.
    ///
    /// Matrix multiplication is not commutative: `A * B` is generally
    /// different from `B * A`. The result represents the composition where
    /// `other` acts first, then `self` -- the order in which a child
    /// occurrence's orientation composes into its parent's.
    ///
    /// You can also use the `*` operator: `a * b` or `&a * &b`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this rotation matrix to a 3D vector.
    ///
    /// Computes the standard matrix-vector product `M * v`, rotating the
    /// vector from the child frame into the parent frame.
    ///
    /// You can also use the `*` operator with [`Vector3`]: `matrix * vector`.
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * vector[0]
                + self.elements[0][1] * vector[1]
                + self.elements[0][2] * vector[2],
            self.elements[1][0] * vector[0]
                + self.elements[1][1] * vector[1]
                + self.elements[1][2] * vector[2],
            self.elements[2][0] * vector[0]
                + self.elements[2][1] * vector[1]
                + self.elements[2][2] * vector[2],
        ]
    }

    /// Computes the determinant of this matrix.
    ///
    /// For a proper rotation matrix, the determinant is always +1. A
    /// determinant of -1 indicates a reflection (a left-handed frame).
    /// Values far from +/-1 indicate the matrix is not orthogonal.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of this matrix.
    ///
    /// For a rotation matrix, the transpose equals the inverse, giving the
    /// parent-to-child direction of a frame transformation without general
    /// matrix inversion.
    pub fn transpose(&self) -> Self {
        Self::from_array([
            [
                self.elements[0][0],
                self.elements[1][0],
                self.elements[2][0],
            ],
            [
                self.elements[0][1],
                self.elements[1][1],
                self.elements[2][1],
            ],
            [
                self.elements[0][2],
                self.elements[1][2],
                self.elements[2][2],
            ],
        ])
    }

    /// Checks whether this matrix is a valid rotation matrix within a
    /// tolerance.
    ///
    /// A proper rotation matrix must satisfy two conditions:
    /// 1. Determinant equals +1 (not -1, which would be a reflection)
    /// 2. The matrix is orthogonal: `M * M^T = I`
    ///
    /// The decomposition routines never call this; orthonormality is the
    /// caller's precondition. It exists for validating frames read from
    /// documents.
    ///
    /// ```
    /// use toolframe_core::RotationMatrix3;
    ///
    /// let mut m = RotationMatrix3::identity();
    /// m.rotate_z(0.5);
    /// m.rotate_x(0.3);
    /// assert!(m.is_rotation_matrix(1e-14));
    ///
    /// // A scaling matrix is not a rotation
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let det = self.determinant();
        if (det - 1.0).abs() > tolerance {
            return false;
        }

        let rt = self.transpose();
        let product = self.multiply(&rt);
        let identity = Self::identity();

        for i in 0..3 {
            for j in 0..3 {
                if (product.elements[i][j] - identity.elements[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the maximum absolute difference between corresponding
    /// elements.
    ///
    /// Useful for round-trip comparisons in tests and for checking a
    /// reconstructed orientation against its source.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: RotationMatrix3) -> RotationMatrix3 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        let result = self.apply_to_vector([vec.x, vec.y, vec.z]);
        Vector3::from_array(result)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        let result = self.apply_to_vector([vec.x, vec.y, vec.z]);
        Vector3::from_array(result)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
