//! Rigid transforms: a rotation plus an origin.
//!
//! Every occurrence carries a [`Transform3`] placing it in its parent's
//! frame. Composing the transforms along a path from the root yields the
//! occurrence's world pose, whose rotation part feeds the quaternion and
//! Euler decompositions.

use toolframe_core::{EulerZyx, Quaternion, RotationMatrix3, Vector3};

/// A rigid transform: orientation and position of a child frame expressed
/// in its parent frame.
///
/// The rotation columns are the child frame's axes; the origin is where
/// the child frame sits. `as_coordinate_system` hands both back in the
/// order host APIs use: origin, then x, y, z axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3 {
    rotation: RotationMatrix3,
    origin: Vector3,
}

impl Transform3 {
    /// The identity transform: child frame coincident with its parent.
    pub fn identity() -> Self {
        Self {
            rotation: RotationMatrix3::identity(),
            origin: Vector3::zeros(),
        }
    }

    /// Creates a transform from a rotation and an origin.
    pub fn new(rotation: RotationMatrix3, origin: Vector3) -> Self {
        Self { rotation, origin }
    }

    /// Creates a pure translation (identity rotation).
    pub fn translation(origin: Vector3) -> Self {
        Self::new(RotationMatrix3::identity(), origin)
    }

    /// Creates a transform from an origin and three frame axes.
    ///
    /// The axes become the columns of the rotation. Orthonormality is the
    /// caller's precondition, as everywhere in the decomposition path.
    pub fn from_coordinate_system(
        origin: Vector3,
        x_axis: &Vector3,
        y_axis: &Vector3,
        z_axis: &Vector3,
    ) -> Self {
        Self::new(RotationMatrix3::from_columns(x_axis, y_axis, z_axis), origin)
    }

    /// Returns the rotation part.
    pub fn rotation(&self) -> RotationMatrix3 {
        self.rotation
    }

    /// Returns the origin.
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Returns `(origin, x_axis, y_axis, z_axis)`.
    ///
    /// The same tuple shape host transform APIs return, and the direct
    /// input to [`Quaternion::from_basis`] and [`EulerZyx::from_basis`].
    pub fn as_coordinate_system(&self) -> (Vector3, Vector3, Vector3, Vector3) {
        let (x, y, z) = self.rotation.columns();
        (self.origin, x, y, z)
    }

    /// Composes this transform with a child transform.
    ///
    /// `a.compose(&b)` maps a point through `b` first, then `a` -- the
    /// order in which a grandchild's local transform passes through its
    /// parent on the way to the world frame.
    pub fn compose(&self, child: &Self) -> Self {
        Self::new(
            self.rotation * child.rotation,
            self.rotation * child.origin + self.origin,
        )
    }

    /// Maps a point from the child frame into the parent frame.
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.rotation * point + self.origin
    }

    /// Decomposes the rotation part into a unit quaternion.
    pub fn to_quaternion(&self) -> Quaternion {
        self.rotation.to_quaternion()
    }

    /// Decomposes the rotation part into intrinsic ZYX Euler angles.
    pub fn to_euler_zyx(&self) -> EulerZyx {
        self.rotation.to_euler_zyx()
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}
