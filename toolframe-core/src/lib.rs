//! Core math for assembly-to-robot pose decomposition.
//!
//! This crate provides the numeric foundation for reporting the pose of an
//! assembly occurrence in the forms a robot controller consumes: a unit
//! quaternion and an intrinsic ZYX Euler-angle triple, both derived from the
//! occurrence's orthonormal coordinate frame.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`], the working representations of frame axes and orientation |
//! | [`rotation`] | [`Quaternion`] and [`EulerZyx`], the two decompositions of an orientation |
//! | [`constants`] | Angle and unit-conversion constants |
//! | [`errors`] | [`FrameError`] for the checked accessor surface |
//!
//! # Quick Start
//!
//! ```
//! use toolframe_core::{EulerZyx, Quaternion, Vector3};
//!
//! // The coordinate frame of an occurrence rotated 90 degrees about Z
//! let x_axis = Vector3::new(0.0, 1.0, 0.0);
//! let y_axis = Vector3::new(-1.0, 0.0, 0.0);
//! let z_axis = Vector3::new(0.0, 0.0, 1.0);
//!
//! let q = Quaternion::from_basis(&x_axis, &y_axis, &z_axis);
//! let e = EulerZyx::from_basis(&x_axis, &y_axis, &z_axis);
//!
//! assert!((q.norm() - 1.0).abs() < 1e-12);
//! assert!((e.rz - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! # Preconditions
//!
//! The decomposition routines assume the three axes form a right-handed
//! orthonormal basis (columns of a proper rotation matrix). This is a
//! documented precondition, not a runtime check: a malformed basis yields a
//! well-defined but physically meaningless result, never a panic. Use
//! [`RotationMatrix3::is_rotation_matrix`] when validation is wanted.

pub mod constants;
pub mod errors;
pub mod matrix;
pub mod rotation;

pub use errors::{FrameError, FrameResult, MathErrorKind};
pub use matrix::{RotationMatrix3, Vector3};
pub use rotation::{EulerZyx, Quaternion};
