//! Pose reports for robot-controller consumption.
//!
//! The last leg of the pipeline: take a located occurrence, decompose its
//! world transform, and present the result the way an integrator pastes it
//! into a controller -- translation in millimeters, a unit quaternion, the
//! Euler ZYX triple in degrees, and the ABB-style pose literal
//! `[[tx, ty, tz], [qw, qx, qy, qz]]`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`units`] | [`LengthUnit`], document-unit to millimeter conversion |
//! | [`pose`] | [`PoseReport`] assembly and rendering, [`format_abb_pose`](pose::format_abb_pose) |
//! | [`errors`] | [`ReportError`] |
//!
//! The `toolframe` binary in this crate wires these to a JSON assembly
//! document on the command line.

pub mod errors;
pub mod pose;
pub mod units;

pub use errors::{ReportError, ReportResult};
pub use pose::{format_abb_pose, PoseReport};
pub use units::LengthUnit;
