//! Named-occurrence assembly tree for pose reporting.
//!
//! A CAD design is a tree of occurrences: named instances of components,
//! each placed in its parent by a rigid transform. This crate models that
//! tree explicitly so a pose tool can do what it does against a live host
//! document -- walk every occurrence, find the ones with a given component
//! name, and compose local transforms into a world pose -- without a host
//! API in the loop.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transform`] | [`Transform3`], a rotation plus origin, with composition |
//! | [`occurrence`] | [`Assembly`] arena tree, traversal, world transforms, paths |
//! | [`search`] | [`find_by_name`](search::find_by_name) with exact and fallback matching |
//! | [`document`] | JSON document loading ([`AssemblyDoc`]) |
//! | [`errors`] | [`AssemblyError`] |
//!
//! # Quick Start
//!
//! ```
//! use toolframe_assembly::{Assembly, Transform3, search};
//! use toolframe_core::Vector3;
//!
//! let mut assembly = Assembly::new("Root");
//! let fixture = assembly.add_child(
//!     assembly.root(),
//!     "Fixture",
//!     Transform3::translation(Vector3::new(10.0, 0.0, 0.0)),
//! );
//! let tcp = assembly.add_child(
//!     fixture,
//!     "TCP",
//!     Transform3::translation(Vector3::new(0.0, 0.0, 5.0)),
//! );
//!
//! let outcome = search::find_by_name(&assembly, "TCP");
//! assert_eq!(outcome.best(), &[tcp]);
//!
//! let world = assembly.world_transform(tcp);
//! assert_eq!(world.origin(), Vector3::new(10.0, 0.0, 5.0));
//! assert_eq!(assembly.path(tcp), "Root/Fixture/TCP");
//! ```

pub mod document;
pub mod errors;
pub mod occurrence;
pub mod search;
pub mod transform;

pub use document::{AssemblyDoc, TransformDoc};
pub use errors::{AssemblyError, AssemblyResult};
pub use occurrence::{Assembly, Occurrence, OccurrenceId};
pub use search::SearchOutcome;
pub use transform::Transform3;
