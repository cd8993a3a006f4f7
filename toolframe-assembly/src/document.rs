//! JSON assembly documents.
//!
//! The host-independent way a design reaches this tool: a nested JSON tree
//! where each node names a component, optionally places it with a
//! coordinate system, and lists its children. A node without a `transform`
//! sits at identity, which keeps hand-written fixtures short.
//!
//! ```json
//! {
//!   "name": "Root",
//!   "children": [
//!     {
//!       "name": "TCP",
//!       "transform": {
//!         "origin": [12.5, 0.0, 30.0],
//!         "x_axis": [0.0, 1.0, 0.0],
//!         "y_axis": [-1.0, 0.0, 0.0],
//!         "z_axis": [0.0, 0.0, 1.0]
//!       }
//!     }
//!   ]
//! }
//! ```

use crate::errors::AssemblyResult;
use crate::occurrence::Assembly;
use crate::transform::Transform3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toolframe_core::Vector3;

/// A coordinate system as a document stores it: origin plus three axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformDoc {
    pub origin: [f64; 3],
    pub x_axis: [f64; 3],
    pub y_axis: [f64; 3],
    pub z_axis: [f64; 3],
}

impl TransformDoc {
    /// Converts the stored coordinate system into a [`Transform3`].
    pub fn to_transform(&self) -> Transform3 {
        Transform3::from_coordinate_system(
            Vector3::from_array(self.origin),
            &Vector3::from_array(self.x_axis),
            &Vector3::from_array(self.y_axis),
            &Vector3::from_array(self.z_axis),
        )
    }
}

/// One node of the document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyDoc {
    /// Component name.
    pub name: String,
    /// Placement in the parent frame; identity when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformDoc>,
    /// Child occurrences.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AssemblyDoc>,
}

impl AssemblyDoc {
    /// Parses a document from a JSON string.
    pub fn from_json_str(json: &str) -> AssemblyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a document from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AssemblyResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds the occurrence tree this document describes.
    ///
    /// The document root becomes the assembly root; its own `transform`,
    /// if any, is ignored -- the root defines the world frame.
    pub fn to_assembly(&self) -> Assembly {
        let mut assembly = Assembly::new(self.name.clone());

        let mut stack: Vec<(&AssemblyDoc, crate::occurrence::OccurrenceId)> = self
            .children
            .iter()
            .rev()
            .map(|child| (child, assembly.root()))
            .collect();

        while let Some((doc, parent)) = stack.pop() {
            let transform = doc
                .transform
                .as_ref()
                .map(TransformDoc::to_transform)
                .unwrap_or_else(Transform3::identity);
            let id = assembly.add_child(parent, doc.name.clone(), transform);

            for child in doc.children.iter().rev() {
                stack.push((child, id));
            }
        }
        assembly
    }
}
