//! The assembly occurrence tree.
//!
//! Occurrences are stored in an arena (`Vec`) and linked by index, so each
//! node can hold a non-owning back-reference to its parent without
//! reference counting. Ids are only handed out by the owning [`Assembly`],
//! which keeps them valid for its lifetime; nodes are never removed.

use crate::transform::Transform3;

/// Handle to an occurrence within its [`Assembly`].
///
/// Ids are created by [`Assembly::new`] and [`Assembly::add_child`] and are
/// only meaningful for the assembly that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OccurrenceId(usize);

/// One node of the assembly tree: a named component instance placed in its
/// parent's frame by a local transform.
#[derive(Debug, Clone)]
pub struct Occurrence {
    /// Component name, the key occurrence search matches on.
    pub name: String,
    /// Placement in the parent occurrence's frame.
    pub transform: Transform3,
    /// Back-reference to the parent; `None` only for the root.
    pub parent: Option<OccurrenceId>,
    /// Child occurrences in insertion order.
    pub children: Vec<OccurrenceId>,
}

/// A design's occurrence tree.
///
/// The root represents the top-level component and sits at the world frame
/// (identity transform). Every other occurrence is added under an existing
/// parent with a local transform.
#[derive(Debug, Clone)]
pub struct Assembly {
    nodes: Vec<Occurrence>,
}

impl Assembly {
    /// Creates an assembly holding only the named top-level component.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Occurrence {
                name: root_name.into(),
                transform: Transform3::identity(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Returns the id of the top-level component.
    pub fn root(&self) -> OccurrenceId {
        OccurrenceId(0)
    }

    /// Adds an occurrence under `parent` and returns its id.
    ///
    /// Panics if `parent` came from a different assembly and is out of
    /// range; ids issued by this assembly are always valid.
    pub fn add_child(
        &mut self,
        parent: OccurrenceId,
        name: impl Into<String>,
        transform: Transform3,
    ) -> OccurrenceId {
        let id = OccurrenceId(self.nodes.len());
        self.nodes.push(Occurrence {
            name: name.into(),
            transform,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Returns the occurrence behind an id.
    pub fn occurrence(&self, id: OccurrenceId) -> &Occurrence {
        &self.nodes[id.0]
    }

    /// Number of occurrences including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the assembly holds no occurrences.
    ///
    /// Never true for an assembly built through [`new`](Self::new), which
    /// always seeds the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All occurrences below the root in pre-order.
    ///
    /// The root itself is excluded: it is the reference frame the report
    /// is expressed in, not a placeable occurrence. This mirrors how host
    /// APIs enumerate a design's occurrences.
    pub fn all_occurrences(&self) -> Vec<OccurrenceId> {
        let mut result = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut stack: Vec<OccurrenceId> = Vec::new();

        for &child in self.nodes[0].children.iter().rev() {
            stack.push(child);
        }
        while let Some(id) = stack.pop() {
            result.push(id);
            for &child in self.nodes[id.0].children.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// The world transform of an occurrence: the composition of every
    /// local transform on the path from the root down to it.
    pub fn world_transform(&self, id: OccurrenceId) -> Transform3 {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            chain.push(parent);
            current = parent;
        }

        let mut world = Transform3::identity();
        for link in chain.iter().rev() {
            world = world.compose(&self.nodes[link.0].transform);
        }
        world
    }

    /// Readable path like `Root/Asm/SubAsm/TCP`, built from the parent
    /// back-links.
    pub fn path(&self, id: OccurrenceId) -> String {
        let mut parts = vec![self.nodes[id.0].name.as_str()];
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            parts.push(self.nodes[parent.0].name.as_str());
            current = parent;
        }
        parts.reverse();
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolframe_core::Vector3;

    fn nested() -> (Assembly, OccurrenceId, OccurrenceId, OccurrenceId) {
        let mut assembly = Assembly::new("Root");
        let arm = assembly.add_child(
            assembly.root(),
            "Arm",
            Transform3::translation(Vector3::new(1.0, 0.0, 0.0)),
        );
        let wrist = assembly.add_child(
            arm,
            "Wrist",
            Transform3::translation(Vector3::new(0.0, 2.0, 0.0)),
        );
        let tcp = assembly.add_child(
            wrist,
            "TCP",
            Transform3::translation(Vector3::new(0.0, 0.0, 3.0)),
        );
        (assembly, arm, wrist, tcp)
    }

    #[test]
    fn test_root_only() {
        let assembly = Assembly::new("Root");
        assert_eq!(assembly.len(), 1);
        assert!(!assembly.is_empty());
        assert_eq!(assembly.occurrence(assembly.root()).name, "Root");
        assert!(assembly.occurrence(assembly.root()).parent.is_none());
        assert!(assembly.all_occurrences().is_empty());
    }

    #[test]
    fn test_add_child_links_parent() {
        let (assembly, arm, _, tcp) = nested();
        assert_eq!(assembly.occurrence(arm).parent, Some(assembly.root()));
        assert_eq!(assembly.occurrence(tcp).name, "TCP");
        assert_eq!(assembly.len(), 4);
    }

    #[test]
    fn test_all_occurrences_preorder() {
        let mut assembly = Assembly::new("Root");
        let a = assembly.add_child(assembly.root(), "A", Transform3::identity());
        let a1 = assembly.add_child(a, "A1", Transform3::identity());
        let a2 = assembly.add_child(a, "A2", Transform3::identity());
        let b = assembly.add_child(assembly.root(), "B", Transform3::identity());

        assert_eq!(assembly.all_occurrences(), vec![a, a1, a2, b]);
    }

    #[test]
    fn test_world_transform_accumulates() {
        let (assembly, _, _, tcp) = nested();
        let world = assembly.world_transform(tcp);
        assert_eq!(world.origin(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_world_transform_of_root_is_identity() {
        let (assembly, ..) = nested();
        assert_eq!(
            assembly.world_transform(assembly.root()),
            Transform3::identity()
        );
    }

    #[test]
    fn test_path() {
        let (assembly, arm, wrist, tcp) = nested();
        assert_eq!(assembly.path(assembly.root()), "Root");
        assert_eq!(assembly.path(arm), "Root/Arm");
        assert_eq!(assembly.path(wrist), "Root/Arm/Wrist");
        assert_eq!(assembly.path(tcp), "Root/Arm/Wrist/TCP");
    }
}
