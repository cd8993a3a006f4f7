//! Occurrence search by component name.
//!
//! Mirrors how an operator asks for the tool frame: an exact component name
//! first ("TCP"), and when nothing matches exactly, any component whose
//! name contains the target case-insensitively ("tcp_v2", "Tcp-probe").
//! Both lists are returned so the caller can tell a clean hit from a
//! fallback guess and surface ambiguity to the user.

use crate::occurrence::{Assembly, OccurrenceId};

/// The two tiers of name matches for one search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Occurrences whose component name equals the target exactly.
    pub exact: Vec<OccurrenceId>,
    /// Occurrences whose lowercased name contains the lowercased target.
    pub fallback: Vec<OccurrenceId>,
}

impl SearchOutcome {
    /// The matches to act on: exact if any exist, otherwise fallback.
    pub fn best(&self) -> &[OccurrenceId] {
        if self.exact.is_empty() {
            &self.fallback
        } else {
            &self.exact
        }
    }

    /// True when neither tier matched.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.fallback.is_empty()
    }

    /// True when more than one candidate is in play.
    pub fn is_ambiguous(&self) -> bool {
        self.best().len() > 1
    }

    /// The first candidate in document order, if any.
    ///
    /// When the outcome is ambiguous this is the occurrence the original
    /// tool would have used after warning the user.
    pub fn resolve(&self) -> Option<OccurrenceId> {
        self.best().first().copied()
    }
}

/// Collects every occurrence matching a component name.
///
/// Walks all occurrences in pre-order (the root is not an occurrence and
/// never matches). Exact comparison is case-sensitive; the fallback tier
/// is a case-insensitive substring test.
///
/// ```
/// use toolframe_assembly::{Assembly, Transform3, search::find_by_name};
///
/// let mut assembly = Assembly::new("Root");
/// assembly.add_child(assembly.root(), "TCP", Transform3::identity());
/// assembly.add_child(assembly.root(), "tcp_spare", Transform3::identity());
///
/// let outcome = find_by_name(&assembly, "TCP");
/// assert_eq!(outcome.exact.len(), 1);
/// assert_eq!(outcome.fallback.len(), 1);
/// assert_eq!(outcome.best(), &outcome.exact[..]);
/// ```
pub fn find_by_name(assembly: &Assembly, name: &str) -> SearchOutcome {
    let needle = name.to_lowercase();
    let mut outcome = SearchOutcome::default();

    for id in assembly.all_occurrences() {
        let occ_name = &assembly.occurrence(id).name;
        if occ_name == name {
            outcome.exact.push(id);
        } else if occ_name.to_lowercase().contains(&needle) {
            outcome.fallback.push(id);
        }
    }
    outcome
}
