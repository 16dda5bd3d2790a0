//! Name index for O(1) "find vertex by name" queries.

use crate::model::tree::{Tree, TreeIndex};
use std::collections::{HashMap, HashSet};

/// Maps normalized vertex names to the vertex carrying that name.
///
/// The index is built by pre-order traversal from the root, so only
/// reachable vertices are indexed and, for homonyms, the *first-encountered*
/// vertex wins — the same silent fallback the original tool had, except that
/// duplicates are tracked so callers can flag them.
///
/// The index is a snapshot: after any structural change to the tree it must
/// be rebuilt with [NameIndex::rebuild], or lookups may return stale
/// results.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    /// Map from name to the first vertex encountered with that name
    map: HashMap<String, TreeIndex>,
    /// Names that occurred on more than one reachable vertex
    duplicates: HashSet<String>,
}

impl NameIndex {
    /// Builds a name index over the reachable vertices of `tree`.
    pub fn build(tree: &Tree) -> Self {
        let mut index = NameIndex::default();
        index.rebuild(tree);
        index
    }

    /// Discards all entries and re-indexes the reachable vertices of `tree`.
    pub fn rebuild(&mut self, tree: &Tree) {
        self.map.clear();
        self.duplicates.clear();
        for vertex in tree.pre_order() {
            if let Some(name) = vertex.name() {
                self.record(name, vertex.index());
            }
        }
    }

    /// Records a single name assignment, keeping the first entry on
    /// collision. Used for incremental updates when a vertex is labeled
    /// without any structural change.
    pub fn record(&mut self, name: &str, index: TreeIndex) {
        if self.map.contains_key(name) {
            self.duplicates.insert(name.to_string());
        } else {
            self.map.insert(name.to_string(), index);
        }
    }

    /// Returns the first-encountered vertex carrying `name`, if any.
    pub fn find(&self, name: &str) -> Option<TreeIndex> {
        self.map.get(name).copied()
    }

    /// Returns `true` if `name` occurred on more than one vertex (homonym).
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.duplicates.contains(name)
    }

    /// Returns the number of distinct indexed names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no names are indexed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
