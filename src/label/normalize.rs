//! Label normalization.
//!
//! Phylogeny files commonly carry underscores where the taxonomy carries
//! spaces (`Homo_sapiens` vs `Homo sapiens`). Both trees are normalized to
//! the space form before any matching happens, so every later comparison and
//! index lookup works on a single canonical spelling.

use crate::model::Tree;

/// Returns the canonical form of a taxon name: underscores become spaces.
///
/// Idempotent; a name already in canonical form is returned unchanged.
///
/// # Example
/// ```
/// use phylolabel::label::normalize::normalize_name;
///
/// assert_eq!(normalize_name("Homo_sapiens"), "Homo sapiens");
/// assert_eq!(normalize_name("Homo sapiens"), "Homo sapiens");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Normalizes every vertex name in `tree` in place.
pub fn normalize_labels(tree: &mut Tree) {
    for vertex in tree.vertices_mut() {
        if let Some(name) = vertex.name() {
            if name.contains('_') {
                let normalized = normalize_name(name);
                vertex.set_name(Some(normalized));
            }
        }
    }
}
