//! Leaf correspondence between phylogeny and taxonomy.

use crate::model::{NameIndex, Tree, TreeIndex};
use std::collections::HashMap;
use tracing::warn;

/// Bidirectional map between phylogeny leaves and the taxonomy vertices
/// carrying the same (normalized) name.
///
/// Only phylogeny leaves participate: inner phylogeny vertices are what the
/// labeling pass *produces*, not what it matches on. A leaf whose name is
/// missing from the taxonomy simply has no entry; it stays in the phylogeny
/// untouched and is skipped during propagation.
#[derive(Debug, Default)]
pub struct LeafCorrespondence {
    phylo_to_tax: HashMap<TreeIndex, TreeIndex>,
    tax_to_phylo: HashMap<TreeIndex, TreeIndex>,
}

impl LeafCorrespondence {
    /// Builds the correspondence over the named leaves of `phylogeny`.
    ///
    /// Name lookups go through `taxonomy_index`, which must be built over
    /// the (possibly subsetted) `taxonomy`. Homonymous taxonomy names
    /// resolve to the first pre-order occurrence and are reported with a
    /// warning.
    pub fn build(phylogeny: &Tree, taxonomy_index: &NameIndex) -> Self {
        let mut correspondence = LeafCorrespondence::default();

        for leaf in phylogeny.terminals() {
            let Some(name) = phylogeny[leaf].name() else {
                continue;
            };
            let Some(tax_vertex) = taxonomy_index.find(name) else {
                continue;
            };
            if taxonomy_index.is_ambiguous(name) {
                warn!("taxonomy contains '{name}' more than once; using first occurrence");
            }
            correspondence.phylo_to_tax.insert(leaf, tax_vertex);
            correspondence.tax_to_phylo.insert(tax_vertex, leaf);
        }

        correspondence
    }

    /// Returns the taxonomy vertex matching the given phylogeny leaf.
    pub fn taxon_of(&self, leaf: TreeIndex) -> Option<TreeIndex> {
        self.phylo_to_tax.get(&leaf).copied()
    }

    /// Returns the phylogeny leaf matching the given taxonomy vertex.
    pub fn leaf_of(&self, taxon: TreeIndex) -> Option<TreeIndex> {
        self.tax_to_phylo.get(&taxon).copied()
    }

    /// Returns the number of matched leaves.
    pub fn len(&self) -> usize {
        self.phylo_to_tax.len()
    }

    /// Returns `true` if no leaf matched any taxonomy vertex.
    pub fn is_empty(&self) -> bool {
        self.phylo_to_tax.is_empty()
    }
}
