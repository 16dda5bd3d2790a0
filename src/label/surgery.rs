//! Tree surgery for label conflicts.
//!
//! When propagation wants to label a phylogeny vertex that already carries a
//! different name, the two names have to end up on two distinct vertices at
//! the same topological position. This module inserts a synthetic vertex
//! with a zero-length branch to host the new name, placing it *inside* or
//! *outside* the existing label chain depending on how the two names relate
//! in the taxonomy.

use crate::model::{BranchLength, NameIndex, Tree, TreeIndex};
use std::collections::HashSet;
use tracing::debug;

/// Inserts a synthetic zero-branch vertex carrying `new_group`'s name at the
/// position of `group_root`, which already carries a conflicting name.
///
/// `group_root` and any zero-branch named ancestors stacked directly above
/// it form the *label chain*: a run of co-located labels produced by earlier
/// surgeries. Placement:
///
/// * **Inner** - if some chain label is an ancestor of `new_group` in the
///   taxonomy, the new vertex goes directly below that chain vertex,
///   adopting all its children. Example: `Hominidae` is already placed and
///   `Homo` arrives; `Homo` belongs inside `Hominidae`.
/// * **Outer** - otherwise the new vertex wraps the whole chain from
///   outside, taking the chain top's place in its parent (or becoming the
///   new root).
///
/// # Arguments
/// * `group_root` - phylogeny vertex already carrying a conflicting name
/// * `new_group` - taxonomy vertex whose name is being placed
///
/// # Returns
/// The index of the inserted vertex. The caller must rebuild any
/// [NameIndex] over the phylogeny afterwards.
pub(crate) fn split_labeled_vertex(
    phylogeny: &mut Tree,
    taxonomy: &Tree,
    taxonomy_index: &NameIndex,
    group_root: TreeIndex,
    new_group: TreeIndex,
) -> TreeIndex {
    // The label chain, bottom-up: each entry pairs the phylogeny vertex with
    // the taxonomy vertex of the same name (None if the name is unknown to
    // the taxonomy, keeping chain positions intact).
    let mut chain: Vec<(TreeIndex, Option<TreeIndex>)> = Vec::new();
    let mut current = group_root;
    loop {
        let taxon = phylogeny[current].name().and_then(|n| taxonomy_index.find(n));
        chain.push((current, taxon));

        match phylogeny[current].parent_index() {
            Some(parent)
                if phylogeny[parent].has_zero_branch() && phylogeny[parent].name().is_some() =>
            {
                current = parent;
            }
            _ => break,
        }
    }

    let tax_ancestors: HashSet<TreeIndex> =
        taxonomy.ancestors_of(new_group).into_iter().collect();
    let new_name = taxonomy[new_group].name().map(str::to_owned);
    debug_assert!(new_name.is_some(), "surgery requires a named taxonomy group");
    let new_vertex = phylogeny.add_vertex(new_name, Some(BranchLength::ZERO));

    // Inner placement: the lowest chain label that is a taxonomy ancestor of
    // the new group hosts it as a nested clade.
    for &(chain_vertex, taxon) in &chain {
        if let Some(taxon) = taxon {
            if tax_ancestors.contains(&taxon) {
                let children = phylogeny[chain_vertex].children().to_vec();
                for child in children {
                    phylogeny.detach(child);
                    phylogeny.attach(new_vertex, child);
                }
                phylogeny.attach(chain_vertex, new_vertex);
                return new_vertex;
            }
        }
    }

    // Outer placement: wrap the chain from outside, at the chain top.
    let top = chain.last().map(|&(v, _)| v).unwrap_or(group_root);
    debug!(
        "no chain label is an ancestor of '{}'; wrapping the chain from outside",
        phylogeny[new_vertex].name().unwrap_or_default()
    );
    match phylogeny[top].parent_index() {
        Some(parent) => {
            phylogeny.replace_child(parent, top, new_vertex);
            phylogeny.attach(new_vertex, top);
        }
        None => {
            phylogeny.attach(new_vertex, top);
            phylogeny.set_root(new_vertex);
        }
    }
    new_vertex
}
