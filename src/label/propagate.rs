//! Ancestor label propagation.
//!
//! For every matched phylogeny leaf, the taxonomy ancestors of its taxon are
//! visited nearest first. Each named ancestor defines a *group*: the set of
//! phylogeny leaves whose taxa fall under it. The group's name is placed on
//! the common ancestor of those leaves in the phylogeny; if that vertex
//! already carries a different name, a synthetic vertex is inserted by
//! [surgery](crate::label::surgery) to host the new one.

use crate::label::correspondence::LeafCorrespondence;
use crate::label::surgery::split_labeled_vertex;
use crate::model::{NameIndex, Tree, TreeError};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Propagates taxonomy group names onto the phylogeny.
///
/// Leaves are visited in pre-order and each taxon's ancestors nearest first,
/// so labels nest correctly: a genus is always placed before the family that
/// contains it. A label already processed (tracked by name in the returned
/// set) is never placed twice.
///
/// # Arguments
/// * `phylogeny_index` - name index over `phylogeny`; kept current across
///   all mutations this pass performs
/// * `taxonomy_index` - name index over the (possibly subsetted) taxonomy
///
/// # Returns
/// The set of processed names, sorted, covering both leaf names and placed
/// group names.
pub fn propagate(
    phylogeny: &mut Tree,
    taxonomy: &Tree,
    correspondence: &LeafCorrespondence,
    phylogeny_index: &mut NameIndex,
    taxonomy_index: &NameIndex,
) -> Result<BTreeSet<String>, TreeError> {
    let mut done: BTreeSet<String> = BTreeSet::new();

    for leaf in phylogeny.terminals() {
        let Some(leaf_name) = phylogeny[leaf].name().map(str::to_owned) else {
            continue;
        };
        if done.contains(&leaf_name) {
            continue;
        }
        let Some(taxon) = correspondence.taxon_of(leaf) else {
            trace!("leaf '{leaf_name}' has no taxonomy match; skipping");
            continue;
        };

        for ancestor in taxonomy.ancestors_of(taxon) {
            let Some(group_name) = taxonomy[ancestor].name() else {
                continue;
            };
            if done.contains(group_name) {
                continue;
            }

            // Phylogeny leaves whose taxa fall under this taxonomy group.
            let fellows: Vec<_> = taxonomy
                .pre_order_from(ancestor)
                .filter_map(|v| correspondence.leaf_of(v.index()))
                .collect();
            let group_root = phylogeny.common_ancestor(&fellows)?;

            let existing = phylogeny[group_root].name().map(str::to_owned);
            match existing.as_deref() {
                None => {
                    phylogeny[group_root].set_name(Some(group_name.to_owned()));
                    phylogeny_index.record(group_name, group_root);
                    trace!("labeled vertex {group_root} as '{group_name}'");
                }
                Some(name) if name == group_name => {
                    debug!("'{group_name}' already placed at vertex {group_root}");
                }
                Some(_) => {
                    let inserted = split_labeled_vertex(
                        phylogeny,
                        taxonomy,
                        taxonomy_index,
                        group_root,
                        ancestor,
                    );
                    phylogeny_index.rebuild(phylogeny);
                    trace!("inserted vertex {inserted} for '{group_name}'");
                }
            }

            done.insert(group_name.to_owned());
        }

        done.insert(leaf_name);
    }

    Ok(done)
}
