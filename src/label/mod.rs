//! Labeling of higher-order taxa in a phylogeny from a reference taxonomy.
//!
//! The pipeline, run by [label_tree]:
//! 1. Normalize labels in both trees (underscores to spaces)
//! 2. Optionally subset the taxonomy to a named clade
//! 3. Match phylogeny leaves to taxonomy vertices by name
//! 4. Propagate taxonomy group names onto phylogeny ancestors, inserting
//!    synthetic zero-branch vertices where names collide

pub mod correspondence;
pub mod normalize;
pub mod propagate;
mod surgery;

pub use correspondence::LeafCorrespondence;
pub use propagate::propagate;

use crate::label::normalize::{normalize_labels, normalize_name};
use crate::model::{NameIndex, Tree, TreeError};
use crate::parser::ParseError;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while labeling a phylogeny.
#[derive(Debug, Error)]
pub enum LabelError {
    /// An input tree could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A tree query failed; indicates an internal invariant violation.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Labels the inner vertices of `phylogeny` with the higher-order taxon
/// names of `taxonomy`.
///
/// Both trees are normalized in place. If `tax_root` names a taxonomy
/// vertex, only the clade below it is used; an unknown name falls back to
/// the full taxonomy with a warning.
///
/// # Returns
/// The sorted set of processed names (matched leaves and placed groups).
///
/// # Example
/// ```
/// use phylolabel::label::label_tree;
/// use phylolabel::newick;
///
/// let mut phylogeny = newick::parse_str("((Homo_sapiens,Homo_erectus),Pan_troglodytes);")?;
/// let mut taxonomy =
///     newick::parse_str("((Homo_sapiens,Homo_erectus)Homo,Pan_troglodytes)Hominidae;")?;
///
/// label_tree(&mut phylogeny, &mut taxonomy, None)?;
///
/// assert_eq!(
///     newick::to_newick(&phylogeny),
///     "((Homo_sapiens,Homo_erectus)Homo,Pan_troglodytes)Hominidae;"
/// );
/// # Ok::<(), phylolabel::label::LabelError>(())
/// ```
pub fn label_tree(
    phylogeny: &mut Tree,
    taxonomy: &mut Tree,
    tax_root: Option<&str>,
) -> Result<BTreeSet<String>, LabelError> {
    normalize_labels(phylogeny);
    normalize_labels(taxonomy);

    let mut taxonomy_index = NameIndex::build(taxonomy);

    if let Some(root_name) = tax_root {
        let root_name = normalize_name(root_name);
        match taxonomy_index.find(&root_name) {
            Some(vertex) => {
                if taxonomy_index.is_ambiguous(&root_name) {
                    warn!("taxonomy contains '{root_name}' more than once; using first occurrence");
                }
                taxonomy.detach(vertex);
                taxonomy.set_root(vertex);
                taxonomy_index.rebuild(taxonomy);
                info!("subsetted taxonomy to clade '{root_name}'");
            }
            None => {
                warn!("taxonomy root '{root_name}' not found; using the full taxonomy");
            }
        }
    }

    let mut phylogeny_index = NameIndex::build(phylogeny);
    let correspondence = LeafCorrespondence::build(phylogeny, &taxonomy_index);
    info!(
        "matched {} of {} phylogeny leaves against the taxonomy",
        correspondence.len(),
        phylogeny.num_leaves()
    );

    let done = propagate(
        phylogeny,
        taxonomy,
        &correspondence,
        &mut phylogeny_index,
        &taxonomy_index,
    )?;
    Ok(done)
}
