//! Phylolabel labels the inner vertices of a phylogenetic tree with the
//! higher-order taxon names of a reference taxonomy.
//!
//! Phylogenies produced by tree inference carry names only on their leaves.
//! Given a second tree describing the taxonomic classification of those
//! species (genus, family, order, ...), this crate transfers the group names
//! onto the inner vertices of the phylogeny:
//! - Leaves are matched by name after normalization (underscores become
//!   spaces).
//! - Each taxonomic group is placed on the common ancestor of its members'
//!   leaves, nearest groups first.
//! - Where two group names land on the same vertex, a synthetic zero-length
//!   branch vertex is inserted so both names keep a vertex of their own.
//! - The taxonomy can be restricted to one named clade before matching.
//!
//! Core modules:
//! - [model]: arena-pattern rooted n-ary [Tree](model::Tree) with traversal
//!   and ancestor queries
//! - [newick] and [nexus]: tree parsing and writing
//! - [label]: the labeling pipeline ([label_tree])
//!
//! # Usage patterns
//! 1. [label_newick_str] labels one Newick phylogeny string against a Newick
//!    taxonomy string.
//! 2. For file input, format selection, and access to the trees themselves,
//!    parse via [formats::TreeFormat] (or [newick]/[nexus] directly) and
//!    call [label_tree].
//!
//! ## Example
//! ```
//! use phylolabel::label_newick_str;
//!
//! let labeled = label_newick_str(
//!     "((Homo_sapiens,Homo_erectus),Pan_troglodytes);",
//!     "((Homo_sapiens,Homo_erectus)Homo,Pan_troglodytes)Hominidae;",
//!     None,
//! )
//! .unwrap();
//! assert_eq!(
//!     labeled,
//!     "((Homo_sapiens,Homo_erectus)Homo,Pan_troglodytes)Hominidae;"
//! );
//! ```

pub mod formats;
pub mod label;
pub mod model;
pub mod newick;
pub mod nexus;
pub mod parser;

pub use label::{label_tree, LabelError};
pub use model::{Tree, TreeError};

/// Labels a Newick phylogeny string against a Newick taxonomy string and
/// returns the labeled phylogeny as a Newick string.
///
/// # Arguments
/// * `tax_root` - optional taxonomy clade name to restrict matching to
///
/// # Errors
/// Returns [LabelError::Parse] if either input is not valid Newick.
pub fn label_newick_str(
    phylogeny: &str,
    taxonomy: &str,
    tax_root: Option<&str>,
) -> Result<String, LabelError> {
    let mut phylogeny = newick::parse_str(phylogeny)?;
    let mut taxonomy = newick::parse_str(taxonomy)?;
    label_tree(&mut phylogeny, &mut taxonomy, tax_root)?;
    Ok(newick::to_newick(&phylogeny))
}
