//! Vertex type for the arena tree model.

use crate::model::tree::TreeIndex;
use std::ops::Deref;

/// During construction and after detaching, a vertex has no parent set.
pub(crate) const NO_PARENT: TreeIndex = usize::MAX;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// A vertex (clade) in a phylogenetic tree or taxonomy.
///
/// Vertices live in the tree's arena and reference each other by
/// [TreeIndex]; the parent link is a plain index rather than an owning
/// reference, so parent and child lists cannot form ownership cycles.
///
/// A vertex with no children is a *leaf*; otherwise it is *internal*. Any
/// vertex may carry a name (taxon label) and a branch length; both are
/// optional.
///
/// # Invariants
/// - `branch_length`, if present, is non-negative (enforced by
///   [BranchLength])
/// - `parent` is `NO_PARENT` only while the vertex is detached (or is the
///   root); structural mutation goes through [Tree](crate::model::Tree) to
///   keep parent and child lists consistent
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Index of this vertex in the tree arena
    index: TreeIndex,
    /// Index of the parent vertex, or `NO_PARENT`
    parent: TreeIndex,
    /// Indices of child vertices, in insertion order
    children: Vec<TreeIndex>,
    /// Taxon label; `None` for anonymous vertices
    name: Option<String>,
    /// Distance to parent (optional, non-negative if present)
    branch_length: Option<BranchLength>,
}

impl Vertex {
    /// Creates a new detached vertex with no children.
    pub(crate) fn new(
        index: TreeIndex,
        name: Option<String>,
        branch_length: Option<BranchLength>,
    ) -> Self {
        Vertex {
            index,
            parent: NO_PARENT,
            children: Vec::new(),
            name,
            branch_length,
        }
    }

    /// Returns the index of this vertex in the arena.
    pub fn index(&self) -> TreeIndex {
        self.index
    }

    /// Returns this vertex's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets or clears this vertex's name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Returns the branch length to the parent, if set.
    pub fn branch_length(&self) -> Option<BranchLength> {
        self.branch_length
    }

    /// Returns `true` if this vertex carries a zero-length branch.
    ///
    /// A zero-length branch is the structural marker for a synthetic vertex
    /// inserted purely to host a label.
    pub fn has_zero_branch(&self) -> bool {
        matches!(self.branch_length, Some(bl) if bl.is_zero())
    }

    /// Returns the indices of this vertex's children.
    pub fn children(&self) -> &[TreeIndex] {
        &self.children
    }

    /// Returns `true` if this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the index of the parent, or `None` if detached or root.
    pub fn parent_index(&self) -> Option<TreeIndex> {
        if self.parent == NO_PARENT {
            None
        } else {
            Some(self.parent)
        }
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent != NO_PARENT
    }

    pub(crate) fn set_parent(&mut self, parent: TreeIndex) {
        self.parent = parent;
    }

    pub(crate) fn clear_parent(&mut self) {
        self.parent = NO_PARENT;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<TreeIndex> {
        &mut self.children
    }
}

// =#========================================================================#=
// BRANCH LENGTH
// =#========================================================================#=
/// Branch length in a phylogenetic tree, enforced non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchLength(f64);

impl BranchLength {
    /// The zero-length structural marker.
    pub const ZERO: BranchLength = BranchLength(0.0);

    /// Creates a new branch length.
    ///
    /// # Panics
    /// Panics if `length` is negative or not finite.
    pub fn new(length: f64) -> Self {
        assert!(
            length >= 0.0,
            "Branch length must be non-negative, got {}",
            length
        );
        assert!(length.is_finite(), "Branch length must be finite, got {}", length);
        BranchLength(length)
    }

    /// Returns `true` if this branch length is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Deref for BranchLength {
    type Target = f64;
    fn deref(&self) -> &f64 {
        &self.0
    }
}
