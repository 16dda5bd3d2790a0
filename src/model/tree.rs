//! Tree module for phylogeny and taxonomy representation.
//!
//! This module provides the core data structures shared by both input trees:
//! - [Tree]: an n-ary rooted tree using the arena pattern.
//! - [TreeIndex] is used to index vertices.
//!
//! Structural mutation (attach, detach, replace, re-rooting) goes through
//! [Tree] so that the parent back-reference invariant holds after every
//! operation: each reachable non-root vertex's parent is exactly the vertex
//! whose child list contains it.

use crate::model::vertex::{BranchLength, Vertex};
use std::collections::HashMap;
use thiserror::Error;

/// Index of a vertex in a tree (arena).
pub type TreeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: TreeIndex = usize::MAX;

/// Errors raised by tree queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// `common_ancestor` was invoked on an empty vertex set. This indicates
    /// an internal invariant violation in the caller, not bad input.
    #[error("invalid query: common ancestor of an empty vertex set")]
    InvalidQuery,
}

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A rooted n-ary tree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by [TreeIndex].
/// Detached vertices may linger in the arena (for example after subsetting a
/// taxonomy to one of its clades); all traversal-based operations start from
/// the root, so only reachable vertices participate in queries.
///
/// # Construction
/// Vertices are added detached with [Tree::add_vertex] and then connected
/// with [Tree::attach]; bottom-up construction is easiest. Finish by calling
/// [Tree::set_root]. Test validity with [Tree::is_valid].
///
/// # Example
/// ```
/// use phylolabel::model::{BranchLength, Tree};
///
/// // Build ((A:0.2,B:0.2):0.2,C:0.4);
/// let mut tree = Tree::new();
/// let a = tree.add_vertex(Some("A".into()), Some(BranchLength::new(0.2)));
/// let b = tree.add_vertex(Some("B".into()), Some(BranchLength::new(0.2)));
/// let c = tree.add_vertex(Some("C".into()), Some(BranchLength::new(0.4)));
/// let ab = tree.add_vertex(None, Some(BranchLength::new(0.2)));
/// let root = tree.add_vertex(None, None);
///
/// tree.attach(ab, a);
/// tree.attach(ab, b);
/// tree.attach(root, ab);
/// tree.attach(root, c);
/// tree.set_root(root);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.num_leaves(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,
    /// Index of the root of this tree
    root_index: TreeIndex,
}

// ============================================================================
// Construction & Mutation (pub)
// ============================================================================
impl Tree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Tree {
            vertices: Vec::new(),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Creates a new empty tree with capacity for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        Tree {
            vertices: Vec::with_capacity(num_vertices),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds a new detached vertex to the arena, returning its index.
    pub fn add_vertex(
        &mut self,
        name: Option<String>,
        branch_length: Option<BranchLength>,
    ) -> TreeIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, name, branch_length));
        index
    }

    /// Attaches `child` as the last child of `parent`.
    ///
    /// # Panics
    /// Panics (debug builds) if `child` already has a parent; detach first.
    pub fn attach(&mut self, parent: TreeIndex, child: TreeIndex) {
        debug_assert!(
            !self.vertices[child].has_parent(),
            "attach: child {child} already has a parent"
        );
        self.vertices[parent].children_mut().push(child);
        self.vertices[child].set_parent(parent);
    }

    /// Detaches `child` from its parent, if it has one.
    ///
    /// The vertex (and its subtree) stays in the arena but becomes
    /// unreachable from the root until re-attached or made the root.
    pub fn detach(&mut self, child: TreeIndex) {
        if let Some(parent) = self.vertices[child].parent_index() {
            self.vertices[parent].children_mut().retain(|&c| c != child);
            self.vertices[child].clear_parent();
        }
    }

    /// Replaces `old_child` with `new_child` in place in `parent`'s child
    /// list, preserving child order.
    ///
    /// `old_child` is left detached; `new_child` must be detached before the
    /// call.
    pub fn replace_child(&mut self, parent: TreeIndex, old_child: TreeIndex, new_child: TreeIndex) {
        debug_assert!(!self.vertices[new_child].has_parent());
        for c in self.vertices[parent].children_mut() {
            if *c == old_child {
                *c = new_child;
                break;
            }
        }
        self.vertices[old_child].clear_parent();
        self.vertices[new_child].set_parent(parent);
    }

    /// Makes the vertex at `index` the root of this tree.
    ///
    /// The vertex must be detached (have no parent).
    pub fn set_root(&mut self, index: TreeIndex) {
        debug_assert!(!self.vertices[index].has_parent());
        self.root_index = index;
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl Tree {
    /// Returns whether the root of the tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns the index of the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root_index(&self) -> TreeIndex {
        assert!(self.is_root_set(), "tree has no root set");
        self.root_index
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root(&self) -> &Vertex {
        &self.vertices[self.root_index()]
    }

    /// Returns a reference to the vertex at the given index.
    pub fn vertex(&self, index: TreeIndex) -> &Vertex {
        &self.vertices[index]
    }

    /// Returns a mutable reference to the vertex at the given index.
    pub fn vertex_mut(&mut self, index: TreeIndex) -> &mut Vertex {
        &mut self.vertices[index]
    }

    /// Returns a mutable iterator over every vertex in the arena, reachable
    /// or not. Used by bulk transformations such as label normalization.
    pub fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex> {
        self.vertices.iter_mut()
    }

    /// Returns the number of vertices reachable from the root.
    pub fn num_vertices(&self) -> usize {
        self.pre_order().count()
    }

    /// Returns the number of leaves reachable from the root.
    pub fn num_leaves(&self) -> usize {
        self.pre_order().filter(|v| v.is_leaf()).count()
    }
}

impl std::ops::Index<TreeIndex> for Tree {
    type Output = Vertex;

    fn index(&self, index: TreeIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl std::ops::IndexMut<TreeIndex> for Tree {
    fn index_mut(&mut self, index: TreeIndex) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Traversal & Queries (pub)
// ============================================================================
impl Tree {
    /// Returns an iterator over the tree in pre-order (parents before
    /// children, children in insertion order).
    ///
    /// Pre-order is the fixed, reproducible traversal order all queries and
    /// the labeling algorithm rely on.
    pub fn pre_order(&self) -> PreOrderIter<'_> {
        if self.is_root_set() {
            PreOrderIter::new(self, self.root_index)
        } else {
            PreOrderIter::empty(self)
        }
    }

    /// Returns a pre-order iterator over the subtree rooted at `index`
    /// (including `index` itself).
    pub fn pre_order_from(&self, index: TreeIndex) -> PreOrderIter<'_> {
        PreOrderIter::new(self, index)
    }

    /// Returns the leaves of this tree in pre-order.
    pub fn terminals(&self) -> Vec<TreeIndex> {
        self.pre_order()
            .filter(|v| v.is_leaf())
            .map(|v| v.index())
            .collect()
    }

    /// Returns the ancestors of `index`, nearest first, up to and including
    /// the root. Empty for the root itself.
    pub fn ancestors_of(&self, index: TreeIndex) -> Vec<TreeIndex> {
        let mut ancestors = Vec::new();
        let mut current = index;
        while let Some(parent) = self.vertices[current].parent_index() {
            ancestors.push(parent);
            current = parent;
        }
        ancestors
    }

    /// Returns the unique lowest vertex that is an ancestor of (or equal to)
    /// every vertex in `indices`.
    ///
    /// # Errors
    /// Returns [TreeError::InvalidQuery] for an empty input set. A singleton
    /// set yields the vertex itself.
    pub fn common_ancestor(&self, indices: &[TreeIndex]) -> Result<TreeIndex, TreeError> {
        let (&first, rest) = indices.split_first().ok_or(TreeError::InvalidQuery)?;
        if rest.is_empty() {
            return Ok(first);
        }

        // Path from the first vertex up to the root, self included;
        // `cut` tracks the lowest entry on it that covers all vertices so far.
        let mut path = vec![first];
        path.extend(self.ancestors_of(first));
        let depth_on_path: HashMap<TreeIndex, usize> =
            path.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let mut cut = 0;
        for &other in rest {
            let mut current = other;
            loop {
                if let Some(&i) = depth_on_path.get(&current) {
                    cut = cut.max(i);
                    break;
                }
                match self.vertices[current].parent_index() {
                    Some(parent) => current = parent,
                    // Single-rooted tree: walking up always reaches the
                    // root, which is on the path.
                    None => break,
                }
            }
        }

        Ok(path[cut])
    }

    /// Validates the reachable tree structure.
    ///
    /// Checks:
    /// - Root index is set and the root has no parent
    /// - Every reachable child's parent back-reference matches the vertex
    ///   whose child list contains it
    /// - No vertex is reachable twice (single parent, acyclic)
    ///
    /// # Returns
    /// `true` if the tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if !self.is_root_set() || self.root_index >= self.vertices.len() {
            return false;
        }
        if self.vertices[self.root_index].has_parent() {
            return false;
        }

        let mut visited = vec![false; self.vertices.len()];
        let mut stack = vec![self.root_index];
        while let Some(index) = stack.pop() {
            if visited[index] {
                return false; // reached twice: cycle or shared child
            }
            visited[index] = true;

            for &child in self.vertices[index].children() {
                if child >= self.vertices.len() {
                    return false;
                }
                if self.vertices[child].parent_index() != Some(index) {
                    return false;
                }
                stack.push(child);
            }
        }

        true
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// Uses a stack-based approach to traverse the tree without recursion;
/// children are pushed in reverse so the first child is visited first.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<TreeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree, start: TreeIndex) -> Self {
        PreOrderIter { tree, stack: vec![start] }
    }

    fn empty(tree: &'a Tree) -> Self {
        PreOrderIter { tree, stack: Vec::new() }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];
        for &child in vertex.children().iter().rev() {
            self.stack.push(child);
        }
        Some(vertex)
    }
}
