/// Arena tree structure and operations
pub mod tree;
/// Tree vertex type and branch lengths
pub mod vertex;
/// Normalized-name to vertex lookup index
pub mod name_index;

pub use name_index::NameIndex;
pub use tree::{Tree, TreeError, TreeIndex};
pub use vertex::{BranchLength, Vertex};
