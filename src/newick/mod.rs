//! Newick format parser and writer.
//!
//! # Format
//! The Newick format has the following grammar, here in its general n-ary
//! form with optional labels on internal vertices:
//! * `tree ::= vertex ';'`
//! * `vertex ::= leaf | internal_vertex`
//! * `internal_vertex ::= '(' vertex (',' vertex)* ')' [label] [branch_length]`
//! * `leaf ::= [label] [branch_length]`
//! * `branch_length ::= ':' number`
//!
//! Furthermore:
//! * Whitespace can occur between elements, just not within an unquoted
//!   label or a branch_length
//! * `[...]` comments can occur anywhere whitespace can
//! * Labels with structural characters are enclosed in single quotes, with
//!   internal quotes doubled (`'Wilson''s petrel'`)
//!
//! # Quick API
//! * [`parse_str`] - parses a single Newick string into a [`Tree`]
//! * [`parse_file`] - parses the first Newick tree in a file
//! * [`to_newick`] / [`write_newick`] - serialization

mod parser;
pub mod writer;

pub use self::parser::parse_tree;
pub use self::writer::{to_newick, write_newick};

use crate::model::Tree;
use crate::parser::{ByteParser, ParseError};
use std::fs;
use std::path::Path;

/// Parses a single Newick string into a [`Tree`].
///
/// # Example
/// ```
/// use phylolabel::newick::parse_str;
///
/// let tree = parse_str("((A:0.1,B:0.2):0.3,C:0.4);").unwrap();
/// assert_eq!(tree.num_leaves(), 3);
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParseError> {
    let mut parser = ByteParser::from_str(newick.as_ref());
    parse_tree(&mut parser)
}

/// Parses the first Newick tree in a file.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or
///   `PathBuf`)
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParseError> {
    let contents = fs::read(path)?;
    let mut parser = ByteParser::from_bytes(contents);
    parse_tree(&mut parser)
}
