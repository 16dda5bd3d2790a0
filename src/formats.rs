//! Tree file formats supported for input and output.

use crate::model::Tree;
use crate::parser::ParseError;
use crate::{newick, nexus};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// A tree interchange format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum TreeFormat {
    /// The Newick tree format (`((A,B),C);`)
    Newick,
    /// The NEXUS format (TREES block with an optional TRANSLATE command)
    Nexus,
}

impl TreeFormat {
    /// Reads one tree from the file at `path` in this format.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Tree, ParseError> {
        match self {
            TreeFormat::Newick => newick::parse_file(path),
            TreeFormat::Nexus => nexus::parse_file(path),
        }
    }

    /// Writes `tree` in this format.
    pub fn write<W: Write>(&self, writer: &mut W, tree: &Tree) -> io::Result<()> {
        match self {
            TreeFormat::Newick => newick::write_newick(writer, tree),
            TreeFormat::Nexus => nexus::write_nexus(writer, tree),
        }
    }
}

impl fmt::Display for TreeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeFormat::Newick => write!(f, "newick"),
            TreeFormat::Nexus => write!(f, "nexus"),
        }
    }
}
