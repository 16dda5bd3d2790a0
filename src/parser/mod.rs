//! Low-level parsing infrastructure shared by the Newick and NEXUS parsers.

pub mod byte_parser;
pub mod parse_error;
pub mod utils;

pub use byte_parser::{ByteParser, ConsumeMode};
pub use parse_error::{ParseError, ParseErrorKind};
