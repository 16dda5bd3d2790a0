//! Error types for the Newick and NEXUS parsers.
//!
//! [ParseError] pairs a [ParseErrorKind] with the byte position where the
//! error occurred and a short snippet of the remaining input for context.

use crate::parser::byte_parser::ByteParser;
use thiserror::Error;

/// Length of the context snippet attached to parse errors.
const DEFAULT_CONTEXT_LENGTH: usize = 50;

/// Error kinds that can occur while parsing tree files.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("IO error - {0}")]
    Io(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unclosed comment")]
    UnclosedComment,

    #[error("invalid Newick string: {0}")]
    InvalidNewick(String),

    #[error("file does not start with #NEXUS header")]
    MissingNexusHeader,

    #[error("invalid block - {0}")]
    InvalidBlock(String),

    #[error("invalid TREES block - {0}")]
    InvalidTreesBlock(String),

    #[error("invalid TRANSLATE command - {0}")]
    InvalidTranslateCommand(String),
}

/// Parse error with contextual information (position and nearby input).
#[derive(Debug, Error)]
#[error("{kind} at position {position}{}", display_context(.context))]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
    context: String,
}

fn display_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context: {context}")
    }
}

impl ParseError {
    /// Creates a [ParseError] from an error kind and the current parser state.
    pub fn from_parser(kind: ParseErrorKind, parser: &ByteParser) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.context(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for [ParseErrorKind::UnexpectedEof].
    pub fn unexpected_eof(parser: &ByteParser) -> Self {
        Self::from_parser(ParseErrorKind::UnexpectedEof, parser)
    }

    /// Convenience constructor for [ParseErrorKind::UnclosedComment].
    pub fn unclosed_comment(parser: &ByteParser) -> Self {
        Self::from_parser(ParseErrorKind::UnclosedComment, parser)
    }

    /// Convenience constructor for [ParseErrorKind::InvalidNewick].
    pub fn invalid_newick(parser: &ByteParser, msg: impl Into<String>) -> Self {
        Self::from_parser(ParseErrorKind::InvalidNewick(msg.into()), parser)
    }

    /// Convenience constructor for [ParseErrorKind::MissingNexusHeader].
    pub fn missing_nexus_header(parser: &ByteParser) -> Self {
        Self::from_parser(ParseErrorKind::MissingNexusHeader, parser)
    }

    /// Convenience constructor for [ParseErrorKind::InvalidBlock].
    pub fn invalid_block(parser: &ByteParser, msg: impl Into<String>) -> Self {
        Self::from_parser(ParseErrorKind::InvalidBlock(msg.into()), parser)
    }

    /// Convenience constructor for [ParseErrorKind::InvalidTreesBlock].
    pub fn invalid_trees_block(parser: &ByteParser, msg: impl Into<String>) -> Self {
        Self::from_parser(ParseErrorKind::InvalidTreesBlock(msg.into()), parser)
    }

    /// Convenience constructor for [ParseErrorKind::InvalidTranslateCommand].
    pub fn invalid_translate_command(parser: &ByteParser, msg: impl Into<String>) -> Self {
        Self::from_parser(ParseErrorKind::InvalidTranslateCommand(msg.into()), parser)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the byte position where the error occurred.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError {
            kind: ParseErrorKind::Io(err.to_string()),
            position: 0,
            context: String::new(),
        }
    }
}
