//! NEXUS format parser and writer.
//!
//! # Format
//! A NEXUS file typically contains:
//! - The `#NEXUS` header
//! - A TAXA block defining the species/labels
//! - A TREES block with an optional TRANSLATE command and tree definitions
//!
//! ## Assumptions
//! This is a reduced NEXUS reader, sufficient for tree interchange:
//! * Blocks other than TREES (TAXA in particular) are skipped wholesale
//! * A `TRANSLATE` command, if present, precedes any `TREE` command and is a
//!   comma separated list of `<key> <label>` pairs terminated by `;`
//! * One tree command has format `tree <name> = [comment] <Newick string>;`
//! * The *first* tree of the TREES block is returned; further trees are
//!   ignored
//! * Taxon labels containing the words `BEGIN` or `END` unquoted are not
//!   supported outside the TREES block
//!
//! # Quick API
//! * [`parse_str`] / [`parse_file`] - parse the first tree of a NEXUS input
//! * [`write_nexus`] - write a tree as a NEXUS file with TAXA and TREES
//!   blocks

use crate::model::Tree;
use crate::newick;
use crate::parser::utils::escape_label;
use crate::parser::{ByteParser, ConsumeMode, ParseError};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// NEXUS label delimiters: separators, terminators, brackets, whitespace
const NEXUS_LABEL_DELIMITERS: &[u8] = b",;=()[] \t\n\r";

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses the first tree of a NEXUS string.
pub fn parse_str<S: AsRef<str>>(input: S) -> Result<Tree, ParseError> {
    let mut parser = ByteParser::from_str(input.as_ref());
    parse(&mut parser)
}

/// Parses the first tree of a NEXUS file.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or
///   `PathBuf`)
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParseError> {
    let contents = fs::read(path)?;
    let mut parser = ByteParser::from_bytes(contents);
    parse(&mut parser)
}

// ============================================================================
// Parsing (private)
// ============================================================================
fn parse(parser: &mut ByteParser) -> Result<Tree, ParseError> {
    parser.skip_comment_and_whitespace()?;
    if !parser.consume_if_word("#NEXUS") {
        return Err(ParseError::missing_nexus_header(parser));
    }

    // Scan forward block by block until the TREES block is found.
    loop {
        if !parser.consume_until_word("BEGIN", ConsumeMode::Inclusive) {
            return Err(ParseError::invalid_trees_block(parser, "no TREES block found"));
        }
        let block = parser.parse_label(NEXUS_LABEL_DELIMITERS)?;
        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b';') {
            return Err(ParseError::invalid_block(
                parser,
                format!("block name '{block}' not terminated by ';'"),
            ));
        }

        if block.eq_ignore_ascii_case("TREES") {
            return parse_trees_block(parser);
        }

        // Not the TREES block; skip to its end.
        if !parser.consume_until_word("END", ConsumeMode::Exclusive) {
            return Err(ParseError::invalid_block(
                parser,
                format!("block '{block}' is not terminated"),
            ));
        }
        parser.consume_if_word("END");
        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b';') {
            return Err(ParseError::invalid_block(
                parser,
                format!("block '{block}' end command not terminated by ';'"),
            ));
        }
    }
}

/// Parses the TREES block up to and including its first TREE command,
/// returning the tree with translated labels.
fn parse_trees_block(parser: &mut ByteParser) -> Result<Tree, ParseError> {
    let mut translation: HashMap<String, String> = HashMap::new();

    loop {
        parser.skip_comment_and_whitespace()?;

        if parser.consume_if_word("TRANSLATE") {
            parse_translate(parser, &mut translation)?;
        } else if parser.peek_is_word("TREE") && !parser.peek_is_word("TREES") {
            parser.consume_if_word("TREE");
            if !parser.consume_until(b'=', ConsumeMode::Inclusive) {
                return Err(ParseError::invalid_trees_block(parser, "TREE command without '='"));
            }
            // The Newick parser skips any leading [&R]/[&U] rooting comment.
            let mut tree = newick::parse_tree(parser)?;
            apply_translation(&mut tree, &translation);
            return Ok(tree);
        } else if parser.consume_if_word("END") {
            return Err(ParseError::invalid_trees_block(
                parser,
                "TREES block contains no TREE command",
            ));
        } else if parser.is_eof() {
            return Err(ParseError::unexpected_eof(parser));
        } else {
            // Unknown command; skip to its terminating ';'.
            if !parser.consume_until(b';', ConsumeMode::Inclusive) {
                return Err(ParseError::unexpected_eof(parser));
            }
        }
    }
}

/// Parses the pair list of a TRANSLATE command:
/// `TRANSLATE <key1> <label1>, <key2> <label2>, ...;`
fn parse_translate(
    parser: &mut ByteParser,
    translation: &mut HashMap<String, String>,
) -> Result<(), ParseError> {
    loop {
        let key = parser.parse_label(NEXUS_LABEL_DELIMITERS)?;
        if key.is_empty() {
            return Err(ParseError::invalid_translate_command(parser, "empty key"));
        }
        let label = parser.parse_label(NEXUS_LABEL_DELIMITERS)?;
        if label.is_empty() {
            return Err(ParseError::invalid_translate_command(
                parser,
                format!("key '{key}' without label"),
            ));
        }
        translation.insert(key, label);

        parser.skip_comment_and_whitespace()?;
        if parser.consume_if(b',') {
            continue;
        }
        if parser.consume_if(b';') {
            return Ok(());
        }
        return Err(ParseError::invalid_translate_command(
            parser,
            "expected ',' or ';' after pair",
        ));
    }
}

/// Replaces translated keys in vertex names with their full labels.
fn apply_translation(tree: &mut Tree, translation: &HashMap<String, String>) {
    if translation.is_empty() {
        return;
    }
    for vertex in tree.vertices_mut() {
        let mapped = vertex.name().and_then(|name| translation.get(name)).cloned();
        if mapped.is_some() {
            vertex.set_name(mapped);
        }
    }
}

// ============================================================================
// Writing (pub)
// ============================================================================
/// Writes a complete NEXUS file for the given tree:
/// `#NEXUS` header, TAXA block with dimensions and taxon labels, and a
/// TREES block with a single tree definition.
pub fn write_nexus<W: Write>(writer: &mut W, tree: &Tree) -> io::Result<()> {
    let terminals = tree.terminals();

    writeln!(writer, "#NEXUS")?;
    writeln!(writer, "Begin Taxa;")?;
    writeln!(writer, "\tDimensions ntax={};", terminals.len())?;
    write!(writer, "\tTaxlabels")?;
    for &leaf in &terminals {
        if let Some(name) = tree[leaf].name() {
            write!(writer, " {}", escape_label(name))?;
        }
    }
    writeln!(writer, ";")?;
    writeln!(writer, "End;")?;
    writeln!(writer, "Begin Trees;")?;
    writeln!(writer, "\tTree tree1 = {}", newick::to_newick(tree))?;
    writeln!(writer, "End;")?;
    Ok(())
}
