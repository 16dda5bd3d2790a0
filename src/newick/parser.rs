use crate::model::{BranchLength, Tree, TreeIndex};
use crate::parser::{ByteParser, ParseError};

/// Newick label delimiters: parentheses, comma, colon, semicolon,
/// brackets, whitespace
const NEWICK_LABEL_DELIMITERS: &[u8] = b"(),:;[] \t\n\r";

/// Parses a single Newick tree from the given [ByteParser].
///
/// The parser is left positioned just past the terminating semicolon, so
/// several trees can be read from one input in sequence.
///
/// # Returns
/// * `Ok(Tree)` - the parsed tree
/// * `Err(ParseError)` - if the Newick format is invalid
pub fn parse_tree(parser: &mut ByteParser) -> Result<Tree, ParseError> {
    let mut tree = Tree::new();

    parser.skip_comment_and_whitespace()?;
    let root = parse_vertex(parser, &mut tree)?;

    parser.skip_comment_and_whitespace()?;
    if !parser.consume_if(b';') {
        return Err(ParseError::invalid_newick(
            parser,
            format!(
                "Expected ';' at end of tree but found {:?}",
                parser.peek().map(|b| b as char)
            ),
        ));
    }

    tree.set_root(root);
    Ok(tree)
}

/// Parses a vertex (internal vertex or leaf) and returns its index:
/// - Skips leading comments and whitespace
/// - Dispatches on `(` to `parse_internal_vertex`, otherwise `parse_leaf`
fn parse_vertex(parser: &mut ByteParser, tree: &mut Tree) -> Result<TreeIndex, ParseError> {
    parser.skip_comment_and_whitespace()?;
    if parser.peek() == Some(b'(') {
        parse_internal_vertex(parser, tree)
    } else {
        parse_leaf(parser, tree)
    }
}

/// Parses an internal vertex `(child, ...) [label] [:branch_length]`,
/// adds it to the tree, and returns its index.
fn parse_internal_vertex(parser: &mut ByteParser, tree: &mut Tree) -> Result<TreeIndex, ParseError> {
    // Calling method checked for the opening '('
    parser.next();

    let mut children = vec![parse_vertex(parser, tree)?];
    loop {
        parser.skip_comment_and_whitespace()?;
        if parser.consume_if(b',') {
            children.push(parse_vertex(parser, tree)?);
        } else {
            break;
        }
    }

    if !parser.consume_if(b')') {
        return Err(ParseError::invalid_newick(
            parser,
            format!(
                "Expected ')' or ',' after child but found {:?}",
                parser.peek().map(|b| b as char)
            ),
        ));
    }

    let name = parse_name(parser)?;
    let branch_length = parse_branch_length(parser)?;

    let index = tree.add_vertex(name, branch_length);
    for child in children {
        tree.attach(index, child);
    }

    Ok(index)
}

/// Parses a leaf `[label] [:branch_length]`, adds it to the tree, and
/// returns its index.
fn parse_leaf(parser: &mut ByteParser, tree: &mut Tree) -> Result<TreeIndex, ParseError> {
    let name = parse_name(parser)?;
    let branch_length = parse_branch_length(parser)?;
    Ok(tree.add_vertex(name, branch_length))
}

/// Parses an optional label; an empty label yields `None` (anonymous
/// vertex).
fn parse_name(parser: &mut ByteParser) -> Result<Option<String>, ParseError> {
    let label = parser.parse_label(NEWICK_LABEL_DELIMITERS)?;
    if label.is_empty() { Ok(None) } else { Ok(Some(label)) }
}

/// Parses an optional branch length `[:number]`:
/// - Skips comments/whitespace around the `:`
/// - Supports scientific notation (e.g., `1.5e-10`)
/// - Rejects negative or non-finite values
fn parse_branch_length(parser: &mut ByteParser) -> Result<Option<BranchLength>, ParseError> {
    parser.skip_comment_and_whitespace()?;
    if !parser.consume_if(b':') {
        return Ok(None);
    }
    parser.skip_comment_and_whitespace()?;

    let mut number = String::new();
    while let Some(b) = parser.peek() {
        // Valid characters for a float: digits, '.', '-', '+', 'e', 'E'
        if b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+' || b == b'e' || b == b'E' {
            number.push(b as char);
            parser.next();
        } else {
            break; // hit a delimiter like ',', ')', ';', or whitespace
        }
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ParseError::invalid_newick(parser, format!("Invalid branch length: {number}")))?;
    if value < 0.0 || !value.is_finite() {
        return Err(ParseError::invalid_newick(
            parser,
            format!("Branch length must be non-negative and finite, got {number}"),
        ));
    }

    Ok(Some(BranchLength::new(value)))
}
