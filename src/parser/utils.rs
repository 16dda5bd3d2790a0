//! Label escaping for Newick and NEXUS output.

/// Characters that force a label into single quotes when written.
fn needs_quoting(label: &str) -> bool {
    label.chars().any(|c| {
        matches!(
            c,
            ',' | ';' | '\t' | '\n' | '\r' | '(' | ')' | ':' | '[' | ']' | '\''
        )
    })
}

/// Escapes a label for safe use in Newick and NEXUS files.
///
/// Labels containing structural characters are wrapped in single quotes with
/// internal quotes doubled; otherwise spaces are replaced with underscores.
///
/// # Examples
/// ```
/// # use phylolabel::parser::utils::escape_label;
/// assert_eq!(escape_label("Pukeko"), "Pukeko");
/// assert_eq!(escape_label("Homo sapiens"), "Homo_sapiens");
/// assert_eq!(escape_label("Wilson's petrel"), "'Wilson''s petrel'");
/// assert_eq!(escape_label("Pu[ke]ko"), "'Pu[ke]ko'");
/// ```
pub fn escape_label(label: &str) -> String {
    if needs_quoting(label) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.replace(' ', "_")
    }
}
