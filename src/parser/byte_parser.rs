//! Byte-by-byte parser for ASCII tree formats.
//!
//! [ByteParser] provides the parsing operations Newick and NEXUS share:
//! peeking, consuming, case-insensitive word matching, whitespace and
//! `[...]` comment skipping, and quote-aware label parsing.

use crate::parser::parse_error::ParseError;

/// A byte-by-byte parser over an in-memory buffer.
///
/// Assumes ASCII encoding for structural characters; label bytes are carried
/// through unchanged. Word matching is case-insensitive, as required by the
/// NEXUS format.
pub struct ByteParser {
    data: Vec<u8>,
    position: usize,
}

impl ByteParser {
    /// Creates a parser over the given bytes.
    pub fn from_bytes(input: Vec<u8>) -> Self {
        Self { data: input, position: 0 }
    }

    /// Creates a parser over the given string.
    pub fn from_str(input: &str) -> Self {
        Self::from_bytes(input.as_bytes().to_vec())
    }

    /// Peeks at the current byte without consuming it; `None` at EOF.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Consumes and returns the current byte; `None` at EOF.
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        Some(b)
    }

    /// Returns whether the end of input has been reached.
    pub fn is_eof(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Skips (consumes) all consecutive whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Skips a `[...]` comment if present.
    ///
    /// # Returns
    /// * `Ok(true)` - a comment was found and consumed
    /// * `Ok(false)` - no comment at the current position
    /// * `Err(ParseError)` - a comment was opened but never closed
    pub fn skip_comment(&mut self) -> Result<bool, ParseError> {
        if self.consume_if(b'[') {
            if !self.consume_until(b']', ConsumeMode::Inclusive) {
                return Err(ParseError::unclosed_comment(self));
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// Skips all consecutive whitespace and `[...]` comments.
    pub fn skip_comment_and_whitespace(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        while self.skip_comment()? {
            self.skip_whitespace();
        }
        Ok(())
    }

    /// Checks if the current byte matches `ch` (case-insensitive for ASCII).
    pub fn peek_is(&self, ch: u8) -> bool {
        match self.peek() {
            Some(b) => b.eq_ignore_ascii_case(&ch),
            None => false,
        }
    }

    /// Checks if the next bytes match `word` (case-insensitive), without
    /// changing the parser position.
    pub fn peek_is_word(&self, word: &str) -> bool {
        let sequence = word.as_bytes();
        let end = self.position + sequence.len();
        if end > self.data.len() {
            return false;
        }
        self.data[self.position..end].eq_ignore_ascii_case(sequence)
    }

    /// Consumes the current byte if it matches `ch` (case-insensitive).
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next bytes if they match `word` (case-insensitive).
    pub fn consume_if_word(&mut self, word: &str) -> bool {
        if self.peek_is_word(word) {
            self.position += word.len();
            true
        } else {
            false
        }
    }

    /// Consumes bytes until `target` is found.
    ///
    /// # Returns
    /// `true` if the target was found, `false` if EOF was reached first.
    pub fn consume_until(&mut self, target: u8, mode: ConsumeMode) -> bool {
        while let Some(b) = self.peek() {
            if b == target {
                if mode == ConsumeMode::Inclusive {
                    self.position += 1;
                }
                return true;
            }
            self.position += 1;
        }
        false
    }

    /// Consumes bytes until the next bytes match `word` (case-insensitive).
    ///
    /// # Returns
    /// `true` if the word was found, `false` if EOF was reached first.
    pub fn consume_until_word(&mut self, word: &str, mode: ConsumeMode) -> bool {
        while !self.is_eof() {
            if self.peek_is_word(word) {
                if mode == ConsumeMode::Inclusive {
                    self.position += word.len();
                }
                return true;
            }
            self.position += 1;
        }
        false
    }

    /// Returns up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement
    /// character.
    pub fn context(&self, k: usize) -> String {
        let end = (self.position + k).min(self.data.len());
        String::from_utf8_lossy(&self.data[self.position..end]).into_owned()
    }

    /// Parses a label (quoted or unquoted) with the given delimiter set.
    ///
    /// Leading whitespace and comments are skipped. A label starting with a
    /// single quote is parsed as a quoted label (with `''` escaping);
    /// otherwise bytes are collected until a delimiter is hit. An empty
    /// string is a valid result (anonymous vertex).
    pub fn parse_label(&mut self, delimiters: &[u8]) -> Result<String, ParseError> {
        self.skip_comment_and_whitespace()?;

        if self.peek() == Some(b'\'') {
            self.parse_quoted_label()
        } else {
            self.parse_unquoted_label(delimiters)
        }
    }

    /// Parses a label enclosed in single quotes with `''` escape support.
    ///
    /// Assumes the opening quote has not been consumed yet. For example,
    /// `'Wilson''s petrel'` becomes `Wilson's petrel`.
    fn parse_quoted_label(&mut self) -> Result<String, ParseError> {
        self.next(); // consume opening '

        let mut label = String::new();
        loop {
            match self.next() {
                Some(b'\'') => {
                    if self.peek() == Some(b'\'') {
                        label.push('\'');
                        self.next(); // consume second quote
                    } else {
                        break; // end of quoted label
                    }
                }
                Some(b) => label.push(b as char),
                None => return Err(ParseError::unexpected_eof(self)),
            }
        }

        Ok(label)
    }

    /// Parses an unquoted label until any of the given delimiters is hit.
    fn parse_unquoted_label(&mut self, delimiters: &[u8]) -> Result<String, ParseError> {
        let mut label = String::new();
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            label.push(b as char);
            self.position += 1;
        }
        Ok(label)
    }
}

/// Whether `consume_until` methods consume the target or stop before it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConsumeMode {
    /// Consume the target along with everything before it.
    Inclusive,
    /// Stop before the target without consuming it.
    Exclusive,
}
