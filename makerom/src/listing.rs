//! Byte code listings.
//!
//! A listing is plain text, one group of bytes per line:
//!
//! ```text
//! ; reset: load 1 into A and store it
//! 0xa9,0x01
//! 0x8d,0x00,0x20 ; STA $2000
//! ```
//!
//! Everything after the comment marker is ignored, blank lines are
//! ignored, and bytes are hex values split by one or more separators.

use derive_more::{Deref, From};
use log::{debug, trace};
use thiserror::Error;

/// Bytes decoded from a listing, in program order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From)]
pub struct Code(Vec<u8>);

impl Code {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    sep: char,
    comment: char,
}

impl ListingConfig {
    pub const DEFAULT_SEP: char = ',';
    pub const DEFAULT_COMMENT: char = ';';

    pub fn new(sep: char, comment: char) -> Result<Self, ConfigError> {
        for c in [sep, comment] {
            // These would be swallowed by trimming or read as part of a byte.
            if c.is_whitespace() || c.is_ascii_hexdigit() || c == 'x' || c == 'X' {
                return Err(ConfigError::Reserved(c));
            }
        }
        if sep == comment {
            return Err(ConfigError::Same(sep));
        }
        Ok(ListingConfig { sep, comment })
    }

    pub fn sep(&self) -> char {
        self.sep
    }

    pub fn comment(&self) -> char {
        self.comment
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            sep: Self::DEFAULT_SEP,
            comment: Self::DEFAULT_COMMENT,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0:?} can't be used as a separator or comment marker")]
    Reserved(char),

    #[error("separator and comment marker are both {0:?}")]
    Same(char),
}

/// Line numbers start at 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error at line {line}: {token:?} is not a byte of the form 0xHL")]
    Syntax { line: usize, token: String },

    #[error("syntax error at line {line}: {token:?} doesn't fit in a byte")]
    ByteRange { line: usize, token: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. } | ParseError::ByteRange { line, .. } => *line,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

pub fn parse_listing(source: &str) -> Result<Code, ParseError> {
    parse(source, &ListingConfig::default())
}

/// Decodes every byte in `source`. Stops at the first bad token.
pub fn parse(source: &str, config: &ListingConfig) -> Result<Code, ParseError> {
    let lines = split_lines(source);
    let width = lines.len().to_string().len();

    let mut bytes = Vec::new();
    for (text, line) in lines.into_iter().zip(1..) {
        let text = text.trim();
        trace!("compiling line {line:>width$}: {text}");
        parse_line(text, line, config, &mut bytes)?;
    }

    debug!("parsed {} bytes", bytes.len());
    Ok(Code(bytes))
}

// "\n", "\r\n" and a lone "\r" all end a line.
fn split_lines(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = source
        .split("\r\n")
        .flat_map(|l| l.split(['\r', '\n']))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn parse_line(
    text: &str,
    line: usize,
    config: &ListingConfig,
    out: &mut Vec<u8>,
) -> Result<(), ParseError> {
    // split() always yields at least one piece.
    let body = text.split(config.comment).next().unwrap_or_default().trim();
    if body.is_empty() {
        return Ok(());
    }

    for token in body.split(config.sep).map(str::trim).filter(|t| !t.is_empty()) {
        out.push(parse_byte(token, line)?);
    }
    Ok(())
}

fn parse_byte(token: &str, line: usize) -> Result<u8, ParseError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    // from_str_radix alone would also take a leading '+'.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::Syntax {
            line,
            token: token.to_string(),
        });
    }

    // Only overflow is left at this point.
    u8::from_str_radix(digits, 16).map_err(|_| ParseError::ByteRange {
        line,
        token: token.to_string(),
    })
}
