//! Rendering and parsing of the `font_data` array declaration.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::ParseError;

/// Name of the generated array.
pub const ARRAY_IDENTIFIER: &str = "font_data";

/// Text preceding the first element.
pub const DECLARATION_PREFIX: &str = "constexpr unsigned char font_data[] = { ";

/// Text following the last element.
pub const DECLARATION_SUFFIX: &str = " };\n";

const ELEMENT_SEPARATOR: &str = ", ";

/// Length of a single rendered element, e.g. `0x3F`.
const ELEMENT_LEN: usize = 4;

/// Formats a byte slice as the complete declaration.
struct Declaration<'a>(&'a [u8]);

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DECLARATION_PREFIX)?;

        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(ELEMENT_SEPARATOR)?;
            }
            write!(f, "0x{byte:02X}")?;
        }

        f.write_str(DECLARATION_SUFFIX)
    }
}

/// Render `bytes` as a complete array declaration.
pub fn render_literal(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(rendered_len(bytes.len()));

    // Infallible: `Declaration` never returns an error.
    let _ = write!(text, "{}", Declaration(bytes));

    text
}

/// Stream the declaration for `bytes` into `writer`.
///
/// Produces exactly the same text as [`render_literal`] without building
/// it in memory first. The writer is not flushed.
pub fn write_literal<W: Write>(bytes: &[u8], mut writer: W) -> io::Result<()> {
    write!(writer, "{}", Declaration(bytes))
}

/// Number of bytes the declaration for `byte_count` input bytes occupies.
pub fn rendered_len(byte_count: usize) -> usize {
    let separators = byte_count.saturating_sub(1) * ELEMENT_SEPARATOR.len();

    DECLARATION_PREFIX.len() + byte_count * ELEMENT_LEN + separators + DECLARATION_SUFFIX.len()
}

/// Recover the original bytes from a declaration produced by
/// [`render_literal`].
///
/// Only the exact output format is accepted: lowercase hex digits, missing
/// zero padding or extra whitespace are rejected.
pub fn parse_literal(text: &str) -> Result<Vec<u8>, ParseError> {
    let body = text
        .strip_prefix(DECLARATION_PREFIX)
        .ok_or(ParseError::MissingPrefix)?
        .strip_suffix(DECLARATION_SUFFIX)
        .ok_or(ParseError::MissingSuffix)?;

    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(ELEMENT_SEPARATOR)
        .enumerate()
        .map(|(index, element)| {
            parse_element(element).ok_or_else(|| ParseError::InvalidElement {
                index,
                element: element.to_string(),
            })
        })
        .collect()
}

fn parse_element(element: &str) -> Option<u8> {
    let digits = element.strip_prefix("0x")?.as_bytes();

    match digits {
        [high, low] => Some((hex_value(*high)? << 4) | hex_value(*low)?),
        _ => None,
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
