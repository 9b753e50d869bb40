//! TOML frontmatter splitting.
//!
//! A rule file may begin with a `---`-delimited TOML block carrying
//! metadata. The split keeps every span in coordinates of the original
//! source text so diagnostics can point into the file as written.

use std::ops::Range;

use crate::parser::error::ParseError;

/// The outcome of splitting frontmatter off a source file.
#[derive(Debug)]
pub struct Split<'a> {
    /// Raw TOML text and its span, when a frontmatter block is present.
    pub raw: Option<(&'a str, Range<usize>)>,
    /// Markdown body after the frontmatter (and any BOM).
    pub body: &'a str,
    /// Byte offset of `body` within the original source.
    pub body_offset: usize,
}

pub fn split(source: &str) -> Result<Split<'_>, ParseError> {
    const BOM: &str = "\u{feff}";
    let start = if source.starts_with(BOM) { BOM.len() } else { 0 };
    let content = &source[start..];

    let Some(after_open) = open_delimiter(content) else {
        return Ok(Split {
            raw: None,
            body: content,
            body_offset: start,
        });
    };
    let raw_start = start + (content.len() - after_open.len());

    let Some(close_pos) = after_open.find("\n---") else {
        return Err(ParseError::new(
            "missing closing --- frontmatter delimiter",
            start..source.len(),
        ));
    };

    let raw = after_open[..close_pos].trim_end_matches('\r');
    let raw_span = raw_start..raw_start + raw.len();

    let rest = &after_open[close_pos + "\n---".len()..];
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);
    let body_offset = start + (content.len() - rest.len());

    Ok(Split {
        raw: Some((raw, raw_span)),
        body: rest,
        body_offset,
    })
}

/// Strip an opening `---` delimiter line, returning the text after it.
/// A bare `---` with no newline is a thematic break, not frontmatter.
fn open_delimiter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parse the raw frontmatter text as a TOML table.
pub fn parse_table(raw: &str, span: Range<usize>) -> Result<toml::Table, ParseError> {
    toml::from_str(raw).map_err(|e| {
        ParseError::new(format!("invalid TOML frontmatter: {}", e.message()), span)
    })
}
