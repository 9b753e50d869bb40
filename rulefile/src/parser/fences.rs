//! Fence balance pre-scan.
//!
//! pulldown-cmark silently closes an unterminated fence at end of file, so
//! fence pairing is checked with a raw line scan before the event walk.

use crate::parser::error::ParseError;

struct OpenFence {
    marker: char,
    len: usize,
    start: usize,
}

/// Check that every opening fence has a matching close before end of file.
/// `offset` shifts the error span into coordinates of the original source.
pub fn check_balanced(body: &str, offset: usize) -> Result<(), ParseError> {
    let mut open: Option<OpenFence> = None;
    let mut pos = 0usize;

    for line in body.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let trimmed = content.trim_start();
        let indent = content.len() - trimmed.len();

        // Fences indented four or more spaces are indented code content.
        if indent <= 3 {
            match (&open, fence_marker(trimmed)) {
                (Some(fence), Some((marker, len, rest)))
                    if marker == fence.marker && len >= fence.len && rest.trim().is_empty() =>
                {
                    open = None;
                }
                (None, Some((marker, len, _))) => {
                    open = Some(OpenFence {
                        marker,
                        len,
                        start: pos + offset,
                    });
                }
                _ => {}
            }
        }

        pos += line.len();
    }

    if let Some(fence) = open {
        return Err(
            ParseError::new("unterminated code fence", fence.start..body.len() + offset)
                .with_note("every code fence opened with ``` must be closed before end of file"),
        );
    }
    Ok(())
}

/// Parse a fence marker at the start of an indent-stripped line: a run of
/// at least three backticks or tildes. Returns the marker char, the run
/// length, and the rest of the line (the info string).
fn fence_marker(line: &str) -> Option<(char, usize, &str)> {
    let first = line.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let len = line.chars().take_while(|&c| c == first).count();
    if len < 3 {
        return None;
    }
    Some((first, len, &line[len..]))
}
