pub mod error;
mod fences;
mod frontmatter;
mod structural;

pub use error::ParseError;

use crate::RuleFile;

/// Parse Markdown source into a RuleFile.
///
/// The only structural failures are an unterminated code fence and a
/// malformed frontmatter block; every other input parses into some
/// document shape for the checks to judge.
pub fn parse(source: &str) -> Result<RuleFile, Vec<ParseError>> {
    let split = frontmatter::split(source).map_err(|e| vec![e])?;

    let mut errors = Vec::new();

    let frontmatter = match split.raw {
        Some((raw, span)) => match frontmatter::parse_table(raw, span) {
            Ok(table) => Some(table),
            Err(e) => {
                errors.push(e);
                None
            }
        },
        None => None,
    };

    if let Err(e) = fences::check_balanced(split.body, split.body_offset) {
        errors.push(e);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let (preamble, sections) = structural::parse_sections(split.body, split.body_offset);
    Ok(RuleFile {
        frontmatter,
        preamble,
        sections,
    })
}
