use rulefile::RuleFile;

use crate::diagnostic::Diagnostic;
use crate::rules::{Check, CheckContext};

/// Every document needs at least one heading to anchor its outline; a
/// heading-free (or empty) file has no sections at all and fails here.
/// Whatever level the first heading uses is the document's top level.
pub struct TopLevelHeading;

impl Check for TopLevelHeading {
    fn name(&self) -> &'static str {
        "top-level-heading"
    }

    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        if file.sections.is_empty() {
            out.push(Diagnostic::error(
                ctx.path,
                self.name(),
                "missing top-level heading",
            ));
        }
    }
}

/// Heading levels must not skip more than one level when descending, e.g.
/// `##` directly to `####`.
pub struct HeadingSkip;

impl Check for HeadingSkip {
    fn name(&self) -> &'static str {
        "heading-skip"
    }

    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        let mut prev: Option<u8> = None;
        for section in &file.sections {
            if let Some(prev_level) = prev {
                if section.level > prev_level + 1 {
                    out.push(
                        Diagnostic::warning(
                            ctx.path,
                            self.name(),
                            format!(
                                "heading level jumps from {} to {}",
                                prev_level, section.level
                            ),
                        )
                        .with_span(section.span.clone()),
                    );
                }
            }
            prev = Some(section.level);
        }
    }
}
