use rulefile::RuleFile;

use crate::diagnostic::Diagnostic;
use crate::rules::{Check, CheckContext};

/// Every fenced code block must declare a language tag, so syntax
/// highlighting and downstream tooling know what the snippet is.
pub struct FenceLanguage;

impl Check for FenceLanguage {
    fn name(&self) -> &'static str {
        "fence-language"
    }

    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for body in file.bodies() {
            for block in &body.code_blocks {
                if block.language.is_none() {
                    out.push(
                        Diagnostic::error(
                            ctx.path,
                            self.name(),
                            "fenced code block has no language tag",
                        )
                        .with_span(block.span.clone()),
                    );
                }
            }
        }
    }
}
