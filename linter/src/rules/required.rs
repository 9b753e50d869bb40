use rulefile::RuleFile;

use crate::diagnostic::Diagnostic;
use crate::rules::{Check, CheckContext};

/// Config-driven: section titles every rule document must contain.
/// With no configured titles this check is a no-op.
pub struct RequiredSections;

impl Check for RequiredSections {
    fn name(&self) -> &'static str {
        "required-sections"
    }

    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for want in &ctx.config.required_sections {
            let found = file
                .sections
                .iter()
                .any(|s| s.title.eq_ignore_ascii_case(want));
            if !found {
                out.push(Diagnostic::error(
                    ctx.path,
                    self.name(),
                    format!("missing required section '{want}'"),
                ));
            }
        }
    }
}

/// Config-driven: frontmatter keys every rule document must declare.
/// A document without frontmatter fails once per required key.
pub struct RequiredFrontmatter;

impl Check for RequiredFrontmatter {
    fn name(&self) -> &'static str {
        "required-frontmatter"
    }

    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        if ctx.config.required_frontmatter.is_empty() {
            return;
        }
        let table = file.frontmatter.as_ref();
        for key in &ctx.config.required_frontmatter {
            let present = table.is_some_and(|t| t.contains_key(key));
            if !present {
                out.push(Diagnostic::error(
                    ctx.path,
                    self.name(),
                    format!("missing required frontmatter key '{key}'"),
                ));
            }
        }
    }
}
