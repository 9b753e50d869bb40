mod fence_language;
mod headings;
mod links;
mod required;

pub use fence_language::FenceLanguage;
pub use headings::{HeadingSkip, TopLevelHeading};
pub use links::InternalLinks;
pub use required::{RequiredFrontmatter, RequiredSections};

use std::path::Path;

use rulefile::RuleFile;

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;

/// Everything a check may look at besides the document itself.
pub struct CheckContext<'a> {
    /// Path of the document, as discovered by the loader.
    pub path: &'a Path,
    pub config: &'a LintConfig,
}

/// A single structural check. Checks never fail and are independent of one
/// another; they only append diagnostics.
pub trait Check {
    fn name(&self) -> &'static str;
    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>);
}

/// The full set of checks, in a stable order. Checks are order-independent;
/// the order here only fixes the diagnostic listing.
pub fn default_checks() -> Vec<Box<dyn Check + Send + Sync>> {
    vec![
        Box::new(FenceLanguage),
        Box::new(TopLevelHeading),
        Box::new(HeadingSkip),
        Box::new(InternalLinks),
        Box::new(RequiredSections),
        Box::new(RequiredFrontmatter),
    ]
}
