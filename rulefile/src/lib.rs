pub mod document;
pub mod parser;

use crate::document::{Section, SectionBody};

/// A parsed rule document.
#[derive(Debug, Clone)]
pub struct RuleFile {
    /// TOML frontmatter, when the file begins with a `---` block.
    pub frontmatter: Option<toml::Table>,
    /// Content before the first heading.
    pub preamble: SectionBody,
    /// Sections in source order, one per heading.
    pub sections: Vec<Section>,
}

impl RuleFile {
    /// All bodies in source order: preamble first, then one per section.
    pub fn bodies(&self) -> impl Iterator<Item = &SectionBody> {
        std::iter::once(&self.preamble).chain(self.sections.iter().map(|s| &s.body))
    }
}
