use std::ops::Range;

/// A heading and the content beneath it, up to the next heading.
/// Sections are the structural unit the checks operate on.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Heading text, whitespace-normalized.
    pub title: String,
    /// Heading level: 1 = #, 6 = ######.
    pub level: u8,
    /// Content between this heading and the next.
    pub body: SectionBody,
    /// Byte span of the heading itself, for error reporting.
    pub span: Range<usize>,
}

/// The content of one section (or of the preamble before the first
/// heading): prose text plus the fenced code blocks and links found in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionBody {
    /// Prose content with Markdown markers stripped.
    pub text: String,
    pub code_blocks: Vec<CodeBlock>,
    pub links: Vec<LinkRef>,
}

/// A fenced code region. Indented code blocks are kept as body text and do
/// not become entities.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// The token after the opening fence. An empty info string parses to
    /// None.
    pub language: Option<String>,
    pub content: String,
    /// Byte span of the whole fenced region, opening fence included.
    pub span: Range<usize>,
}

/// A link destination as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRef {
    pub dest: String,
    pub span: Range<usize>,
}
