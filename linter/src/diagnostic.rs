use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use codespan_reporting::diagnostic as codespan;
use codespan_reporting::diagnostic::Label;

/// How bad a finding is. Errors fail the run; warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single reported issue: a file, an optional location, and a severity.
/// Diagnostics reference a document by path; they never mutate it.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// Byte span into the file's source; None for whole-file findings.
    pub span: Option<Range<usize>>,
    pub severity: Severity,
    /// Name of the check (or pipeline stage) that produced this.
    pub check: &'static str,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(path: &Path, check: &'static str, message: impl Into<String>) -> Self {
        Diagnostic {
            path: path.to_path_buf(),
            span: None,
            severity: Severity::Error,
            check,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    pub fn warning(path: &Path, check: &'static str, message: impl Into<String>) -> Self {
        Diagnostic {
            path: path.to_path_buf(),
            span: None,
            severity: Severity::Warning,
            check,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a codespan-reporting diagnostic for terminal display.
    pub fn to_codespan(&self, file_id: usize) -> codespan::Diagnostic<usize> {
        let severity = match self.severity {
            Severity::Warning => codespan::Severity::Warning,
            Severity::Error => codespan::Severity::Error,
        };
        let mut diagnostic = codespan::Diagnostic::new(severity)
            .with_message(&self.message)
            .with_code(self.check)
            .with_notes(self.notes.clone());
        if let Some(span) = &self.span {
            diagnostic = diagnostic.with_labels(vec![Label::primary(file_id, span.clone())]);
        }
        diagnostic
    }
}

/// Convert a byte offset in `source` to a 1-based line number.
pub fn byte_offset_to_line(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}
