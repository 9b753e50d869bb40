use std::path::PathBuf;

use serde_json::json;

use crate::diagnostic::{Severity, byte_offset_to_line};
use crate::runner::FileOutcome;

/// Aggregated result of a lint run over one directory tree.
#[derive(Debug)]
pub struct LintReport {
    pub root: PathBuf,
    /// Per-document outcomes in discovery (sorted-path) order.
    pub outcomes: Vec<FileOutcome>,
    /// Documents checked. Not always `outcomes.len()`: a skipped
    /// directory gets an outcome but is not a document.
    pub documents: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl LintReport {
    pub fn new(root: PathBuf, documents: usize, outcomes: Vec<FileOutcome>) -> Self {
        let mut errors = 0;
        let mut warnings = 0;
        for outcome in &outcomes {
            for diag in &outcome.diagnostics {
                match diag.severity {
                    Severity::Error => errors += 1,
                    Severity::Warning => warnings += 1,
                }
            }
        }
        LintReport {
            root,
            outcomes,
            documents,
            errors,
            warnings,
        }
    }

    /// Exit-code decision: any error-severity diagnostic fails the run.
    pub fn failed(&self) -> bool {
        self.errors > 0
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} documents checked, {} errors, {} warnings",
            self.documents, self.errors, self.warnings
        )
    }

    /// The report as a JSON document. Field order and file order are
    /// stable, so unchanged input produces byte-identical output.
    pub fn to_json(&self) -> serde_json::Value {
        let diagnostics: Vec<serde_json::Value> = self
            .outcomes
            .iter()
            .flat_map(|outcome| {
                outcome.diagnostics.iter().map(|diag| {
                    json!({
                        "path": outcome.path.display().to_string(),
                        "line": diag
                            .span
                            .as_ref()
                            .map(|s| byte_offset_to_line(&outcome.source, s.start)),
                        "severity": diag.severity.to_string(),
                        "check": diag.check,
                        "message": diag.message,
                    })
                })
            })
            .collect();

        json!({
            "root": self.root.display().to_string(),
            "documents": self.documents,
            "errors": self.errors,
            "warnings": self.warnings,
            "diagnostics": diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::LintReport;
    use crate::diagnostic::Diagnostic;
    use crate::runner::FileOutcome;

    fn outcome(path: &str, source: &str, diagnostics: Vec<Diagnostic>) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from(path),
            source: source.to_string(),
            diagnostics,
        }
    }

    #[test]
    fn totals_count_by_severity() {
        let path = Path::new("a.md");
        let outcomes = vec![
            outcome(
                "a.md",
                "# A\n",
                vec![
                    Diagnostic::error(path, "x", "boom"),
                    Diagnostic::warning(path, "y", "meh"),
                ],
            ),
            outcome("b.md", "# B\n", Vec::new()),
        ];
        let report = LintReport::new(PathBuf::from("."), 2, outcomes);
        assert_eq!(report.documents, 2);
        assert_eq!(report.errors, 1);
        assert_eq!(report.warnings, 1);
        assert!(report.failed());
    }

    #[test]
    fn clean_run_does_not_fail() {
        let report = LintReport::new(PathBuf::from("."), 1, vec![outcome("a.md", "# A\n", vec![])]);
        assert!(!report.failed());
        assert_eq!(report.summary_line(), "1 documents checked, 0 errors, 0 warnings");
    }

    #[test]
    fn json_carries_one_based_lines() {
        let path = Path::new("a.md");
        let source = "# A\n\n```\nx\n```\n";
        let diag = Diagnostic::error(path, "fence-language", "no tag").with_span(5..14);
        let report = LintReport::new(
            PathBuf::from("rules"),
            1,
            vec![outcome("a.md", source, vec![diag])],
        );

        let value = report.to_json();
        assert_eq!(value["errors"], 1);
        let entry = &value["diagnostics"][0];
        assert_eq!(entry["path"], "a.md");
        assert_eq!(entry["line"], 3);
        assert_eq!(entry["severity"], "error");
    }

    #[test]
    fn spanless_diagnostics_serialize_null_line() {
        let path = Path::new("a.md");
        let diag = Diagnostic::error(path, "top-level-heading", "missing top-level heading");
        let report = LintReport::new(PathBuf::from("."), 1, vec![outcome("a.md", "", vec![diag])]);
        assert!(report.to_json()["diagnostics"][0]["line"].is_null());
    }
}
