use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::loader::{self, LoadError};
use crate::report::LintReport;
use crate::rules::{self, Check, CheckContext};

/// Everything produced for a single document.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Raw text, kept for span-to-line resolution and terminal rendering.
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the full pipeline over `root`: discover documents, then read, parse
/// and check each one on a rayon worker pool. Documents are independent;
/// outcomes are sorted by path before the report is built, so the output
/// order never depends on scheduling. Subdirectories the walk could not
/// read show up as warning outcomes rather than aborting the run.
pub fn lint_tree(root: &Path, config: &LintConfig) -> Result<LintReport, LoadError> {
    let found = loader::discover(root, &config.extensions)?;
    let checks = rules::default_checks();

    let run = || -> Vec<FileOutcome> {
        found
            .files
            .par_iter()
            .map(|path| lint_file(path, config, &checks))
            .collect()
    };

    // A capped run gets its own pool; the global pool's thread count is
    // fixed at first use and would ignore later `jobs` values.
    let mut outcomes = if config.jobs > 0 {
        match rayon::ThreadPoolBuilder::new().num_threads(config.jobs).build() {
            Ok(pool) => pool.install(run),
            Err(_) => run(),
        }
    } else {
        run()
    };

    for (dir, e) in &found.skipped_dirs {
        outcomes.push(FileOutcome {
            path: dir.clone(),
            source: String::new(),
            diagnostics: vec![Diagnostic::warning(
                dir,
                "load",
                format!("cannot read directory: {e}"),
            )],
        });
    }
    outcomes.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(LintReport::new(root.to_path_buf(), found.files.len(), outcomes))
}

fn lint_file(
    path: &Path,
    config: &LintConfig,
    checks: &[Box<dyn Check + Send + Sync>],
) -> FileOutcome {
    // An unreadable file does not abort the run.
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            return FileOutcome {
                path: path.to_path_buf(),
                source: String::new(),
                diagnostics: vec![Diagnostic::warning(
                    path,
                    "load",
                    format!("cannot read file: {e}"),
                )],
            };
        }
    };

    let mut diagnostics = Vec::new();
    match rulefile::parser::parse(&source) {
        Ok(file) => {
            let ctx = CheckContext { path, config };
            for check in checks {
                check.run(&file, &ctx, &mut diagnostics);
            }
        }
        Err(errors) => {
            // Parse failures are demoted to error diagnostics so the run
            // continues with the remaining files.
            for e in errors {
                let mut diag =
                    Diagnostic::error(path, "parse", e.message.clone()).with_span(e.span.clone());
                for note in e.notes {
                    diag = diag.with_note(note);
                }
                diagnostics.push(diag);
            }
        }
    }

    FileOutcome {
        path: path.to_path_buf(),
        source,
        diagnostics,
    }
}
