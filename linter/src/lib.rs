pub mod config;
pub mod diagnostic;
pub mod loader;
pub mod report;
pub mod rules;
pub mod runner;

pub use config::{ConfigError, LintConfig};
pub use diagnostic::{Diagnostic, Severity};
pub use loader::LoadError;
pub use report::LintReport;
pub use runner::{FileOutcome, lint_tree};
