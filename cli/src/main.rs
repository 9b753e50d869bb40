use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use linter::{LintConfig, LintReport};

#[derive(Parser)]
#[command(name = "lintrules", version, about = "Structural linter for Markdown rule files")]
struct Cli {
    /// Root directory containing rule documents
    root: PathBuf,

    /// File extension treated as a rule document (repeatable, overrides config)
    #[arg(long = "ext", value_name = "SUFFIX")]
    ext: Vec<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Config file path (default: <root>/lintrules.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worker threads for per-document processing (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Disable colored diagnostic output
    #[arg(long)]
    no_color: bool,

    /// Suppress per-diagnostic output, print only the summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let config_result = match &cli.config {
        Some(path) => LintConfig::load(path),
        None => LintConfig::load_if_present(&cli.root),
    };
    let mut config = match config_result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    // CLI flags override the config file.
    if !cli.ext.is_empty() {
        config.extensions = cli
            .ext
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
    }
    if cli.jobs > 0 {
        config.jobs = cli.jobs;
    }

    // Only a root-level failure is fatal; per-file problems come back as
    // diagnostics inside the report.
    let report = match linter::lint_tree(&cli.root, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    match cli.format {
        Format::Json => println!("{:#}", report.to_json()),
        Format::Text => emit_text(&report, cli.no_color, cli.quiet),
    }

    process::exit(if report.failed() { 1 } else { 0 });
}

/// Render diagnostics with codespan-reporting, grouped by file in report
/// order, then a one-line summary.
fn emit_text(report: &LintReport, no_color: bool, quiet: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    if !quiet {
        let writer = StandardStream::stderr(color_choice);
        let term_config = term::Config::default();
        let mut files = SimpleFiles::new();

        for outcome in &report.outcomes {
            if outcome.diagnostics.is_empty() {
                continue;
            }
            let file_id = files.add(outcome.path.display().to_string(), outcome.source.clone());
            for diag in &outcome.diagnostics {
                let _ = term::emit_to_write_style(
                    &mut writer.lock(),
                    &term_config,
                    &files,
                    &diag.to_codespan(file_id),
                );
            }
        }
    }

    eprintln!("{}", report.summary_line());
}
