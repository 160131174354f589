//! CLI module - Command-line interface definitions and the run pipeline

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::tokenizer::estimate_tokens;
use crate::output::writer;
use crate::scan::collector;
use crate::scan::filter::{Filter, FilterConfig};

/// Default file name of the generated document, created inside the scan root
pub const DEFAULT_OUTPUT_NAME: &str = "project_context.md";

/// ctxdump - bundle a project's text files into one Markdown document.
#[derive(Parser, Debug)]
#[command(name = "ctxdump")]
#[command(
    author,
    version,
    about,
    long_about = r#"ctxdump walks a directory tree, collects every text-readable file, and
writes their paths and contents into a single Markdown document
(project_context.md) for LLM/AI context loading.

Version-control directories, dependency caches, editor state, OS metadata
files, and anything whose extension maps to an image/video/audio MIME type
are skipped, as are the running binary and the output document itself.
Files that fail to decode as UTF-8 are skipped with a warning; a single
unreadable file never aborts the scan.

Examples:
    ctxdump
    ctxdump --root ~/src/myproject
    ctxdump --root . --output /tmp/context.md --report --no-pause
"#
)]
pub struct Cli {
    /// Directory to scan (defaults to the executable's own directory).
    #[arg(
        long,
        value_name = "ROOT",
        long_help = "Directory to scan.\n\n\
When omitted, the directory containing the ctxdump binary is scanned, so a\n\
copy dropped into a project folder bundles that folder with no arguments.\n\
All paths in the document are relative to this root."
    )]
    pub root: Option<PathBuf>,

    /// Output document path (defaults to project_context.md under ROOT).
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Path of the generated Markdown document.\n\n\
Defaults to project_context.md inside the scan root. Any existing file at\n\
this path is overwritten; the previous output is also excluded from the\n\
scan so it is never re-ingested."
    )]
    pub output: Option<PathBuf>,

    /// Print the scan report as JSON to stdout after writing.
    #[arg(
        long,
        long_help = "Print a machine-readable scan report to stdout after the document is\n\
written: included paths plus every skipped entry with its typed reason."
    )]
    pub report: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Exit without waiting for Enter.
    #[arg(
        long,
        long_help = "Skip the final wait-for-Enter pause.\n\n\
By default the process blocks on one line of stdin after the summary so a\n\
double-clicked console window stays open long enough to read it."
    )]
    pub no_pause: bool,

    /// Quiet mode (suppress progress lines; warnings are still printed).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = match cli.root {
        Some(root) => root
            .canonicalize()
            .with_context(|| format!("scan root {} is not usable", root.display()))?,
        None => default_root()?,
    };

    let output = cli.output.unwrap_or_else(|| root.join(DEFAULT_OUTPUT_NAME));

    let mut config = FilterConfig::default();
    if let Ok(exe) = std::env::current_exe() {
        config = config.deny_path(&exe);
    }
    config = config.deny_path(&output);
    let filter = Filter::new(&root, config);

    if !cli.quiet {
        eprintln!("{} {}", "Scanning".cyan().bold(), root.display());
    }

    let scan = collector::collect(&root, &filter);
    let document = writer::write_document(&output, &scan.collected)?;

    if !cli.quiet {
        eprintln!(
            "{} {} ({} files, ~{} tokens)",
            "Wrote".green().bold(),
            output.display(),
            scan.collected.len(),
            estimate_tokens(&document)
        );
    }

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&scan.summary())?);
    }

    if !cli.no_pause {
        pause_for_exit();
    }

    Ok(())
}

/// The directory containing the running binary. The tool historically lived
/// inside the tree it bundled, so this is the default scan root.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    dir.canonicalize()
        .with_context(|| format!("cannot resolve executable directory {}", dir.display()))
}

/// Block until the operator presses Enter. Returns immediately at stdin EOF,
/// so pipelines and tests are unaffected.
fn pause_for_exit() {
    eprint!("Press Enter to exit...");
    let _ = io::stderr().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
