//! ctxdump - bundle a project tree into one Markdown context document
//!
//! ctxdump provides:
//! - Recursive scanning with a fixed skip-rule set
//! - Strict UTF-8 text collection (binary and media files are left out)
//! - A single deterministic Markdown artifact for LLM context loading

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod output;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
