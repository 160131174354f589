//! Output document serialization
//!
//! Renders collected files into one Markdown document and writes it over
//! whatever was at the output path. The write is not atomic: a crash
//! mid-write leaves a partial file, and the fix is to rerun.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::core::model::CollectedFile;

/// Fixed title line of the output document
pub const DOC_TITLE: &str = "# Project Context Dump";

/// Fixed banner printed under the timestamp
pub const DOC_BANNER: &str =
    "> Auto-generated for AI/large language model context ingestion.";

/// Render the full document.
///
/// File content is embedded verbatim inside a `text` fence; a file that
/// contains its own closing fence will break the enclosing block (known,
/// unhandled edge case).
pub fn render_document(files: &[CollectedFile], timestamp: &str) -> String {
    let mut out = String::new();
    out.push_str(DOC_TITLE);
    out.push_str("\n\n");
    out.push_str(&format!("> Generated on: {}\n", timestamp));
    out.push_str(DOC_BANNER);
    out.push('\n');

    for file in files {
        out.push_str(&format!("\n## File: `{}`\n\n", file.path));
        out.push_str("```text\n");
        out.push_str(&file.content);
        if !file.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("```\n");
    }

    out
}

/// Current local wall-clock time in the document's timestamp format
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Write the document, replacing any previous file at `path`. Returns the
/// rendered text so the caller can report on it.
pub fn write_document(path: &Path, files: &[CollectedFile]) -> Result<String> {
    let document = render_document(files, &timestamp_now());
    fs::write(path, &document)
        .with_context(|| format!("failed to write output document {}", path.display()))?;
    Ok(document)
}
