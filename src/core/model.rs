//! Scan outcome model
//!
//! Every filesystem entry the collector touches maps to exactly one outcome:
//! a collected file destined for the output document, or a skipped entry with
//! a typed reason. Outcomes are gathered into a [`ScanReport`] so a run's
//! results can be inspected and tested instead of reconstructed from console
//! text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file that passed every filter and decoded as non-empty UTF-8 text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedFile {
    /// Path relative to the scan root, using '/' as separator
    pub path: String,

    /// Decoded file content, embedded verbatim in the output document
    pub content: String,
}

/// Why an entry was left out of the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The running binary or the output document itself
    SelfReference,

    /// A path segment matched the skip-name set
    SkippedName { segment: String },

    /// The extension-guessed MIME type is on the media denylist
    MediaMime { mime: String },

    /// Zero bytes, or decoded to an empty string
    EmptyContent,

    /// Bytes are not valid UTF-8
    InvalidUtf8,

    /// OS-level read error (permissions, vanished file)
    Io { message: String },

    /// Traversal-level error (unreadable directory, broken link)
    Walk { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SelfReference => write!(f, "tool or output file"),
            SkipReason::SkippedName { segment } => write!(f, "skip-listed name '{}'", segment),
            SkipReason::MediaMime { mime } => write!(f, "media type {}", mime),
            SkipReason::EmptyContent => write!(f, "empty content"),
            SkipReason::InvalidUtf8 => write!(f, "not valid UTF-8"),
            SkipReason::Io { message } => write!(f, "{}", message),
            SkipReason::Walk { message } => write!(f, "{}", message),
        }
    }
}

/// A skipped entry and the rule or error that excluded it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: SkipReason,
}

/// Outcome of one scan: collected files plus everything left out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub collected: Vec<CollectedFile>,
    pub skipped: Vec<SkippedEntry>,
}

/// Machine-readable scan summary, minus file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub included: Vec<String>,
    pub skipped: Vec<SkippedEntry>,
    pub included_count: usize,
    pub skipped_count: usize,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_collected(&mut self, file: CollectedFile) {
        self.collected.push(file);
    }

    pub fn push_skipped(&mut self, path: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedEntry {
            path: path.into(),
            reason,
        });
    }

    /// Summarize outcomes without duplicating file contents
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            included: self.collected.iter().map(|f| f.path.clone()).collect(),
            skipped: self.skipped.clone(),
            included_count: self.collected.len(),
            skipped_count: self.skipped.len(),
        }
    }
}
