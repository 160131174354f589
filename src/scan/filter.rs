//! Entry filtering
//!
//! Rules are an explicit [`FilterConfig`] value fixed at construction, so
//! tests can run with alternate rule sets without process-wide state. Checks
//! run in a fixed order and the first match wins: identity denylist, then
//! skip-listed path segments, then the media MIME denylist.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::model::SkipReason;

/// Path-segment names that are never collected: version-control directories,
/// dependency caches, editor state, OS metadata files
pub static DEFAULT_SKIP_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".git",
        ".hg",
        ".svn",
        "node_modules",
        "target",
        "__pycache__",
        ".venv",
        "venv",
        ".idea",
        ".vscode",
        ".DS_Store",
        "Thumbs.db",
    ]
    .into_iter()
    .collect()
});

/// MIME top-level types that mark a file as non-text media
pub const DEFAULT_MEDIA_TYPES: &[&str] = &["image", "video", "audio"];

/// Filter rules, fixed for the lifetime of one scan
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Absolute paths excluded by resolved identity, not by name
    pub deny_paths: Vec<PathBuf>,

    /// Exact path-segment names to exclude
    pub skip_names: HashSet<String>,

    /// MIME top-level types to exclude
    pub media_types: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            deny_paths: Vec::new(),
            skip_names: DEFAULT_SKIP_NAMES.iter().map(|s| s.to_string()).collect(),
            media_types: DEFAULT_MEDIA_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Add a path to the identity denylist, resolved once here. Paths that
    /// do not exist yet (the output document on a first run) are kept as
    /// given; their parent-resolved form is compared instead.
    pub fn deny_path(mut self, path: &Path) -> Self {
        self.deny_paths.push(resolve(path));
        self
    }
}

/// Resolve a path for identity comparison. Falls back to resolving the
/// parent when the file itself does not exist yet.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|p| p.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

/// Decides, per filesystem entry, whether it belongs in the output document
pub struct Filter {
    root: PathBuf,
    config: FilterConfig,
}

impl Filter {
    pub fn new(root: &Path, config: FilterConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Check an absolute entry path against the rules. Returns the first
    /// matching reason, or None when the entry is a candidate for reading.
    pub fn check(&self, path: &Path) -> Option<SkipReason> {
        if self.is_denied(path) {
            return Some(SkipReason::SelfReference);
        }
        if let Some(segment) = self.skipped_segment(path) {
            return Some(SkipReason::SkippedName { segment });
        }
        if let Some(mime) = self.media_mime(path) {
            return Some(SkipReason::MediaMime { mime });
        }
        None
    }

    /// Whether a directory with this name should be pruned from the walk,
    /// subtree included
    pub fn prunes_dir(&self, name: &OsStr) -> bool {
        name.to_str()
            .map(|s| self.config.skip_names.contains(s))
            .unwrap_or(false)
    }

    fn is_denied(&self, path: &Path) -> bool {
        if self.config.deny_paths.is_empty() {
            return false;
        }
        let resolved = resolve(path);
        self.config.deny_paths.iter().any(|d| *d == resolved)
    }

    /// Segments are checked on the root-relative path only, so skip names
    /// appearing above the scan root never exclude anything.
    fn skipped_segment(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .filter_map(|c| c.as_os_str().to_str())
            .find(|s| self.config.skip_names.contains(*s))
            .map(str::to_string)
    }

    /// Extension-based, best-effort: unknown extensions are never excluded
    /// on MIME grounds.
    fn media_mime(&self, path: &Path) -> Option<String> {
        let mime = mime_guess::from_path(path).first()?;
        let top = mime.type_().as_str();
        if self.config.media_types.iter().any(|t| t == top) {
            Some(mime.essence_str().to_string())
        } else {
            None
        }
    }
}
