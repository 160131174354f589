//! Tree collection
//!
//! Walks the scan root, applies the filter, reads file contents, and
//! accumulates per-entry outcomes. One unreadable entry never aborts the
//! walk: read and traversal errors are warned about on stderr, recorded in
//! the report, and skipped.

use colored::Colorize;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::file_reader::{read_text, ReadError};
use crate::core::model::{CollectedFile, ScanReport, SkipReason};
use crate::core::paths::{make_relative, normalize_path};
use crate::scan::filter::Filter;

/// Walk `root` and gather every text-readable file that passes `filter`.
///
/// Directory entries are visited in file-name order so the resulting
/// document is reproducible for a given filesystem state. Directories whose
/// name is on the skip list are pruned without descending. There is no size
/// limit, depth limit, or symlink-loop guard; the walk terminates when the
/// filesystem does.
pub fn collect(root: &Path, filter: &Filter) -> ScanReport {
    let mut report = ScanReport::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !(e.file_type().is_dir() && filter.prunes_dir(e.file_name()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| display_path(p, root))
                    .unwrap_or_else(|| "<unknown>".to_string());
                warn(&path, &err.to_string());
                report.push_skipped(path, SkipReason::Walk {
                    message: err.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = display_path(path, root);

        if let Some(reason) = filter.check(path) {
            report.push_skipped(rel, reason);
            continue;
        }

        match read_text(path) {
            Ok(content) if content.is_empty() => {
                report.push_skipped(rel, SkipReason::EmptyContent);
            }
            Ok(content) => {
                report.push_collected(CollectedFile { path: rel, content });
            }
            Err(err) => {
                warn(&rel, &err.to_string());
                let reason = match err {
                    ReadError::InvalidUtf8 => SkipReason::InvalidUtf8,
                    ReadError::Io(e) => SkipReason::Io {
                        message: e.to_string(),
                    },
                };
                report.push_skipped(rel, reason);
            }
        }
    }

    report
}

fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

fn warn(path: &str, message: &str) {
    eprintln!(
        "{} could not read {}: {}",
        "warning:".yellow().bold(),
        path,
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::filter::FilterConfig;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn default_filter(root: &Path) -> Filter {
        Filter::new(root, FilterConfig::default())
    }

    #[test]
    fn test_collect_empty_dir() {
        let temp = tempdir().unwrap();
        let report = collect(temp.path(), &default_filter(temp.path()));
        assert!(report.collected.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_collect_orders_by_file_name() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/zz.md"), "z").unwrap();

        let report = collect(temp.path(), &default_filter(temp.path()));
        let paths: Vec<_> = report.collected.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt", "sub/zz.md"]);
    }

    #[test]
    fn test_collect_prunes_skip_named_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(".git/objects")).unwrap();
        fs::write(temp.path().join(".git/config"), "x").unwrap();
        fs::write(temp.path().join(".git/objects/deep.txt"), "y").unwrap();
        fs::write(temp.path().join("kept.txt"), "kept").unwrap();

        let report = collect(temp.path(), &default_filter(temp.path()));
        let paths: Vec<_> = report.collected.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["kept.txt"]);

        // Pruned subtrees leave no per-file records either.
        assert!(report
            .skipped
            .iter()
            .all(|s| !s.path.starts_with(".git/")));
    }

    #[test]
    fn test_collect_drops_empty_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();
        fs::write(temp.path().join("full.txt"), "text").unwrap();

        let report = collect(temp.path(), &default_filter(temp.path()));
        assert_eq!(report.collected.len(), 1);
        assert_eq!(report.collected[0].path, "full.txt");
        assert!(report
            .skipped
            .iter()
            .any(|s| s.path == "empty.txt" && s.reason == SkipReason::EmptyContent));
    }

    #[test]
    fn test_collect_skips_invalid_utf8_and_continues() {
        let temp = tempdir().unwrap();
        let mut bin = fs::File::create(temp.path().join("bad.dat")).unwrap();
        bin.write_all(&[0xFF, 0xFE, 0x00, 0x01]).unwrap();
        drop(bin);
        fs::write(temp.path().join("good.txt"), "fine").unwrap();

        let report = collect(temp.path(), &default_filter(temp.path()));
        assert_eq!(report.collected.len(), 1);
        assert_eq!(report.collected[0].path, "good.txt");
        assert!(report
            .skipped
            .iter()
            .any(|s| s.path == "bad.dat" && s.reason == SkipReason::InvalidUtf8));
    }

    #[test]
    fn test_collect_skips_media_by_extension() {
        let temp = tempdir().unwrap();
        // Content decodes fine; the extension alone excludes it.
        fs::write(temp.path().join("img.png"), "plain text inside").unwrap();
        fs::write(temp.path().join("note.txt"), "note").unwrap();

        let report = collect(temp.path(), &default_filter(temp.path()));
        assert_eq!(report.collected.len(), 1);
        assert_eq!(report.collected[0].path, "note.txt");
        assert!(report.skipped.iter().any(|s| {
            s.path == "img.png" && matches!(s.reason, SkipReason::MediaMime { .. })
        }));
    }

    #[test]
    fn test_collect_is_deterministic() {
        let temp = tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        let filter = default_filter(temp.path());
        let first = collect(temp.path(), &filter);
        let second = collect(temp.path(), &filter);
        assert_eq!(first.collected, second.collected);
    }
}
