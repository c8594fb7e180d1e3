//! Source-tree enumeration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect every file under `root`, recursively, before any mutation starts.
///
/// The migration phase renames files and would confuse a live walker, so the
/// full listing is captured up front and treated as immutable input. Sorted
/// for deterministic processing order. Entries the walker cannot access are
/// reported as warnings and skipped.
pub fn snapshot_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                eprintln!("Warning: failed to access entry under {}: {}", root.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}
