//! Per-file migration: rewrite contents, rename in place, isolate failures.

use crate::rewrite::{rewrite_content, rewrite_name};

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of migrating a single file.
#[derive(Debug)]
pub enum MigrationOutcome {
    /// File rewritten (and renamed, if its name contained the old identifier).
    Migrated,
    /// Something went wrong; the reason is recorded and the run continues.
    Failed(String),
}

/// One file's migration, for the run summary.
#[derive(Debug)]
pub struct MigrationResult {
    pub path: PathBuf,
    pub outcome: MigrationOutcome,
}

impl MigrationResult {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, MigrationOutcome::Migrated)
    }

    fn failed(path: &Path, reason: String) -> Self {
        MigrationResult {
            path: path.to_path_buf(),
            outcome: MigrationOutcome::Failed(reason),
        }
    }
}

/// Migrate one file: read it as text, rewrite identifiers in the content,
/// write the result under the rewritten file name, then remove the original
/// if the name changed.
///
/// This is write-then-delete rather than an atomic rename — the content
/// changes too, so a rename alone can never suffice. If the process dies
/// between the write and the delete, both copies exist; rerunning the
/// migration is the recovery path.
///
/// Every failure is caught here and returned as `Failed`. One locked or
/// unreadable file must not stop the rest of the tree from migrating.
pub fn migrate_file(path: &Path, old: &str, new: &str) -> MigrationResult {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return MigrationResult::failed(path, format!("read failed: {}", err)),
    };

    let rewritten = rewrite_content(&content, old, new);

    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return MigrationResult::failed(path, "file name is not valid UTF-8".to_string()),
    };
    let target = match path.parent() {
        Some(dir) => dir.join(rewrite_name(file_name, old, new)),
        None => return MigrationResult::failed(path, "file has no parent directory".to_string()),
    };

    // Guard against clobbering an unrelated file that already sits at the
    // target name.
    if target != path && target.exists() {
        return MigrationResult::failed(
            path,
            format!("target already exists: {}", target.display()),
        );
    }

    if let Err(err) = fs::write(&target, rewritten) {
        return MigrationResult::failed(
            path,
            format!("write to {} failed: {}", target.display(), err),
        );
    }

    if target != path && path.exists() {
        if let Err(err) = fs::remove_file(path) {
            return MigrationResult::failed(path, format!("removing original failed: {}", err));
        }
    }

    MigrationResult {
        path: path.to_path_buf(),
        outcome: MigrationOutcome::Migrated,
    }
}
