//! The rename run itself: descriptor discovery, confirmation gates, and the
//! mutation sequence.
//!
//! The run is strictly sequential and every step gates the next:
//! discover descriptor → confirm → obtain new name → final confirm →
//! clean stale artifacts → migrate descriptor + snapshot source tree →
//! migrate every file → rename the source directory → report.
//!
//! Nothing mutates before the final confirmation. Once migration starts
//! there is no cancellation or rollback; per-file failures are collected
//! and reported, never raised.

use crate::artifacts::clean_stale_artifacts;
use crate::migrate::{migrate_file, MigrationResult};
use crate::prompt::Prompter;
use crate::tree::snapshot_files;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension of the per-project descriptor file.
pub const DESCRIPTOR_EXTENSION: &str = "uproject";

/// Name of the directory holding per-project source trees.
pub const SOURCE_DIR: &str = "Source";

/// Fatal errors. Everything else is either a clean abort ([`RunOutcome::Aborted`])
/// or a per-item failure collected into the summary.
#[derive(Debug, Error)]
pub enum RenameError {
    /// No `.uproject` in the root's immediate contents; nothing was touched.
    #[error("no .uproject file found in {root:?}; run from (or point at) the project directory")]
    DescriptorNotFound { root: PathBuf },

    /// The effective old project name is empty. An empty substitution
    /// pattern matches between every character, so letting it through would
    /// shred the whole tree; nothing was touched.
    #[error("project name is empty; pass a non-empty --old or fix the descriptor file name")]
    EmptyOldName,

    /// Reading the confirmation prompt failed; nothing was touched.
    #[error("failed to read prompt input: {0}")]
    Prompt(#[from] io::Error),

    /// The final `Source/<old>` → `Source/<new>` move failed. This happens
    /// after all file rewriting, so the tree is migrated but still under the
    /// old directory name.
    #[error(
        "files are migrated, but moving {from:?} to {to:?} failed: {source}; retry the move manually"
    )]
    DirectoryMove {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a run stopped before mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The user declined one of the two confirmation gates.
    Cancelled,
    /// An empty new name was entered.
    EmptyName,
    /// The new name equals the old one; renaming would be a no-op.
    UnchangedName,
}

impl AbortReason {
    pub fn message(&self) -> &'static str {
        match self {
            AbortReason::Cancelled => "Cancelled; nothing was changed.",
            AbortReason::EmptyName => "No name entered; nothing was changed.",
            AbortReason::UnchangedName => "New name is unchanged; nothing to do.",
        }
    }
}

/// Aggregated result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub old_name: String,
    pub new_name: String,
    pub artifacts_removed: usize,
    pub results: Vec<MigrationResult>,
}

impl RunSummary {
    pub fn migrated_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &MigrationResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }
}

/// How a run ended. Both variants are terminal; `Aborted` guarantees zero
/// side effects.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    Aborted(AbortReason),
}

/// A validated rename: by the time one of these exists, both names are
/// non-empty and distinct and all confirmation gates have passed.
struct RenameRequest {
    root: PathBuf,
    descriptor: PathBuf,
    old_name: String,
    new_name: String,
}

/// Runtime flags threaded through the run.
#[derive(Clone, Default)]
pub struct RunOptions {
    /// Override the descriptor-derived project name.
    pub old_name: Option<String>,
    /// Preset new name; skips the free-text prompt when set.
    pub new_name: Option<String>,
    pub verbose: bool,
}

/// Find the project descriptor in the root's immediate contents
/// (non-recursive). Zero matches is fatal. If several projects share the
/// directory the first in sorted order wins, with a warning.
pub fn discover_descriptor(root: &Path) -> Result<PathBuf, RenameError> {
    let mut descriptors: Vec<PathBuf> = fs::read_dir(root)
        .map_err(|_| RenameError::DescriptorNotFound {
            root: root.to_path_buf(),
        })?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == DESCRIPTOR_EXTENSION)
        })
        .collect();
    descriptors.sort();

    match descriptors.len() {
        0 => Err(RenameError::DescriptorNotFound {
            root: root.to_path_buf(),
        }),
        1 => Ok(descriptors.remove(0)),
        n => {
            eprintln!(
                "Warning: {} .{} files in {}; using {}",
                n,
                DESCRIPTOR_EXTENSION,
                root.display(),
                descriptors[0].display()
            );
            Ok(descriptors.remove(0))
        }
    }
}

/// Drive a full rename run against `root`.
pub fn run(
    root: &Path,
    options: &RunOptions,
    prompter: &mut dyn Prompter,
) -> Result<RunOutcome, RenameError> {
    let descriptor = discover_descriptor(root)?;

    let old_name = match &options.old_name {
        Some(name) => name.clone(),
        None => descriptor
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    if old_name.is_empty() {
        return Err(RenameError::EmptyOldName);
    }

    let descriptor_name = descriptor
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !prompter.confirm(&format!(
        "Found project descriptor {}. Rename this project?",
        descriptor_name
    ))? {
        return Ok(RunOutcome::Aborted(AbortReason::Cancelled));
    }

    let new_name = match &options.new_name {
        Some(name) => name.clone(),
        None => prompter.ask_text(&format!("Enter the new project name for {}", old_name))?,
    };
    if new_name.is_empty() {
        return Ok(RunOutcome::Aborted(AbortReason::EmptyName));
    }
    if new_name == old_name {
        return Ok(RunOutcome::Aborted(AbortReason::UnchangedName));
    }

    // Last cancellation point. Everything after this mutates.
    if !prompter.confirm(&format!(
        "Preparing to rename {} to {}. Are you sure?",
        old_name, new_name
    ))? {
        return Ok(RunOutcome::Aborted(AbortReason::Cancelled));
    }

    let request = RenameRequest {
        root: root.to_path_buf(),
        descriptor,
        old_name,
        new_name,
    };

    Ok(RunOutcome::Completed(execute(&request, options)?))
}

/// The mutating phase. Only reached once both gates have passed.
fn execute(request: &RenameRequest, options: &RunOptions) -> Result<RunSummary, RenameError> {
    let RenameRequest {
        root,
        descriptor,
        old_name,
        new_name,
    } = request;

    let artifacts_removed = clean_stale_artifacts(root, old_name, options.verbose);

    // Snapshot the source tree before touching any file in it; migration
    // renames files and a live walk would see a shifting tree.
    let source_root = root.join(SOURCE_DIR).join(old_name);
    let snapshot = if source_root.is_dir() {
        snapshot_files(&source_root)
    } else {
        eprintln!(
            "Warning: {} does not exist; only the descriptor will be migrated",
            source_root.display()
        );
        Vec::new()
    };

    let mut results = Vec::with_capacity(snapshot.len() + 1);

    // The descriptor itself is renamed the same way as any source file.
    results.push(report_one(
        migrate_file(descriptor, old_name, new_name),
        options.verbose,
    ));

    for path in &snapshot {
        results.push(report_one(
            migrate_file(path, old_name, new_name),
            options.verbose,
        ));
    }

    // The directory move comes strictly last: the snapshot addresses files
    // by their pre-rename location, so moving the directory any earlier
    // would orphan every path still in flight.
    if source_root.is_dir() {
        let target_root = root.join(SOURCE_DIR).join(new_name);
        fs::rename(&source_root, &target_root).map_err(|source| RenameError::DirectoryMove {
            from: source_root.clone(),
            to: target_root.clone(),
            source,
        })?;
    }

    Ok(RunSummary {
        old_name: old_name.clone(),
        new_name: new_name.clone(),
        artifacts_removed,
        results,
    })
}

fn report_one(result: MigrationResult, verbose: bool) -> MigrationResult {
    match &result.outcome {
        crate::migrate::MigrationOutcome::Migrated => {
            if verbose {
                println!("Migrated: {}", result.path.display());
            }
        }
        crate::migrate::MigrationOutcome::Failed(reason) => {
            eprintln!("Warning: {}: {}. Skipping.", result.path.display(), reason);
        }
    }
    result
}
