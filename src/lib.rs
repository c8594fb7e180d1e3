//! uprename - Unreal project renamer
//!
//! Renames a base-path Unreal Engine project in place: rewrites the project
//! identifier in file contents and file names across `Source/<old>`, handles
//! the `*_API` export-macro form, deletes stale solution/cache artifacts, and
//! finally moves the source directory to its new name.
//!
//! The run is gated behind two confirmations and mutates nothing before the
//! second one. Per-file failures are isolated and reported at the end rather
//! than aborting the run.

pub mod artifacts;
pub mod migrate;
pub mod orchestrator;
pub mod prompt;
pub mod rewrite;
pub mod tree;

// Re-export commonly used items
pub use artifacts::{clean_stale_artifacts, STALE_EXTENSIONS};
pub use migrate::{migrate_file, MigrationOutcome, MigrationResult};
pub use orchestrator::{
    discover_descriptor, run, AbortReason, RenameError, RunOptions, RunOutcome, RunSummary,
};
pub use prompt::{AssumeYes, Prompter, StdioPrompter};
pub use rewrite::{rewrite_content, rewrite_name, MACRO_SUFFIX};
pub use tree::snapshot_files;
