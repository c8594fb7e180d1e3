//! Stale generated-artifact cleanup.

use std::fs;
use std::path::Path;

/// Generated files named after the project that become stale on rename.
/// `.sln` is the Visual Studio solution; `.sdf` and `.VC.db` are IntelliSense
/// caches. All are regenerated by "Generate project files".
pub const STALE_EXTENSIONS: &[&str] = &["sln", "sdf", "VC.db"];

/// Delete `root/<old>.<ext>` for each known stale extension. Best-effort: a
/// missing artifact is normal, and a failure on one never blocks the others.
/// Returns the number of artifacts actually removed.
pub fn clean_stale_artifacts(root: &Path, old: &str, verbose: bool) -> usize {
    let mut removed = 0;

    for ext in STALE_EXTENSIONS {
        let artifact = root.join(format!("{}.{}", old, ext));
        if !artifact.exists() {
            continue;
        }
        match fs::remove_file(&artifact) {
            Ok(()) => {
                removed += 1;
                if verbose {
                    println!("Removed stale artifact: {}", artifact.display());
                }
            }
            Err(err) => {
                eprintln!(
                    "Warning: could not remove {}: {}. Skipping.",
                    artifact.display(),
                    err
                );
            }
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_removes_known_artifacts_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Game.sln"), "solution").unwrap();
        fs::write(dir.path().join("Game.sdf"), "cache").unwrap();
        fs::write(dir.path().join("Game.VC.db"), "cache").unwrap();
        fs::write(dir.path().join("Game.uproject"), "{}").unwrap();
        fs::write(dir.path().join("Other.sln"), "solution").unwrap();

        let removed = clean_stale_artifacts(dir.path(), "Game", false);
        assert_eq!(removed, 3);
        assert!(!dir.path().join("Game.sln").exists());
        assert!(!dir.path().join("Game.sdf").exists());
        assert!(!dir.path().join("Game.VC.db").exists());
        // The descriptor and other projects' files are untouched.
        assert!(dir.path().join("Game.uproject").exists());
        assert!(dir.path().join("Other.sln").exists());
    }

    #[test]
    fn test_missing_artifacts_are_not_an_error() {
        let dir = tempdir().unwrap();
        assert_eq!(clean_stale_artifacts(dir.path(), "Game", false), 0);
    }
}
