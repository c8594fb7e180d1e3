use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Lay out a minimal Unreal project: descriptor, stale build artifacts, and
/// a Source/<name> tree with API-macro content.
fn setup_game_project() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(
        root.join("Game.uproject"),
        "{\"Modules\":[{\"Name\":\"Game\"}]}",
    )
    .unwrap();
    fs::write(root.join("Game.sln"), "Microsoft Visual Studio Solution").unwrap();
    fs::write(root.join("Game.sdf"), "intellisense cache").unwrap();

    fs::create_dir_all(root.join("Source/Game/Private")).unwrap();
    fs::write(
        root.join("Source/Game/GameGameMode.h"),
        "GAME_API class AGameGameMode",
    )
    .unwrap();
    fs::write(
        root.join("Source/Game/Private/GameGameMode.cpp"),
        "AGameGameMode::AGameGameMode() {}",
    )
    .unwrap();
    fs::write(root.join("Source/Game/Game.Build.cs"), "public class Game").unwrap();

    dir
}

#[test]
fn test_end_to_end_rename() {
    let dir = setup_game_project();
    let root = dir.path();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(root)
        .arg("--yes")
        .arg("--new")
        .arg("Nova")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed Game to Nova"))
        .stdout(predicate::str::contains("Files migrated: 4"))
        .stdout(predicate::str::contains("Stale artifacts removed: 2"))
        .stdout(predicate::str::contains("Re-generate your project files"));

    // Descriptor renamed and rewritten.
    assert!(!root.join("Game.uproject").exists());
    assert_eq!(
        fs::read_to_string(root.join("Nova.uproject")).unwrap(),
        "{\"Modules\":[{\"Name\":\"Nova\"}]}"
    );

    // Stale artifacts deleted.
    assert!(!root.join("Game.sln").exists());
    assert!(!root.join("Game.sdf").exists());

    // Source tree renamed after migration; every occurrence of the old
    // identifier is replaced, including repeated and embedded ones.
    assert!(!root.join("Source/Game").exists());
    assert_eq!(
        fs::read_to_string(root.join("Source/Nova/NovaNovaMode.h")).unwrap(),
        "NOVA_API class ANovaNovaMode"
    );
    assert_eq!(
        fs::read_to_string(root.join("Source/Nova/Private/NovaNovaMode.cpp")).unwrap(),
        "ANovaNovaMode::ANovaNovaMode() {}"
    );
    assert_eq!(
        fs::read_to_string(root.join("Source/Nova/Nova.Build.cs")).unwrap(),
        "public class Nova"
    );
}

#[test]
fn test_missing_descriptor_fails_without_touching_anything() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "not a project").unwrap();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(dir.path())
        .arg("--yes")
        .arg("--new")
        .arg("Nova")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .uproject file found"));

    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "not a project"
    );
}

#[test]
fn test_yes_requires_new() {
    let dir = setup_game_project();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(dir.path())
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes requires --new"));

    // Nothing touched.
    assert!(dir.path().join("Game.uproject").exists());
    assert!(dir.path().join("Game.sln").exists());
}

#[test]
fn test_empty_old_name_is_rejected() {
    let dir = setup_game_project();
    let root = dir.path();
    let header_before = fs::read(root.join("Source/Game/GameGameMode.h")).unwrap();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(root)
        .arg("--old")
        .arg("")
        .arg("--yes")
        .arg("--new")
        .arg("Nova")
        .assert()
        .failure()
        .stderr(predicate::str::contains("project name is empty"));

    // Nothing mutated, despite the auto-accepted gates.
    assert!(root.join("Game.uproject").exists());
    assert!(root.join("Game.sln").exists());
    assert_eq!(
        fs::read(root.join("Source/Game/GameGameMode.h")).unwrap(),
        header_before
    );
}

#[test]
fn test_interactive_confirmations_accepted() {
    let dir = setup_game_project();

    // --new skips the name prompt; the two gates are answered on stdin.
    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(dir.path())
        .arg("--new")
        .arg("Nova")
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed Game to Nova"));

    assert!(dir.path().join("Nova.uproject").exists());
}

#[test]
fn test_declining_final_prompt_changes_nothing() {
    let dir = setup_game_project();
    let root = dir.path();
    let descriptor_before = fs::read(root.join("Game.uproject")).unwrap();
    let header_before = fs::read(root.join("Source/Game/GameGameMode.h")).unwrap();

    // Accept the first gate, decline the final one.
    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(root)
        .arg("--new")
        .arg("Nova")
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled; nothing was changed."));

    assert_eq!(
        fs::read(root.join("Game.uproject")).unwrap(),
        descriptor_before
    );
    assert_eq!(
        fs::read(root.join("Source/Game/GameGameMode.h")).unwrap(),
        header_before
    );
    assert!(root.join("Game.sln").exists());
    assert!(root.join("Game.sdf").exists());
    assert!(!root.join("Nova.uproject").exists());
    assert!(!root.join("Source/Nova").exists());
}

#[test]
fn test_unchanged_name_is_a_no_op() {
    let dir = setup_game_project();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(dir.path())
        .arg("--new")
        .arg("Game")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));

    assert!(dir.path().join("Game.uproject").exists());
    assert!(dir.path().join("Game.sln").exists());
}

#[test]
fn test_verbose_lists_migrated_files() {
    let dir = setup_game_project();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(dir.path())
        .arg("--yes")
        .arg("--new")
        .arg("Nova")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated:"));
}

#[test]
fn test_partial_failure_is_reported_but_does_not_abort() {
    let dir = setup_game_project();
    let root = dir.path();
    // A binary file the text migration cannot read.
    fs::write(root.join("Source/Game/GameAsset.bin"), [0xff, 0xfe, 0x00]).unwrap();

    let mut cmd = Command::cargo_bin("uprename").unwrap();
    cmd.arg(root)
        .arg("--yes")
        .arg("--new")
        .arg("Nova")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files migrated: 4"))
        .stdout(predicate::str::contains("Files failed: 1"))
        .stderr(predicate::str::contains("GameAsset.bin"));

    // The rest of the tree migrated and the directory still moved.
    assert!(root.join("Source/Nova/NovaNovaMode.h").exists());
    assert!(root.join("Source/Nova/GameAsset.bin").exists());
}
