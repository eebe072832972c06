use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn renumerate() -> Command {
    let mut cmd = Command::cargo_bin("renumerate").unwrap();
    cmd.env_remove("RENUMERATE_YES").env("NO_COLOR", "1");
    cmd
}

fn photos() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in ["photo_003.jpg", "photo_001.jpg", "photo_002.jpg"] {
        temp_dir.child(name).write_str(name).unwrap();
    }
    temp_dir
}

#[test]
fn test_help_command() {
    renumerate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rename the files of a directory in natural order",
        ));
}

#[test]
fn test_version_subcommand() {
    renumerate()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("renumerate 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    renumerate()
        .args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r#"\{"name":"renumerate","version":"0\.1\.0"\}"#).unwrap(),
        );
}

#[test]
fn test_rename_with_yes_applies() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", ".", "--prefix", "image_", "--yes"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_001.jpg -> image_1.jpg"))
        .stdout(predicate::str::contains("Successful: 3, Failed: 0"));

    temp_dir.child("image_1.jpg").assert("photo_001.jpg");
    temp_dir.child("image_2.jpg").assert("photo_002.jpg");
    temp_dir.child("image_3.jpg").assert("photo_003.jpg");
    temp_dir.child("photo_001.jpg").assert(predicate::path::missing());
}

#[test]
fn test_preview_does_not_modify() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", ".", "--scheme", "text-only", "--preview"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_001.jpg -> photo_.jpg"))
        .stdout(predicate::str::contains("photo_002.jpg -> photo__2.jpg"))
        .stdout(predicate::str::contains("No files were modified."));

    temp_dir.child("photo_001.jpg").assert(predicate::path::exists());
    temp_dir.child("photo_.jpg").assert(predicate::path::missing());
}

#[test]
fn test_dry_run_reports_simulation() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", ".", "--scheme", "numbers-only", "--dry-run"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_003.jpg -> 003.jpg"))
        .stdout(predicate::str::contains("(simulated)"));

    temp_dir.child("003.jpg").assert(predicate::path::missing());
}

#[test]
fn test_preview_wins_over_dry_run() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", ".", "--dry-run", "--preview"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_001.jpg -> 1.jpg"))
        .stdout(predicate::str::contains("No files were modified."));

    temp_dir.child("photo_001.jpg").assert(predicate::path::exists());
    temp_dir.child("1.jpg").assert(predicate::path::missing());
}

#[test]
fn test_format_none_prints_counts_only() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", ".", "--preview", "--format", "none"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("->").not())
        .stdout(predicate::str::contains("Preview: 3 successful, 0 failed (simulated)"));
}

#[test]
fn test_rename_without_yes_fails_when_not_interactive() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", "."])
        .current_dir(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));

    temp_dir.child("photo_001.jpg").assert(predicate::path::exists());
}

#[test]
fn test_yes_from_environment() {
    let temp_dir = photos();

    renumerate()
        .env("RENUMERATE_YES", "1")
        .args(["rename", "."])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    temp_dir.child("1.jpg").assert("photo_001.jpg");
}

#[test]
fn test_missing_directory_exits_with_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    renumerate()
        .args(["rename", "missing", "--preview"])
        .current_dir(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_prefix_with_separator_is_rejected() {
    let temp_dir = photos();

    renumerate()
        .args(["rename", ".", "--prefix", "../", "--yes"])
        .current_dir(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn test_change_directory_flag() {
    let temp_dir = photos();

    renumerate()
        .arg("-C")
        .arg(temp_dir.path())
        .args(["rename", ".", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_001.jpg -> 1.jpg"));
}

#[test]
fn test_rename_json_output() {
    let temp_dir = photos();

    let output = renumerate()
        .args(["rename", ".", "--yes", "--output", "json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["mode"], "execute");
    assert_eq!(parsed["summary"]["successful"], 3);
    assert_eq!(parsed["renames"][0]["destination"], "1.jpg");
}

#[test]
fn test_list_command() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["file10.txt", "file2.txt", "file1.txt"] {
        temp_dir.child(name).touch().unwrap();
    }

    renumerate()
        .args(["list", "."])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)file1\.txt.*file2\.txt.*file10\.txt").unwrap())
        .stdout(predicate::str::contains("3 files, sorted by name"));
}

#[test]
fn test_list_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("PreviewFemale3D_9.mp4").touch().unwrap();

    let output = renumerate()
        .args(["list", ".", "--output", "json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["files"][0]["number"], 3);
    assert_eq!(parsed["files"][0]["digits"], "39");
    assert_eq!(parsed["files"][0]["trailing"], 9);
}

#[test]
fn test_config_defaults_apply() {
    let temp_dir = photos();
    temp_dir
        .child(".renumerate/config.toml")
        .write_str("[defaults]\nprefix = \"cfg_\"\n")
        .unwrap();

    renumerate()
        .args(["rename", ".", "--preview"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_001.jpg -> cfg_1.jpg"));
}

#[test]
fn test_completions() {
    renumerate()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("renumerate"));
}
