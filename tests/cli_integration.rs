use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use tempfile::TempDir;

fn folder_structure() -> Command {
    Command::cargo_bin("folder-structure").unwrap()
}

fn create_test_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("proj");

    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("node_modules/left-pad")).unwrap();
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    File::create(root.join("package.json")).unwrap();
    File::create(root.join("src/index.js")).unwrap();
    File::create(root.join("node_modules/left-pad/index.js")).unwrap();

    dir
}

#[test]
fn shows_help() {
    folder_structure()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("directory tree"));
}

#[test]
fn shows_version() {
    folder_structure()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    folder_structure()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn generate_subcommand_help() {
    folder_structure()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-contents"));
}

#[test]
fn generate_to_stdout() {
    let dir = create_test_project();

    folder_structure()
        .args(["generate", "--stdout", "-s", ".git", "-S", "node_modules"])
        .arg(dir.path().join("proj"))
        .assert()
        .success()
        .stdout(predicate::eq(
            "proj/\n    ├── package.json\n    └── node_modules/\n    └── src/\n        └── index.js\n",
        ));
}

#[test]
fn generate_writes_output_file() {
    let dir = create_test_project();
    let output = dir.path().join("tree.txt");

    folder_structure()
        .args(["generate", "--skip", ".git,node_modules", "-o"])
        .arg(&output)
        .arg(dir.path().join("proj"))
        .assert()
        .success()
        .stdout(predicate::str::contains("saved to"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "proj/\n    ├── package.json\n    └── src/\n        └── index.js\n");
}

#[test]
fn quiet_suppresses_confirmation() {
    let dir = create_test_project();
    let output = dir.path().join("tree.txt");

    folder_structure()
        .args(["-q", "generate", "-o"])
        .arg(&output)
        .arg(dir.path().join("proj"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(output.exists());
}

#[test]
fn generate_nonexistent_path_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tree.txt");

    folder_structure()
        .args(["generate", "/nonexistent/path/12345", "-o"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));

    assert!(!output.exists());
}

#[test]
fn generate_file_as_root_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();

    folder_structure()
        .args(["generate", "--stdout"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn unwritable_output_fails() {
    let dir = create_test_project();

    folder_structure()
        .args(["generate", "-o", "/nonexistent/dir/tree.txt"])
        .arg(dir.path().join("proj"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/dir/tree.txt"));
}

#[test]
fn config_exclusions_are_applied() {
    let dir = create_test_project();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[exclude]\nskip_entirely = [\".git\"]\nskip_contents = [\"node_modules\"]\n\n[render]\nglyphs = \"precise\"\n",
    )
    .unwrap();

    folder_structure()
        .arg("--config")
        .arg(&config)
        .args(["generate", "--stdout"])
        .arg(dir.path().join("proj"))
        .assert()
        .success()
        .stdout(predicate::eq(
            "proj/\n    ├── package.json\n    ├── node_modules/\n    └── src/\n        └── index.js\n",
        ));
}

#[test]
fn default_output_goes_to_configured_directory() {
    let dir = create_test_project();
    let out_dir = dir.path().join("trees");
    fs::create_dir(&out_dir).unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!("[output]\ndirectory = {:?}\n", out_dir.to_string_lossy()),
    )
    .unwrap();

    folder_structure()
        .arg("-c")
        .arg(&config)
        .arg("generate")
        .arg(dir.path().join("proj"))
        .assert()
        .success();

    assert!(out_dir.join("proj_structure.txt").exists());
}

#[test]
fn invalid_config_path_fails() {
    folder_structure()
        .args(["--config", "/nonexistent/config.toml", "generate", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn completions_for_bash() {
    folder_structure()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folder-structure"));
}

#[test]
fn man_page() {
    folder_structure()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}
