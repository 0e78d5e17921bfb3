//! CLI integration tests for codebook
//!
//! These tests build small chapter trees in temporary directories and run the
//! `codebook` binary against them.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the codebook binary
fn codebook_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("codebook"));
    cmd.env_remove("CODEBOOK_ROOT")
        .env_remove("CODEBOOK_BOOK_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Create a project with a Book/ directory and two chapters
fn setup_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Book")).unwrap();
    write(
        dir.path(),
        "1-Elementary-Algorithms/1.1.1_Sorting_Algorithms.cpp",
        "void sort();\n",
    );
    write(
        dir.path(),
        "1-Elementary-Algorithms/1.4.1_Cycle_Detection_(Floyd).cpp",
        "void floyd();\n",
    );
    write(
        dir.path(),
        "3-Strings/3.1_Trim.cpp",
        "void trim();\n",
    );
    dir
}

fn read_chapter(dir: &TempDir, n: u32) -> String {
    fs::read_to_string(dir.path().join(format!("Book/chapter{}.tex", n))).unwrap()
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_generate_writes_one_file_per_chapter() {
    let dir = setup_project();

    codebook_cmd()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chapter1.tex"))
        .stdout(predicate::str::contains("chapter3.tex"));

    assert!(dir.path().join("Book/chapter1.tex").is_file());
    assert!(dir.path().join("Book/chapter3.tex").is_file());
    assert!(!dir.path().join("Book/chapter2.tex").exists());
}

#[test]
fn test_generate_subcommand_matches_default() {
    let dir = setup_project();

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();
    let default_run = read_chapter(&dir, 1);

    codebook_cmd()
        .args(["generate", "--root"])
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(read_chapter(&dir, 1), default_run);
}

#[test]
fn test_generate_embeds_sources_once() {
    let dir = setup_project();

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();

    let tex = read_chapter(&dir, 1);
    assert_eq!(tex.matches("void sort();\n").count(), 1);
    assert_eq!(tex.matches("void floyd();\n").count(), 1);
    assert_eq!(tex.matches("\\begin{lstlisting}").count(), 2);
    assert_eq!(tex.matches("\\end{lstlisting}").count(), 2);
}

#[test]
fn test_generate_uses_builtin_titles() {
    let dir = setup_project();

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();

    let tex = read_chapter(&dir, 1);
    assert!(tex.starts_with("\\chapter{Elementary Algorithms}\n"));
    assert!(tex.contains("\\section{Array Transformations}"));
    assert!(tex.contains("\\section{Cycle Detection}"));
    assert!(tex.contains("\\subsection{Cycle Detection (Floyd)}"));

    let tex = read_chapter(&dir, 3);
    assert!(tex.contains("\\section{String Utilities}"));
    assert!(!tex.contains("\\subsection"));
}

#[test]
fn test_generate_is_idempotent() {
    let dir = setup_project();

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();
    let first = fs::read(dir.path().join("Book/chapter1.tex")).unwrap();

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();
    let second = fs::read(dir.path().join("Book/chapter1.tex")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_skips_unmatched_names() {
    let dir = setup_project();
    write(dir.path(), "1-Elementary-Algorithms/1.1 Old Name.cpp", "old();\n");
    write(dir.path(), "1-Elementary-Algorithms/README.md", "readme\n");
    write(dir.path(), "Section-1-Graph-Theory/1.1_Dfs.cpp", "dfs();\n");

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();

    let tex = read_chapter(&dir, 1);
    assert!(!tex.contains("old();"));
    assert!(!tex.contains("readme"));
    assert!(!tex.contains("dfs();"));
}

#[test]
fn test_generate_skips_section_zero() {
    let dir = setup_project();
    write(dir.path(), "3-Strings/3.0_Template.cpp", "template();\n");

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();

    let tex = read_chapter(&dir, 3);
    assert!(!tex.contains("template();"));
    assert!(!tex.contains("\\setcounter{section}{0}"));
}

#[test]
fn test_generate_with_no_chapters() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Book")).unwrap();

    codebook_cmd()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No chapter directories found"));
}

#[test]
fn test_generate_json_report() {
    let dir = setup_project();

    let output = codebook_cmd()
        .args(["--format", "json", "--root"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let reports = json.as_array().unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["chapter"], 1);
    assert_eq!(reports[0]["title"], "Elementary Algorithms");
    assert_eq!(reports[0]["sections"], 2);
    assert_eq!(reports[0]["listings"], 2);
    assert_eq!(reports[1]["chapter"], 3);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_misplaced_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Book")).unwrap();
    write(dir.path(), "3-bar/2.1_foo.cpp", "int z;\n");

    codebook_cmd()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2.1_foo.cpp"))
        .stderr(predicate::str::contains("chapter 3"))
        .stderr(predicate::str::contains("chapter 2"));

    assert!(!dir.path().join("Book/chapter3.tex").exists());
}

#[test]
fn test_invalid_utf8_source_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Book")).unwrap();
    fs::create_dir_all(dir.path().join("1-intro")).unwrap();
    fs::write(dir.path().join("1-intro/1.1_bad.cpp"), b"\xff\xfe").unwrap();

    codebook_cmd()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.1_bad.cpp"));

    assert!(!dir.path().join("Book/chapter1.tex").exists());
}

#[test]
fn test_missing_book_dir_fails() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "1-intro/1.1_scan.cpp", "int x;");

    codebook_cmd()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book directory does not exist"));
}

#[test]
fn test_outside_project_fails() {
    let dir = TempDir::new().unwrap();

    codebook_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a codebook project"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_root_discovered_from_book_dir() {
    let dir = setup_project();

    codebook_cmd()
        .current_dir(dir.path().join("Book"))
        .assert()
        .success();

    assert!(dir.path().join("Book/chapter1.tex").is_file());
}

#[test]
fn test_root_from_env() {
    let dir = setup_project();

    codebook_cmd()
        .env("CODEBOOK_ROOT", dir.path())
        .assert()
        .success();

    assert!(dir.path().join("Book/chapter3.tex").is_file());
}

#[test]
fn test_config_file_book_dir() {
    let dir = setup_project();
    fs::create_dir_all(dir.path().join("tex")).unwrap();
    write(dir.path(), "codebook.toml", "book_dir = \"tex\"\n");

    codebook_cmd().arg("--root").arg(dir.path()).assert().success();

    assert!(dir.path().join("tex/chapter1.tex").is_file());
    assert!(!dir.path().join("Book/chapter1.tex").exists());
}

#[test]
fn test_book_dir_flag_overrides_config() {
    let dir = setup_project();
    fs::create_dir_all(dir.path().join("out")).unwrap();
    write(dir.path(), "codebook.toml", "book_dir = \"tex\"\n");

    codebook_cmd()
        .args(["--book-dir", "out", "--root"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("out/chapter1.tex").is_file());
}

#[test]
fn test_invalid_config_fails() {
    let dir = setup_project();
    write(dir.path(), "codebook.toml", "book_dir = 5\n");

    codebook_cmd()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse project config"));
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_shows_entries_without_writing() {
    let dir = setup_project();

    codebook_cmd()
        .args(["list", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter 1: Elementary Algorithms"))
        .stdout(predicate::str::contains("1.1.1"))
        .stdout(predicate::str::contains("1.4.1_Cycle_Detection_(Floyd).cpp"))
        .stdout(predicate::str::contains("Chapter 3: Strings"));

    assert!(!dir.path().join("Book/chapter1.tex").exists());
}

#[test]
fn test_list_json() {
    let dir = setup_project();
    write(dir.path(), "3-Strings/3.0_Template.cpp", "template();\n");

    let output = codebook_cmd()
        .args(["list", "--format", "json", "--root"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let chapters = json.as_array().unwrap();

    assert_eq!(chapters.len(), 2);
    let entries = chapters[1]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["file_name"], "3.0_Template.cpp");
    assert_eq!(entries[0]["listed"], false);
    assert_eq!(entries[1]["section_title"], "String Utilities");
    assert!(entries[1].get("subsection").is_none());
}

#[test]
fn test_list_reports_misplaced_file() {
    let dir = setup_project();
    write(dir.path(), "3-Strings/2.1_Heap.cpp", "heap();\n");

    codebook_cmd()
        .args(["list", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2.1_Heap.cpp"));
}
