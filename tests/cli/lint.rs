//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CLEAN: &str = "<html lang=\"en\">\n<body>\n<main>\n<h1>Title</h1>\n<h2>Section</h2>\n</main>\n</body>\n</html>\n";
const SKIPPED: &str = "<html lang=\"en\">\n<body>\n<main>\n<h1>Title</h1>\n<h3>Section</h3>\n</main>\n</body>\n</html>\n";

#[test]
fn test_lint_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, CLEAN).unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_with_violations() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, SKIPPED).unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("[heading-order]"))
        .stdout(predicate::str::contains("index.html:5:1"))
        .stdout(predicate::str::contains("Change <h3> to <h2>"))
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_lint_check_mode_clean() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, CLEAN).unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--check", test_file.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_lint_check_mode_violations() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, SKIPPED).unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Found"));
}

#[test]
fn test_lint_fix_mode() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, SKIPPED).unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--fix", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed 1 issue(s)"));

    let content = fs::read_to_string(&test_file).unwrap();
    assert!(content.contains("<h2>Section</h2>"));
}

#[test]
fn test_lint_fix_diff_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, SKIPPED).unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--fix", "--diff", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diff in"))
        .stdout(predicate::str::contains("<h2>Section</h2>"));

    assert_eq!(fs::read_to_string(&test_file).unwrap(), SKIPPED);
}

#[test]
fn test_lint_fix_stdin() {
    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--fix"])
        .write_stdin("<main><img src=\"a.png\"></main>")
        .assert()
        .success()
        .stdout(predicate::eq("<main><img alt=\"\" src=\"a.png\"></main>"));
}

#[test]
fn test_lint_stdin_php() {
    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--php"])
        .write_stdin("<html lang=\"en\"><main><?php echo '<img src=\"x.png\">'; ?></main></html>")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_json_format() {
    let output = cargo_bin_cmd!("a11ymate")
        .args(["lint", "--format", "json"])
        .write_stdin("<html lang=\"en\"><main><img src=\"a.png\"></main></html>")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["code"], "img-alt");
    assert_eq!(entries[0]["file"], "<stdin>");
    assert_eq!(entries[0]["line"], 1);
    assert_eq!(entries[0]["column"], 23);
    assert_eq!(entries[0]["fix"]["edits"][0]["replacement"], " alt=\"\"");
}

#[test]
fn test_lint_language_flag() {
    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--language", "de"])
        .write_stdin("<html lang=\"de\"><main><img src=\"a.png\"></main></html>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bild ohne Alternativtext"));
}

#[test]
fn test_lint_respects_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.html");
    fs::write(&test_file, "<main><h1>Title</h1></main>").unwrap();
    fs::write(
        temp_dir.path().join(".a11ymate.toml"),
        "language = \"de\"\n\n[rules]\ndisable = [\"html-lang\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("good.html"), CLEAN).unwrap();
    fs::write(temp_dir.path().join("bad.html"), SKIPPED).unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "<h1>a</h1><h4>b</h4>").unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["lint", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("bad.html"))
        .stdout(predicate::str::contains("good.html").not())
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}
