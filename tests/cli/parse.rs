//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("a11ymate")
        .arg("parse")
        .write_stdin("<main><img src=\"a.png\"></main>")
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_name: \"main\""))
        .stdout(predicate::str::contains("tag_name: \"img\""))
        .stdout(predicate::str::contains("\"a.png\""));
}

#[test]
fn test_parse_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("page.html");
    fs::write(&test_file, "<html lang=\"en\">\n<body><h1>Title</h1></body>\n</html>").unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_name: \"html\""))
        .stdout(predicate::str::contains("tag_name: \"h1\""));
}

#[test]
fn test_parse_php_masks_blocks() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("page.php");
    fs::write(&test_file, "<main><?php echo '<h2>Hidden</h2>'; ?></main>").unwrap();

    cargo_bin_cmd!("a11ymate")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_name: \"main\""))
        .stdout(predicate::str::contains("h2").not());
}
