use crate::common::{Workspace, bin};
use predicates::prelude::*;

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_analyser"))
        .stdout(predicate::str::contains("--min-chars"));
}

#[test]
fn analyses_a_single_file() {
    let ws = Workspace::new();
    let path = ws.file("notes.txt", "This file is a file\n\nwith 3 lines of text\n");

    bin()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Count how many lines are in the file --------\n3\n"))
        .stdout(predicate::str::contains("The word 'file' is mentioned 2 times"))
        .stdout(predicate::str::contains("Lines containing numbers: [with 3 lines of text]"))
        .stdout(predicate::str::contains("Comparison between files").not());
}

#[test]
fn compares_two_files_relative_to_base_dir() {
    let ws = Workspace::new();
    ws.file("one.txt", "apple banana\n");
    ws.file("two.txt", "Banana cherry APPLE\n");

    bin()
        .arg("--base-dir")
        .arg(ws.path())
        .args(["one.txt", "two.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Common words: [apple, banana]"));
}

#[test]
fn custom_word_and_limits() {
    let ws = Workspace::new();
    let path = ws.file("cats.txt", "The cat sat\nthe CAT ran far away\n");

    bin()
        .args(["--word", "cat", "--top", "2", "--min-chars", "3"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The word 'cat' is mentioned 2 times"))
        .stdout(predicate::str::contains("Longest words: [away, The]"))
        .stdout(predicate::str::contains("First word with more than 3 characters: away"));
}

#[test]
fn missing_file_fails_with_read_error() {
    let ws = Workspace::new();

    bin()
        .arg(ws.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to analyse"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn malformed_regex_fails_before_reading() {
    let ws = Workspace::new();

    bin()
        .args(["--regex", "(unclosed"])
        .arg(ws.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern '(unclosed'"));
}
