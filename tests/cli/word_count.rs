use predicates::prelude::*;

use crate::common::{WORD_COUNT, Workspace};

#[test]
fn ranks_words_by_count_then_alphabetically() {
    let ws = Workspace::new();
    ws.write("words.txt", "pear apple pear\n\nfig apple\nzebra pear\n");

    let output = ws.command(WORD_COUNT).arg("words.txt").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("Invalid data at line 2: empty"));
    let rows: Vec<Vec<&str>> = lines.map(|row| row.split_whitespace().collect()).collect();
    assert_eq!(rows[0], ["pear", "3"]);
    assert_eq!(rows[1], ["apple", "2"]);
    assert_eq!(rows[2], ["fig", "1"]);
    assert_eq!(rows[3], ["zebra", "1"]);
    assert_eq!(rows[4], ["Grand", "Total", "7"]);
    assert_eq!(rows[5][0], "TIME_ELAPSED_SECONDS");

    let saved = ws.read("words_Results_generated.txt");
    assert!(saved.starts_with(&format!("{:<20}{:>8}\n", "pear", 3)));
    assert!(!saved.contains("Invalid data"));
}

#[test]
fn words_are_case_sensitive() {
    let ws = Workspace::new();
    ws.write("case.txt", "Word word WORD word\n");

    ws.command(WORD_COUNT)
        .arg("case.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{:<20}{:>8}\n", "word", 2)));
}

#[test]
fn blank_file_has_no_data() {
    let ws = Workspace::new();
    ws.write("blank.txt", "");

    ws.command(WORD_COUNT)
        .arg("blank.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No valid data found.\n"));

    assert!(!ws.exists("blank_Results_generated.txt"));
}
