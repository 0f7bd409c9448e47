use predicates::prelude::*;

use crate::common::{CONVERSION, Workspace};

#[test]
fn lists_binary_and_hex_for_each_integer() {
    let ws = Workspace::new();
    ws.write("ints.txt", "0\n10\n255\n");

    let output = ws.command(CONVERSION).arg("ints.txt").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<Vec<&str>> = stdout.lines().map(|row| row.split_whitespace().collect()).collect();

    assert_eq!(rows[0], ["ITEM", "NUMBER", "BINARY", "HEX"]);
    assert_eq!(rows[1], ["1", "0", "0", "0"]);
    assert_eq!(rows[2], ["2", "10", "1010", "A"]);
    assert_eq!(rows[3], ["3", "255", "11111111", "FF"]);
    assert_eq!(rows[4][0], "TIME_ELAPSED_SECONDS");
    assert_eq!(rows.len(), 5);

    assert_eq!(ws.read("ints_Results_generated.txt"), stdout);
}

#[test]
fn non_integers_are_diagnosed_but_not_numbered() {
    let ws = Workspace::new();
    ws.write("ints.txt", "7\n2.5\nabc\n8\n");

    ws.command(CONVERSION)
        .arg("ints.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid data at line 2: not an integer -> 2.5\n"))
        .stdout(predicate::str::contains("Invalid data at line 3: abc\n"))
        .stdout(predicate::str::is_match(r"(?m)^2\s+8\s+1000\s+8\s*$").unwrap());
}

#[test]
fn no_integers_skips_the_results_file() {
    let ws = Workspace::new();
    ws.write("none.txt", "1.5\n");

    ws.command(CONVERSION)
        .arg("none.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid integer data found."));

    assert!(!ws.exists("none_Results_generated.txt"));
}
