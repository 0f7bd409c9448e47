use predicates::prelude::*;

use crate::common::{STATISTICS, Workspace};

#[test]
fn prints_and_persists_the_summary() {
    let ws = Workspace::new();
    ws.write("nums.txt", "2\n4\n4\n4\n5\n5\n7\n9\n");

    let output = ws.command(STATISTICS).arg("nums.txt").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();

    assert_eq!(rows.len(), 7);
    assert_eq!(&rows[..5], ["COUNT\t8", "MEAN\t5.0", "MEDIAN\t4.5", "MODE\t4.0", "SD\t2.0"]);
    assert!(rows[5].starts_with("VARIANCE\t4.5714285714"));
    assert!(rows[6].starts_with("TIME_ELAPSED_SECONDS\t"));

    assert_eq!(ws.read("nums_Results_generated.txt"), stdout);
}

#[test]
fn invalid_lines_are_diagnosed_in_order() {
    let ws = Workspace::new();
    ws.write("mixed.txt", "1\n\nabc\n3\n");

    ws.command(STATISTICS)
        .arg("mixed.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Invalid data at line 2: empty\nInvalid data at line 3: abc\nCOUNT\t2\n",
        ))
        .stdout(predicate::str::contains("MODE\t#N/A"));

    let saved = ws.read("mixed_Results_generated.txt");
    assert!(saved.starts_with("COUNT\t2\n"));
    assert!(!saved.contains("Invalid data"));
}

#[test]
fn no_valid_numbers_skips_the_results_file() {
    let ws = Workspace::new();
    ws.write("junk.txt", "x\n\ny\n");

    ws.command(STATISTICS)
        .arg("junk.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid numeric data found.\nTIME_ELAPSED_SECONDS\t"));

    assert!(!ws.exists("junk_Results_generated.txt"));
}

#[test]
fn results_dir_flag_redirects_output() {
    let ws = Workspace::new();
    ws.write("nums.txt", "1.5\n2.5\n");

    ws.command(STATISTICS).args(["--results-dir", "out/nested", "nums.txt"]).assert().success();

    assert!(ws.read("out/nested/nums_Results_generated.txt").starts_with("COUNT\t2\nMEAN\t2.0\n"));
    assert!(!ws.exists("nums_Results_generated.txt"));
}

#[test]
fn results_dir_can_come_from_environment() {
    let ws = Workspace::new();
    ws.write("nums.txt", "3\n");

    ws.command(STATISTICS)
        .env("LINE_TOOLS_RESULTS_DIR", ws.path().join("env_out"))
        .arg("nums.txt")
        .assert()
        .success();

    let saved = ws.read("env_out/nums_Results_generated.txt");
    assert!(saved.contains("SD\t0.0\nVARIANCE\t0.0\n"));
}
