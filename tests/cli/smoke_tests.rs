use predicates::prelude::*;

use crate::common::{CONVERSION, STATISTICS, WORD_COUNT, Workspace};

#[test]
fn shows_help() {
    let ws = Workspace::new();
    for bin in [STATISTICS, CONVERSION, WORD_COUNT] {
        ws.command(bin).arg("--help").assert().success().stdout(predicate::str::contains("Usage"));
    }
}

#[test]
fn help_names_the_binary() {
    Workspace::new()
        .command(WORD_COUNT)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word_count"));
}

#[test]
fn missing_argument_prints_usage_line() {
    Workspace::new()
        .command(STATISTICS)
        .assert()
        .success()
        .stdout("Usage: compute_statistics input_file.txt\n");
}

#[test]
fn extra_arguments_print_usage_line() {
    Workspace::new()
        .command(CONVERSION)
        .args(["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("Usage: convert_numbers input_file.txt\n");
}

#[test]
fn missing_input_reports_and_writes_nothing() {
    let ws = Workspace::new();
    for bin in [STATISTICS, CONVERSION, WORD_COUNT] {
        ws.command(bin)
            .arg("missing.txt")
            .assert()
            .success()
            .stdout("Error: file not found -> missing.txt\n");
    }
    assert!(!ws.exists("missing_Results_generated.txt"));
}

#[test]
fn missing_input_leaves_existing_results_untouched() {
    let ws = Workspace::new();
    ws.write("missing_Results_generated.txt", "COUNT\t1\nstale\n");

    ws.command(WORD_COUNT)
        .arg("missing.txt")
        .assert()
        .success()
        .stdout("Error: file not found -> missing.txt\n");

    assert_eq!(ws.read("missing_Results_generated.txt"), "COUNT\t1\nstale\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ws = Workspace::new();
    ws.write("nums.txt", "1\nx\n2\n");

    ws.command(STATISTICS)
        .args(["-v", "nums.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COUNT\t2\n"))
        .stderr(predicate::str::contains("2 of 3 lines accepted, 1 rejected"))
        .stderr(predicate::str::contains("results written to"));
}
