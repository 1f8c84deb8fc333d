//! Tests for the kbner binary: stdin/stdout plumbing, flags and failures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kbner() -> Command {
    Command::cargo_bin("kbner").unwrap()
}

#[test]
fn test_help_lists_commands() {
    kbner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("locations"))
        .stdout(predicate::str::contains("orglinks"))
        .stdout(predicate::str::contains("closure"));
}

#[test]
fn test_spans_from_stdin() {
    kbner()
        .arg("spans")
        .write_stdin("s1\tParis and London\tNNP CC NNP\n")
        .assert()
        .success()
        .stdout("s1\t0\t0\t1\trun\tParis\ns1\t1\t2\t3\trun\tLondon\ns1\t2\t0\t3\tand_joined\tParis and London\n");
}

#[test]
fn test_spans_jsonl() {
    kbner()
        .args(["spans", "--format", "jsonl"])
        .write_stdin("s1\tin Paris\tIN NNP\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"Paris\""));
}

#[test]
fn test_malformed_line_fails_with_line_number() {
    kbner()
        .arg("lists")
        .write_stdin("d\ts\tParis\tNNP\nd\ts\tParis\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR: lists"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_locations_with_missing_gazetteer() {
    let dir = TempDir::new().unwrap();
    kbner()
        .args(["locations", "--gazetteer"])
        .arg(dir.path().join("cities.txt"))
        .write_stdin("s1\tParis\tNNP\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing file"));
}

#[test]
fn test_locations_from_file() {
    let dir = TempDir::new().unwrap();
    let mut cols = vec![String::new(); 16];
    cols[0] = "7".into();
    cols[1] = "2988507".into();
    cols[2] = "Paris".into();
    cols[5] = "48.85".into();
    cols[6] = "2.35".into();
    cols[9] = "FR".into();
    cols[15] = "2138551".into();
    let cities = dir.path().join("cities.txt");
    fs::write(&cities, cols.join("\t") + "\n").unwrap();
    let input = dir.path().join("sentences.tsv");
    fs::write(&input, "s1\tflights to Paris\tNNS TO NNP\n").unwrap();

    kbner()
        .arg("locations")
        .arg("--gazetteer")
        .arg(&cities)
        .arg(&input)
        .assert()
        .success()
        .stdout("\\N\ts1_2_3_7\ts1\t0\tParis\t2\t3\t7\t1\t{is_most_populous,country_FR}\n");
}

#[test]
fn test_missing_input_file() {
    kbner()
        .args(["orgs", "does-not-exist.tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.tsv"));
}

#[test]
fn test_closure_over_stdin() {
    kbner()
        .args(["closure", "--seed", "515"])
        .write_stdin("100\t279\t515\n90\t31\t100\n91\t31\t5\n")
        .assert()
        .success()
        .stdout("90\t515\n");
}

#[test]
fn test_orglinks_warn_threshold() {
    kbner()
        .args(["orglinks", "--warn-above", "1"])
        .write_stdin("d1\tm0 m1\tIBM|^|IBM Corp\t0 4\t1 6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\\N\tm1\tm0\t\\N\t{IS_PREFIX}"))
        .stderr(predicate::str::contains("2 mentions"));
}

#[test]
fn test_bad_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("kbner.toml");
    fs::write(&config, "unknown_key = 1\n").unwrap();
    kbner()
        .arg("spans")
        .arg("--config")
        .arg(&config)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
