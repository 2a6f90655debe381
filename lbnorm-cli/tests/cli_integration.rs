//! Integration tests for the lbnorm CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn lbnorm() -> Command {
    Command::cargo_bin("lbnorm").unwrap()
}

#[test]
fn test_normalize_file() {
    lbnorm()
        .arg("normalize")
        .arg("-i")
        .arg(fixture_path("news.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Den zwielefte Mäerz zweedausendvéieranzwanzeg um véierzéng Auer drësseg",
        ))
        .stdout(predicate::str::contains("dausendfënnefhonnert Euro"))
        .stdout(predicate::str::contains("fir dräi Kanner"));
}

#[test]
fn test_normalize_stdin() {
    lbnorm()
        .arg("normalize")
        .write_stdin("Ech hunn 3 Kanner.\n")
        .assert()
        .success()
        .stdout("Ech hunn dräi Kanner.\n");
}

#[test]
fn test_glob_pattern_keeps_file_order() {
    let output = lbnorm()
        .arg("normalize")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let news = stdout.find("dräi Kanner").unwrap();
    let weather = stdout.find("minus fënnef Grad").unwrap();
    assert!(news < weather);
}

#[test]
fn test_json_output() {
    lbnorm()
        .args(["normalize", "-f", "json"])
        .arg("-i")
        .arg(fixture_path("weather.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains(
            "Et waren minus fënnef Grad an zwou Stonnen Reen.",
        ));
}

#[test]
fn test_trace_output() {
    let output = lbnorm()
        .args(["normalize", "--trace"])
        .write_stdin("17:58")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["source"], "-");
    assert_eq!(value[0]["text"], "siwwenzéng Auer aachtafofzeg");
    let steps = value[0]["trace"].as_array().unwrap();
    assert_eq!(steps.len(), 15);
    assert!(steps
        .iter()
        .any(|s| s["pass"] == "time" && s["changed"] == true));
}

#[test]
fn test_skip_pass() {
    lbnorm()
        .args(["normalize", "--skip", "time"])
        .write_stdin("17:58")
        .assert()
        .success()
        .stdout("siwwenzéng:aachtafofzeg\n");
}

#[test]
fn test_unknown_pass_fails() {
    lbnorm()
        .args(["normalize", "--skip", "weather"])
        .write_stdin("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("weather"));
}

#[test]
fn test_units_only() {
    lbnorm()
        .args(["normalize", "--units-only"])
        .write_stdin("3 kg an 1970er, Säit 4")
        .assert()
        .success()
        .stdout("dräi Kilogramm an nonzénghonnertsiwwenzeger, Säit 4\n");
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    lbnorm()
        .args(["normalize", "-i"])
        .arg(fixture_path("weather.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "Et waren minus fënnef Grad an zwou Stonnen Reen.\n");
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("lbnorm.toml");
    fs::write(
        &config,
        "[normalize]\nskip_passes = [\"time\"]\nalways_show_major = true\n\n[output]\npretty_json = false\n",
    )
    .unwrap();

    lbnorm()
        .args(["normalize", "-f", "json", "-c"])
        .arg(&config)
        .write_stdin("17:58 a 0,01 EUR")
        .assert()
        .success()
        .stdout(
            "[{\"source\":\"-\",\"text\":\"siwwenzéng:aachtafofzeg a null Euro an een Cent\"}]\n",
        );
}

#[test]
fn test_invalid_file() {
    lbnorm()
        .args(["normalize", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_spell() {
    lbnorm()
        .args(["spell", "year", "1970"])
        .assert()
        .success()
        .stdout("nonzénghonnertsiwwenzeg\n");

    lbnorm()
        .args(["spell", "currency", "2,50", "--code", "EUR"])
        .assert()
        .success()
        .stdout("zwee Euro a fofzeg Cent\n");

    lbnorm()
        .args(["spell", "cardinal", "-3"])
        .assert()
        .success()
        .stdout("minus dräi\n");
}

#[test]
fn test_spell_errors_exit_non_zero() {
    lbnorm()
        .args(["spell", "ordinal", "-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot form an ordinal from -4"));

    lbnorm()
        .args(["spell", "currency", "5", "-c", "CHF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("currency 'CHF' not supported"));
}

#[test]
fn test_validate_custom_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("lexicon.toml");
    fs::write(
        &lexicon,
        include_str!("../../lbnorm-core/configs/lexicon/luxembourgish.toml"),
    )
    .unwrap();

    lbnorm()
        .args(["validate", "--lexicon"])
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Lexicon is valid!"))
        .stdout(predicate::str::contains("Language code: lb"));
}

#[test]
fn test_validate_requires_a_file() {
    lbnorm().arg("validate").assert().failure();
}

#[test]
fn test_validate_broken_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules = temp_dir.path().join("rules.toml");
    fs::write(&rules, "[metadata]\ncode = \"lb\"\n").unwrap();

    lbnorm()
        .args(["validate", "--rules"])
        .arg(&rules)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Rule table is invalid!"));
}

#[test]
fn test_list_passes() {
    lbnorm()
        .args(["list", "passes"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 1. phone\n 2. currency\n"))
        .stdout(predicate::str::contains("bare-number"));
}

#[test]
fn test_list_currencies() {
    lbnorm()
        .args(["list", "currencies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR  Euro / Cent"))
        .stdout(predicate::str::contains("GBP  Pond / Penny"));
}

#[test]
fn test_help_command() {
    lbnorm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Luxembourgish text normalization"));
}
