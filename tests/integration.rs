//! Integration tests for the hog binary.
//!
//! Spawns the binary with various flag combinations and checks its stdout,
//! stderr, and exit status.

use std::fs;
use std::process::{Command, Output};

/// Runs the binary with `args` and returns its captured output.
fn run_hog(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_hog");
    Command::new(exe)
        .args(args)
        .output()
        .expect("failed to start hog")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn help_prints_usage() {
    let output = run_hog(&["--help"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: hog"));
    assert!(stderr.contains("--run-experiments"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = run_hog(&[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: hog"));
}

#[test]
fn unknown_argument_fails() {
    let output = run_hog(&["--bogus"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown argument: --bogus"));
}

#[test]
fn invalid_flag_value_fails() {
    let output = run_hog(&["-r", "--samples", "lots"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid --samples value"));
}

#[test]
fn zero_samples_is_rejected() {
    let output = run_hog(&["-r", "--samples", "0", "--quiet"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("num_samples must be positive"));
}

#[test]
fn run_experiments_text_report() {
    let output = run_hog(&["-r", "--samples", "40", "--seed", "7", "--quiet"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "quiet run should not log");
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6, "unexpected report: {:?}", lines);
    assert!(lines[0].starts_with("Max scoring num rolls for six-sided dice: "));
    assert!(lines[1].starts_with("Max scoring num rolls for four-sided dice: "));
    for (line, name) in lines[2..].iter().zip([
        "always_roll(8)",
        "bacon_strategy",
        "swap_strategy",
        "final_strategy",
    ]) {
        assert!(
            line.starts_with(&format!("{} win rate against always_roll(4): ", name)),
            "unexpected line: {}",
            line
        );
    }
}

#[test]
fn run_experiments_is_reproducible_with_seed() {
    let args = ["-r", "--samples", "30", "--seed", "11", "--threads", "2", "--quiet"];
    let a = run_hog(&args);
    let b = run_hog(&args);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn run_experiments_logs_progress() {
    let output = run_hog(&["-r", "--samples", "20", "--seed", "3"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Experiments: 20 samples"));
    assert!(stderr.contains("Experiment 4/4: final_strategy"));
}

#[test]
fn json_report() {
    let output = run_hog(&["-r", "--json", "--samples", "20", "--seed", "5", "--quiet"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["num_samples"], 20);
    assert_eq!(value["baseline"], "always_roll(4)");
    assert_eq!(value["win_rates"].as_array().unwrap().len(), 4);
}

#[test]
fn config_file_with_flag_override() {
    let dir = std::env::temp_dir().join(format!("hog-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("experiments.json");
    fs::write(&path, r#"{"num_samples": 15, "baseline_rolls": 5, "seed": 2}"#).unwrap();

    let output = run_hog(&[
        "--config",
        path.to_str().unwrap(),
        "-r",
        "--json",
        "--samples",
        "12",
        "--quiet",
    ]);
    fs::remove_dir_all(&dir).ok();

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout_lines(&output)[0].as_str()).unwrap();
    assert_eq!(value["num_samples"], 12);
    assert_eq!(value["baseline"], "always_roll(5)");
}

#[test]
fn missing_config_file_fails() {
    let output = run_hog(&["--config", "/nonexistent/hog.json", "-r"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read /nonexistent/hog.json"));
}

#[test]
fn play_prints_commentary_and_final_score() {
    let output = run_hog(&["--play", "--seed", "9"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines
        .iter()
        .any(|l| l.starts_with("Player 0 now has ") && l.contains(" and Player 1 now has ")));
    let last = lines.last().unwrap();
    assert!(last.starts_with("Final score: "), "last line: {}", last);

    let parts: Vec<u32> = last
        .trim_start_matches("Final score: ")
        .split(" to ")
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0] >= 100 || parts[1] >= 100);
}
