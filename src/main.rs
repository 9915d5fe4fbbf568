//! Hog -- plays the Hog dice game and evaluates strategies.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   -r, --run-experiments  Run strategy experiments and print the report
//!   --play                 Play one commented game (final strategy vs baseline)
//!   --samples N            Samples per estimate (default: 1000)
//!   --threads N            Worker threads for win-rate games (default: 1)
//!   --seed N               Random seed, 0 for entropy (default: 0)
//!   --config FILE          Load experiment settings from a JSON file
//!   --json                 Print the experiment report as JSON
//!   --quiet                Suppress progress output

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::str::FromStr;

use hog::commentary::{both, AnnounceLeadChanges, SayScores};
use hog::dice::FairDice;
use hog::experiment::{
    load_config, run_experiments, write_report, write_report_json, ExperimentConfig,
};
use hog::game::{play, GameConfig};
use hog::strategy::{AlwaysRoll, FinalStrategy};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ExperimentConfig::default();
    let mut run = false;
    let mut play_game = false;
    let mut json = false;
    let mut samples: Option<usize> = None;
    let mut threads: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--run-experiments" | "-r" => {
                run = true;
            }
            "--play" => {
                play_game = true;
            }
            "--samples" => {
                i += 1;
                samples = Some(parse_value(&args, i, "--samples"));
            }
            "--threads" => {
                i += 1;
                threads = Some(parse_value(&args, i, "--threads"));
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_value(&args, i, "--seed"));
            }
            "--config" => {
                i += 1;
                let path: String = parse_value(&args, i, "--config");
                config = match load_config(Path::new(&path)) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                };
            }
            "--json" => {
                json = true;
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    // Flags override the config file regardless of order.
    if let Some(n) = samples {
        config.num_samples = n;
    }
    if let Some(n) = threads {
        config.threads = n;
    }
    if let Some(s) = seed {
        config.seed = s;
    }
    config.quiet |= quiet;

    if !run && !play_game {
        print_usage();
        return;
    }

    if play_game {
        if let Err(e) = play_commented_game(&config) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }

    if run {
        if let Err(e) = config.validate() {
            eprintln!("{}", e);
            process::exit(1);
        }
        if !config.quiet {
            eprintln!(
                "Experiments: {} samples, {} threads, baseline always_roll({})",
                config.num_samples, config.threads, config.baseline_rolls
            );
        }
        let report = match run_experiments(&config) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        let written = if json {
            write_report_json(&report, &mut out)
        } else {
            write_report(&report, &mut out)
        };
        if let Err(e) = written {
            eprintln!("failed to write report: {}", e);
            process::exit(1);
        }
    }
}

/// Plays the final strategy against the baseline with score and lead-change
/// commentary on stdout.
fn play_commented_game(config: &ExperimentConfig) -> Result<(), hog::game::PlayError> {
    let mut dice = FairDice::from_seed_or_entropy(6, config.seed);
    let mut say = both(SayScores::new(io::stdout()), AnnounceLeadChanges::new(io::stdout()));
    let (score0, score1) = play(
        &FinalStrategy,
        &AlwaysRoll(config.baseline_rolls),
        &mut dice,
        &mut say,
        &GameConfig::default(),
    )?;
    let mut out = io::stdout();
    writeln!(out, "Final score: {} to {}", score0, score1)?;
    out.flush()?;
    Ok(())
}

/// Parses the value following a flag, exiting with usage on failure.
fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let parsed = args.get(i).and_then(|v| v.parse().ok());
    match parsed {
        Some(v) => v,
        None => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: hog [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --run-experiments  Run strategy experiments and print the report");
    eprintln!("  --play                 Play one commented game (final strategy vs baseline)");
    eprintln!("  --samples N            Samples per estimate (default: 1000)");
    eprintln!("  --threads N            Worker threads for win-rate games (default: 1)");
    eprintln!("  --seed N               Random seed, 0 for entropy (default: 0)");
    eprintln!("  --config FILE          Load experiment settings from a JSON file");
    eprintln!("  --json                 Print the experiment report as JSON");
    eprintln!("  --quiet                Suppress progress output");
    eprintln!("  --help                 Show this help");
}
