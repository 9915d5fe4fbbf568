//! Strategy experiments.
//!
//! Runs the standard report: the best fixed dice count for six- and
//! four-sided dice, and the win rate of each provided strategy against a
//! fixed-roll baseline. Win-rate games can be spread over a rayon thread
//! pool; every sample game then gets its own seeded dice so a run with a
//! fixed seed is reproducible regardless of scheduling.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dice::FairDice;
use crate::game::PlayError;
use crate::rules::{Player, RuleError, MAX_ROLLS};
use crate::strategy::{
    always_roll, AlwaysRoll, BaconStrategy, FinalStrategy, Strategy, SwapStrategy,
};

use super::averaging::{average_win_rate, max_scoring_num_rolls, winner, DEFAULT_NUM_SAMPLES};

/// Faces on the dice used for win-rate games.
const WIN_RATE_SIDES: u32 = 6;

/// Errors from loading an experiment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to parse experiment config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid experiment config: {0}")]
    Invalid(String),
}

/// Errors that abort an experiment run.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Play(#[from] PlayError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<RuleError> for ExperimentError {
    fn from(err: RuleError) -> Self {
        ExperimentError::Play(PlayError::Rule(err))
    }
}

/// Configuration for an experiment run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Samples per estimate (turns for dice counts, games per seat for win rates).
    pub num_samples: usize,
    /// Worker threads for win-rate games; 1 runs everything on the caller's thread.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Dice count rolled every turn by the baseline strategy.
    pub baseline_rolls: u32,
    /// Suppress progress output on stderr.
    pub quiet: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            num_samples: DEFAULT_NUM_SAMPLES,
            threads: 1,
            seed: 0,
            baseline_rolls: 4,
            quiet: false,
        }
    }
}

impl ExperimentConfig {
    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_samples == 0 {
            return Err(ConfigError::Invalid("num_samples must be positive".into()));
        }
        if self.threads == 0 {
            return Err(ConfigError::Invalid("threads must be positive".into()));
        }
        if self.baseline_rolls > MAX_ROLLS {
            return Err(ConfigError::Invalid(format!(
                "baseline_rolls must be at most {}, got {}",
                MAX_ROLLS, self.baseline_rolls
            )));
        }
        Ok(())
    }
}

/// Loads and validates an experiment configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ExperimentConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Parses and validates an experiment configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<ExperimentConfig, ConfigError> {
    let config: ExperimentConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// The estimated win rate of one named strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRate {
    pub strategy: String,
    pub win_rate: f64,
}

/// Results of a full experiment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    pub num_samples: usize,
    pub baseline: String,
    pub six_sided_max_rolls: u32,
    pub four_sided_max_rolls: u32,
    pub win_rates: Vec<WinRate>,
}

/// Dice for one sample game: seeded `seed + sample`, or entropy when `seed == 0`.
fn sample_dice(seed: u64, sample: usize) -> FairDice {
    if seed != 0 {
        FairDice::seeded(WIN_RATE_SIDES, seed.wrapping_add(sample as u64))
    } else {
        FairDice::new(WIN_RATE_SIDES)
    }
}

/// Estimates the win rate of `strategy` against `baseline`.
///
/// Runs on the caller's thread when `config.threads <= 1`, otherwise on a
/// rayon pool of `config.threads` workers.
pub fn estimate_win_rate<S, B>(
    strategy: &S,
    baseline: &B,
    config: &ExperimentConfig,
) -> Result<f64, ExperimentError>
where
    S: Strategy + Sync + ?Sized,
    B: Strategy + Sync + ?Sized,
{
    if config.threads > 1 {
        estimate_win_rate_parallel(strategy, baseline, config)
    } else {
        let mut dice = FairDice::from_seed_or_entropy(WIN_RATE_SIDES, config.seed);
        Ok(average_win_rate(
            strategy,
            baseline,
            &mut dice,
            config.num_samples,
        )?)
    }
}

/// Parallel win-rate estimate. Sample `i` plays with dice seeded
/// `seed + i` as player 0 and `seed + num_samples + i` as player 1.
fn estimate_win_rate_parallel<S, B>(
    strategy: &S,
    baseline: &B,
    config: &ExperimentConfig,
) -> Result<f64, ExperimentError>
where
    S: Strategy + Sync + ?Sized,
    B: Strategy + Sync + ?Sized,
{
    let n = config.num_samples;
    if n == 0 {
        return Err(RuleError::NoSamples.into());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let (first, second) = pool.install(|| {
        let first = mean_winner_index(n, |i| {
            let mut dice = sample_dice(config.seed, i);
            winner(strategy, baseline, &mut dice)
        });
        let second = mean_winner_index(n, |i| {
            let mut dice = sample_dice(config.seed, n + i);
            winner(baseline, strategy, &mut dice)
        });
        (first, second)
    });

    let as_player_0 = 1.0 - first?;
    let as_player_1 = second?;
    Ok((as_player_0 + as_player_1) / 2.0)
}

/// Plays `n` games in parallel and returns the mean winner index.
fn mean_winner_index<F>(n: usize, play_one: F) -> Result<f64, PlayError>
where
    F: Fn(usize) -> Result<Player, PlayError> + Sync + Send,
{
    let winners: Vec<Player> = (0..n)
        .into_par_iter()
        .map(play_one)
        .collect::<Result<_, _>>()?;
    let total: usize = winners.iter().map(|p| p.index()).sum();
    Ok(total as f64 / n as f64)
}

/// Runs the standard experiment report.
pub fn run_experiments(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;

    let start = Instant::now();
    let mut six_sided = FairDice::from_seed_or_entropy(6, config.seed);
    let six_sided_max_rolls = max_scoring_num_rolls(&mut six_sided, config.num_samples)?;
    let mut four_sided = FairDice::from_seed_or_entropy(4, config.seed);
    let four_sided_max_rolls = max_scoring_num_rolls(&mut four_sided, config.num_samples)?;
    if !config.quiet {
        eprintln!(
            "Max scoring num rolls: {} (six-sided), {} (four-sided) in {:.1}s",
            six_sided_max_rolls,
            four_sided_max_rolls,
            start.elapsed().as_secs_f64()
        );
    }

    let baseline = AlwaysRoll(config.baseline_rolls);
    let candidates: Vec<(&str, Box<dyn Strategy + Sync>)> = vec![
        ("always_roll(8)", Box::new(always_roll(8))),
        ("bacon_strategy", Box::new(BaconStrategy::default())),
        ("swap_strategy", Box::new(SwapStrategy::default())),
        ("final_strategy", Box::new(FinalStrategy)),
    ];

    let mut win_rates = Vec::with_capacity(candidates.len());
    for (i, (name, strategy)) in candidates.iter().enumerate() {
        let started = Instant::now();
        let win_rate = estimate_win_rate(strategy.as_ref(), &baseline, config)?;
        if !config.quiet {
            eprintln!(
                "Experiment {}/{}: {} win rate {:.4} ({:.1}s)",
                i + 1,
                candidates.len(),
                name,
                win_rate,
                started.elapsed().as_secs_f64()
            );
        }
        win_rates.push(WinRate {
            strategy: name.to_string(),
            win_rate,
        });
    }

    Ok(ExperimentReport {
        num_samples: config.num_samples,
        baseline: format!("always_roll({})", config.baseline_rolls),
        six_sided_max_rolls,
        four_sided_max_rolls,
        win_rates,
    })
}

/// Writes the report as human-readable lines.
pub fn write_report<W: Write>(report: &ExperimentReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Max scoring num rolls for six-sided dice: {}",
        report.six_sided_max_rolls
    )?;
    writeln!(
        out,
        "Max scoring num rolls for four-sided dice: {}",
        report.four_sided_max_rolls
    )?;
    for entry in &report.win_rates {
        writeln!(
            out,
            "{} win rate against {}: {:.4}",
            entry.strategy, report.baseline, entry.win_rate
        )?;
    }
    out.flush()
}

/// Writes the report as a single JSON object followed by a newline.
pub fn write_report_json<W: Write>(report: &ExperimentReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()
}
