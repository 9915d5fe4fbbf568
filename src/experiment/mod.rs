//! Strategy evaluation.
//!
//! `averaging` holds the sequential Monte Carlo estimators; `runner` builds
//! the experiment report on top of them.

pub mod averaging;
pub mod runner;

pub use averaging::{
    average_of, average_win_rate, max_scoring_num_rolls, winner, DEFAULT_NUM_SAMPLES,
};
pub use runner::{
    estimate_win_rate, load_config, load_config_from_str, run_experiments, write_report,
    write_report_json, ConfigError, ExperimentConfig, ExperimentError, ExperimentReport, WinRate,
};
