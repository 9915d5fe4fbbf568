//! Monte Carlo estimates over repeated calls.
//!
//! Everything here is sequential and draws from a single caller-supplied
//! dice source, so results are reproducible with seeded or test dice.

use crate::commentary::Silence;
use crate::dice::Dice;
use crate::game::{play, GameConfig, PlayError};
use crate::rules::{roll_dice, Player, RuleError, MAX_ROLLS};
use crate::strategy::Strategy;

/// Number of samples used when the caller has no preference.
pub const DEFAULT_NUM_SAMPLES: usize = 1000;

/// Calls `f` exactly `num_samples` times and returns the mean of its results.
///
/// The first error from `f` aborts the estimate.
pub fn average_of<F, E>(num_samples: usize, mut f: F) -> Result<f64, E>
where
    F: FnMut() -> Result<f64, E>,
    E: From<RuleError>,
{
    if num_samples == 0 {
        return Err(RuleError::NoSamples.into());
    }
    let mut total = 0.0;
    for _ in 0..num_samples {
        total += f()?;
    }
    Ok(total / num_samples as f64)
}

/// Returns the dice count (1 to 10) with the highest average turn score.
///
/// Ties go to the smaller count.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(
    dice: &mut D,
    num_samples: usize,
) -> Result<u32, RuleError> {
    let mut best_average = 0.0;
    let mut best_rolls = 0;
    for num_rolls in 1..=MAX_ROLLS {
        let average = average_of(num_samples, || roll_dice(num_rolls, dice).map(f64::from))?;
        if average > best_average {
            best_average = average;
            best_rolls = num_rolls;
        }
    }
    Ok(best_rolls)
}

/// Plays one game from the default start and returns the winner.
///
/// Player 0 wins only with a strictly higher final score.
pub fn winner<S0, S1, D>(
    strategy0: &S0,
    strategy1: &S1,
    dice: &mut D,
) -> Result<Player, PlayError>
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    D: Dice + ?Sized,
{
    let (score0, score1) = play(
        strategy0,
        strategy1,
        dice,
        &mut Silence,
        &GameConfig::default(),
    )?;
    if score0 > score1 {
        Ok(Player::Zero)
    } else {
        Ok(Player::One)
    }
}

/// Win rate of `strategy` against `baseline`, averaged over playing first
/// and playing second.
pub fn average_win_rate<S, B, D>(
    strategy: &S,
    baseline: &B,
    dice: &mut D,
    num_samples: usize,
) -> Result<f64, PlayError>
where
    S: Strategy + ?Sized,
    B: Strategy + ?Sized,
    D: Dice + ?Sized,
{
    let as_player_0 = 1.0
        - average_of(num_samples, || {
            winner(strategy, baseline, dice).map(|p| p.index() as f64)
        })?;
    let as_player_1 = average_of(num_samples, || {
        winner(baseline, strategy, dice).map(|p| p.index() as f64)
    })?;
    Ok((as_player_0 + as_player_1) / 2.0)
}
