//! The Hog game loop.
//!
//! Alternates turns between two strategies until one player reaches the
//! goal, applying the swine swap after every turn and calling the commentary
//! hook once per round.

use std::io;

use thiserror::Error;

use crate::commentary::Commentary;
use crate::dice::Dice;
use crate::rules::{is_swap, take_turn, RuleError, GOAL_SCORE};
use crate::strategy::Strategy;

/// Errors that abort a game.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("commentary failed: {0}")]
    Commentary(#[from] io::Error),
}

/// Starting conditions for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting score for player 0.
    pub score0: u32,
    /// Starting score for player 1.
    pub score1: u32,
    /// The game ends once either score reaches this value.
    pub goal: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            score0: 0,
            score1: 0,
            goal: GOAL_SCORE,
        }
    }
}

/// Plays one turn for the player holding `score` and applies the swap rule.
fn play_turn<S, D>(
    strategy: &S,
    score: &mut u32,
    opponent_score: &mut u32,
    dice: &mut D,
) -> Result<(), RuleError>
where
    S: Strategy + ?Sized,
    D: Dice + ?Sized,
{
    let num_rolls = strategy.num_rolls(*score, *opponent_score);
    *score += take_turn(num_rolls, *opponent_score, dice)?;
    if is_swap(*score, *opponent_score) {
        std::mem::swap(score, opponent_score);
    }
    Ok(())
}

/// Simulates a game and returns the final scores, player 0's first.
///
/// Player 0 moves first. If player 0 reaches the goal, player 1 does not
/// move that round, but the round is still announced to `say`.
pub fn play<S0, S1, D, C>(
    strategy0: &S0,
    strategy1: &S1,
    dice: &mut D,
    say: &mut C,
    config: &GameConfig,
) -> Result<(u32, u32), PlayError>
where
    S0: Strategy + ?Sized,
    S1: Strategy + ?Sized,
    D: Dice + ?Sized,
    C: Commentary + ?Sized,
{
    let goal = config.goal;
    if goal == 0 || goal > GOAL_SCORE {
        return Err(RuleError::InvalidGoal(goal).into());
    }

    let mut score0 = config.score0;
    let mut score1 = config.score1;
    while score0 < goal && score1 < goal {
        play_turn(strategy0, &mut score0, &mut score1, dice)?;
        if score0 < goal && score1 < goal {
            play_turn(strategy1, &mut score1, &mut score0, dice)?;
        }
        say.on_round(score0, score1)?;
    }
    Ok((score0, score1))
}
