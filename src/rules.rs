//! Hog scoring rules.
//!
//! Turn resolution (dice turns with the pig rule, zero-dice free bacon) and
//! the swine swap predicate. Contract violations are reported as
//! `RuleError` rather than clamped.

use thiserror::Error;

use crate::dice::Dice;

/// The score that ends the game once reached.
pub const GOAL_SCORE: u32 = 100;

/// Maximum number of dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Caller contract violations for the scoring rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("must roll at least once")]
    NoDice,

    #[error("cannot roll more than {max} dice, got {0}", max = MAX_ROLLS)]
    TooManyDice(u32),

    #[error("the game should be over: opponent score {0} has reached {goal}", goal = GOAL_SCORE)]
    GameOver(u32),

    #[error("goal must be between 1 and {max}, got {0}", max = GOAL_SCORE)]
    InvalidGoal(u32),

    #[error("must take at least one sample")]
    NoSamples,
}

/// A player, identified by turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    /// Returns the opponent of this player.
    pub const fn other(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// Returns the player number (0 or 1).
    pub const fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Rolls `dice` exactly `num_rolls` times and returns the turn score.
///
/// The score is the sum of the outcomes, unless any outcome is 1, in which
/// case the turn scores exactly 1. Every roll is made even after a 1 comes up.
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Result<u32, RuleError> {
    if num_rolls == 0 {
        return Err(RuleError::NoDice);
    }
    let mut pig_out = false;
    let mut sum = 0;
    for _ in 0..num_rolls {
        let outcome = dice.roll();
        if outcome == 1 {
            pig_out = true;
        }
        sum += outcome;
    }
    Ok(if pig_out { 1 } else { sum })
}

/// Returns the points scored by rolling zero dice against `opponent_score`.
pub fn free_bacon(opponent_score: u32) -> Result<u32, RuleError> {
    if opponent_score >= GOAL_SCORE {
        return Err(RuleError::GameOver(opponent_score));
    }
    Ok(bacon_points(opponent_score))
}

/// Free bacon digit formula without the goal check: `2 * tens - ones`,
/// floored at 1 when the result is below 2.
pub(crate) fn bacon_points(opponent_score: u32) -> u32 {
    let tens = (opponent_score / 10) as i64;
    let ones = (opponent_score % 10) as i64;
    let points = 2 * tens - ones;
    if points > 1 {
        points as u32
    } else {
        1
    }
}

/// Plays one turn of `num_rolls` dice (0 for free bacon) and returns the
/// points scored by the current player.
pub fn take_turn<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut D,
) -> Result<u32, RuleError> {
    if num_rolls > MAX_ROLLS {
        return Err(RuleError::TooManyDice(num_rolls));
    }
    if opponent_score >= GOAL_SCORE {
        return Err(RuleError::GameOver(opponent_score));
    }
    if num_rolls == 0 {
        free_bacon(opponent_score)
    } else {
        roll_dice(num_rolls, dice)
    }
}

/// Returns the absolute difference between the last two digits of `score`.
fn digit_gap(score: u32) -> u32 {
    let ones = score % 10;
    let tens = (score / 10) % 10;
    tens.abs_diff(ones)
}

/// Adds `points` to `score` keeping only what `is_swap` reads: the result
/// has the same last two digits as the true sum and never overflows.
pub(crate) fn advance(score: u32, points: u32) -> u32 {
    score % 100 + points
}

/// Swine swap: true when both scores have the same absolute difference
/// between their tens and ones digits.
pub fn is_swap(player_score: u32, opponent_score: u32) -> bool {
    digit_gap(player_score) == digit_gap(opponent_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::TestDice;

    #[test]
    fn roll_dice_sums_outcomes() {
        let mut dice = TestDice::new(&[4, 2]);
        assert_eq!(roll_dice(2, &mut dice), Ok(6));
    }

    #[test]
    fn roll_dice_pig_rule() {
        let mut dice = TestDice::new(&[6, 1]);
        assert_eq!(roll_dice(2, &mut dice), Ok(1));
    }

    #[test]
    fn roll_dice_pig_rule_any_position() {
        for seq in [[1u32, 6, 6, 6], [6, 1, 6, 6], [6, 6, 6, 1], [1, 1, 1, 1]] {
            let mut dice = TestDice::new(&seq);
            assert_eq!(roll_dice(4, &mut dice), Ok(1), "sequence {:?}", seq);
        }
    }

    #[test]
    fn roll_dice_consumes_every_draw() {
        let mut dice = TestDice::new(&[1, 5, 5, 3]);
        assert_eq!(roll_dice(3, &mut dice), Ok(1));
        // The fourth outcome is next, so all three were drawn.
        assert_eq!(roll_dice(1, &mut dice), Ok(3));
    }

    #[test]
    fn roll_dice_without_ones_is_exact_sum() {
        let mut dice = TestDice::new(&[2, 3, 4, 5, 6]);
        assert_eq!(roll_dice(10, &mut dice), Ok(40));
    }

    #[test]
    fn roll_dice_rejects_zero_rolls() {
        let mut dice = TestDice::new(&[3]);
        assert_eq!(roll_dice(0, &mut dice), Err(RuleError::NoDice));
    }

    #[test]
    fn free_bacon_examples() {
        assert_eq!(free_bacon(21), Ok(3));
        assert_eq!(free_bacon(10), Ok(2));
        assert_eq!(free_bacon(0), Ok(1));
        assert_eq!(free_bacon(90), Ok(18));
        assert_eq!(free_bacon(19), Ok(1));
        assert_eq!(free_bacon(11), Ok(1));
    }

    #[test]
    fn free_bacon_is_at_least_one() {
        for score in 0..GOAL_SCORE {
            assert!(free_bacon(score).unwrap() >= 1, "score {}", score);
        }
    }

    #[test]
    fn free_bacon_rejects_finished_game() {
        assert_eq!(free_bacon(100), Err(RuleError::GameOver(100)));
    }

    #[test]
    fn take_turn_zero_dice_uses_free_bacon() {
        let mut dice = TestDice::new(&[6]);
        assert_eq!(take_turn(0, 21, &mut dice), Ok(3));
        // No draws consumed by free bacon.
        let mut dice = TestDice::new(&[4, 2]);
        take_turn(0, 50, &mut dice).unwrap();
        assert_eq!(dice.roll(), 4);
    }

    #[test]
    fn take_turn_rolls_dice() {
        let mut dice = TestDice::new(&[3, 4, 5]);
        assert_eq!(take_turn(3, 0, &mut dice), Ok(12));
    }

    #[test]
    fn take_turn_rejects_bad_arguments() {
        let mut dice = TestDice::new(&[3]);
        assert_eq!(take_turn(11, 0, &mut dice), Err(RuleError::TooManyDice(11)));
        assert_eq!(take_turn(2, 100, &mut dice), Err(RuleError::GameOver(100)));
    }

    #[test]
    fn is_swap_examples() {
        assert!(is_swap(21, 12));
        assert!(is_swap(19, 91));
        assert!(is_swap(0, 55));
        assert!(!is_swap(21, 13));
        // Only the last two digits count.
        assert!(is_swap(121, 12));
    }

    #[test]
    fn is_swap_is_symmetric() {
        for a in 0..160 {
            for b in 0..160 {
                assert_eq!(is_swap(a, b), is_swap(b, a), "({}, {})", a, b);
            }
        }
    }

    #[test]
    fn advance_keeps_swap_digits() {
        for score in [0, 9, 21, 99, 150, u32::MAX] {
            for points in [0, 1, 18, 60] {
                assert_eq!(
                    is_swap(advance(score, points), 40),
                    is_swap(((score as u64 + points as u64) % 100) as u32, 40),
                    "({}, {})",
                    score,
                    points
                );
            }
        }
    }

    #[test]
    fn other_player_is_an_involution() {
        for p in [Player::Zero, Player::One] {
            assert_eq!(p.other().other(), p);
            assert_ne!(p.other(), p);
        }
        assert_eq!(Player::Zero.index(), 0);
        assert_eq!(Player::One.index(), 1);
        assert_eq!(Player::One.to_string(), "1");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RuleError::TooManyDice(12).to_string(),
            "cannot roll more than 10 dice, got 12"
        );
        assert_eq!(
            RuleError::GameOver(104).to_string(),
            "the game should be over: opponent score 104 has reached 100"
        );
    }
}
