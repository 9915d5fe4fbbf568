//! Composite strategy.
//!
//! Plays differently when leading and when trailing. While leading it takes
//! free bacon only when that cannot hand the lead back through a swap. While
//! trailing by a wide margin it hunts for swaps: rolling 10 dice to pig out
//! for a 1-point swap, taking free bacon when it swaps, or picking a dice
//! count whose typical outcome lands on a swapping score.

use crate::rules::{advance, bacon_points, is_swap};

use super::Strategy;

/// Baseline dice count that free bacon has to beat.
const ROLLING: i64 = 8;

/// Score deltas probed when looking for a swap, with the dice count that
/// tends to produce each delta.
const SWAP_DELTAS: [(u32, u32); 5] = [(3, 1), (6, 2), (7, 3), (8, 4), (9, 6)];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalStrategy;

impl FinalStrategy {
    fn leading(score: u32, opponent_score: u32, bacon: u32) -> u32 {
        if bacon as i64 >= ROLLING {
            let after = advance(score, bacon);
            if is_swap(after, opponent_score) || is_swap(after, advance(opponent_score, 1)) {
                return 6;
            }
            return 0;
        }
        if is_swap(advance(score, 1), opponent_score) {
            return 1;
        }
        6
    }

    fn trailing(score: u32, opponent_score: u32, bacon: u32) -> u32 {
        let gap = opponent_score as i64 - score as i64;
        if gap >= ROLLING.max(bacon as i64) {
            if is_swap(advance(score, 1), opponent_score) {
                return 10;
            }
            if is_swap(advance(score, bacon), opponent_score) {
                return 0;
            }
            let found = finder(score, opponent_score);
            if found != 0 {
                return found;
            }
        }
        if bacon as i64 >= ROLLING {
            return 0;
        }
        6
    }
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let bacon = bacon_points(opponent_score);
        if score > opponent_score {
            FinalStrategy::leading(score, opponent_score, bacon)
        } else {
            FinalStrategy::trailing(score, opponent_score, bacon)
        }
    }
}

/// Returns a dice count likely to land on a swapping score, or 0 if none of
/// the probed deltas swaps.
pub fn finder(score: u32, opponent_score: u32) -> u32 {
    SWAP_DELTAS
        .iter()
        .find(|&&(delta, _)| is_swap(advance(score, delta), opponent_score))
        .map(|&(_, rolls)| rolls)
        .unwrap_or(0)
}
