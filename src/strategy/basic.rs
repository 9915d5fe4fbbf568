//! Fixed-count and margin-based strategies.

use crate::rules::{advance, bacon_points, is_swap};

use super::Strategy;

/// Always rolls the same number of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlwaysRoll(pub u32);

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// Returns a strategy that always rolls `n` dice.
pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

/// Rolls 0 dice when free bacon gives at least `margin` points, and
/// `num_rolls` dice otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaconStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl Default for BaconStrategy {
    fn default() -> Self {
        BaconStrategy {
            margin: 8,
            num_rolls: 4,
        }
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if bacon_points(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Rolls 0 dice when that triggers a beneficial swap, or when free bacon
/// gives at least `margin` points without triggering a harmful swap.
/// Otherwise rolls `num_rolls` dice.
///
/// A swap is beneficial only while trailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl Default for SwapStrategy {
    fn default() -> Self {
        SwapStrategy {
            margin: 8,
            num_rolls: 4,
        }
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let bacon = bacon_points(opponent_score);
        let swaps = is_swap(advance(score, bacon), opponent_score);
        let take_bacon = if score < opponent_score {
            bacon >= self.margin || swaps
        } else {
            bacon >= self.margin && !swaps
        };
        if take_bacon {
            0
        } else {
            self.num_rolls
        }
    }
}
