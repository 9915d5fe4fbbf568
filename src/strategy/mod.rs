//! Strategies.
//!
//! A strategy decides how many dice (0 to 10) to roll given the current
//! player's score and the opponent's score. Strategies are stateless and are
//! queried fresh every turn.

pub mod basic;
pub mod final_strategy;

pub use basic::{always_roll, AlwaysRoll, BaconStrategy, SwapStrategy};
pub use final_strategy::{finder, FinalStrategy};

/// Chooses the number of dice to roll for a turn.
pub trait Strategy {
    /// Returns the number of dice to roll, where 0 means free bacon.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}
