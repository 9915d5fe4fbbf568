//! Dice sources.
//!
//! The game engine never touches a random number generator directly. It
//! draws outcomes through the `Dice` trait, so a simulation can run on fair
//! seeded dice or replay a fixed sequence of outcomes in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of single die outcomes.
pub trait Dice {
    /// Rolls the die once and returns the face value.
    fn roll(&mut self) -> u32;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// A fair die with faces `1..=sides`.
pub struct FairDice {
    sides: u32,
    rng: SmallRng,
}

impl FairDice {
    /// Creates a fair die seeded from system entropy.
    ///
    /// Panics if `sides` is 0.
    pub fn new(sides: u32) -> Self {
        assert!(sides > 0, "a die needs at least one side");
        FairDice {
            sides,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a fair die with a fixed seed for reproducible runs.
    pub fn seeded(sides: u32, seed: u64) -> Self {
        assert!(sides > 0, "a die needs at least one side");
        FairDice {
            sides,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded die when `seed != 0`, entropy otherwise.
    pub fn from_seed_or_entropy(sides: u32, seed: u64) -> Self {
        if seed != 0 {
            FairDice::seeded(sides, seed)
        } else {
            FairDice::new(sides)
        }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(1..=self.sides)
    }
}

/// Standard six-sided die.
pub fn six_sided() -> FairDice {
    FairDice::new(6)
}

/// Four-sided die.
pub fn four_sided() -> FairDice {
    FairDice::new(4)
}

/// Replays a fixed sequence of outcomes, starting over once exhausted.
#[derive(Debug, Clone)]
pub struct TestDice {
    outcomes: Vec<u32>,
    next: usize,
}

impl TestDice {
    /// Creates a die that yields `outcomes` in order, cycling forever.
    ///
    /// Panics if `outcomes` is empty.
    pub fn new(outcomes: &[u32]) -> Self {
        assert!(!outcomes.is_empty(), "test dice need at least one outcome");
        TestDice {
            outcomes: outcomes.to_vec(),
            next: 0,
        }
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let value = self.outcomes[self.next];
        self.next = (self.next + 1) % self.outcomes.len();
        value
    }
}
