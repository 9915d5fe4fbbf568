//! Hog engine library.
//!
//! Exposes the dice sources, scoring rules, game loop, strategies,
//! commentary hooks, and experiment runner for use by integration tests
//! and the binary entry point.

pub mod commentary;
pub mod dice;
pub mod experiment;
pub mod game;
pub mod rules;
pub mod strategy;
