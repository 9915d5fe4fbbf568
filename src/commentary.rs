//! Commentary hooks.
//!
//! The game loop calls a hook once per round with both scores. Hooks keep
//! whatever state they need in their own fields and write their remarks to
//! any `io::Write` sink.

use std::io::{self, Write};

use crate::rules::Player;

/// Observes the scores at the end of every round.
pub trait Commentary {
    fn on_round(&mut self, score0: u32, score1: u32) -> io::Result<()>;
}

impl<C: Commentary + ?Sized> Commentary for &mut C {
    fn on_round(&mut self, score0: u32, score1: u32) -> io::Result<()> {
        (**self).on_round(score0, score1)
    }
}

/// Says nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl Commentary for Silence {
    fn on_round(&mut self, _score0: u32, _score1: u32) -> io::Result<()> {
        Ok(())
    }
}

/// Announces both scores every round.
pub struct SayScores<W> {
    out: W,
}

impl<W: Write> SayScores<W> {
    pub fn new(out: W) -> Self {
        SayScores { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Commentary for SayScores<W> {
    fn on_round(&mut self, score0: u32, score1: u32) -> io::Result<()> {
        writeln!(
            self.out,
            "Player 0 now has {} and Player 1 now has {}",
            score0, score1
        )
    }
}

/// Announces whenever a different player takes a strict lead.
pub struct AnnounceLeadChanges<W> {
    out: W,
    previous_leader: Option<Player>,
}

impl<W: Write> AnnounceLeadChanges<W> {
    pub fn new(out: W) -> Self {
        AnnounceLeadChanges {
            out,
            previous_leader: None,
        }
    }

    /// The leader after the most recent round, `None` when tied.
    pub fn previous_leader(&self) -> Option<Player> {
        self.previous_leader
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Commentary for AnnounceLeadChanges<W> {
    fn on_round(&mut self, score0: u32, score1: u32) -> io::Result<()> {
        let leader = if score0 > score1 {
            Some(Player::Zero)
        } else if score1 > score0 {
            Some(Player::One)
        } else {
            None
        };
        if let Some(p) = leader {
            if leader != self.previous_leader {
                writeln!(
                    self.out,
                    "Player {} takes the lead by {}",
                    p,
                    score0.abs_diff(score1)
                )?;
            }
        }
        self.previous_leader = leader;
        Ok(())
    }
}

/// Announces when `who` gains more points in a round than ever before.
///
/// Gains are measured between consecutive rounds, so a swap can produce a
/// negative gain, which is never announced.
pub struct AnnounceHighest<W> {
    out: W,
    who: Player,
    previous_high: i64,
    previous_score: u32,
}

impl<W: Write> AnnounceHighest<W> {
    pub fn new(out: W, who: Player) -> Self {
        AnnounceHighest {
            out,
            who,
            previous_high: 0,
            previous_score: 0,
        }
    }

    /// The largest gain announced so far.
    pub fn previous_high(&self) -> u32 {
        self.previous_high as u32
    }

    pub fn previous_score(&self) -> u32 {
        self.previous_score
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Commentary for AnnounceHighest<W> {
    fn on_round(&mut self, score0: u32, score1: u32) -> io::Result<()> {
        let score = match self.who {
            Player::Zero => score0,
            Player::One => score1,
        };
        let gain = score as i64 - self.previous_score as i64;
        if gain > self.previous_high {
            self.previous_high = gain;
            writeln!(
                self.out,
                "{} point(s)! That's the biggest gain yet for Player {}",
                gain, self.who
            )?;
        }
        self.previous_score = score;
        Ok(())
    }
}

/// Runs two hooks in sequence.
pub struct Both<F, G> {
    pub first: F,
    pub second: G,
}

/// Combines two hooks into one that runs `f` and then `g`.
pub fn both<F: Commentary, G: Commentary>(f: F, g: G) -> Both<F, G> {
    Both {
        first: f,
        second: g,
    }
}

impl<F: Commentary, G: Commentary> Commentary for Both<F, G> {
    fn on_round(&mut self, score0: u32, score1: u32) -> io::Result<()> {
        self.first.on_round(score0, score1)?;
        self.second.on_round(score0, score1)
    }
}
