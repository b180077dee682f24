//! Mapping final scores to winners, and tallying winners across runs.
//!
//! A tournament is a fixed schedule of games between two participants with
//! the first-mover seat alternating, so that each participant opens equally
//! often. [`score_to_result`] decides each game, [`tournament_result`] takes
//! the majority over a tournament, and [`AggregateTally`] accumulates both
//! across repeated runs.

mod tally;

use std::cmp::Ordering;

use crate::transcript::{ScorePair, Side};

pub use tally::{AggregateTally, Tally};

/// One of the two competitors in a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Participant {
    A,
    B,
}

impl Participant {
    pub const fn opponent(self) -> Self {
        match self {
            Participant::A => Participant::B,
            Participant::B => Participant::A,
        }
    }
}

/// Display names of the two participants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participants {
    pub a: String,
    pub b: String,
}

impl Default for Participants {
    fn default() -> Self {
        Self {
            a: "my_player".to_string(),
            b: "random_player".to_string(),
        }
    }
}

impl Participants {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn name(&self, participant: Participant) -> &str {
        match participant {
            Participant::A => &self.a,
            Participant::B => &self.b,
        }
    }

    /// Name of the winner, or `"draw"`.
    pub fn label(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Won(participant) => self.name(participant),
            Outcome::Draw => "draw",
        }
    }
}

/// Who sits in which seat for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct SeatAssignment {
    pub first: Participant,
    pub second: Participant,
}

impl SeatAssignment {
    pub const fn new(first: Participant, second: Participant) -> Self {
        Self { first, second }
    }

    pub const fn occupant(&self, side: Side) -> Participant {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// The standard alternating schedule for `games` games.
    ///
    /// Game 1 has B moving first, game 2 has A moving first, and so on.
    pub fn role_swapped(games: usize) -> Vec<SeatAssignment> {
        (0..games)
            .map(|idx| {
                if idx % 2 == 0 {
                    SeatAssignment::new(Participant::B, Participant::A)
                } else {
                    SeatAssignment::new(Participant::A, Participant::B)
                }
            })
            .collect()
    }
}

/// Result of a single game, or of a whole tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Outcome {
    Won(Participant),
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Participant> {
        match self {
            Outcome::Won(participant) => Some(participant),
            Outcome::Draw => None,
        }
    }
}

/// Decide a game from its final scores. Equal scores are a draw.
pub fn score_to_result(scores: ScorePair, assignment: SeatAssignment) -> Outcome {
    match scores.first.cmp(&scores.second) {
        Ordering::Greater => Outcome::Won(assignment.first),
        Ordering::Less => Outcome::Won(assignment.second),
        Ordering::Equal => Outcome::Draw,
    }
}

/// Majority verdict over a tournament's game results.
///
/// Draws count for neither side; equal win counts, including no wins at
/// all, make the tournament a draw.
pub fn tournament_result(results: &[Outcome]) -> Outcome {
    let wins = |participant: Participant| {
        results
            .iter()
            .filter(|outcome| outcome.winner() == Some(participant))
            .count()
    };

    match wins(Participant::A).cmp(&wins(Participant::B)) {
        Ordering::Greater => Outcome::Won(Participant::A),
        Ordering::Less => Outcome::Won(Participant::B),
        Ordering::Equal => Outcome::Draw,
    }
}
