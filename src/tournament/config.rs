use crate::errors::{DuelError, Result};
use crate::outcome::{Participant, Participants, SeatAssignment};
use crate::transcript::TranscriptFormat;

/// What to do when the engine process exits unsuccessfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitStatusPolicy {
    /// Log a warning and score the transcript anyway
    #[default]
    Ignore,
    /// Abort with `DuelError::EngineFailed`
    Require,
}

/// Configuration for running a duel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentConfig {
    /// Number of tournament repetitions
    pub runs: usize,
    /// Games each engine invocation is expected to play
    pub expected_games: usize,
    /// Seat assignment per game index
    pub seats: Vec<SeatAssignment>,
    /// Display names of the two participants
    pub participants: Participants,
    /// Literals used to parse the transcript
    pub format: TranscriptFormat,
    /// Handling of a failed engine exit
    pub exit_policy: ExitStatusPolicy,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            expected_games: 2,
            seats: SeatAssignment::role_swapped(2),
            participants: Participants::default(),
            format: TranscriptFormat::default(),
            exit_policy: ExitStatusPolicy::default(),
        }
    }
}

impl TournamentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the duel configuration
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(DuelError::ValidationError(
                "runs must be greater than 0".to_string(),
            ));
        }

        if self.expected_games == 0 {
            return Err(DuelError::ValidationError(
                "expected_games must be greater than 0".to_string(),
            ));
        }

        if self.seats.len() != self.expected_games {
            return Err(DuelError::ValidationError(format!(
                "seat schedule has {} entries but {} games are expected",
                self.seats.len(),
                self.expected_games
            )));
        }

        if let Some(idx) = self.seats.iter().position(|s| s.first == s.second) {
            return Err(DuelError::ValidationError(format!(
                "game {} seats the same participant twice",
                idx + 1
            )));
        }

        // Each participant has to open the same number of games
        let a_first = self
            .seats
            .iter()
            .filter(|s| s.first == Participant::A)
            .count();
        let b_first = self.seats.len() - a_first;
        if a_first != b_first {
            return Err(DuelError::ValidationError(format!(
                "seat schedule is unbalanced: {} moves first {} times, {} moves first {} times",
                self.participants.a, a_first, self.participants.b, b_first
            )));
        }

        if self.participants.a.is_empty() || self.participants.b.is_empty() {
            return Err(DuelError::ValidationError(
                "participant names must not be empty".to_string(),
            ));
        }

        if self.participants.a == self.participants.b {
            return Err(DuelError::ValidationError(format!(
                "participant names must differ (both are {:?})",
                self.participants.a
            )));
        }

        self.format.validate().map_err(DuelError::ValidationError)
    }
}
