use crate::errors::Result;
use crate::outcome::{Participants, SeatAssignment};
use crate::transcript::TranscriptFormat;

use super::config::{ExitStatusPolicy, TournamentConfig};
use super::runner::Tournament;

/// Builder for constructing Tournament instances
///
/// # Example
///
/// ```
/// use engine_duel::tournament::{ExitStatusPolicy, TournamentBuilder};
///
/// let tournament = TournamentBuilder::new()
///     .runs(10)
///     .player("my_player")
///     .opponent("random_player")
///     .exit_policy(ExitStatusPolicy::Require)
///     .build()
///     .unwrap();
/// assert_eq!(tournament.config().runs, 10);
/// ```
#[derive(Debug, Default)]
pub struct TournamentBuilder {
    runs: Option<usize>,
    expected_games: Option<usize>,
    seats: Option<Vec<SeatAssignment>>,
    player: Option<String>,
    opponent: Option<String>,
    format: Option<TranscriptFormat>,
    exit_policy: Option<ExitStatusPolicy>,
}

impl TournamentBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tournament repetitions
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = Some(runs);
        self
    }

    /// Set the number of games per engine invocation.
    ///
    /// Without an explicit [`seats`](Self::seats) schedule the alternating
    /// schedule of that length is used.
    pub fn expected_games(mut self, expected_games: usize) -> Self {
        self.expected_games = Some(expected_games);
        self
    }

    /// Set the seat assignment for each game
    pub fn seats(mut self, seats: Vec<SeatAssignment>) -> Self {
        self.seats = Some(seats);
        self
    }

    /// Set the name of participant A
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.player = Some(name.into());
        self
    }

    /// Set the name of participant B
    pub fn opponent(mut self, name: impl Into<String>) -> Self {
        self.opponent = Some(name.into());
        self
    }

    /// Set the transcript literals
    pub fn format(mut self, format: TranscriptFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the handling of unsuccessful engine exits
    pub fn exit_policy(mut self, exit_policy: ExitStatusPolicy) -> Self {
        self.exit_policy = Some(exit_policy);
        self
    }

    /// Build the TournamentConfig without validating it
    pub fn build_config(self) -> TournamentConfig {
        let defaults = TournamentConfig::default();
        let default_names = Participants::default();

        let expected_games = self
            .expected_games
            .or_else(|| self.seats.as_ref().map(Vec::len))
            .unwrap_or(defaults.expected_games);
        let seats = self
            .seats
            .unwrap_or_else(|| SeatAssignment::role_swapped(expected_games));

        TournamentConfig {
            runs: self.runs.unwrap_or(defaults.runs),
            expected_games,
            seats,
            participants: Participants::new(
                self.player.unwrap_or(default_names.a),
                self.opponent.unwrap_or(default_names.b),
            ),
            format: self.format.unwrap_or(defaults.format),
            exit_policy: self.exit_policy.unwrap_or(defaults.exit_policy),
        }
    }

    /// Build a validated Tournament
    pub fn build(self) -> Result<Tournament> {
        Tournament::new(self.build_config())
    }
}
