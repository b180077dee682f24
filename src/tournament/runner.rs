use tracing::{event, instrument};
use uuid::Uuid;

use crate::errors::{DuelError, Result};
use crate::outcome::{score_to_result, tournament_result, AggregateTally, Outcome};
use crate::transcript::ScorePair;

use super::config::{ExitStatusPolicy, TournamentConfig};
use super::invoker::{EngineInvoker, Invocation};
use super::reporter::Reporter;
use super::summary::DuelSummary;

/// Everything learned from one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    /// Unique, time-ordered id for correlating logs
    pub id: Uuid,
    /// 1-based run number
    pub run: usize,
    /// Engine exit code
    pub exit_code: Option<i32>,
    /// Final scores per game, in play order
    pub scores: Vec<ScorePair>,
    /// Result per game, in play order
    pub games: Vec<Outcome>,
    /// Majority result over `games`
    pub tournament: Outcome,
}

impl RunRecord {
    pub fn new(
        run: usize,
        exit_code: Option<i32>,
        scores: Vec<ScorePair>,
        games: Vec<Outcome>,
        tournament: Outcome,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            run,
            exit_code,
            scores,
            games,
            tournament,
        }
    }
}

/// Runs repeated tournaments and aggregates their results.
///
/// Runs are strictly sequential: one engine invocation per run, each run
/// folded into the totals exactly once and in order. The first failure
/// aborts the whole duel.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    /// Create a tournament after validating `config`.
    pub fn new(config: TournamentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the duel configuration
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Score one invocation's output.
    ///
    /// Applies the exit status policy, splits the transcript into games,
    /// and decides each game and the tournament.
    pub fn score_run(&self, run: usize, invocation: &Invocation) -> Result<RunRecord> {
        if !invocation.succeeded() {
            match self.config.exit_policy {
                ExitStatusPolicy::Require => {
                    return Err(DuelError::EngineFailed {
                        run,
                        exit_code: invocation.exit_code,
                    });
                }
                ExitStatusPolicy::Ignore => {
                    event!(
                        tracing::Level::WARN,
                        run,
                        exit_code = ?invocation.exit_code,
                        "Engine exited unsuccessfully, scoring transcript anyway"
                    );
                }
            }
        }

        let scores = self
            .config
            .format
            .segment_and_score(&invocation.transcript, self.config.expected_games)
            .map_err(|source| DuelError::Transcript { run, source })?;

        let games: Vec<Outcome> = scores
            .iter()
            .zip(&self.config.seats)
            .map(|(pair, seats)| score_to_result(*pair, *seats))
            .collect();
        let tournament = tournament_result(&games);

        Ok(RunRecord::new(
            run,
            invocation.exit_code,
            scores,
            games,
            tournament,
        ))
    }

    /// Invoke the engine once and score the result.
    #[instrument(level = "debug", skip(self, invoker, reporter))]
    pub fn run_once<I, R>(&self, invoker: &mut I, reporter: &mut R, run: usize) -> Result<RunRecord>
    where
        I: EngineInvoker + ?Sized,
        R: Reporter + ?Sized,
    {
        let invocation = invoker.invoke()?;
        event!(
            tracing::Level::DEBUG,
            exit_code = ?invocation.exit_code,
            transcript_len = invocation.transcript.len(),
            "Engine invocation finished"
        );
        reporter.transcript(run, &invocation.transcript)?;

        let record = self.score_run(run, &invocation)?;
        event!(
            tracing::Level::DEBUG,
            id = %record.id,
            games = ?record.games,
            tournament = ?record.tournament,
            "Run scored"
        );
        Ok(record)
    }

    /// Run every configured repetition and return the aggregate.
    pub fn run<I, R>(&self, invoker: &mut I, reporter: &mut R) -> Result<DuelSummary>
    where
        I: EngineInvoker + ?Sized,
        R: Reporter + ?Sized,
    {
        let runs = self.config.runs;
        event!(
            tracing::Level::INFO,
            runs,
            expected_games = self.config.expected_games,
            player = %self.config.participants.a,
            opponent = %self.config.participants.b,
            "Starting duel"
        );

        let mut tally = AggregateTally::new();
        let mut records = Vec::with_capacity(runs);

        for run in 1..=runs {
            reporter.run_started(run, runs)?;
            let record = self.run_once(invoker, reporter, run)?;
            tally.fold(&record.games, record.tournament);
            reporter.run_finished(&record, &self.config.participants, runs)?;
            records.push(record);
        }

        event!(
            tracing::Level::INFO,
            runs,
            game_wins = tally.games.a_wins,
            game_losses = tally.games.b_wins,
            game_draws = tally.games.draws,
            "Duel complete"
        );

        Ok(DuelSummary::new(
            self.config.participants.clone(),
            tally,
            records,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TranscriptError;
    use crate::outcome::Participant;
    use crate::tournament::invoker::ScriptedInvoker;
    use crate::tournament::reporter::NullReporter;

    const MARKER: &str = "INFO: Game has terminated!";

    fn transcript(games: &[(u32, u32)]) -> String {
        games
            .iter()
            .map(|(black, white)| format!("Black Score: {black}\nWhite Score: {white}\n{MARKER}\n"))
            .collect()
    }

    #[test_log::test]
    fn test_score_run_both_games_to_a() {
        let tournament = Tournament::new(TournamentConfig::default()).unwrap();
        let invocation = Invocation::new(transcript(&[(28, 36), (40, 24)]), Some(0));
        let record = tournament.score_run(1, &invocation).unwrap();

        assert_eq!(record.games, vec![Outcome::Won(Participant::A); 2]);
        assert_eq!(record.tournament, Outcome::Won(Participant::A));
        assert_eq!(record.scores[1], ScorePair::new(40, 24));
    }

    #[test]
    fn test_split_games_draw_tournament() {
        let tournament = Tournament::new(TournamentConfig::default()).unwrap();
        // Black wins both games, so each participant takes one.
        let invocation = Invocation::new(transcript(&[(40, 24), (40, 24)]), Some(0));
        let record = tournament.score_run(1, &invocation).unwrap();

        assert_eq!(
            record.games,
            vec![Outcome::Won(Participant::B), Outcome::Won(Participant::A)]
        );
        assert_eq!(record.tournament, Outcome::Draw);
    }

    #[test]
    fn test_exit_policy_ignore() {
        let tournament = Tournament::new(TournamentConfig::default()).unwrap();
        let invocation = Invocation::new(transcript(&[(1, 2), (2, 1)]), Some(1));
        assert!(tournament.score_run(1, &invocation).is_ok());
    }

    #[test]
    fn test_exit_policy_require() {
        let tournament = Tournament::new(TournamentConfig {
            exit_policy: ExitStatusPolicy::Require,
            ..Default::default()
        })
        .unwrap();
        let invocation = Invocation::new(transcript(&[(1, 2), (2, 1)]), None);
        assert!(matches!(
            tournament.score_run(5, &invocation),
            Err(DuelError::EngineFailed {
                run: 5,
                exit_code: None
            })
        ));
    }

    #[test]
    fn test_failure_aborts_remaining_runs() {
        let tournament = Tournament::new(TournamentConfig {
            runs: 3,
            ..Default::default()
        })
        .unwrap();
        let mut invoker = ScriptedInvoker::new([
            Invocation::new(transcript(&[(28, 36), (40, 24)]), Some(0)),
            Invocation::new(transcript(&[(28, 36)]), Some(0)),
            Invocation::new(transcript(&[(28, 36), (40, 24)]), Some(0)),
        ]);

        let err = tournament.run(&mut invoker, &mut NullReporter).unwrap_err();
        match err {
            DuelError::Transcript { run, source } => {
                assert_eq!(run, 2);
                assert_eq!(
                    source,
                    TranscriptError::UnexpectedGameCount {
                        expected: 2,
                        found: 1
                    }
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
        // The third run is never started
        assert_eq!(invoker.remaining(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Tournament::new(TournamentConfig {
            runs: 0,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_run_ids_unique() {
        let tournament = Tournament::new(TournamentConfig {
            runs: 2,
            ..Default::default()
        })
        .unwrap();
        let mut invoker = ScriptedInvoker::repeat(&transcript(&[(1, 0), (0, 1)]), 2);
        let summary = tournament.run(&mut invoker, &mut NullReporter).unwrap();
        assert_eq!(summary.records.len(), 2);
        assert_ne!(summary.records[0].id, summary.records[1].id);
        assert_eq!(summary.records[1].run, 2);
    }
}
