use std::io::Write;

use crate::errors::Result;
use crate::outcome::Participants;

use super::runner::RunRecord;

/// Receives progress as a duel runs.
///
/// Every method has a no-op default so implementations only override what
/// they care about. An error from any method aborts the duel.
pub trait Reporter {
    /// Called before the engine is invoked for `run` (1-based) of `total`.
    fn run_started(&mut self, _run: usize, _total: usize) -> Result<()> {
        Ok(())
    }

    /// Called with the raw transcript as soon as the engine exits, before
    /// it is parsed.
    fn transcript(&mut self, _run: usize, _transcript: &str) -> Result<()> {
        Ok(())
    }

    /// Called once a run has been scored and folded into the totals.
    fn run_finished(
        &mut self,
        _record: &RunRecord,
        _participants: &Participants,
        _total: usize,
    ) -> Result<()> {
        Ok(())
    }
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Console progress: echoes transcripts and, for multi-run duels, prints a
/// banner and the per-run verdicts.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    echo: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout(echo: bool) -> Self {
        Self::new(std::io::stdout(), echo)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, echo: bool) -> Self {
        Self { out, echo }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, run: usize, total: usize) -> Result<()> {
        if total > 1 {
            writeln!(self.out, "\n=== Run {run}/{total} ===")?;
        }
        Ok(())
    }

    fn transcript(&mut self, _run: usize, transcript: &str) -> Result<()> {
        if self.echo {
            self.out.write_all(transcript.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn run_finished(
        &mut self,
        record: &RunRecord,
        participants: &Participants,
        total: usize,
    ) -> Result<()> {
        if total > 1 {
            let games: Vec<&str> = record
                .games
                .iter()
                .map(|outcome| participants.label(*outcome))
                .collect();
            writeln!(self.out, "  Game results: [{}]", games.join(", "))?;
            writeln!(
                self.out,
                "  Tournament winner: {}",
                participants.label(record.tournament)
            )?;
        }
        Ok(())
    }
}
