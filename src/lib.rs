//! `engine_duel` pits two players against each other inside an external
//! two-player game engine, many times over, and keeps score.
//!
//! The engine is opaque: it is run as a blocking child process that plays a
//! short tournament (by default two Othello games with colors swapped) and
//! logs what happens. This crate reads that log, finds where each game
//! ended, pulls out each side's final score, decides who won, and tallies
//! results across as many repetitions as requested.
//!
//! # Modules
//!
//! * [`transcript`] splits the engine's output into games and extracts the
//!   final score pair of each.
//! * [`outcome`] maps scores to winners under a seat assignment and keeps the
//!   running tallies.
//! * [`tournament`] invokes the engine, drives the run loop, and produces the
//!   final [`DuelSummary`](tournament::DuelSummary).
//!
//! # Example
//!
//! ```
//! use engine_duel::outcome::{Outcome, Participant};
//! use engine_duel::tournament::{NullReporter, ScriptedInvoker, TournamentBuilder};
//!
//! let transcript = "\
//! Black Score: 28\nWhite Score: 36\nINFO: Game has terminated!\n\
//! Black Score: 40\nWhite Score: 24\nINFO: Game has terminated!\n";
//!
//! let tournament = TournamentBuilder::new().runs(3).build().unwrap();
//! let mut engine = ScriptedInvoker::repeat(transcript, 3);
//! let summary = tournament.run(&mut engine, &mut NullReporter).unwrap();
//!
//! assert_eq!(summary.tally.games.wins(Participant::A), 6);
//! assert_eq!(summary.records[0].tournament, Outcome::Won(Participant::A));
//! ```

pub mod errors;
pub mod outcome;
pub mod tournament;
pub mod transcript;

pub use errors::{DuelError, Result, TranscriptError};
