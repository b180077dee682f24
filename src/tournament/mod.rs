//! Running repeated tournaments against an external engine.
//!
//! Each run invokes the engine once, which plays a fixed schedule of games
//! with the first-mover seat alternating between the two participants. The
//! transcript is scored, and the run is folded into an
//! [`AggregateTally`](crate::outcome::AggregateTally).
//!
//! # Example
//!
//! ```no_run
//! use engine_duel::tournament::{ConsoleReporter, ProcessInvoker, TournamentBuilder};
//!
//! let tournament = TournamentBuilder::new().runs(5).build()?;
//! let mut engine = ProcessInvoker::othello();
//! let mut reporter = ConsoleReporter::stdout(false);
//!
//! let summary = tournament.run(&mut engine, &mut reporter)?;
//! println!("{}", summary.to_text());
//! # Ok::<(), engine_duel::DuelError>(())
//! ```

mod builder;
mod config;
mod invoker;
mod reporter;
mod runner;
mod summary;

pub use builder::TournamentBuilder;
pub use config::{ExitStatusPolicy, TournamentConfig};
pub use invoker::{EngineInvoker, Invocation, ProcessInvoker, ScriptedInvoker};
pub use reporter::{ConsoleReporter, NullReporter, Reporter};
pub use runner::{RunRecord, Tournament};
pub use summary::DuelSummary;
