//! Splitting an engine transcript into games and recovering final scores.
//!
//! A transcript is the merged stdout/stderr of one tournament invocation.
//! Each game in it ends with a termination marker line, and somewhere before
//! that marker the engine logs the score of each side, possibly many times
//! as the game progresses. Only the last report of each side counts.
//!
//! # Example
//!
//! ```
//! use engine_duel::transcript::{segment_and_score, ScorePair};
//!
//! let transcript = "\
//! Black Score: 2\nWhite Score: 2\n\
//! Black Score: 28\nWhite Score: 36\n\
//! INFO: Game has terminated!\n\
//! Black Score: 40\nWhite Score: 24\n\
//! INFO: Game has terminated!\n";
//!
//! let scores = segment_and_score(transcript, 2).unwrap();
//! assert_eq!(scores, vec![ScorePair::new(28, 36), ScorePair::new(40, 24)]);
//! ```

mod extract;
mod format;

pub use extract::{last_score, segment_and_score, segments, ScorePair};
pub use format::{Side, TranscriptFormat, DEFAULT_FIRST_LABEL, DEFAULT_MARKER, DEFAULT_SECOND_LABEL};
