use thiserror::Error;

use crate::transcript::Side;

/// Failures while turning a tournament transcript into per-game scores.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum TranscriptError {
    #[error("Expected {expected} games, found {found} terminations")]
    UnexpectedGameCount { expected: usize, found: usize },

    /// `game` is 1-based. `excerpt` holds the tail of the segment that was
    /// searched.
    #[error("{side} score not found in game {game}:\n{excerpt}")]
    ScoreNotFound {
        game: usize,
        side: Side,
        excerpt: String,
    },

    #[error("{side} score `{digits}` in game {game} does not fit in a u32")]
    ScoreOutOfRange {
        game: usize,
        side: Side,
        digits: String,
    },
}

/// Errors that can occur while running a duel
#[derive(Debug, Error)]
pub enum DuelError {
    #[error("Failed to launch engine `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine exited unsuccessfully in run {run} (exit code: {exit_code:?})")]
    EngineFailed { run: usize, exit_code: Option<i32> },

    #[error("Run {run}: {source}")]
    Transcript {
        run: usize,
        #[source]
        source: TranscriptError,
    },

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for duel operations
pub type Result<T> = std::result::Result<T, DuelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_count_message() {
        let err = TranscriptError::UnexpectedGameCount {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "Expected 2 games, found 3 terminations");
    }

    #[test]
    fn test_transcript_error_is_source() {
        use std::error::Error as _;

        let err = DuelError::Transcript {
            run: 4,
            source: TranscriptError::ScoreNotFound {
                game: 2,
                side: Side::Second,
                excerpt: "tail".to_string(),
            },
        };
        assert!(err.to_string().starts_with("Run 4: "));
        assert!(err.source().is_some());
    }
}
