use std::fmt::Display;

/// Line the engine prints once a game has fully concluded.
pub const DEFAULT_MARKER: &str = "INFO: Game has terminated!";
/// Prefix of the first mover's score report.
pub const DEFAULT_FIRST_LABEL: &str = "Black Score:";
/// Prefix of the second mover's score report.
pub const DEFAULT_SECOND_LABEL: &str = "White Score:";

/// One of the two playing roles in a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Side {
    /// Moves first (black in Othello)
    First,
    /// Moves second (white in Othello)
    Second,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => f.write_str("first-mover"),
            Side::Second => f.write_str("second-mover"),
        }
    }
}

/// The literal strings the extractor looks for in a transcript.
///
/// The defaults match the Othello engine's logging. Engines with a
/// different log format can be handled by overriding the marker and labels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranscriptFormat {
    /// Termination marker, one per game
    pub marker: String,
    /// Label preceding the first mover's score
    pub first_label: String,
    /// Label preceding the second mover's score
    pub second_label: String,
}

impl Default for TranscriptFormat {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            first_label: DEFAULT_FIRST_LABEL.to_string(),
            second_label: DEFAULT_SECOND_LABEL.to_string(),
        }
    }
}

impl TranscriptFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// The score label for a side
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first_label,
            Side::Second => &self.second_label,
        }
    }

    /// Check that every literal is non-empty and the two labels differ.
    pub fn validate(&self) -> Result<(), String> {
        if self.marker.is_empty() {
            return Err("termination marker must not be empty".to_string());
        }
        if self.first_label.is_empty() || self.second_label.is_empty() {
            return Err("score labels must not be empty".to_string());
        }
        if self.first_label == self.second_label {
            return Err(format!(
                "score labels must differ (both are {:?})",
                self.first_label
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = TranscriptFormat::default();
        assert_eq!(format.marker, "INFO: Game has terminated!");
        assert_eq!(format.label(Side::First), "Black Score:");
        assert_eq!(format.label(Side::Second), "White Score:");
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let format = TranscriptFormat {
            marker: String::new(),
            ..Default::default()
        };
        assert!(format.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_identical_labels() {
        let format = TranscriptFormat {
            second_label: DEFAULT_FIRST_LABEL.to_string(),
            ..Default::default()
        };
        assert!(format.validate().is_err());
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }
}
