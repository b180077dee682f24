use std::fmt::Display;

use tracing::event;

use crate::errors::TranscriptError;

use super::format::{Side, TranscriptFormat};

/// How much of a segment's tail is kept in a `ScoreNotFound` error.
const EXCERPT_CHARS: usize = 200;

/// Final scores of one game, ordered (first mover, second mover).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct ScorePair {
    pub first: u32,
    pub second: u32,
}

impl ScorePair {
    pub const fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    pub const fn get(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// The same scores seen from the other seat.
    pub const fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl Display for ScorePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Split a transcript into the text preceding each occurrence of `marker`.
///
/// Segment `i` runs from the end of marker `i - 1` (or the start of the
/// transcript) up to the start of marker `i`. Anything after the final
/// marker does not belong to a game and is dropped.
pub fn segments<'a>(transcript: &'a str, marker: &str) -> Vec<&'a str> {
    let mut prev = 0;
    transcript
        .match_indices(marker)
        .map(|(idx, _)| {
            let segment = &transcript[prev..idx];
            prev = idx + marker.len();
            segment
        })
        .collect()
}

/// Digits of the last `label` report in `segment`.
///
/// Every occurrence of `label` is considered; optional whitespace may follow
/// the label, then at least one ASCII digit. Occurrences without digits are
/// skipped, and of the rest only the final one is kept since engines log
/// running scores before the final one.
pub fn last_score<'a>(segment: &'a str, label: &str) -> Option<&'a str> {
    segment
        .match_indices(label)
        .filter_map(|(idx, _)| leading_digits(segment[idx + label.len()..].trim_start()))
        .last()
}

fn leading_digits(text: &str) -> Option<&str> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        None
    } else {
        Some(&text[..end])
    }
}

/// The last `max_chars` characters of `text`.
fn tail(text: &str, max_chars: usize) -> &str {
    match max_chars
        .checked_sub(1)
        .and_then(|n| text.char_indices().rev().nth(n))
    {
        Some((idx, _)) => &text[idx..],
        None if max_chars == 0 => "",
        None => text,
    }
}

impl TranscriptFormat {
    /// Extract the final score for `side` from one game's segment.
    ///
    /// `game` is the 1-based game number used in error reports.
    pub fn side_score(&self, segment: &str, side: Side, game: usize) -> Result<u32, TranscriptError> {
        let digits =
            last_score(segment, self.label(side)).ok_or_else(|| TranscriptError::ScoreNotFound {
                game,
                side,
                excerpt: tail(segment, EXCERPT_CHARS).to_string(),
            })?;

        digits
            .parse::<u32>()
            .map_err(|_| TranscriptError::ScoreOutOfRange {
                game,
                side,
                digits: digits.to_string(),
            })
    }

    /// Split `transcript` into exactly `expected_games` games and return the
    /// final score pair of each, in order of appearance.
    pub fn segment_and_score(
        &self,
        transcript: &str,
        expected_games: usize,
    ) -> Result<Vec<ScorePair>, TranscriptError> {
        let games = segments(transcript, &self.marker);
        if games.len() != expected_games {
            return Err(TranscriptError::UnexpectedGameCount {
                expected: expected_games,
                found: games.len(),
            });
        }

        games
            .iter()
            .enumerate()
            .map(|(idx, segment)| -> Result<ScorePair, TranscriptError> {
                let game = idx + 1;
                let scores = ScorePair::new(
                    self.side_score(segment, Side::First, game)?,
                    self.side_score(segment, Side::Second, game)?,
                );
                event!(
                    tracing::Level::TRACE,
                    game,
                    segment_len = segment.len(),
                    %scores,
                    "Extracted final scores"
                );
                Ok(scores)
            })
            .collect()
    }
}

/// [`TranscriptFormat::segment_and_score`] using the default Othello format.
pub fn segment_and_score(
    transcript: &str,
    expected_games: usize,
) -> Result<Vec<ScorePair>, TranscriptError> {
    TranscriptFormat::default().segment_and_score(transcript, expected_games)
}
