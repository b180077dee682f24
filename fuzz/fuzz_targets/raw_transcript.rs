#![no_main]

extern crate engine_duel;
extern crate libfuzzer_sys;

use engine_duel::transcript::segment_and_score;
use engine_duel::TranscriptError;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    match segment_and_score(data, 2) {
        Ok(scores) => assert_eq!(scores.len(), 2),
        Err(TranscriptError::UnexpectedGameCount { expected, found }) => {
            assert_eq!(expected, 2);
            assert_ne!(found, 2);
        }
        Err(TranscriptError::ScoreNotFound { game, excerpt, .. }) => {
            assert!(game == 1 || game == 2);
            assert!(excerpt.chars().count() <= 200);
        }
        Err(TranscriptError::ScoreOutOfRange { digits, .. }) => {
            assert!(digits.parse::<u32>().is_err());
        }
    }
});
