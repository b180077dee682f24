#![no_main]

extern crate arbitrary;
extern crate engine_duel;
extern crate libfuzzer_sys;

use engine_duel::outcome::{score_to_result, tournament_result, SeatAssignment};
use engine_duel::transcript::{segment_and_score, ScorePair, DEFAULT_MARKER};

use libfuzzer_sys::fuzz_target;

/// One game's worth of engine output.
#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct GameInput {
    /// Running scores logged before the final one
    pub running: Vec<ScorePair>,
    pub last: ScorePair,
    /// Noise printed between score lines; must not contain score labels
    pub noise: String,
}

fn clean_noise(noise: &str) -> bool {
    !noise.contains("Score:") && !noise.contains(DEFAULT_MARKER) && !noise.contains("INFO:")
}

fn render(game: &GameInput) -> String {
    let mut out = String::new();
    for pair in game.running.iter().chain(std::iter::once(&game.last)) {
        out.push_str(&format!(
            "Black Score: {}\n{}\nWhite Score: {}\n",
            pair.first, game.noise, pair.second
        ));
    }
    out.push_str(DEFAULT_MARKER);
    out.push('\n');
    out
}

fuzz_target!(|games: [GameInput; 2]| {
    if !games.iter().all(|g| clean_noise(&g.noise)) {
        return;
    }

    let transcript: String = games.iter().map(render).collect();
    let scores = segment_and_score(&transcript, 2).expect("well formed transcript");
    assert_eq!(scores, vec![games[0].last, games[1].last]);

    let seats = SeatAssignment::role_swapped(2);
    let results: Vec<_> = scores
        .iter()
        .zip(&seats)
        .map(|(pair, seat)| score_to_result(*pair, *seat))
        .collect();
    // Swapping each game's scores must swap every winner.
    let swapped: Vec<_> = scores
        .iter()
        .zip(&seats)
        .map(|(pair, seat)| score_to_result(pair.swapped(), *seat))
        .collect();
    for (forward, backward) in results.iter().zip(&swapped) {
        assert_eq!(
            forward.winner().map(|p| p.opponent()),
            backward.winner()
        );
    }
    let _ = tournament_result(&results);
});
