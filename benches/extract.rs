use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use engine_duel::transcript::segment_and_score;

/// A two game transcript where every game logs `moves` running scores.
fn make_transcript(moves: usize) -> String {
    let mut out = String::new();
    for _ in 0..2 {
        for mv in 0..moves {
            out.push_str("INFO: random_player played d3\n");
            out.push_str(&format!("Black Score: {}\n", mv % 64));
            out.push_str(&format!("White Score: {}\n", 64 - mv % 64));
        }
        out.push_str("INFO: Game has terminated!\n");
    }
    out
}

fn bench_segment_and_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_and_score");

    for moves in [60, 1_000, 10_000] {
        let transcript = make_transcript(moves);
        group.bench_with_input(
            BenchmarkId::from_parameter(moves),
            &transcript,
            |b, transcript| {
                b.iter(|| segment_and_score(std::hint::black_box(transcript), 2).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_segment_and_score);
criterion_main!(benches);
