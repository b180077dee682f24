use super::{Outcome, Participant};

/// Win and draw counters for one level of results (games or tournaments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Participant::A) => self.a_wins += 1,
            Outcome::Won(Participant::B) => self.b_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, participant: Participant) -> usize {
        match participant {
            Participant::A => self.a_wins,
            Participant::B => self.b_wins,
        }
    }

    pub fn total(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }

    /// Points scored by `participant` as a fraction of the results recorded,
    /// counting a win as 1 and a draw as 0.5. Zero when nothing is recorded.
    pub fn score(&self, participant: Participant) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.wins(participant) as f64 + 0.5 * self.draws as f64) / total as f64
    }

    pub fn merge(&mut self, other: &Tally) {
        self.a_wins += other.a_wins;
        self.b_wins += other.b_wins;
        self.draws += other.draws;
    }
}

/// Running totals across every run of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateTally {
    /// One entry per game played
    pub games: Tally,
    /// One entry per completed run
    pub tournaments: Tally,
}

impl AggregateTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed run into the totals.
    pub fn fold(&mut self, game_results: &[Outcome], tournament_result: Outcome) {
        for outcome in game_results {
            self.games.record(*outcome);
        }
        self.tournaments.record(tournament_result);
    }

    pub fn merge(&mut self, other: &AggregateTally) {
        self.games.merge(&other.games);
        self.tournaments.merge(&other.tournaments);
    }

    /// Number of runs folded in so far.
    pub fn runs(&self) -> usize {
        self.tournaments.total()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::outcome::tournament_result;

    const A: Outcome = Outcome::Won(Participant::A);
    const B: Outcome = Outcome::Won(Participant::B);

    #[test]
    fn test_fold_counts() {
        let mut tally = AggregateTally::new();
        tally.fold(&[A, A], A);
        tally.fold(&[A, B], Outcome::Draw);
        tally.fold(&[Outcome::Draw, Outcome::Draw], Outcome::Draw);

        assert_eq!(
            tally.games,
            Tally {
                a_wins: 3,
                b_wins: 1,
                draws: 2
            }
        );
        assert_eq!(
            tally.tournaments,
            Tally {
                a_wins: 1,
                b_wins: 0,
                draws: 2
            }
        );
        assert_eq!(tally.runs(), 3);
    }

    #[test]
    fn test_fold_order_independent() {
        let runs: Vec<Vec<Outcome>> = vec![
            vec![A, A],
            vec![A, B],
            vec![B, Outcome::Draw],
            vec![Outcome::Draw, Outcome::Draw],
            vec![B, B],
        ];

        let fold_all = |order: &[usize]| {
            let mut tally = AggregateTally::new();
            for &idx in order {
                tally.fold(&runs[idx], tournament_result(&runs[idx]));
            }
            tally
        };

        let expected = fold_all(&[0, 1, 2, 3, 4]);
        for order in [[4, 3, 2, 1, 0], [2, 0, 4, 1, 3], [1, 2, 3, 4, 0], [3, 4, 0, 2, 1]] {
            assert_eq!(fold_all(&order), expected);
        }
    }

    #[test]
    fn test_merge_matches_fold() {
        let mut left = AggregateTally::new();
        left.fold(&[A, B], Outcome::Draw);
        let mut right = AggregateTally::new();
        right.fold(&[B, B], B);

        let mut combined = AggregateTally::new();
        combined.fold(&[A, B], Outcome::Draw);
        combined.fold(&[B, B], B);

        left.merge(&right);
        assert_eq!(left, combined);
    }

    #[test]
    fn test_score() {
        let tally = Tally {
            a_wins: 3,
            b_wins: 1,
            draws: 2,
        };
        assert_relative_eq!(tally.score(Participant::A), 4.0 / 6.0);
        assert_relative_eq!(tally.score(Participant::B), 2.0 / 6.0);
        assert_relative_eq!(Tally::new().score(Participant::A), 0.0);
    }
}
