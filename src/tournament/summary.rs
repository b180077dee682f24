use crate::outcome::{AggregateTally, Participant, Participants, Tally};

use super::runner::RunRecord;

/// Final results of a duel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSummary {
    /// Display names of the two participants
    pub participants: Participants,
    /// Number of runs completed
    pub runs: usize,
    /// Game and tournament totals
    pub tally: AggregateTally,
    /// Per-run details, in run order
    pub records: Vec<RunRecord>,
}

impl DuelSummary {
    pub fn new(participants: Participants, tally: AggregateTally, records: Vec<RunRecord>) -> Self {
        Self {
            participants,
            runs: records.len(),
            tally,
            records,
        }
    }

    /// Format the aggregate block printed at the end of a duel
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str("=== Aggregate Summary ===\n");
        output.push_str(&format!("Total runs: {}\n", self.runs));
        self.push_tally(&mut output, "Game wins", &self.tally.games);
        self.push_tally(&mut output, "Tournament wins", &self.tally.tournaments);
        output
    }

    fn push_tally(&self, output: &mut String, title: &str, tally: &Tally) {
        let a = &self.participants.a;
        let b = &self.participants.b;
        let width = a.len().max(b.len()).max("draws".len()) + 1;

        output.push_str(&format!("{title}:\n"));
        for (label, count) in [
            (a.as_str(), tally.a_wins),
            (b.as_str(), tally.b_wins),
            ("draws", tally.draws),
        ] {
            output.push_str(&format!("  {:<width$} {}\n", format!("{label}:"), count));
        }
        output.push_str(&format!(
            "  {a} score: {:.1}%\n",
            tally.score(Participant::A) * 100.0
        ));
    }

    /// Serialize the whole summary, including per-run records, as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use crate::transcript::ScorePair;

    fn summary() -> DuelSummary {
        let games = vec![Outcome::Won(Participant::A), Outcome::Draw];
        let mut tally = AggregateTally::new();
        tally.fold(&games, Outcome::Won(Participant::A));
        let record = RunRecord::new(
            1,
            Some(0),
            vec![ScorePair::new(28, 36), ScorePair::new(32, 32)],
            games,
            Outcome::Won(Participant::A),
        );
        DuelSummary::new(Participants::default(), tally, vec![record])
    }

    #[test]
    fn test_to_text() {
        let text = summary().to_text();
        assert_eq!(
            text,
            "=== Aggregate Summary ===\n\
             Total runs: 1\n\
             Game wins:\n\
             \x20 my_player:     1\n\
             \x20 random_player: 0\n\
             \x20 draws:         1\n\
             \x20 my_player score: 75.0%\n\
             Tournament wins:\n\
             \x20 my_player:     1\n\
             \x20 random_player: 0\n\
             \x20 draws:         0\n\
             \x20 my_player score: 100.0%\n"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json() {
        let original = summary();
        let json = original.to_json().unwrap();
        assert!(json.contains("\"my_player\""));
        assert!(json.contains("\"a_wins\""));

        let parsed: DuelSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
