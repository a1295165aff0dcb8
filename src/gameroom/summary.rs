use crate::Score;
use crate::gameplay::Judgment;

/// Totals over everything judged at a table.
///
/// `scores` holds one entry per finished game. Calls made in a game that was
/// abandoned midway still count toward `judged` and `correct`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Summary {
    scores: Vec<Score>,
    judged: usize,
    correct: usize,
}

impl Summary {
    pub fn witness(&mut self, judgment: &Judgment) {
        self.judged += 1;
        self.correct += judgment.correct() as usize;
    }
    pub fn finish(&mut self, score: Score) {
        self.scores.push(score);
    }
    pub fn games(&self) -> usize {
        self.scores.len()
    }
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }
    pub fn best(&self) -> Option<Score> {
        self.scores.iter().copied().max()
    }
    pub fn judged(&self) -> usize {
        self.judged
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
    pub fn accuracy(&self) -> f32 {
        match self.judged {
            0 => 0.,
            n => self.correct as f32 / n as f32,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "games    {}", self.games())?;
        writeln!(
            f,
            "scores   {}",
            self.scores
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )?;
        write!(
            f,
            "correct  {}/{} ({:.0}%)",
            self.correct,
            self.judged,
            self.accuracy() * 100.
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accuracy_is_zero() {
        assert_eq!(Summary::default().accuracy(), 0.);
        assert_eq!(Summary::default().best(), None);
    }

    #[test]
    fn tallies() {
        let mut summary = Summary::default();
        summary.witness(&Judgment::judge(true, true));
        summary.witness(&Judgment::judge(true, false));
        summary.finish(3);
        summary.finish(-2);
        assert_eq!(summary.judged(), 2);
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.accuracy(), 0.5);
        assert_eq!(summary.games(), 2);
        assert_eq!(summary.best(), Some(3));
    }
}
