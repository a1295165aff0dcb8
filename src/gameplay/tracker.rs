use super::judgment::Judgment;
use crate::Score;

/// Running score for the current game, plus how many calls went into it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tracker {
    score: Score,
    judged: usize,
    correct: usize,
}

impl Tracker {
    /// Judge a call and apply its delta.
    pub fn judge(&mut self, outcome: bool, said_yes: bool) -> Judgment {
        self.apply(Judgment::judge(outcome, said_yes))
    }
    pub fn apply(&mut self, judgment: Judgment) -> Judgment {
        self.score += judgment.delta();
        self.judged += 1;
        self.correct += judgment.correct() as usize;
        judgment
    }
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn judged(&self) -> usize {
        self.judged
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut tracker = Tracker::default();
        tracker.judge(true, true);
        tracker.judge(true, true);
        tracker.judge(false, false);
        tracker.judge(false, true);
        assert_eq!(tracker.score(), 1);
        assert_eq!(tracker.judged(), 4);
        assert_eq!(tracker.correct(), 3);
    }

    #[test]
    fn goes_negative() {
        let mut tracker = Tracker::default();
        (0..5).for_each(|_| {
            tracker.judge(true, false);
        });
        assert_eq!(tracker.score(), -5);
        assert_eq!(tracker.correct(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = Tracker::default();
        tracker.judge(true, true);
        tracker.reset();
        assert_eq!(tracker, Tracker::default());
    }
}
