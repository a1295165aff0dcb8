use super::sign::Sign;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of hand signs.
///
/// Sessions draw every sign through a `Thrower`, so the randomness behind a
/// game can be seeded for replay or scripted outright in tests.
pub trait Thrower {
    fn throw(&mut self) -> Sign;
}

/// Uniform signs from a small, fast PRNG.
#[derive(Debug, Clone)]
pub struct Random(SmallRng);

impl Random {
    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Thrower for Random {
    fn throw(&mut self) -> Sign {
        Sign::from(self.0.random_range(0..3u8))
    }
}

/// Replays a fixed sequence of signs, wrapping around when exhausted.
///
/// The script must contain at least two distinct signs: `redraw` rejects the
/// computer's sign, so a single-sign script could never deal a round.
#[derive(Debug, Clone)]
pub struct Scripted {
    signs: Vec<Sign>,
    cursor: usize,
}

impl Scripted {
    pub fn new(signs: Vec<Sign>) -> Result<Self, String> {
        match signs.iter().any(|s| *s != signs[0]) {
            true => Ok(Self { signs, cursor: 0 }),
            false => Err("script needs at least two distinct signs".into()),
        }
    }
}

impl Thrower for Scripted {
    fn throw(&mut self) -> Sign {
        let sign = self.signs[self.cursor % self.signs.len()];
        self.cursor += 1;
        sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Random::seeded(7);
        let mut b = Random::seeded(7);
        let a = (0..64).map(|_| a.throw()).collect::<Vec<_>>();
        let b = (0..64).map(|_| b.throw()).collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn random_covers_every_sign() {
        let ref mut thrower = Random::seeded(42);
        let counts = (0..3000)
            .map(|_| thrower.throw())
            .fold(BTreeMap::<Sign, usize>::new(), |mut counts, sign| {
                *counts.entry(sign).or_default() += 1;
                counts
            });
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|n| *n > 800));
    }

    #[test]
    fn scripted_wraps() {
        let ref mut thrower = Scripted::new(vec![Sign::Rock, Sign::Paper]).unwrap();
        let thrown = (0..5).map(|_| thrower.throw()).collect::<Vec<_>>();
        assert_eq!(
            thrown,
            vec![Sign::Rock, Sign::Paper, Sign::Rock, Sign::Paper, Sign::Rock]
        );
    }

    #[test]
    fn scripted_rejects_empty() {
        assert!(Scripted::new(vec![]).is_err());
    }

    #[test]
    fn scripted_rejects_single_sign() {
        assert!(Scripted::new(vec![Sign::Rock]).is_err());
        assert!(Scripted::new(vec![Sign::Paper; 4]).is_err());
    }

    #[test]
    fn scripted_with_repeats_still_deals() {
        let ref mut thrower =
            Scripted::new(vec![Sign::Rock, Sign::Rock, Sign::Scissors]).unwrap();
        let round = crate::gameplay::Round::deal(thrower);
        assert_eq!(round.computer(), Sign::Rock);
        assert_eq!(round.player(), Sign::Scissors);
    }
}
