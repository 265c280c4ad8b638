//! Built-in practice passages

use rand::Rng;
use rand::seq::SliceRandom;

pub const PASSAGES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog while the farmer watches from the porch.",
    "Practice makes progress, not perfection. Keep your eyes on the screen and your fingers on the home row.",
    "A journey of a thousand miles begins with a single step, and a fast typist begins with a single key.",
    "Rust gives you control over memory without a garbage collector, and the compiler checks your work.",
    "She sells sea shells by the sea shore, and the shells she sells are surely sea shells.",
    "Clear code is written for people first and for machines second, so name things with care.",
    "Every morning the baker opens the shop at six and the smell of fresh bread fills the street.",
    "Typing quickly is useful, but typing accurately saves more time than any burst of speed.",
];

/// Pick one passage uniformly at random
pub fn random_passage<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PASSAGES.choose(rng).copied().unwrap_or(PASSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scorer::score;

    #[test]
    fn test_random_passage_is_builtin() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            assert!(PASSAGES.contains(&random_passage(&mut rng)));
        }
    }

    #[test]
    fn test_every_passage_is_scorable() {
        for passage in PASSAGES {
            let s = score(passage, passage, 60.0).unwrap();
            assert_eq!(s.accuracy, 100.0);
        }
    }
}
