//! Pure question-order randomization.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a new uniformly shuffled copy of the given slice.
///
/// Uses the Fisher-Yates shuffle from `rand`. The input is never
/// mutated; callers memoize the result for the session rather than
/// re-shuffling on every access.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut permuted = items.to_vec();
    permuted.shuffle(rng);
    permuted
}
