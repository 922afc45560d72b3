//! Uniform choice from a slice.

use rand::Rng;

/// Pick one element uniformly at random.
///
/// Panics if `items` is empty; callers hold non-empty snapshots
/// (the order synthesizer rejects empty ones up front).
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
