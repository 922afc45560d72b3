//! Numeric value generators.

use rand::Rng;
use seed_core::money::round4;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generate a multiplicative price perturbation factor.
///
/// Uniform in `[-0.05, 0.05]`, rounded to 4 decimal places before it is
/// applied to a catalog price.
pub fn price_factor<R: Rng>(rng: &mut R) -> f64 {
    round4(rng.gen_range(-0.05..=0.05))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = int_range(&mut rng, -10, 25);
            assert!((-10..=25).contains(&value));
        }
    }

    #[test]
    fn test_price_factor_bounds_and_precision() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let factor = price_factor(&mut rng);
            assert!((-0.05..=0.05).contains(&factor));
            // 4-decimal precision: scaling by 10^4 yields an integer
            let scaled = factor * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(int_range(&mut rng1, 0, 1000), int_range(&mut rng2, 0, 1000));
        }
    }
}
