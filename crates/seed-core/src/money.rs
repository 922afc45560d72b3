//! Currency rounding helpers.

/// Round to 2 decimal places (currency precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places (used for price perturbation factors).
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(24.994), 24.99);
        assert_eq!(round2(24.996), 25.0);
        assert_eq!(round2(100.0 * 1.05), 105.0);
        assert_eq!(round2(-0.006), -0.01);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.049_999_9), 0.05);
        assert_eq!(round4(0.012_34), 0.0123);
        assert_eq!(round4(-0.05), -0.05);
    }
}
