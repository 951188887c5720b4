/// Outcome of comparing the sum of per-seller goals against the store goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionStatus {
    /// Within R$ 1 of the store goal.
    Balanced,
    /// Amount still to distribute.
    Missing(f64),
    /// Amount over the store goal.
    Exceeded(f64),
}

/// Tolerance of R$ 1 absorbs rounding from splitting a goal across sellers.
pub fn distribution_status(store_goal: f64, distributed: f64) -> DistributionStatus {
    let diff = store_goal - distributed;
    if diff.abs() < 1.0 {
        DistributionStatus::Balanced
    } else if diff > 0.0 {
        DistributionStatus::Missing(diff)
    } else {
        DistributionStatus::Exceeded(-diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_within_one_real() {
        assert_eq!(distribution_status(1000.0, 1000.0), DistributionStatus::Balanced);
        assert_eq!(distribution_status(1000.0, 999.5), DistributionStatus::Balanced);
        assert_eq!(distribution_status(1000.0, 1000.9), DistributionStatus::Balanced);
    }

    #[test]
    fn test_missing_and_exceeded() {
        assert_eq!(
            distribution_status(1000.0, 800.0),
            DistributionStatus::Missing(200.0)
        );
        assert_eq!(
            distribution_status(1000.0, 1150.0),
            DistributionStatus::Exceeded(150.0)
        );
    }
}
