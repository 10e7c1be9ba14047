pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let sum: f64 = samples.iter().sum();
        Some(sum / samples.len() as f64)
    }

    /// Variance normalised by `n`, not `n - 1`.
    pub fn population_variance(samples: &[f64]) -> Option<f64> {
        let mean = Self::mean(samples)?;
        let sum_sq: f64 = samples.iter().map(|&v| (v - mean) * (v - mean)).sum();
        Some(sum_sq / samples.len() as f64)
    }

    pub fn population_std(samples: &[f64]) -> Option<f64> {
        Self::population_variance(samples).map(f64::sqrt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_yields_none() {
        assert_eq!(StatsHelper::mean(&[]), None);
        assert_eq!(StatsHelper::population_variance(&[]), None);
        assert_eq!(StatsHelper::population_std(&[]), None);
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(StatsHelper::mean(&[4.0]), Some(4.0));
        assert_eq!(StatsHelper::population_std(&[4.0]), Some(0.0));
    }

    #[test]
    fn variance_divides_by_sample_count() {
        // Sample variance of this set would be 32/7, population variance is 4.
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(StatsHelper::mean(&samples), Some(5.0));
        assert_eq!(StatsHelper::population_variance(&samples), Some(4.0));
        assert_eq!(StatsHelper::population_std(&samples), Some(2.0));
    }
}
