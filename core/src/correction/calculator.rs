use crate::correction::profile::{CorrectionProfile, ZernikeCoefficients};
use crate::math::stats::StatsHelper;
use crate::sensor::SensorRecord;
use crate::telemetry::log::LogManager;

/// Keeps the gain finite when mean turbulence is zero.
pub const GAIN_OFFSET: f64 = 0.1;

/// Gain for a mean turbulence. A negative mean is clamped to zero, capping
/// the gain at `1 / GAIN_OFFSET`.
pub fn correction_gain(turbulence_mean: f64) -> f64 {
    1.0 / (turbulence_mean.max(0.0) + GAIN_OFFSET)
}

const TIP_WEIGHT: f64 = 0.01;
const TILT_WEIGHT: f64 = 0.02;
const DEFOCUS_WEIGHT: f64 = 0.005;
const ASTIGMATISM_WEIGHT: f64 = 0.003;

/// Turns a batch of sensor records into a [`CorrectionProfile`].
///
/// An empty batch produces `None` instead of an error so callers can branch on
/// "no telemetry" without unwinding.
pub struct CorrectionProfileCalculator {
    logger: LogManager,
}

impl CorrectionProfileCalculator {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("correction"),
        }
    }

    pub fn compute(&self, records: &[SensorRecord]) -> Option<CorrectionProfile> {
        let turbulence: Vec<f64> = records.iter().map(|r| r.turbulence_strength).collect();
        self.compute_from_turbulence(&turbulence)
    }

    pub fn compute_from_turbulence(&self, turbulence: &[f64]) -> Option<CorrectionProfile> {
        let Some(mean) = StatsHelper::mean(turbulence) else {
            self.logger.caution("no telemetry samples; correction profile is empty");
            return None;
        };
        let std_dev = StatsHelper::population_std(turbulence)?;

        let profile = CorrectionProfile {
            turbulence_mean: mean,
            turbulence_std: std_dev,
            correction_gain: correction_gain(mean),
            zernike_coeffs: ZernikeCoefficients {
                tip: TIP_WEIGHT * mean,
                tilt: TILT_WEIGHT * mean,
                defocus: DEFOCUS_WEIGHT * std_dev,
                astigmatism_x: ASTIGMATISM_WEIGHT * std_dev,
                astigmatism_y: ASTIGMATISM_WEIGHT * std_dev,
            },
            sample_count: turbulence.len(),
        };
        self.logger.detail(&format!("correction profile {}", profile));
        Some(profile)
    }
}

impl Default for CorrectionProfileCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records(values: &[f64]) -> Vec<SensorRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| SensorRecord {
                timestamp: format!("t{}", i),
                turbulence_strength: v,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn empty_batch_yields_no_profile() {
        assert_eq!(CorrectionProfileCalculator::new().compute(&[]), None);
    }

    #[test]
    fn two_sample_batch_matches_reference_values() {
        let profile = CorrectionProfileCalculator::new()
            .compute(&records(&[2.0, 4.0]))
            .unwrap();

        assert_relative_eq!(profile.turbulence_mean, 3.0, epsilon = 1e-12);
        assert_relative_eq!(profile.turbulence_std, 1.0, epsilon = 1e-12);
        assert_relative_eq!(profile.correction_gain, 1.0 / 3.1, epsilon = 1e-12);
        assert_relative_eq!(profile.zernike_coeffs.tip, 0.03, epsilon = 1e-12);
        assert_relative_eq!(profile.zernike_coeffs.tilt, 0.06, epsilon = 1e-12);
        assert_relative_eq!(profile.zernike_coeffs.defocus, 0.005, epsilon = 1e-12);
        assert_relative_eq!(profile.zernike_coeffs.astigmatism_x, 0.003, epsilon = 1e-12);
        assert_relative_eq!(profile.zernike_coeffs.astigmatism_y, 0.003, epsilon = 1e-12);
        assert_eq!(profile.sample_count, 2);
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let profile = CorrectionProfileCalculator::new()
            .compute(&records(&[0.75; 5]))
            .unwrap();

        assert_eq!(profile.turbulence_mean, 0.75);
        assert_eq!(profile.turbulence_std, 0.0);
        assert_eq!(profile.correction_gain, 1.0 / (0.75 + 0.1));
        assert_eq!(profile.zernike_coeffs.defocus, 0.0);
    }

    #[test]
    fn gain_stays_finite_and_positive() {
        let calculator = CorrectionProfileCalculator::new();
        let batches: [&[f64]; 4] = [&[0.0], &[0.0, 0.0, 0.0], &[1e-9, 3.0, 250.0], &[12.5]];
        for batch in batches {
            let profile = calculator.compute_from_turbulence(batch).unwrap();
            assert!(profile.turbulence_std >= 0.0);
            assert!(profile.correction_gain.is_finite());
            assert!(profile.correction_gain > 0.0);
        }
        let zero = calculator.compute_from_turbulence(&[0.0]).unwrap();
        assert_relative_eq!(zero.correction_gain, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_mean_caps_gain() {
        let profile = CorrectionProfileCalculator::new()
            .compute(&records(&[-0.1]))
            .unwrap();

        assert_relative_eq!(profile.turbulence_mean, -0.1, epsilon = 1e-12);
        assert_relative_eq!(profile.correction_gain, 10.0, epsilon = 1e-12);
        assert_relative_eq!(profile.zernike_coeffs.tip, -0.001, epsilon = 1e-12);
    }

    #[test]
    fn record_order_does_not_change_statistics() {
        let calculator = CorrectionProfileCalculator::new();
        let forward = calculator.compute(&records(&[0.1, 0.9, 0.4])).unwrap();
        let reversed = calculator.compute(&records(&[0.4, 0.9, 0.1])).unwrap();
        assert_relative_eq!(forward.turbulence_mean, reversed.turbulence_mean, epsilon = 1e-12);
        assert_relative_eq!(forward.turbulence_std, reversed.turbulence_std, epsilon = 1e-12);
    }
}
