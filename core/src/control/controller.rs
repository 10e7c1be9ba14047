use crate::control::config::ControllerConfig;
use crate::control::state::{LockState, TargetCoordinates};
use crate::correction::{CorrectionProfile, CorrectionProfileCalculator};
use crate::prelude::{ControlError, ControlResult};
use crate::sensor::{SensorRecordReader, TelemetrySource};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::EngagementMetrics;
use serde::Serialize;

/// Result of a single correction application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CorrectionOutcome {
    Applied { gain: f64 },
    NoProfile,
}

impl CorrectionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CorrectionOutcome::Applied { .. })
    }
}

/// Observable record of one firing action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireReport {
    pub coordinates: TargetCoordinates,
    pub beam_power: f64,
    pub correction: CorrectionOutcome,
}

/// Sequences target acquisition, atmospheric correction and firing.
///
/// The controller starts [`LockState::Idle`]. [`acquire_target`](Self::acquire_target)
/// locks unconditionally, and [`fire`](Self::fire) is only accepted while
/// locked. Firing leaves the lock in place, so repeated shots are allowed.
pub struct TargetController {
    config: ControllerConfig,
    state: LockState,
    active_profile: Option<CorrectionProfile>,
    reader: SensorRecordReader,
    calculator: CorrectionProfileCalculator,
    metrics: EngagementMetrics,
    logger: LogManager,
}

impl TargetController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: LockState::Idle,
            active_profile: None,
            reader: SensorRecordReader::new(),
            calculator: CorrectionProfileCalculator::new(),
            metrics: EngagementMetrics::new(),
            logger: LogManager::new("controller"),
        }
    }

    pub fn beam_power(&self) -> f64 {
        self.config.beam_power
    }

    pub fn state(&self) -> &LockState {
        &self.state
    }

    pub fn target_lock(&self) -> bool {
        self.state.is_locked()
    }

    pub fn target_coordinates(&self) -> Option<&TargetCoordinates> {
        self.state.coordinates()
    }

    pub fn active_correction_profile(&self) -> Option<&CorrectionProfile> {
        self.active_profile.as_ref()
    }

    pub fn metrics(&self) -> EngagementMetrics {
        self.metrics.snapshot()
    }

    /// Locks onto `coordinates`, replacing any previous target. Always returns `true`.
    pub fn acquire_target(&mut self, coordinates: TargetCoordinates) -> bool {
        self.state = self.state.acquire(coordinates);
        self.metrics.record_acquisition();
        self.logger
            .record(&format!("Target acquired at {}", coordinates));
        self.target_lock()
    }

    /// Reads `source`, derives a profile and stores it as the active one.
    ///
    /// An empty source clears the active profile and returns `Ok(None)`.
    pub fn compute_atmospheric_correction<S>(
        &mut self,
        source: &S,
    ) -> ControlResult<Option<CorrectionProfile>>
    where
        S: TelemetrySource + ?Sized,
    {
        let records = self.reader.read(source)?;
        self.active_profile = self.calculator.compute(&records);
        match &self.active_profile {
            Some(profile) => self.logger.record(&format!(
                "Correction profile from {}: {}",
                source.name(),
                profile
            )),
            None => self
                .logger
                .record(&format!("No telemetry in {}; correction profile empty", source.name())),
        }
        Ok(self.active_profile.clone())
    }

    /// Applies `profile` for this call only, or the active profile when `None`.
    ///
    /// Having no profile from either place is not an error.
    pub fn apply_correction(&mut self, profile: Option<&CorrectionProfile>) -> CorrectionOutcome {
        let gain = profile
            .or(self.active_profile.as_ref())
            .map(|profile| profile.correction_gain);

        let outcome = match gain {
            Some(gain) => {
                self.logger
                    .record(&format!("Applying correction profile: gain={:.4}", gain));
                CorrectionOutcome::Applied { gain }
            }
            None => {
                self.logger.record("No correction profile available");
                CorrectionOutcome::NoProfile
            }
        };
        self.metrics.record_correction(outcome.is_applied());
        outcome
    }

    /// Re-applies the active correction and fires at the locked target.
    pub fn fire(&mut self) -> ControlResult<FireReport> {
        let coordinates = match self.state {
            LockState::Locked(coordinates) => coordinates,
            LockState::Idle => {
                self.logger.caution("Fire requested without a target lock");
                return Err(ControlError::NotLocked);
            }
        };

        let correction = self.apply_correction(None);
        self.logger.record(&format!(
            "Firing at {} with power {}",
            coordinates, self.config.beam_power
        ));
        self.metrics.record_shot();

        Ok(FireReport {
            coordinates,
            beam_power: self.config.beam_power,
            correction,
        })
    }
}

impl Default for TargetController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
