use crate::workflow::config::MissionConfig;
use anyhow::Context;
use helioscore::control::{FireReport, TargetController};
use helioscore::correction::CorrectionProfile;
use helioscore::telemetry::EngagementMetrics;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MissionResult {
    pub profile: Option<CorrectionProfile>,
    pub shots: Vec<FireReport>,
    pub metrics: EngagementMetrics,
}

#[derive(Clone)]
pub struct Runner {
    config: MissionConfig,
}

impl Runner {
    pub fn new(config: MissionConfig) -> Self {
        Self { config }
    }

    /// Drives one `acquire -> compute -> fire` sequence on a fresh controller.
    pub fn execute(&self) -> anyhow::Result<MissionResult> {
        info!(
            "mission start: target={:?} sensors={:?} shots={}",
            self.config.target, self.config.sensors, self.config.shots
        );
        let mut controller = TargetController::new(self.config.controller.clone());

        if let Some(target) = self.config.target {
            controller.acquire_target(target);
        }

        let profile = match &self.config.sensors {
            Some(path) => controller
                .compute_atmospheric_correction(path.as_path())
                .with_context(|| format!("computing correction from {}", path.display()))?,
            None => None,
        };

        let mut shots = Vec::with_capacity(self.config.shots);
        for shot in 1..=self.config.shots {
            let report = controller
                .fire()
                .with_context(|| format!("firing shot {} of {}", shot, self.config.shots))?;
            shots.push(report);
        }

        let metrics = controller.metrics();
        info!(
            "mission complete: shots={} corrections_applied={}",
            metrics.shots_fired, metrics.corrections_applied
        );
        Ok(MissionResult {
            profile,
            shots,
            metrics,
        })
    }
}
