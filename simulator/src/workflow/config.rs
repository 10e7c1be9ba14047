use anyhow::Context;
use helioscore::control::{ControllerConfig, TargetCoordinates};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One offline engagement: controller settings, telemetry and target.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub controller: ControllerConfig,
    pub sensors: Option<PathBuf>,
    pub target: Option<TargetCoordinates>,
    pub shots: usize,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            sensors: None,
            target: None,
            shots: 1,
        }
    }
}

impl MissionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading mission config {}", path_ref.display()))?;
        let config: MissionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing mission config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        sensors: Option<PathBuf>,
        target: Option<TargetCoordinates>,
        shots: usize,
    ) -> Self {
        Self {
            controller: ControllerConfig::default(),
            sensors,
            target,
            shots,
        }
    }
}
