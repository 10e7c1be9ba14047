use anyhow::Context;
use csv::WriterBuilder;
use helioscore::sensor::{SensorRecord, CANONICAL_COLUMNS};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

/// Configuration for generating synthetic atmospheric telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub interval_s: f64,
    pub base_turbulence: f64,
    pub turbulence_swing: f64,
    pub cycles: f64,
    pub noise: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 600,
            interval_s: 1.0,
            base_turbulence: 0.5,
            turbulence_swing: 0.2,
            cycles: 2.0,
            noise: 0.05,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    fn jitter(&self, rng: &mut StdRng, scale: f64) -> f64 {
        if self.noise > 0.0 {
            rng.gen_range(-self.noise..self.noise) * scale
        } else {
            0.0
        }
    }
}

pub fn build_sensor_records(config: &GeneratorConfig) -> Vec<SensorRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let samples = config.samples.max(1) as f64;

    (0..config.samples)
        .map(|index| {
            let phase = (index as f64 / samples) * 2.0 * PI * config.cycles;
            let turbulence = config.base_turbulence
                + config.turbulence_swing * phase.sin()
                + config.jitter(&mut rng, 1.0);
            SensorRecord {
                timestamp: format!("T+{:.1}s", index as f64 * config.interval_s),
                temperature: 18.0 + 4.0 * phase.sin() + config.jitter(&mut rng, 10.0),
                pressure: 1013.25 + config.jitter(&mut rng, 20.0),
                humidity: 55.0 - 10.0 * phase.sin() + config.jitter(&mut rng, 20.0),
                wind_speed: (4.0 + config.jitter(&mut rng, 30.0)).max(0.0),
                turbulence_strength: turbulence.max(0.0),
                ..Default::default()
            }
        })
        .collect()
}

pub fn write_sensor_csv(path: &Path, records: &[SensorRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating telemetry directory {}", parent.display()))?;
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {} for writing", path.display()))?;
    writer
        .write_record(CANONICAL_COLUMNS)
        .context("writing telemetry header")?;
    for record in records {
        writer
            .write_record(record.canonical_cells())
            .with_context(|| format!("writing telemetry row {}", record.timestamp))?;
    }
    writer.flush().context("flushing telemetry file")?;
    Ok(())
}
