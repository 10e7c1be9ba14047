use anyhow::Context;
use clap::Parser;
use generator::telemetry::{build_sensor_records, write_sensor_csv, GeneratorConfig};
use helioscore::control::TargetCoordinates;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use workflow::config::MissionConfig;
use workflow::runner::{MissionResult, Runner};

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline HELIOS engagement driver")]
struct Args {
    /// Load a mission config from YAML
    #[arg(long)]
    mission: Option<PathBuf>,
    /// Atmospheric sensor CSV used to derive the correction profile
    #[arg(long)]
    sensors: Option<PathBuf>,
    /// Target coordinates as `x,y,z`
    #[arg(long, allow_hyphen_values = true)]
    target: Option<TargetCoordinates>,
    /// Override the configured beam power
    #[arg(long)]
    beam_power: Option<f64>,
    #[arg(long, default_value_t = 1)]
    shots: usize,
    /// Write synthetic telemetry to this CSV before running
    #[arg(long)]
    generate: Option<PathBuf>,
    #[arg(long, default_value_t = 600)]
    samples: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Print the mission result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Append a one-line summary to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let generated = match &args.generate {
        Some(path) => {
            let records = build_sensor_records(&GeneratorConfig {
                samples: args.samples,
                seed: args.seed,
                ..Default::default()
            });
            write_sensor_csv(path, &records)?;
            println!("Generated {} telemetry rows -> {}", records.len(), path.display());
            Some(path.clone())
        }
        None => None,
    };

    let mut mission = match &args.mission {
        Some(path) => MissionConfig::load(path)?,
        None => MissionConfig::from_args(None, None, args.shots),
    };
    if let Some(sensors) = args.sensors.clone().or(generated) {
        mission.sensors = Some(sensors);
    }
    if let Some(target) = args.target {
        mission.target = Some(target);
    }
    if let Some(beam_power) = args.beam_power {
        mission.controller.beam_power = beam_power;
    }

    let result = Runner::new(mission).execute()?;
    print_summary(&result);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serializing mission result")?;
        println!("{}", json);
    }

    if let Some(report_path) = args.report {
        if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&report_path)
            .with_context(|| format!("opening report {}", report_path.display()))?;
        file.write_all(summary_line(&result).as_bytes())?;
    }

    Ok(())
}

fn print_summary(result: &MissionResult) {
    match &result.profile {
        Some(profile) => {
            println!("Correction profile: {}", profile);
            for (mode, value) in profile.zernike_coeffs.iter() {
                println!("  {:<14} {:.6}", mode.name(), value);
            }
        }
        None => println!("Correction profile: none"),
    }
    for (index, shot) in result.shots.iter().enumerate() {
        println!(
            "Shot {} -> target {} power {} correction {:?}",
            index + 1,
            shot.coordinates,
            shot.beam_power,
            shot.correction
        );
    }
}

fn summary_line(result: &MissionResult) -> String {
    let gain = result
        .profile
        .as_ref()
        .map(|p| format!("{:.4}", p.correction_gain))
        .unwrap_or_else(|| "none".to_string());
    format!(
        "shots={} gain={} acquisitions={} corrections_applied={} corrections_skipped={}\n",
        result.metrics.shots_fired,
        gain,
        result.metrics.acquisitions,
        result.metrics.corrections_applied,
        result.metrics.corrections_skipped
    )
}
