//! Atmospheric correction and target-control core for the HELIOS beam pipeline.
//!
//! Telemetry flows from a tabular source through [`sensor::SensorRecordReader`]
//! into [`correction::CorrectionProfileCalculator`], and the resulting profile is
//! consumed by the [`control::TargetController`] sequencer.

pub mod control;
pub mod correction;
pub mod math;
pub mod prelude;
pub mod sensor;
pub mod telemetry;

pub use prelude::{ControlError, ControlResult, TelemetryError, TelemetryResult};
