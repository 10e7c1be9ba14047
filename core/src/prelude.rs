/// Failure raised while opening or decoding a telemetry source.
#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("telemetry source {source_name} unavailable: {reason}")]
    DataUnavailable { source_name: String, reason: String },
    #[error("telemetry header is missing required column `{0}`")]
    MissingColumn(String),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Common error type for controller operations.
#[derive(thiserror::Error, Debug)]
pub enum ControlError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("no target locked")]
    NotLocked,
}

pub type ControlResult<T> = Result<T, ControlError>;

/// A single numeric cell that could not be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed numeric cell {0:?}")]
pub struct MalformedCell(pub String);

pub use crate::control::{
    ControllerConfig, CorrectionOutcome, FireReport, LockState, TargetController,
    TargetCoordinates,
};
pub use crate::correction::{CorrectionProfile, CorrectionProfileCalculator, ZernikeCoefficients};
pub use crate::sensor::{SensorRecord, SensorRecordReader, TelemetrySource};
