pub mod config;
pub mod controller;
pub mod state;

pub use config::{ControllerConfig, DEFAULT_BEAM_POWER};
pub use controller::{CorrectionOutcome, FireReport, TargetController};
pub use state::{InvalidCoordinates, LockState, TargetCoordinates};
