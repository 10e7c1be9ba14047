pub mod calculator;
pub mod profile;

pub use calculator::{correction_gain, CorrectionProfileCalculator, GAIN_OFFSET};
pub use profile::{CorrectionProfile, ZernikeCoefficients, ZernikeMode};
