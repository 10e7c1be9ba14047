use serde::{Deserialize, Serialize};
use std::fmt;

/// Wavefront modes carried by a correction profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZernikeMode {
    Tip,
    Tilt,
    Defocus,
    AstigmatismX,
    AstigmatismY,
}

impl ZernikeMode {
    pub const ALL: [ZernikeMode; 5] = [
        ZernikeMode::Tip,
        ZernikeMode::Tilt,
        ZernikeMode::Defocus,
        ZernikeMode::AstigmatismX,
        ZernikeMode::AstigmatismY,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ZernikeMode::Tip => "tip",
            ZernikeMode::Tilt => "tilt",
            ZernikeMode::Defocus => "defocus",
            ZernikeMode::AstigmatismX => "astigmatism_x",
            ZernikeMode::AstigmatismY => "astigmatism_y",
        }
    }
}

impl fmt::Display for ZernikeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Placeholder aberration terms. These are linear proxies of the turbulence
/// statistics, not a real Zernike decomposition of a measured wavefront.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZernikeCoefficients {
    pub tip: f64,
    pub tilt: f64,
    pub defocus: f64,
    pub astigmatism_x: f64,
    pub astigmatism_y: f64,
}

impl ZernikeCoefficients {
    pub fn get(&self, mode: ZernikeMode) -> f64 {
        match mode {
            ZernikeMode::Tip => self.tip,
            ZernikeMode::Tilt => self.tilt,
            ZernikeMode::Defocus => self.defocus,
            ZernikeMode::AstigmatismX => self.astigmatism_x,
            ZernikeMode::AstigmatismY => self.astigmatism_y,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZernikeMode, f64)> + '_ {
        ZernikeMode::ALL.into_iter().map(move |mode| (mode, self.get(mode)))
    }
}

/// Beam-correction parameters derived from one batch of sensor telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionProfile {
    pub turbulence_mean: f64,
    /// Population standard deviation.
    pub turbulence_std: f64,
    pub correction_gain: f64,
    pub zernike_coeffs: ZernikeCoefficients,
    pub sample_count: usize,
}

impl fmt::Display for CorrectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={:.4} std={:.4} gain={:.4} samples={}",
            self.turbulence_mean, self.turbulence_std, self.correction_gain, self.sample_count
        )
    }
}
