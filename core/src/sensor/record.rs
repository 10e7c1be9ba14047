use crate::prelude::MalformedCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TIMESTAMP: &str = "timestamp";
pub const TEMPERATURE: &str = "temperature";
pub const PRESSURE: &str = "pressure";
pub const HUMIDITY: &str = "humidity";
pub const WIND_SPEED: &str = "wind_speed";
pub const TURBULENCE_STRENGTH: &str = "turbulence_strength";

/// Column order used when telemetry is written back out.
pub const CANONICAL_COLUMNS: [&str; 6] = [
    TIMESTAMP,
    TEMPERATURE,
    PRESSURE,
    HUMIDITY,
    WIND_SPEED,
    TURBULENCE_STRENGTH,
];

/// One timestamped atmospheric observation.
///
/// The timestamp is carried verbatim and never interpreted as a time value.
/// Numeric fields whose column is absent from the source stay at `0.0`, as do
/// cells that fail to parse (see [`lenient_cell`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub timestamp: String,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub turbulence_strength: f64,
    /// Numeric columns outside the recognised set, keyed by header name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, f64>,
}

impl SensorRecord {
    /// Cell values in [`CANONICAL_COLUMNS`] order.
    pub fn canonical_cells(&self) -> [String; 6] {
        [
            self.timestamp.clone(),
            self.temperature.to_string(),
            self.pressure.to_string(),
            self.humidity.to_string(),
            self.wind_speed.to_string(),
            self.turbulence_strength.to_string(),
        ]
    }
}

/// Value substituted for any numeric cell that fails to parse.
pub const MALFORMED_CELL_VALUE: f64 = 0.0;

/// Strict parse of a single numeric cell. Surrounding whitespace is ignored.
///
/// `inf` and `NaN` spellings parse as floats but are rejected here; telemetry
/// values must be finite.
pub fn parse_cell(cell: &str) -> Result<f64, MalformedCell> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| MalformedCell(cell.to_string()))
}

/// Parses a numeric cell, substituting [`MALFORMED_CELL_VALUE`] when it is
/// malformed. `on_malformed` sees every rejected cell.
pub fn lenient_cell_with<F>(cell: &str, on_malformed: F) -> f64
where
    F: FnOnce(&MalformedCell),
{
    parse_cell(cell).unwrap_or_else(|err| {
        on_malformed(&err);
        MALFORMED_CELL_VALUE
    })
}

/// Parses a numeric cell, substituting [`MALFORMED_CELL_VALUE`] when it is malformed.
pub fn lenient_cell(cell: &str) -> f64 {
    lenient_cell_with(cell, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_accepts_padded_numbers() {
        assert_eq!(parse_cell(" 1.25 "), Ok(1.25));
        assert_eq!(parse_cell("-3e2"), Ok(-300.0));
    }

    #[test]
    fn parse_cell_reports_malformed_input() {
        assert_eq!(parse_cell("n/a"), Err(MalformedCell("n/a".into())));
        assert!(parse_cell("").is_err());
    }

    #[test]
    fn parse_cell_rejects_non_finite_values() {
        for cell in ["inf", "-inf", "infinity", "NaN", "nan"] {
            assert_eq!(parse_cell(cell), Err(MalformedCell(cell.into())), "{}", cell);
        }
        assert_eq!(parse_cell("-0.1"), Ok(-0.1));
    }

    #[test]
    fn lenient_cell_with_reports_rejected_cells() {
        let mut rejected = Vec::new();
        assert_eq!(lenient_cell_with("bad", |err| rejected.push(err.0.clone())), 0.0);
        assert_eq!(lenient_cell_with("2.5", |err| rejected.push(err.0.clone())), 2.5);
        assert_eq!(rejected, vec!["bad".to_string()]);
    }

    #[test]
    fn lenient_cell_substitutes_zero() {
        assert_eq!(lenient_cell("abc"), 0.0);
        assert_eq!(lenient_cell(""), 0.0);
        assert_eq!(lenient_cell("0.75"), 0.75);
    }

    #[test]
    fn canonical_cells_follow_column_order() {
        let record = SensorRecord {
            timestamp: "t0".into(),
            turbulence_strength: 2.5,
            ..Default::default()
        };
        let cells = record.canonical_cells();
        assert_eq!(cells[0], "t0");
        assert_eq!(cells[5], "2.5");
    }
}
