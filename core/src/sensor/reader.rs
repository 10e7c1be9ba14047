use crate::prelude::{TelemetryError, TelemetryResult};
use crate::sensor::record::{
    lenient_cell_with, SensorRecord, HUMIDITY, PRESSURE, TEMPERATURE, TIMESTAMP,
    TURBULENCE_STRENGTH, WIND_SPEED,
};
use crate::sensor::source::TelemetrySource;
use crate::telemetry::log::LogManager;
use csv::{ByteRecord, ReaderBuilder, Trim};
use std::io::Read;

/// Where a header column lands inside a [`SensorRecord`].
#[derive(Debug, Clone, PartialEq)]
enum Column {
    Timestamp,
    Temperature,
    Pressure,
    Humidity,
    WindSpeed,
    TurbulenceStrength,
    Extra(String),
}

impl Column {
    fn from_header(name: &str) -> Self {
        match name {
            TIMESTAMP => Column::Timestamp,
            TEMPERATURE => Column::Temperature,
            PRESSURE => Column::Pressure,
            HUMIDITY => Column::Humidity,
            WIND_SPEED => Column::WindSpeed,
            TURBULENCE_STRENGTH => Column::TurbulenceStrength,
            other => Column::Extra(other.to_string()),
        }
    }
}

/// Reads header-led CSV telemetry into [`SensorRecord`]s.
///
/// Numeric cells are parsed leniently: anything that is not a float becomes
/// `0.0` and is only counted, never raised. The one hard failure is a source
/// that cannot be opened or read at all.
pub struct SensorRecordReader {
    logger: LogManager,
}

impl SensorRecordReader {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("sensor-reader"),
        }
    }

    pub fn read<S>(&self, source: &S) -> TelemetryResult<Vec<SensorRecord>>
    where
        S: TelemetrySource + ?Sized,
    {
        let input = source.open()?;
        self.read_from(&source.name(), input)
    }

    /// Reads records from an already opened stream; `name` is used for diagnostics.
    pub fn read_from<R: Read>(&self, name: &str, input: R) -> TelemetryResult<Vec<SensorRecord>> {
        let unavailable = |err: csv::Error| TelemetryError::DataUnavailable {
            source_name: name.to_string(),
            reason: err.to_string(),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(input);

        let layout: Vec<Column> = reader
            .byte_headers()
            .map_err(unavailable)?
            .iter()
            .map(|raw| Column::from_header(&String::from_utf8_lossy(raw)))
            .collect();

        if layout.is_empty() {
            self.logger
                .caution(&format!("{} has no header row; no records read", name));
            return Ok(Vec::new());
        }
        if !layout.contains(&Column::TurbulenceStrength) {
            return Err(TelemetryError::MissingColumn(TURBULENCE_STRENGTH.to_string()));
        }

        let mut records = Vec::new();
        let mut malformed = 0usize;
        let mut row = ByteRecord::new();
        while reader.read_byte_record(&mut row).map_err(unavailable)? {
            records.push(Self::decode_row(&layout, &row, &mut malformed));
        }

        if malformed > 0 {
            self.logger.caution(&format!(
                "{} malformed numeric cells in {} substituted with 0.0",
                malformed, name
            ));
        }
        self.logger
            .detail(&format!("read {} sensor records from {}", records.len(), name));
        Ok(records)
    }

    fn decode_row(layout: &[Column], row: &ByteRecord, malformed: &mut usize) -> SensorRecord {
        let mut record = SensorRecord::default();
        for (index, column) in layout.iter().enumerate() {
            let cell = row
                .get(index)
                .map(|raw| String::from_utf8_lossy(raw).into_owned());

            if *column == Column::Timestamp {
                record.timestamp = cell.unwrap_or_default();
                continue;
            }

            // A missing trailing cell is parsed as empty, so it counts as malformed.
            let value = lenient_cell_with(cell.as_deref().unwrap_or(""), |_| *malformed += 1);

            match column {
                Column::Temperature => record.temperature = value,
                Column::Pressure => record.pressure = value,
                Column::Humidity => record.humidity = value,
                Column::WindSpeed => record.wind_speed = value,
                Column::TurbulenceStrength => record.turbulence_strength = value,
                Column::Extra(name) => {
                    record.extra.insert(name.clone(), value);
                }
                Column::Timestamp => {}
            }
        }
        record
    }
}

impl Default for SensorRecordReader {
    fn default() -> Self {
        Self::new()
    }
}
