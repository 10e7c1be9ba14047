pub mod reader;
pub mod record;
pub mod source;

pub use reader::SensorRecordReader;
pub use record::{
    lenient_cell, lenient_cell_with, parse_cell, SensorRecord, CANONICAL_COLUMNS,
    MALFORMED_CELL_VALUE,
};
pub use source::{InMemorySource, TelemetrySource};
