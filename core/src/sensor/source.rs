use crate::prelude::{TelemetryError, TelemetryResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Anything that can hand out a readable stream of tabular telemetry.
pub trait TelemetrySource {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> String;

    fn open(&self) -> TelemetryResult<Box<dyn Read + '_>>;
}

impl TelemetrySource for Path {
    fn name(&self) -> String {
        self.display().to_string()
    }

    fn open(&self) -> TelemetryResult<Box<dyn Read + '_>> {
        let file = File::open(self).map_err(|err| TelemetryError::DataUnavailable {
            source_name: self.name(),
            reason: err.to_string(),
        })?;
        Ok(Box::new(file))
    }
}

impl TelemetrySource for PathBuf {
    fn name(&self) -> String {
        self.as_path().name()
    }

    fn open(&self) -> TelemetryResult<Box<dyn Read + '_>> {
        self.as_path().open()
    }
}

/// Telemetry held in memory, mainly for replaying captured buffers.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    contents: String,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

impl TelemetrySource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> TelemetryResult<Box<dyn Read + '_>> {
        Ok(Box::new(self.contents.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_unavailable() {
        let path = Path::new("/nonexistent/helios/atmospheric_sensors.csv");
        match path.open() {
            Err(TelemetryError::DataUnavailable { source_name, .. }) => {
                assert!(source_name.ends_with("atmospheric_sensors.csv"));
            }
            other => panic!("expected DataUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn in_memory_source_streams_contents() {
        let source = InMemorySource::new("buffer", "a,b\n1,2\n");
        let mut text = String::new();
        source.open().unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "a,b\n1,2\n");
        assert_eq!(source.name(), "buffer");
    }
}
