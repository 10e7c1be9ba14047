use serde::{Deserialize, Serialize};

/// Counters describing one controller's engagement history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub acquisitions: usize,
    pub corrections_applied: usize,
    pub corrections_skipped: usize,
    pub shots_fired: usize,
}

impl EngagementMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_acquisition(&mut self) {
        self.acquisitions += 1;
    }

    pub fn record_correction(&mut self, applied: bool) {
        if applied {
            self.corrections_applied += 1;
        } else {
            self.corrections_skipped += 1;
        }
    }

    pub fn record_shot(&mut self) {
        self.shots_fired += 1;
    }

    pub fn snapshot(&self) -> EngagementMetrics {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_each_event_kind() {
        let mut metrics = EngagementMetrics::new();
        metrics.record_acquisition();
        metrics.record_correction(true);
        metrics.record_correction(false);
        metrics.record_shot();
        metrics.record_shot();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.acquisitions, 1);
        assert_eq!(snapshot.corrections_applied, 1);
        assert_eq!(snapshot.corrections_skipped, 1);
        assert_eq!(snapshot.shots_fired, 2);
    }
}
