use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Ordered per-stage timings for one frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Run `stage`, record its duration under `label` and return its output.
    pub fn time<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        self.push(label, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::TimingBreakdown;

    #[test]
    fn stages_are_recorded_in_order() {
        let mut timing = TimingBreakdown::default();
        let v = timing.time("first", || 2 + 2);
        timing.time("second", || ());
        assert_eq!(v, 4);
        assert_eq!(timing.labels().collect::<Vec<_>>(), vec!["first", "second"]);
        assert!(timing.stages.iter().all(|s| s.elapsed_ms >= 0.0));
    }
}
