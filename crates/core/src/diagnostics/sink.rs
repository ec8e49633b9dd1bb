//! Diagnostic sinks.

use dashmap::DashMap;
use tracing::{debug, warn};

use super::histogram::Histogram;
use super::signal::DataQualitySignal;

/// Receives data quality signals.
pub trait DataQualitySink: Send + Sync {
    /// Records a signal. Must not fail or block.
    fn emit(&self, signal: DataQualitySignal);
}

/// Sink that discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DataQualitySink for NoopSink {
    fn emit(&self, _signal: DataQualitySignal) {}
}

/// Logs signals and keeps exact in-process counters and histograms.
///
/// Counters live in concurrent maps so parallel emitters never lose an
/// increment. Histograms have fixed buckets, so memory stays bounded. The
/// recorder is shared across requests.
#[derive(Debug, Default)]
pub struct DataQualityRecorder {
    counters: DashMap<&'static str, u64>,
    labelled: DashMap<(&'static str, String), u64>,
    histograms: DashMap<&'static str, Histogram>,
}

impl DataQualityRecorder {
    /// Creates a recorder with empty counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the counter for a signal name.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).map_or(0, |v| *v)
    }

    /// Current value of a labelled counter.
    #[must_use]
    pub fn labelled_counter(&self, name: &'static str, label: &str) -> u64 {
        self.labelled
            .get(&(name, label.to_string()))
            .map_or(0, |v| *v)
    }

    /// Snapshot of the histogram for a signal name.
    #[must_use]
    pub fn histogram(&self, name: &str) -> Option<Histogram> {
        self.histograms.get(name).map(|h| h.value().clone())
    }
}

impl DataQualitySink for DataQualityRecorder {
    fn emit(&self, signal: DataQualitySignal) {
        let name = signal.name();

        match &signal {
            DataQualitySignal::RecipientNotActor { .. }
            | DataQualitySignal::NegativeAmount { .. }
            | DataQualitySignal::EmploymentWithoutIncome { .. }
            | DataQualitySignal::IncomeWithoutEmployment { .. }
            | DataQualitySignal::StartAfterEnd { .. }
            | DataQualitySignal::FomAfterTom { .. }
            | DataQualitySignal::PercentOutOfRange { .. } => {
                warn!(signal = name, detail = ?signal, "data quality deviation");
            }
            _ => debug!(signal = name, detail = ?signal, "data quality signal"),
        }

        *self.counters.entry(name).or_insert(0) += signal.weight();

        if let Some(label) = signal.label() {
            *self.labelled.entry((name, label.to_string())).or_insert(0) += 1;
        }

        if let Some((value, bounds)) = signal.observation() {
            self.histograms
                .entry(name)
                .or_insert_with(|| Histogram::new(bounds))
                .observe(value);
        }
    }
}
