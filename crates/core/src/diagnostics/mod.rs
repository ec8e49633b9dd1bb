//! Data quality diagnostics.
//!
//! Engines report anomalies through a [`DataQualitySink`]. Emission is
//! fire-and-forget: a sink never fails and never blocks the primary result.

pub mod histogram;
pub mod signal;
pub mod sink;

pub use histogram::Histogram;
pub use signal::DataQualitySignal;
pub use sink::{DataQualityRecorder, DataQualitySink, NoopSink};
