//! Diagnostics sink for failures caught during a scan
//!
//! The core never logs directly. Hosts inject a sink; the default drops
//! everything so matching stays a pure function under test.

use crate::error::ComparisonFailure;

/// Context captured when a window comparison fails
#[derive(Debug, Clone, Copy)]
pub struct FailureReport<'a> {
    pub error: &'a ComparisonFailure,
    pub phrase: &'a [String],
    pub phrase_len: usize,
    pub window: usize,
    pub document_len: usize,
}

/// Receives one report per aborted scan
pub trait DiagnosticSink: Send + Sync {
    fn comparison_failed(&self, report: &FailureReport<'_>);
}

/// Sink that discards all reports
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn comparison_failed(&self, _report: &FailureReport<'_>) {}
}
