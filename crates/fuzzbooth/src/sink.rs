//! Diagnostics sink backed by `tracing`

use fuzzbooth_core::{DiagnosticSink, FailureReport};

use crate::tracing::target;

/// Emits one `error` event per aborted scan
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn comparison_failed(&self, report: &FailureReport<'_>) {
        ::tracing::error!(
            target: target::DIAGNOSTICS,
            error = %report.error,
            phrase = ?report.phrase,
            phrase_len = report.phrase_len,
            window = report.window,
            document_len = report.document_len,
            "phrase scan aborted, returning partial results"
        );
    }
}
