use async_trait::async_trait;
use querylens_domain::{DomainError, LogRecord};

/// Receives decoded records in source order.
pub type RecordSink<'a> = dyn FnMut(LogRecord) + Send + 'a;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Non-empty lines read from the source
    pub lines: u64,
    /// Records handed to the sink
    pub records: u64,
    /// Lines that could not be decoded (bad JSON, bad timestamp)
    pub malformed: u64,
    /// Well-formed lines missing a client or timestamp
    pub skipped: u64,
}

/// A finite, single-pass sequence of query log records.
///
/// Each call to [`scan`](QueryLogSource::scan) restarts from the beginning.
#[async_trait]
pub trait QueryLogSource: Send + Sync {
    async fn scan(&self, sink: &mut RecordSink<'_>) -> Result<ScanReport, DomainError>;
}
