use async_trait::async_trait;
use querylens_application::ports::{QueryLogSource, RecordSink, ScanReport};
use querylens_domain::{DomainError, LogRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory log source that replays its records on every scan.
#[derive(Clone, Default)]
pub struct MockQueryLogSource {
    records: Arc<Vec<LogRecord>>,
    error: Option<DomainError>,
    scans: Arc<AtomicUsize>,
}

impl MockQueryLogSource {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self {
            records: Arc::new(records),
            error: None,
            scans: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryLogSource for MockQueryLogSource {
    async fn scan(&self, sink: &mut RecordSink<'_>) -> Result<ScanReport, DomainError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        for record in self.records.iter() {
            sink(record.clone());
        }

        let count = self.records.len() as u64;
        Ok(ScanReport {
            lines: count,
            records: count,
            ..ScanReport::default()
        })
    }
}
