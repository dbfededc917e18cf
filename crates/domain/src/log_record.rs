use chrono::{DateTime, FixedOffset, NaiveDate};
use std::sync::Arc;

/// One decoded DNS query from the source log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub hostname: Arc<str>,
    pub client_ip: Arc<str>,
    pub is_blocked: bool,
}

impl LogRecord {
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        hostname: impl Into<Arc<str>>,
        client_ip: impl Into<Arc<str>>,
        is_blocked: bool,
    ) -> Self {
        Self {
            timestamp,
            hostname: hostname.into(),
            client_ip: client_ip.into(),
            is_blocked,
        }
    }

    /// Calendar date in the record's own UTC offset.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
