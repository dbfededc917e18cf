use chrono::{DateTime, FixedOffset};
use querylens_domain::{FilteredEvent, LogRecord};

pub const CLIENT_IP: &str = "192.168.88.23";

/// `HH:MM:SS` on 2026-02-20 at +01:00.
pub fn at(hms: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(&format!("2026-02-20T{hms}+01:00")).unwrap()
}

pub fn event(hms: &str, hostname: &str) -> FilteredEvent {
    FilteredEvent::new(at(hms), hostname)
}

pub fn events_at(times: &[&str]) -> Vec<FilteredEvent> {
    times.iter().map(|t| event(t, "www.roblox.com")).collect()
}

pub struct LogRecordBuilder {
    timestamp: DateTime<FixedOffset>,
    hostname: String,
    client_ip: String,
    blocked: bool,
}

impl LogRecordBuilder {
    pub fn new() -> Self {
        Self {
            timestamp: at("08:00:00"),
            hostname: "example.com".to_string(),
            client_ip: CLIENT_IP.to_string(),
            blocked: false,
        }
    }

    pub fn at(mut self, hms: &str) -> Self {
        self.timestamp = at(hms);
        self
    }

    pub fn timestamp(mut self, rfc3339: &str) -> Self {
        self.timestamp = DateTime::parse_from_rfc3339(rfc3339).unwrap();
        self
    }

    pub fn hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.to_string();
        self
    }

    pub fn client_ip(mut self, ip: &str) -> Self {
        self.client_ip = ip.to_string();
        self
    }

    pub fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    pub fn build(self) -> LogRecord {
        LogRecord::new(
            self.timestamp,
            self.hostname.as_str(),
            self.client_ip.as_str(),
            self.blocked,
        )
    }
}

impl Default for LogRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
