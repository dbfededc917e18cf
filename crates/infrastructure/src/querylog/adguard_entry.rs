use chrono::DateTime;
use querylens_domain::LogRecord;
use serde::Deserialize;

/// The subset of an AdGuard Home querylog line this tool reads.
#[derive(Debug, Deserialize)]
struct AdGuardEntry {
    #[serde(rename = "T", default)]
    time: Option<String>,
    #[serde(rename = "QH", default)]
    host: String,
    #[serde(rename = "IP", default)]
    client_ip: Option<String>,
    #[serde(rename = "Result", default)]
    result: Option<AdGuardResult>,
}

#[derive(Debug, Default, Deserialize)]
struct AdGuardResult {
    #[serde(rename = "IsFiltered", default)]
    is_filtered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    Record(LogRecord),
    /// Valid JSON without a client address or timestamp
    Skipped,
    Malformed(String),
}

/// Decodes one JSON line.
///
/// Timestamps are RFC 3339 with an explicit offset; fractional seconds are
/// optional.
pub fn decode_line(line: &str) -> DecodedLine {
    let entry: AdGuardEntry = match serde_json::from_str(line) {
        Ok(entry) => entry,
        Err(e) => return DecodedLine::Malformed(format!("JSON parse error: {e}")),
    };

    let (Some(client_ip), Some(time)) = (entry.client_ip, entry.time) else {
        return DecodedLine::Skipped;
    };
    if time.is_empty() {
        return DecodedLine::Skipped;
    }

    let timestamp = match DateTime::parse_from_rfc3339(time.trim()) {
        Ok(ts) => ts,
        Err(_) => return DecodedLine::Malformed(format!("cannot parse timestamp '{time}'")),
    };

    let is_blocked = entry.result.is_some_and(|r| r.is_filtered);
    DecodedLine::Record(LogRecord::new(timestamp, entry.host, client_ip, is_blocked))
}
