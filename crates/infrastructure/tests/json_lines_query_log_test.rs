use querylens_application::ports::{QueryLogSource, ScanReport};
use querylens_domain::{DomainError, LogRecord};
use querylens_infrastructure::JsonLinesQueryLog;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_LOG: &str = r#"{"T":"2026-02-20T08:00:00.123456789+01:00","QH":"www.roblox.com","QT":"A","QC":"IN","CP":"","Upstream":"https://dns10.quad9.net:443/dns-query","IP":"192.168.88.23","Result":{},"Elapsed":2045718}
{"T":"2026-02-20T08:00:05+01:00","QH":"doubleclick.net","QT":"A","IP":"192.168.88.23","Result":{"IsFiltered":true,"Reason":3,"Rules":[{"Text":"||doubleclick.net^","FilterListID":1}]}}

not json at all
{"T":"yesterday","QH":"a.com","IP":"192.168.88.23"}
{"QH":"no-time.com","IP":"192.168.88.23"}
{"T":"2026-02-20T08:01:00Z","QH":"no-ip.com"}
{"T":"2026-02-20T08:02:00-05:00","QH":"Mixed.Case.COM","IP":"10.0.0.7"}
"#;

fn create_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

async fn read_all(log: &JsonLinesQueryLog) -> (Vec<LogRecord>, ScanReport) {
    let mut records = Vec::new();
    let mut sink = |record: LogRecord| records.push(record);
    let report = log.scan(&mut sink).await.unwrap();
    (records, report)
}

#[tokio::test]
async fn test_decodes_records_in_file_order() {
    let file = create_log(SAMPLE_LOG);
    let log = JsonLinesQueryLog::new(file.path());

    let (records, _) = read_all(&log).await;

    assert_eq!(records.len(), 3);
    assert_eq!(&*records[0].hostname, "www.roblox.com");
    assert_eq!(&*records[0].client_ip, "192.168.88.23");
    assert!(!records[0].is_blocked);
    assert_eq!(records[0].timestamp.timestamp_subsec_nanos(), 123_456_789);
    assert_eq!(&*records[1].hostname, "doubleclick.net");
    assert!(records[1].is_blocked);
    assert_eq!(&*records[2].hostname, "Mixed.Case.COM");
    assert_eq!(records[2].timestamp.offset().local_minus_utc(), -5 * 3600);
}

#[tokio::test]
async fn test_scan_report_counts() {
    let file = create_log(SAMPLE_LOG);
    let log = JsonLinesQueryLog::new(file.path());

    let (_, report) = read_all(&log).await;

    assert_eq!(report.lines, 7);
    assert_eq!(report.records, 3);
    assert_eq!(report.malformed, 2);
    assert_eq!(report.skipped, 2);
}

#[tokio::test]
async fn test_rescan_restarts_from_beginning() {
    let file = create_log(SAMPLE_LOG);
    let log = JsonLinesQueryLog::new(file.path());

    let (first, _) = read_all(&log).await;
    let (second, _) = read_all(&log).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_file() {
    let file = create_log("");
    let log = JsonLinesQueryLog::new(file.path());

    let (records, report) = read_all(&log).await;

    assert!(records.is_empty());
    assert_eq!(report.lines, 0);
}

#[tokio::test]
async fn test_missing_file_is_log_not_found() {
    let log = JsonLinesQueryLog::new("/nonexistent/path/querylog.json");
    let mut sink = |_: LogRecord| {};

    let result = log.scan(&mut sink).await;

    assert!(matches!(result, Err(DomainError::LogNotFound(_))));
}

#[tokio::test]
async fn test_path_accessor() {
    let file = create_log("");
    let log = JsonLinesQueryLog::new(file.path());

    assert_eq!(log.path(), file.path());
}
