use super::adguard_entry::{decode_line, DecodedLine};
use async_trait::async_trait;
use querylens_application::ports::{QueryLogSource, RecordSink, ScanReport};
use querylens_domain::DomainError;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument, warn};

/// AdGuard Home `querylog.json` reader: one JSON object per line.
///
/// The file is streamed line by line; nothing but the current line is kept.
pub struct JsonLinesQueryLog {
    path: PathBuf,
}

impl JsonLinesQueryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QueryLogSource for JsonLinesQueryLog {
    #[instrument(skip(self, sink), fields(path = %self.path.display()))]
    async fn scan(&self, sink: &mut RecordSink<'_>) -> Result<ScanReport, DomainError> {
        let file = File::open(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DomainError::LogNotFound(self.path.display().to_string())
            } else {
                DomainError::IoError(format!("Failed to open {}: {}", self.path.display(), e))
            }
        })?;

        let mut lines = BufReader::new(file).lines();
        let mut report = ScanReport::default();
        let mut line_no: u64 = 0;

        while let Some(line) = lines.next_line().await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path.display(), e))
        })? {
            line_no += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            report.lines += 1;

            match decode_line(line) {
                DecodedLine::Record(record) => {
                    report.records += 1;
                    sink(record);
                }
                DecodedLine::Skipped => report.skipped += 1,
                DecodedLine::Malformed(reason) => {
                    report.malformed += 1;
                    warn!(line = line_no, %reason, "Skipping malformed query log line");
                }
            }
        }

        debug!(
            lines = report.lines,
            records = report.records,
            malformed = report.malformed,
            skipped = report.skipped,
            "Query log scanned"
        );
        Ok(report)
    }
}
