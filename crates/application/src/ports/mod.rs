mod query_log_source;

pub use query_log_source::{QueryLogSource, RecordSink, ScanReport};
