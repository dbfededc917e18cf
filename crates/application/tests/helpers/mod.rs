#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod mock_query_log;

pub use builders::{at, event, events_at, LogRecordBuilder};
pub use mock_query_log::MockQueryLogSource;
