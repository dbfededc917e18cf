pub mod adguard_entry;
pub mod json_lines;

pub use adguard_entry::{decode_line, DecodedLine};
pub use json_lines::JsonLinesQueryLog;
