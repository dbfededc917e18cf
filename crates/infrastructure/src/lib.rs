//! Querylens Infrastructure Layer
pub mod querylog;

pub use querylog::JsonLinesQueryLog;
