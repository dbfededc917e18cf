//! Plain-text reports.
mod activity;
mod format;
mod top_domains;

pub use activity::render_activity;
pub use format::fmt_duration;
pub use top_domains::render_top_domains;
