mod activity;
mod top_domains;

pub use activity::run_activity;
pub use top_domains::run_top_domains;
