pub mod activity;
pub mod top_domains;

// Re-export use cases
pub use activity::{ActivityReport, ActivitySummary, GetActivityReportUseCase};
pub use top_domains::{GetTopDomainsUseCase, TopDomainsReport};
