pub mod get_activity_report;

pub use get_activity_report::{ActivityReport, ActivitySummary, GetActivityReportUseCase};
