//! Querylens Domain Layer
pub mod activity;
pub mod background;
pub mod config;
pub mod domain_count;
pub mod errors;
pub mod filter_criteria;
pub mod hostname;
pub mod log_record;

pub use activity::{
    ActivityBlock, ActivityThresholds, DroppedBlock, FilteredEvent, MinuteBin, SubBlock,
    SubBlockKind,
};
pub use background::{BackgroundPattern, BackgroundPatternSet, BUILTIN_BACKGROUND_PATTERNS};
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_count::{
    DomainCount, GroupingMode, SubdomainBreakdown, SubdomainCount, SubdomainRemainder,
    TopDomainsOptions,
};
pub use errors::DomainError;
pub use filter_criteria::{FilterCriteria, OutcomeFilter};
pub use hostname::{matches_domain, normalize_hostname, root_domain, HostnameClassifier};
pub use log_record::LogRecord;
