pub mod activity;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod root;
pub mod top_domains;

pub use activity::ActivityConfig;
pub use errors::ConfigError;
pub use filter::FilterConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, CONFIG_FILE_NAME};
pub use top_domains::TopDomainsConfig;
