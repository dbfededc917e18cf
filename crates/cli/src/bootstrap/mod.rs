mod config;
mod logging;

pub use config::{load_config, log_path};
pub use logging::init_logging;
