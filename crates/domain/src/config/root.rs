use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::activity::ActivityConfig;
use super::errors::ConfigError;
use super::filter::FilterConfig;
use super::logging::LoggingConfig;
use super::top_domains::TopDomainsConfig;
use crate::filter_criteria::{FilterCriteria, OutcomeFilter};
use chrono::NaiveDate;

pub const CONFIG_FILE_NAME: &str = "querylens.toml";

/// Main configuration structure for Querylens
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Path to the AdGuard Home querylog.json
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,

    /// Record selection shared by both reports
    pub filter: FilterConfig,

    /// Block / sub-block thresholds for the activity report
    pub activity: ActivityConfig,

    /// Ranking options for the top-domains report
    pub top_domains: TopDomainsConfig,

    pub logging: LoggingConfig,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path (must exist)
    /// 2. querylens.toml in current directory
    /// 3. querylens.toml next to the executable
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse a TOML document without touching the filesystem
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        let mut config = Self::from_toml(&contents)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the path of the configuration file discovered without `--config`
    pub fn get_config_path() -> Option<PathBuf> {
        let cwd = PathBuf::from(CONFIG_FILE_NAME);
        if cwd.is_file() {
            return Some(cwd);
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
            .filter(|beside_exe| beside_exe.is_file())
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(log) = overrides.log {
            self.log = Some(log);
        }
        if overrides.no_bg_filter {
            self.filter.bg_filter = false;
        }
        if let Some(query_filter) = overrides.query_filter {
            self.filter.query_filter = query_filter;
        }
        if let Some(gap) = overrides.gap {
            self.activity.gap = gap;
        }
        if let Some(min_queries) = overrides.min_queries {
            self.activity.min_queries = Some(min_queries);
        }
        if let Some(active_rate) = overrides.active_rate {
            self.activity.active_rate = active_rate;
        }
        if let Some(idle_gap) = overrides.idle_gap {
            self.activity.idle_gap = idle_gap;
        }
        if let Some(top_n) = overrides.top_n {
            self.top_domains.top_n = top_n;
        }
        if overrides.exact {
            self.top_domains.exact = true;
        }
        if overrides.show_subdomains {
            self.top_domains.show_subdomains = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log.as_deref() {
            None | Some("") => {
                return Err(ConfigError::Validation(format!(
                    "No log file specified (use --log or set `log` in {CONFIG_FILE_NAME})"
                )));
            }
            Some(_) => {}
        }

        if let Err(e) = self.filter.background_patterns() {
            return Err(ConfigError::Validation(e.to_string()));
        }

        Ok(())
    }

    /// Resolve the record selection for one client and day
    pub fn filter_criteria(
        &self,
        client_ip: &str,
        date: NaiveDate,
        domain: Option<&str>,
    ) -> FilterCriteria {
        FilterCriteria::new(client_ip, date)
            .with_background_filter(self.filter.bg_filter)
            .with_outcome(self.filter.query_filter)
            .with_domain(domain)
    }
}

/// Command-line overrides for configuration
///
/// Flags (`no_bg_filter`, `exact`, `show_subdomains`) only override in the
/// direction they name; an absent flag leaves the file value alone.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log: Option<String>,
    pub no_bg_filter: bool,
    pub query_filter: Option<OutcomeFilter>,
    pub gap: Option<u32>,
    pub min_queries: Option<u32>,
    pub active_rate: Option<u32>,
    pub idle_gap: Option<u32>,
    pub top_n: Option<usize>,
    pub exact: bool,
    pub show_subdomains: bool,
    pub log_level: Option<String>,
}
