use crate::domain_count::{GroupingMode, TopDomainsOptions, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopDomainsConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Count exact hostnames instead of root domains
    #[serde(default)]
    pub exact: bool,

    #[serde(default)]
    pub show_subdomains: bool,
}

impl Default for TopDomainsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            exact: false,
            show_subdomains: false,
        }
    }
}

impl TopDomainsConfig {
    pub fn options(&self) -> TopDomainsOptions {
        let grouping = if self.exact {
            GroupingMode::Exact
        } else {
            GroupingMode::RootDomain
        };
        TopDomainsOptions {
            grouping,
            top_n: self.top_n,
            subdomain_detail: self.show_subdomains && grouping == GroupingMode::RootDomain,
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
