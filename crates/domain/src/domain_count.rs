use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_TOP_N: usize = 10;
pub const SUBDOMAIN_DISPLAY_LIMIT: usize = 5;

/// How hostnames are turned into counting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    Exact,
    #[default]
    RootDomain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopDomainsOptions {
    pub grouping: GroupingMode,
    pub top_n: usize,
    /// Keep per-hostname counts under each root. Only meaningful for
    /// [`GroupingMode::RootDomain`].
    pub subdomain_detail: bool,
}

impl Default for TopDomainsOptions {
    fn default() -> Self {
        Self {
            grouping: GroupingMode::RootDomain,
            top_n: DEFAULT_TOP_N,
            subdomain_detail: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainCount {
    pub hostname: Arc<str>,
    pub count: u64,
}

/// Contributors beyond the display limit, folded into one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubdomainRemainder {
    pub hosts: usize,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubdomainBreakdown {
    pub listed: Vec<SubdomainCount>,
    pub remainder: Option<SubdomainRemainder>,
}

impl SubdomainBreakdown {
    pub fn total(&self) -> u64 {
        self.listed.iter().map(|s| s.count).sum::<u64>()
            + self.remainder.map(|r| r.count).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub key: Arc<str>,
    pub count: u64,
    pub subdomains: Option<SubdomainBreakdown>,
}

impl DomainCount {
    pub fn share_pct(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64 * 100.0
        }
    }
}
