use crate::errors::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which query outcomes are counted. The three states are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutcomeFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "allowed")]
    AllowedOnly,
    #[serde(rename = "blocked")]
    BlockedOnly,
}

impl OutcomeFilter {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutcomeFilter::All => "all",
            OutcomeFilter::AllowedOnly => "allowed",
            OutcomeFilter::BlockedOnly => "blocked",
        }
    }

    #[inline]
    pub fn admits(&self, is_blocked: bool) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::AllowedOnly => !is_blocked,
            OutcomeFilter::BlockedOnly => is_blocked,
        }
    }
}

impl FromStr for OutcomeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(OutcomeFilter::All),
            "allowed" => Ok(OutcomeFilter::AllowedOnly),
            "blocked" => Ok(OutcomeFilter::BlockedOnly),
            other => Err(DomainError::InvalidQueryFilter(other.to_string())),
        }
    }
}

impl fmt::Display for OutcomeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Selects the records of one client on one local calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub client_ip: Arc<str>,
    pub date: NaiveDate,
    pub background_filter: bool,
    pub domain: Option<Arc<str>>,
    pub outcome: OutcomeFilter,
}

impl FilterCriteria {
    pub fn new(client_ip: impl Into<Arc<str>>, date: NaiveDate) -> Self {
        Self {
            client_ip: client_ip.into(),
            date,
            background_filter: true,
            domain: None,
            outcome: OutcomeFilter::All,
        }
    }

    pub fn with_background_filter(mut self, enabled: bool) -> Self {
        self.background_filter = enabled;
        self
    }

    /// Restricts to `domain` and its subdomains. Empty input clears the restriction.
    pub fn with_domain(mut self, domain: Option<&str>) -> Self {
        self.domain = domain
            .map(crate::hostname::normalize_hostname)
            .filter(|d| !d.is_empty())
            .map(Arc::from);
        self
    }

    pub fn with_outcome(mut self, outcome: OutcomeFilter) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn is_domain_mode(&self) -> bool {
        self.domain.is_some()
    }

    /// Background filtering never applies while a domain restriction is set.
    pub fn background_filter_active(&self) -> bool {
        self.background_filter && self.domain.is_none()
    }

    pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(s.to_string()))
    }
}
