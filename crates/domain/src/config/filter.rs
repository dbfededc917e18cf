use crate::background::BackgroundPatternSet;
use crate::errors::DomainError;
use crate::filter_criteria::OutcomeFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Drop known background / keep-alive hostnames (never applied in domain mode)
    #[serde(default = "default_true")]
    pub bg_filter: bool,

    #[serde(default)]
    pub query_filter: OutcomeFilter,

    /// Patterns appended to the built-in background set
    #[serde(default)]
    pub extra_background_patterns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            bg_filter: true,
            query_filter: OutcomeFilter::All,
            extra_background_patterns: Vec::new(),
        }
    }
}

impl FilterConfig {
    pub fn background_patterns(&self) -> Result<BackgroundPatternSet, DomainError> {
        BackgroundPatternSet::builtin().with_extra(&self.extra_background_patterns)
    }
}

fn default_true() -> bool {
    true
}
