use crate::activity::{
    ActivityThresholds, DEFAULT_ACTIVE_RATE, DEFAULT_DOMAIN_MIN_BLOCK_QUERIES,
    DEFAULT_GAP_MINUTES, DEFAULT_IDLE_GAP, DEFAULT_MIN_BLOCK_QUERIES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivityConfig {
    /// Inactivity gap in minutes that starts a new block
    #[serde(default = "default_gap")]
    pub gap: u32,

    /// Unset means 5, or 1 in domain mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_queries: Option<u32>,

    #[serde(default = "default_active_rate")]
    pub active_rate: u32,

    #[serde(default = "default_idle_gap")]
    pub idle_gap: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            min_queries: None,
            active_rate: default_active_rate(),
            idle_gap: default_idle_gap(),
        }
    }
}

impl ActivityConfig {
    pub fn thresholds(&self, domain_mode: bool) -> ActivityThresholds {
        let min_queries = self.min_queries.unwrap_or(if domain_mode {
            DEFAULT_DOMAIN_MIN_BLOCK_QUERIES
        } else {
            DEFAULT_MIN_BLOCK_QUERIES
        });

        ActivityThresholds {
            gap_minutes: self.gap,
            min_queries,
            active_rate: self.active_rate,
            idle_gap: self.idle_gap,
        }
    }
}

fn default_gap() -> u32 {
    DEFAULT_GAP_MINUTES
}
fn default_active_rate() -> u32 {
    DEFAULT_ACTIVE_RATE
}
fn default_idle_gap() -> u32 {
    DEFAULT_IDLE_GAP
}
