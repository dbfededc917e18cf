use chrono::{DateTime, FixedOffset, TimeDelta};
use std::sync::Arc;

pub const DEFAULT_GAP_MINUTES: u32 = 5;
pub const DEFAULT_MIN_BLOCK_QUERIES: u32 = 5;
pub const DEFAULT_DOMAIN_MIN_BLOCK_QUERIES: u32 = 1;
pub const DEFAULT_ACTIVE_RATE: u32 = 5;
pub const DEFAULT_IDLE_GAP: u32 = 3;

/// An accepted, normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEvent {
    pub timestamp: DateTime<FixedOffset>,
    pub hostname: Arc<str>,
}

impl FilteredEvent {
    pub fn new(timestamp: DateTime<FixedOffset>, hostname: impl Into<Arc<str>>) -> Self {
        Self {
            timestamp,
            hostname: hostname.into(),
        }
    }
}

/// Thresholds driving block segmentation and sub-block detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityThresholds {
    pub gap_minutes: u32,
    pub min_queries: u32,
    pub active_rate: u32,
    pub idle_gap: u32,
}

impl Default for ActivityThresholds {
    fn default() -> Self {
        Self {
            gap_minutes: DEFAULT_GAP_MINUTES,
            min_queries: DEFAULT_MIN_BLOCK_QUERIES,
            active_rate: DEFAULT_ACTIVE_RATE,
            idle_gap: DEFAULT_IDLE_GAP,
        }
    }
}

/// A maximal run of events separated by less than the inactivity gap.
///
/// `start_time` and `end_time` are the first and last member timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityBlock {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub query_count: usize,
    pub timestamps: Vec<DateTime<FixedOffset>>,
    /// Active/idle breakdown, present only in domain mode.
    pub sub_blocks: Option<Vec<SubBlock>>,
}

impl ActivityBlock {
    /// Builds a block from ordered member timestamps. Returns `None` when empty.
    pub fn from_timestamps(timestamps: Vec<DateTime<FixedOffset>>) -> Option<Self> {
        let start_time = *timestamps.first()?;
        let end_time = *timestamps.last()?;
        Some(Self {
            start_time,
            end_time,
            query_count: timestamps.len(),
            timestamps,
            sub_blocks: None,
        })
    }

    pub fn with_sub_blocks(mut self, sub_blocks: Vec<SubBlock>) -> Self {
        self.sub_blocks = Some(sub_blocks);
        self
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Duration used for totals: a block always counts for at least one second.
    pub fn display_duration(&self) -> TimeDelta {
        self.duration().max(TimeDelta::seconds(1))
    }

    pub fn active_duration(&self) -> Option<TimeDelta> {
        self.sub_blocks.as_ref().map(|subs| {
            subs.iter()
                .filter(|s| s.kind == SubBlockKind::Active)
                .map(SubBlock::duration)
                .sum()
        })
    }
}

/// A block that fell under the minimum-queries threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroppedBlock {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub query_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteBin {
    pub minute_start: DateTime<FixedOffset>,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubBlockKind {
    Active,
    Idle,
}

impl SubBlockKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            SubBlockKind::Active => "active",
            SubBlockKind::Idle => "idle",
        }
    }
}

/// A run of minute bins inside one block, spanning `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubBlock {
    pub kind: SubBlockKind,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub query_count: u64,
    pub peak_rate: u32,
    pub avg_rate: f64,
}

impl SubBlock {
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    pub fn minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    pub fn is_active(&self) -> bool {
        self.kind == SubBlockKind::Active
    }
}
