use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use querylens_domain::{MinuteBin, SubBlock, SubBlockKind};
use std::ops::RangeInclusive;

fn truncate_to_minute(ts: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    ts - TimeDelta::seconds(i64::from(ts.second()))
        - TimeDelta::nanoseconds(i64::from(ts.nanosecond()))
}

/// Dense per-minute counts from the first to the last event minute.
///
/// Minutes without events appear with a zero count. Input must be sorted.
pub fn minute_bins(timestamps: &[DateTime<FixedOffset>]) -> Vec<MinuteBin> {
    let Some(first) = timestamps.first() else {
        return Vec::new();
    };
    let origin = truncate_to_minute(*first);

    let mut counts: Vec<u32> = Vec::new();
    for ts in timestamps {
        let idx = (*ts - origin).num_minutes().max(0) as usize;
        if idx >= counts.len() {
            counts.resize(idx + 1, 0);
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| MinuteBin {
            minute_start: origin + TimeDelta::minutes(i as i64),
            count,
        })
        .collect()
}

/// Splits one block's minutes into active and idle stretches.
///
/// A bin is hot when its count reaches `active_rate`. Hot bins separated by
/// at most `idle_gap` cold bins merge into one active sub-block; longer cold
/// runs, and cold bins before the first or after the last hot bin, form idle
/// sub-blocks. The result partitions the full minute span.
#[derive(Debug, Clone, Copy)]
pub struct SubBlockDetector {
    active_rate: u32,
    idle_gap: u32,
}

impl SubBlockDetector {
    pub fn new(active_rate: u32, idle_gap: u32) -> Self {
        Self {
            active_rate,
            idle_gap,
        }
    }

    pub fn detect(&self, timestamps: &[DateTime<FixedOffset>]) -> Vec<SubBlock> {
        self.detect_bins(&minute_bins(timestamps))
    }

    pub fn detect_bins(&self, bins: &[MinuteBin]) -> Vec<SubBlock> {
        let active = self.active_ranges(bins);
        let mut sub_blocks = Vec::with_capacity(active.len() * 2 + 1);
        let mut cursor = 0;

        for range in active {
            if *range.start() > cursor {
                sub_blocks.push(summarize(bins, cursor..=range.start() - 1, SubBlockKind::Idle));
            }
            cursor = range.end() + 1;
            sub_blocks.push(summarize(bins, range, SubBlockKind::Active));
        }
        if cursor < bins.len() {
            sub_blocks.push(summarize(bins, cursor..=bins.len() - 1, SubBlockKind::Idle));
        }

        sub_blocks
    }

    /// Inclusive bin ranges that start and end on a hot bin.
    fn active_ranges(&self, bins: &[MinuteBin]) -> Vec<RangeInclusive<usize>> {
        let mut ranges = Vec::new();
        let mut open: Option<(usize, usize)> = None;

        for (idx, bin) in bins.iter().enumerate() {
            if bin.count < self.active_rate {
                continue;
            }
            open = match open {
                Some((start, last_hot)) if idx - last_hot - 1 <= self.idle_gap as usize => {
                    Some((start, idx))
                }
                Some((start, last_hot)) => {
                    ranges.push(start..=last_hot);
                    Some((idx, idx))
                }
                None => Some((idx, idx)),
            };
        }
        if let Some((start, last_hot)) = open {
            ranges.push(start..=last_hot);
        }

        ranges
    }
}

fn summarize(bins: &[MinuteBin], range: RangeInclusive<usize>, kind: SubBlockKind) -> SubBlock {
    let span = &bins[range];
    let query_count: u64 = span.iter().map(|b| u64::from(b.count)).sum();
    let peak_rate = span.iter().map(|b| b.count).max().unwrap_or(0);
    let start_time = span[0].minute_start;
    let end_time = span[span.len() - 1].minute_start + TimeDelta::minutes(1);

    SubBlock {
        kind,
        start_time,
        end_time,
        query_count,
        peak_rate,
        avg_rate: query_count as f64 / span.len() as f64,
    }
}
