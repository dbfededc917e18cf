use chrono::{DateTime, FixedOffset, TimeDelta};
use querylens_domain::{ActivityBlock, DroppedBlock, FilteredEvent};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    /// Blocks meeting the minimum-queries threshold, in chronological order
    pub blocks: Vec<ActivityBlock>,
    /// Thin blocks, kept only as summaries for the filter report
    pub dropped: Vec<DroppedBlock>,
}

impl Segmentation {
    pub fn dropped_queries(&self) -> usize {
        self.dropped.iter().map(|d| d.query_count).sum()
    }
}

/// Splits a time-ordered event stream into blocks at inactivity gaps.
#[derive(Debug, Clone, Copy)]
pub struct BlockSegmenter {
    gap: TimeDelta,
    min_queries: usize,
}

impl BlockSegmenter {
    pub fn new(gap_minutes: u32, min_queries: u32) -> Self {
        Self {
            gap: TimeDelta::minutes(i64::from(gap_minutes)),
            min_queries: min_queries as usize,
        }
    }

    /// A delta of at least the gap opens a new block; a zero gap puts every
    /// event in its own block.
    pub fn segment(&self, events: &[FilteredEvent]) -> Segmentation {
        debug_assert!(
            events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
            "events must be sorted by timestamp"
        );

        let mut segmentation = Segmentation::default();
        let mut current: Vec<DateTime<FixedOffset>> = Vec::new();

        for event in events {
            if let Some(prev) = current.last() {
                if event.timestamp - *prev >= self.gap {
                    self.close(std::mem::take(&mut current), &mut segmentation);
                }
            }
            current.push(event.timestamp);
        }
        self.close(current, &mut segmentation);

        debug!(
            kept = segmentation.blocks.len(),
            dropped = segmentation.dropped.len(),
            "Events segmented into blocks"
        );
        segmentation
    }

    fn close(&self, timestamps: Vec<DateTime<FixedOffset>>, out: &mut Segmentation) {
        let Some(block) = ActivityBlock::from_timestamps(timestamps) else {
            return;
        };
        if block.query_count >= self.min_queries {
            out.blocks.push(block);
        } else {
            out.dropped.push(DroppedBlock {
                start_time: block.start_time,
                end_time: block.end_time,
                query_count: block.query_count,
            });
        }
    }
}
