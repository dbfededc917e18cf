use crate::ports::{QueryLogSource, ScanReport};
use crate::services::{BlockSegmenter, EventFilter, FilterOutcome, FilterStats, SubBlockDetector};
use chrono::TimeDelta;
use querylens_domain::{
    ActivityBlock, ActivityThresholds, DomainError, DroppedBlock, FilterCriteria,
    HostnameClassifier, LogRecord, SubBlockKind,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub total_blocks: usize,
    pub total_queries: usize,
    /// Sum of block durations, each block counting for at least one second
    pub total_duration: TimeDelta,
    /// Domain mode only: minutes covered by active sub-blocks
    pub active_duration: Option<TimeDelta>,
    /// Domain mode only: minutes covered by idle sub-blocks
    pub idle_duration: Option<TimeDelta>,
    pub background_filtered: u64,
    pub dropped_blocks: usize,
    pub dropped_queries: usize,
}

impl ActivitySummary {
    /// Active share of the sub-blocked minutes, in percent.
    pub fn active_pct(&self) -> Option<f64> {
        let active = self.active_duration?;
        let idle = self.idle_duration?;
        let total = (active + idle).num_seconds();
        Some(if total == 0 {
            0.0
        } else {
            active.num_seconds() as f64 / total as f64 * 100.0
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityReport {
    pub thresholds: ActivityThresholds,
    pub domain_mode: bool,
    pub blocks: Vec<ActivityBlock>,
    pub dropped: Vec<DroppedBlock>,
    pub stats: FilterStats,
    pub scan: ScanReport,
    pub summary: ActivitySummary,
}

pub struct GetActivityReportUseCase {
    source: Arc<dyn QueryLogSource>,
    classifier: Arc<HostnameClassifier>,
}

impl GetActivityReportUseCase {
    pub fn new(source: Arc<dyn QueryLogSource>, classifier: Arc<HostnameClassifier>) -> Self {
        Self { source, classifier }
    }

    #[instrument(skip(self, criteria), fields(client = %criteria.client_ip, date = %criteria.date))]
    pub async fn execute(
        &self,
        criteria: &FilterCriteria,
        thresholds: ActivityThresholds,
    ) -> Result<ActivityReport, DomainError> {
        let mut filter = EventFilter::new(criteria, &self.classifier);
        let mut sink = |record: LogRecord| {
            filter.push(&record);
        };
        let scan = self.source.scan(&mut sink).await?;

        let report = build_report(filter.finish(), criteria, thresholds, scan);
        info!(
            blocks = report.summary.total_blocks,
            queries = report.summary.total_queries,
            "Activity report built"
        );
        Ok(report)
    }

    /// Runs the pipeline over an in-memory batch.
    pub fn analyze<'r, I>(
        &self,
        criteria: &FilterCriteria,
        thresholds: ActivityThresholds,
        records: I,
    ) -> ActivityReport
    where
        I: IntoIterator<Item = &'r LogRecord>,
    {
        let outcome = EventFilter::apply(criteria, &self.classifier, records);
        let scan = ScanReport {
            lines: outcome.stats.scanned,
            records: outcome.stats.scanned,
            ..ScanReport::default()
        };
        build_report(outcome, criteria, thresholds, scan)
    }
}

fn build_report(
    outcome: FilterOutcome,
    criteria: &FilterCriteria,
    thresholds: ActivityThresholds,
    scan: ScanReport,
) -> ActivityReport {
    let domain_mode = criteria.is_domain_mode();
    let segmentation = BlockSegmenter::new(thresholds.gap_minutes, thresholds.min_queries)
        .segment(&outcome.events);
    let dropped_queries = segmentation.dropped_queries();

    let blocks: Vec<ActivityBlock> = if domain_mode {
        let detector = SubBlockDetector::new(thresholds.active_rate, thresholds.idle_gap);
        segmentation
            .blocks
            .into_iter()
            .map(|block| {
                let subs = detector.detect(&block.timestamps);
                block.with_sub_blocks(subs)
            })
            .collect()
    } else {
        segmentation.blocks
    };

    debug!(
        accepted = outcome.stats.accepted,
        blocks = blocks.len(),
        dropped = segmentation.dropped.len(),
        domain_mode,
        "Segmentation complete"
    );

    let (active_duration, idle_duration) = if domain_mode {
        let mut active = TimeDelta::zero();
        let mut idle = TimeDelta::zero();
        for sub in blocks.iter().flat_map(|b| b.sub_blocks.iter().flatten()) {
            match sub.kind {
                SubBlockKind::Active => active += sub.duration(),
                SubBlockKind::Idle => idle += sub.duration(),
            }
        }
        (Some(active), Some(idle))
    } else {
        (None, None)
    };

    let summary = ActivitySummary {
        total_blocks: blocks.len(),
        total_queries: blocks.iter().map(|b| b.query_count).sum(),
        total_duration: blocks.iter().map(ActivityBlock::display_duration).sum(),
        active_duration,
        idle_duration,
        background_filtered: outcome.stats.background_filtered,
        dropped_blocks: segmentation.dropped.len(),
        dropped_queries,
    };

    ActivityReport {
        thresholds,
        domain_mode,
        blocks,
        dropped: segmentation.dropped,
        stats: outcome.stats,
        scan,
        summary,
    }
}
