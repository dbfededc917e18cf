use crate::ports::{QueryLogSource, ScanReport};
use crate::services::{DomainAggregator, DomainRanking, EventFilter, FilterOutcome, FilterStats};
use querylens_domain::{
    DomainError, FilterCriteria, HostnameClassifier, LogRecord, TopDomainsOptions,
};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct TopDomainsReport {
    pub options: TopDomainsOptions,
    pub ranking: DomainRanking,
    pub stats: FilterStats,
    pub scan: ScanReport,
}

impl TopDomainsReport {
    /// Background-filtered share of the in-scope records, in percent.
    pub fn background_pct(&self) -> f64 {
        let in_scope = self.stats.in_scope();
        if in_scope == 0 {
            0.0
        } else {
            self.stats.background_filtered as f64 / in_scope as f64 * 100.0
        }
    }
}

pub struct GetTopDomainsUseCase {
    source: Arc<dyn QueryLogSource>,
    classifier: Arc<HostnameClassifier>,
}

impl GetTopDomainsUseCase {
    pub fn new(source: Arc<dyn QueryLogSource>, classifier: Arc<HostnameClassifier>) -> Self {
        Self { source, classifier }
    }

    #[instrument(skip(self, criteria), fields(client = %criteria.client_ip, date = %criteria.date))]
    pub async fn execute(
        &self,
        criteria: &FilterCriteria,
        options: TopDomainsOptions,
    ) -> Result<TopDomainsReport, DomainError> {
        let mut filter = EventFilter::new(criteria, &self.classifier);
        let mut sink = |record: LogRecord| {
            filter.push(&record);
        };
        let scan = self.source.scan(&mut sink).await?;

        let report = build_report(filter.finish(), options, scan);
        info!(
            counted = report.ranking.total_counted,
            distinct = report.ranking.distinct_keys,
            "Top-domains report built"
        );
        Ok(report)
    }

    /// Runs the pipeline over an in-memory batch.
    pub fn analyze<'r, I>(
        &self,
        criteria: &FilterCriteria,
        options: TopDomainsOptions,
        records: I,
    ) -> TopDomainsReport
    where
        I: IntoIterator<Item = &'r LogRecord>,
    {
        let outcome = EventFilter::apply(criteria, &self.classifier, records);
        let scan = ScanReport {
            lines: outcome.stats.scanned,
            records: outcome.stats.scanned,
            ..ScanReport::default()
        };
        build_report(outcome, options, scan)
    }
}

fn build_report(
    outcome: FilterOutcome,
    options: TopDomainsOptions,
    scan: ScanReport,
) -> TopDomainsReport {
    let ranking = DomainAggregator::new(options).aggregate(&outcome.events);
    TopDomainsReport {
        options,
        ranking,
        stats: outcome.stats,
        scan,
    }
}
