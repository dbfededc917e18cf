use querylens_domain::{
    hostname::normalize_hostname, FilterCriteria, FilteredEvent, HostnameClassifier, LogRecord,
};

/// Out-of-band counters collected while filtering.
///
/// Every scanned record lands in exactly one rejection bucket or in
/// `accepted`, so `scanned = out_of_scope + outcome_filtered +
/// domain_filtered + background_filtered + accepted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub scanned: u64,
    /// Wrong client IP or wrong local date
    pub out_of_scope: u64,
    pub outcome_filtered: u64,
    pub domain_filtered: u64,
    pub background_filtered: u64,
    pub accepted: u64,
}

impl FilterStats {
    /// Records for the requested client and day, before any other filter.
    pub fn in_scope(&self) -> u64 {
        self.scanned - self.out_of_scope
    }

    /// Records that passed client, day and outcome checks.
    pub fn candidates(&self) -> u64 {
        self.in_scope() - self.outcome_filtered
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Accepted events, stably sorted by timestamp
    pub events: Vec<FilteredEvent>,
    pub stats: FilterStats,
}

/// Incremental record filter for one client, day and outcome policy.
///
/// Records are pushed one at a time so a streaming source never has to hold
/// rejected records in memory.
pub struct EventFilter<'a> {
    criteria: &'a FilterCriteria,
    classifier: &'a HostnameClassifier,
    events: Vec<FilteredEvent>,
    stats: FilterStats,
}

impl<'a> EventFilter<'a> {
    pub fn new(criteria: &'a FilterCriteria, classifier: &'a HostnameClassifier) -> Self {
        Self {
            criteria,
            classifier,
            events: Vec::new(),
            stats: FilterStats::default(),
        }
    }

    /// Filters a complete batch in one call.
    pub fn apply<'r, I>(
        criteria: &'a FilterCriteria,
        classifier: &'a HostnameClassifier,
        records: I,
    ) -> FilterOutcome
    where
        I: IntoIterator<Item = &'r LogRecord>,
    {
        let mut filter = Self::new(criteria, classifier);
        for record in records {
            filter.push(record);
        }
        filter.finish()
    }

    /// Returns `true` when the record was accepted.
    pub fn push(&mut self, record: &LogRecord) -> bool {
        self.stats.scanned += 1;

        if *record.client_ip != *self.criteria.client_ip
            || record.local_date() != self.criteria.date
        {
            self.stats.out_of_scope += 1;
            return false;
        }

        if !self.criteria.outcome.admits(record.is_blocked) {
            self.stats.outcome_filtered += 1;
            return false;
        }

        let hostname = normalize_hostname(&record.hostname);

        if let Some(domain) = self.criteria.domain.as_deref() {
            if !self.classifier.matches_domain(&hostname, domain) {
                self.stats.domain_filtered += 1;
                return false;
            }
        } else if self.criteria.background_filter && self.classifier.is_background(&hostname) {
            self.stats.background_filtered += 1;
            return false;
        }

        self.stats.accepted += 1;
        self.events.push(FilteredEvent::new(record.timestamp, hostname));
        true
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    pub fn finish(mut self) -> FilterOutcome {
        // stable: equal timestamps keep their source order
        self.events.sort_by_key(|e| e.timestamp);
        FilterOutcome {
            events: self.events,
            stats: self.stats,
        }
    }
}
