use querylens_domain::{
    domain_count::SUBDOMAIN_DISPLAY_LIMIT, root_domain, DomainCount, FilteredEvent, GroupingMode,
    SubdomainBreakdown, SubdomainCount, SubdomainRemainder, TopDomainsOptions,
};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainRanking {
    /// At most `top_n` entries, by count descending then key ascending
    pub entries: Vec<DomainCount>,
    pub total_counted: u64,
    pub distinct_keys: usize,
    /// Sum of the displayed entries
    pub top_total: u64,
}

impl DomainRanking {
    /// Share of all counted queries covered by the displayed entries.
    pub fn coverage_pct(&self) -> f64 {
        if self.total_counted == 0 {
            0.0
        } else {
            self.top_total as f64 / self.total_counted as f64 * 100.0
        }
    }

    /// Queries attributed to keys outside the displayed entries.
    pub fn remainder(&self) -> u64 {
        self.total_counted - self.top_total
    }
}

/// Counts and ranks queried hostnames.
#[derive(Debug, Clone, Copy)]
pub struct DomainAggregator {
    options: TopDomainsOptions,
}

impl DomainAggregator {
    pub fn new(options: TopDomainsOptions) -> Self {
        Self { options }
    }

    pub fn aggregate(&self, events: &[FilteredEvent]) -> DomainRanking {
        let by_root = self.options.grouping == GroupingMode::RootDomain;
        let detail = by_root && self.options.subdomain_detail;

        let mut counts: FxHashMap<Arc<str>, u64> = FxHashMap::default();
        let mut nested: FxHashMap<Arc<str>, FxHashMap<Arc<str>, u64>> = FxHashMap::default();

        for event in events {
            let key: Arc<str> = if by_root {
                Arc::from(root_domain(&event.hostname))
            } else {
                event.hostname.clone()
            };
            if detail {
                *nested
                    .entry(key.clone())
                    .or_default()
                    .entry(event.hostname.clone())
                    .or_insert(0) += 1;
            }
            *counts.entry(key).or_insert(0) += 1;
        }

        let total_counted: u64 = counts.values().sum();
        let distinct_keys = counts.len();

        let entries: Vec<DomainCount> = rank(counts)
            .into_iter()
            .take(self.options.top_n)
            .map(|(key, count)| {
                let subdomains =
                    detail.then(|| breakdown(nested.remove(&key).unwrap_or_default()));
                DomainCount {
                    key,
                    count,
                    subdomains,
                }
            })
            .collect();

        let top_total: u64 = entries.iter().map(|e| e.count).sum();

        DomainRanking {
            entries,
            total_counted,
            distinct_keys,
            top_total,
        }
    }
}

/// Count descending, ties by key ascending.
fn rank(counts: FxHashMap<Arc<str>, u64>) -> Vec<(Arc<str>, u64)> {
    let mut ranked: Vec<(Arc<str>, u64)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)));
    ranked
}

fn breakdown(hosts: FxHashMap<Arc<str>, u64>) -> SubdomainBreakdown {
    let ranked = rank(hosts);
    let rest = ranked.get(SUBDOMAIN_DISPLAY_LIMIT..).unwrap_or_default();
    let remainder = (!rest.is_empty()).then(|| SubdomainRemainder {
        hosts: rest.len(),
        count: rest.iter().map(|(_, c)| c).sum(),
    });

    SubdomainBreakdown {
        listed: ranked
            .iter()
            .take(SUBDOMAIN_DISPLAY_LIMIT)
            .map(|(hostname, count)| SubdomainCount {
                hostname: hostname.clone(),
                count: *count,
            })
            .collect(),
        remainder,
    }
}
