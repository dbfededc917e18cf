use chrono::{NaiveDate, TimeDelta};
use querylens_domain::{FilterCriteria, OutcomeFilter};

pub const RULE_WIDTH_ACTIVITY: usize = 60;
pub const RULE_WIDTH_TOP_DOMAINS: usize = 70;

/// Formats whole seconds as `1h 2m 3s`, dropping leading zero units.
pub fn fmt_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds().max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if m > 0 || h > 0 {
        parts.push(format!("{m}m"));
    }
    parts.push(format!("{s}s"));
    parts.join(" ")
}

pub fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%A)").to_string()
}

pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Header line for a restricted outcome filter.
pub fn outcome_label(criteria: &FilterCriteria) -> Option<&'static str> {
    match criteria.outcome {
        OutcomeFilter::All => None,
        other => Some(other.to_str()),
    }
}
