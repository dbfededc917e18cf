use chrono::{DateTime, NaiveDate};
use querylens_domain::{DomainError, FilterCriteria, LogRecord, OutcomeFilter};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_new_criteria_defaults() {
    let criteria = FilterCriteria::new("192.168.88.23", date(2026, 2, 20));

    assert!(criteria.background_filter);
    assert!(criteria.background_filter_active());
    assert!(!criteria.is_domain_mode());
    assert_eq!(criteria.outcome, OutcomeFilter::All);
}

#[test]
fn test_domain_restriction_disables_background_filter() {
    let criteria =
        FilterCriteria::new("10.0.0.2", date(2026, 2, 20)).with_domain(Some("YouTube.com."));

    assert!(criteria.is_domain_mode());
    assert_eq!(criteria.domain.as_deref(), Some("youtube.com"));
    assert!(criteria.background_filter);
    assert!(!criteria.background_filter_active());
}

#[test]
fn test_blank_domain_is_no_restriction() {
    let criteria = FilterCriteria::new("10.0.0.2", date(2026, 2, 20)).with_domain(Some("  "));

    assert!(!criteria.is_domain_mode());
}

#[test]
fn test_outcome_filter_admits() {
    assert!(OutcomeFilter::All.admits(true));
    assert!(OutcomeFilter::All.admits(false));
    assert!(OutcomeFilter::AllowedOnly.admits(false));
    assert!(!OutcomeFilter::AllowedOnly.admits(true));
    assert!(OutcomeFilter::BlockedOnly.admits(true));
    assert!(!OutcomeFilter::BlockedOnly.admits(false));
}

#[test]
fn test_outcome_filter_from_str() {
    assert_eq!("allowed".parse::<OutcomeFilter>(), Ok(OutcomeFilter::AllowedOnly));
    assert_eq!("blocked".parse::<OutcomeFilter>(), Ok(OutcomeFilter::BlockedOnly));
    assert_eq!("all".parse::<OutcomeFilter>(), Ok(OutcomeFilter::All));
    assert_eq!(
        "everything".parse::<OutcomeFilter>(),
        Err(DomainError::InvalidQueryFilter("everything".to_string()))
    );
}

#[test]
fn test_parse_date() {
    assert_eq!(FilterCriteria::parse_date("2026-02-20"), Ok(date(2026, 2, 20)));
    assert!(matches!(
        FilterCriteria::parse_date("20/02/2026"),
        Err(DomainError::InvalidDate(_))
    ));
    assert!(FilterCriteria::parse_date("2026-02-30").is_err());
}

#[test]
fn test_local_date_uses_record_offset() {
    // 23:30 at +01:00 is still the 20th locally, although it is the 20th 22:30 UTC
    let late = DateTime::parse_from_rfc3339("2026-02-20T23:30:00+01:00").unwrap();
    // 00:30 at +01:00 is the 21st locally but the 20th in UTC
    let after_midnight = DateTime::parse_from_rfc3339("2026-02-21T00:30:00+01:00").unwrap();

    let a = LogRecord::new(late, "a.com", "10.0.0.2", false);
    let b = LogRecord::new(after_midnight, "a.com", "10.0.0.2", false);

    assert_eq!(a.local_date(), date(2026, 2, 20));
    assert_eq!(b.local_date(), date(2026, 2, 21));
}
