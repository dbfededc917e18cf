use querylens_application::services::DomainAggregator;
use querylens_domain::{FilteredEvent, GroupingMode, TopDomainsOptions};

mod helpers;
use helpers::event;

fn events(hosts: &[(&str, usize)]) -> Vec<FilteredEvent> {
    hosts
        .iter()
        .flat_map(|&(host, n)| std::iter::repeat(host).take(n))
        .map(|host| event("08:00:00", host))
        .collect()
}

fn options(grouping: GroupingMode, top_n: usize, subdomain_detail: bool) -> TopDomainsOptions {
    TopDomainsOptions {
        grouping,
        top_n,
        subdomain_detail,
    }
}

#[test]
fn test_root_grouping_merges_subdomains() {
    let events = events(&[("ecsv2.roblox.com", 2), ("roblox.com", 1), ("notroblox.com", 1)]);

    let ranking = DomainAggregator::new(TopDomainsOptions::default()).aggregate(&events);

    assert_eq!(ranking.entries.len(), 2);
    assert_eq!(&*ranking.entries[0].key, "roblox.com");
    assert_eq!(ranking.entries[0].count, 3);
    assert_eq!(&*ranking.entries[1].key, "notroblox.com");
    assert_eq!(ranking.entries[1].count, 1);
}

#[test]
fn test_exact_grouping_keeps_hostnames() {
    let events = events(&[("ecsv2.roblox.com", 2), ("roblox.com", 1)]);

    let ranking =
        DomainAggregator::new(options(GroupingMode::Exact, 10, false)).aggregate(&events);

    let keys: Vec<&str> = ranking.entries.iter().map(|e| &*e.key).collect();
    assert_eq!(keys, vec!["ecsv2.roblox.com", "roblox.com"]);
    assert!(ranking.entries.iter().all(|e| e.subdomains.is_none()));
}

#[test]
fn test_ties_break_by_key_ascending() {
    let events = events(&[("zeta.com", 3), ("alpha.com", 3), ("mid.com", 3), ("big.com", 5)]);

    let ranking = DomainAggregator::new(TopDomainsOptions::default()).aggregate(&events);

    let keys: Vec<&str> = ranking.entries.iter().map(|e| &*e.key).collect();
    assert_eq!(keys, vec!["big.com", "alpha.com", "mid.com", "zeta.com"]);
}

#[test]
fn test_top_n_and_coverage() {
    let events = events(&[("a.com", 6), ("b.com", 3), ("c.com", 1)]);

    let ranking =
        DomainAggregator::new(options(GroupingMode::RootDomain, 2, false)).aggregate(&events);

    assert_eq!(ranking.entries.len(), 2);
    assert_eq!(ranking.total_counted, 10);
    assert_eq!(ranking.distinct_keys, 3);
    assert_eq!(ranking.top_total, 9);
    assert_eq!(ranking.remainder(), 1);
    assert!((ranking.coverage_pct() - 90.0).abs() < 1e-9);
    assert!((ranking.entries[0].share_pct(ranking.total_counted) - 60.0).abs() < 1e-9);
}

#[test]
fn test_subdomain_breakdown_caps_at_five() {
    let events = events(&[
        ("a.example.com", 7),
        ("b.example.com", 6),
        ("c.example.com", 5),
        ("d.example.com", 4),
        ("e.example.com", 3),
        ("f.example.com", 2),
        ("g.example.com", 1),
    ]);

    let ranking =
        DomainAggregator::new(options(GroupingMode::RootDomain, 10, true)).aggregate(&events);

    let entry = &ranking.entries[0];
    let breakdown = entry.subdomains.as_ref().unwrap();
    let listed: Vec<&str> = breakdown.listed.iter().map(|s| &*s.hostname).collect();
    assert_eq!(
        listed,
        vec!["a.example.com", "b.example.com", "c.example.com", "d.example.com", "e.example.com"]
    );
    let remainder = breakdown.remainder.unwrap();
    assert_eq!(remainder.hosts, 2);
    assert_eq!(remainder.count, 3);
    assert_eq!(breakdown.total(), entry.count);
}

#[test]
fn test_breakdown_conserves_counts() {
    let events = events(&[
        ("roblox.com", 2),
        ("www.roblox.com", 4),
        ("ecsv2.roblox.com", 4),
        ("youtube.com", 1),
        ("i.ytimg.com", 3),
        ("r1.googlevideo.com", 2),
    ]);

    let ranking =
        DomainAggregator::new(options(GroupingMode::RootDomain, 2, true)).aggregate(&events);

    for entry in &ranking.entries {
        let breakdown = entry.subdomains.as_ref().unwrap();
        assert_eq!(breakdown.total(), entry.count);
    }
    let listed: u64 = ranking.entries.iter().map(|e| e.count).sum();
    assert_eq!(listed + ranking.remainder(), ranking.total_counted);
    assert_eq!(ranking.total_counted, events.len() as u64);

    // the bare root counts as one of its own contributors
    let roblox = &ranking.entries[0].subdomains.as_ref().unwrap().listed;
    let hosts: Vec<&str> = roblox.iter().map(|s| &*s.hostname).collect();
    assert_eq!(hosts, vec!["ecsv2.roblox.com", "www.roblox.com", "roblox.com"]);
}

#[test]
fn test_detail_ignored_for_exact_grouping() {
    let events = events(&[("www.roblox.com", 1)]);

    let ranking = DomainAggregator::new(options(GroupingMode::Exact, 10, true)).aggregate(&events);

    assert!(ranking.entries[0].subdomains.is_none());
}

#[test]
fn test_empty_input() {
    let ranking = DomainAggregator::new(TopDomainsOptions::default()).aggregate(&[]);

    assert!(ranking.entries.is_empty());
    assert_eq!(ranking.total_counted, 0);
    assert_eq!(ranking.coverage_pct(), 0.0);
}
