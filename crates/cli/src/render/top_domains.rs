use super::format::{fmt_date, outcome_label, rule, RULE_WIDTH_TOP_DOMAINS};
use querylens_application::use_cases::TopDomainsReport;
use querylens_domain::{DomainCount, FilterCriteria, GroupingMode};
use std::io::{self, Write};

const BAR_MAX: usize = 30;
const MIN_KEY_WIDTH: usize = 20;

struct Columns {
    rank: usize,
    key: usize,
    count: usize,
}

pub fn render_top_domains<W: Write>(
    out: &mut W,
    criteria: &FilterCriteria,
    report: &TopDomainsReport,
) -> io::Result<()> {
    let ranking = &report.ranking;
    let stats = &report.stats;
    let heavy = rule('=', RULE_WIDTH_TOP_DOMAINS);

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "  Querylens Top-Domains Report")?;
    writeln!(out, "  Client IP  : {}", criteria.client_ip)?;
    writeln!(out, "  Date       : {}", fmt_date(criteria.date))?;
    writeln!(out, "  Top        : {}", report.options.top_n)?;
    if let Some(outcome) = outcome_label(criteria) {
        writeln!(out, "  Queries    : {outcome} only")?;
    }
    if criteria.background_filter_active() {
        writeln!(
            out,
            "  BG filter  : on  ({} of {} queries removed, {:.0}%)",
            stats.background_filtered,
            stats.in_scope(),
            report.background_pct()
        )?;
    } else {
        writeln!(out, "  BG filter  : off")?;
    }
    let grouping = match report.options.grouping {
        GroupingMode::RootDomain => "by root domain",
        GroupingMode::Exact => "exact hostname",
    };
    writeln!(out, "  Grouping   : {grouping}")?;
    writeln!(
        out,
        "  Queries    : {} counted  ({} total)",
        ranking.total_counted,
        stats.in_scope()
    )?;
    writeln!(out, "{heavy}")?;

    let Some(first) = ranking.entries.first() else {
        writeln!(out)?;
        writeln!(out, "  No queries found for this IP on the selected date.")?;
        writeln!(out)?;
        return Ok(());
    };

    let columns = Columns {
        rank: report.options.top_n.to_string().len() + 1,
        key: ranking
            .entries
            .iter()
            .map(|e| e.key.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_KEY_WIDTH),
        count: first.count.to_string().len(),
    };

    let header = format!(
        "  {:<rank$}  {:<key$}  {:>count$}   {:>10}   Bar",
        "#",
        "Domain",
        "Queries",
        "% of total",
        rank = columns.rank,
        key = columns.key,
        count = columns.count,
    );
    writeln!(out)?;
    writeln!(out, "{header}")?;
    writeln!(
        out,
        "  {}",
        rule('-', header.chars().count() - 2 + BAR_MAX)
    )?;

    for (i, entry) in ranking.entries.iter().enumerate() {
        render_entry(out, &columns, i + 1, entry, ranking.total_counted)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule('-', RULE_WIDTH_TOP_DOMAINS))?;
    writeln!(
        out,
        "  Top {} coverage : {} queries  ({:.1}% of filtered total)",
        report.options.top_n,
        ranking.top_total,
        ranking.coverage_pct()
    )?;
    writeln!(out, "  Distinct domains  : {}", ranking.distinct_keys)?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;
    Ok(())
}

fn render_entry<W: Write>(
    out: &mut W,
    columns: &Columns,
    rank: usize,
    entry: &DomainCount,
    total: u64,
) -> io::Result<()> {
    let pct = entry.share_pct(total);
    let bar = "\u{2588}".repeat(bar_len(pct));
    writeln!(
        out,
        "  {rank:<rw$}  {key:<kw$}  {count:>cw$}   {pct:>9.1}%   {bar}",
        key = entry.key,
        count = entry.count,
        rw = columns.rank,
        kw = columns.key,
        cw = columns.count,
    )?;

    let Some(breakdown) = &entry.subdomains else {
        return Ok(());
    };
    for sub in &breakdown.listed {
        let label = format!("\u{21b3} {}", sub.hostname);
        let sub_pct = if entry.count == 0 {
            0.0
        } else {
            sub.count as f64 / entry.count as f64 * 100.0
        };
        writeln!(
            out,
            "  {:rw$}    {label:<kw$}  {:>cw$}   {sub_pct:>9.1}%",
            "",
            sub.count,
            rw = columns.rank,
            kw = columns.key,
            cw = columns.count,
        )?;
    }
    if let Some(rest) = breakdown.remainder {
        let label = format!("\u{21b3} \u{2026} and {} more", rest.hosts);
        writeln!(
            out,
            "  {:rw$}    {label:<kw$}  {:>cw$}",
            "",
            rest.count,
            rw = columns.rank,
            kw = columns.key,
            cw = columns.count,
        )?;
    }
    Ok(())
}

fn bar_len(pct: f64) -> usize {
    (pct / 100.0 * BAR_MAX as f64).round().clamp(0.0, BAR_MAX as f64) as usize
}
