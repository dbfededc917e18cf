use super::format::{fmt_date, fmt_duration, outcome_label, rule, RULE_WIDTH_ACTIVITY};
use chrono::TimeDelta;
use querylens_application::use_cases::ActivityReport;
use querylens_domain::{ActivityBlock, DroppedBlock, FilterCriteria, SubBlock, SubBlockKind};
use std::io::{self, Write};

pub fn render_activity<W: Write>(
    out: &mut W,
    criteria: &FilterCriteria,
    report: &ActivityReport,
) -> io::Result<()> {
    let thresholds = report.thresholds;
    let heavy = rule('=', RULE_WIDTH_ACTIVITY);

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "  Querylens Activity Report")?;
    writeln!(out, "  Client IP : {}", criteria.client_ip)?;
    writeln!(out, "  Date      : {}", fmt_date(criteria.date))?;
    if let Some(outcome) = outcome_label(criteria) {
        writeln!(out, "  Queries   : {outcome} only")?;
    }
    if let Some(domain) = criteria.domain.as_deref() {
        writeln!(
            out,
            "  Domain    : {domain}  ({} of {} queries matched)",
            report.stats.accepted,
            report.stats.candidates()
        )?;
        writeln!(
            out,
            "  Activity  : \u{2265}{} queries/min = active,  idle gap \u{2264}{} min",
            thresholds.active_rate, thresholds.idle_gap
        )?;
    }
    writeln!(out, "  Gap split : {} minutes of inactivity", thresholds.gap_minutes)?;
    if !report.domain_mode {
        if criteria.background_filter {
            writeln!(
                out,
                "  BG filter : on  (hostname patterns + min {} queries/block)",
                thresholds.min_queries
            )?;
        } else {
            writeln!(out, "  BG filter : off")?;
        }
    }
    writeln!(out, "{heavy}")?;

    if report.blocks.is_empty() {
        writeln!(out)?;
        writeln!(out, "  No activity found for this IP on the selected date.")?;
        render_filter_summary(out, criteria, report)?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, block) in report.blocks.iter().enumerate() {
        render_block(out, i + 1, block)?;
        if let Some(subs) = &block.sub_blocks {
            render_breakdown(out, subs, thresholds.active_rate, thresholds.idle_gap)?;
        }
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(out, "{}", rule('-', RULE_WIDTH_ACTIVITY))?;
    writeln!(out, "  Total blocks  : {}", summary.total_blocks)?;
    writeln!(out, "  Total queries : {}", summary.total_queries)?;
    writeln!(out, "  Total active  : {}", fmt_duration(summary.total_duration))?;
    if let (Some(active), Some(idle), Some(pct)) = (
        summary.active_duration,
        summary.idle_duration,
        summary.active_pct(),
    ) {
        writeln!(out, "  Domain active : {}  ({pct:.0}% of session)", fmt_duration(active))?;
        writeln!(out, "  Domain idle   : {}", fmt_duration(idle))?;
    }
    render_filter_summary(out, criteria, report)?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;
    Ok(())
}

fn render_block<W: Write>(out: &mut W, index: usize, block: &ActivityBlock) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  Block {index:>2}")?;
    writeln!(
        out,
        "    Start      : {}  ({})",
        block.start_time.format("%H:%M:%S"),
        block.start_time.format("%z")
    )?;
    writeln!(out, "    End        : {}", block.end_time.format("%H:%M:%S"))?;
    writeln!(out, "    Duration   : {}", fmt_duration(block.display_duration()))?;
    writeln!(out, "    DNS queries: {}", block.query_count)
}

fn render_breakdown<W: Write>(
    out: &mut W,
    subs: &[SubBlock],
    active_rate: u32,
    idle_gap: u32,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "    Activity breakdown  (\u{2265}{active_rate} queries/min = active, idle gap \u{2264}{idle_gap} min):"
    )?;

    let active_count = subs.iter().filter(|s| s.is_active()).count();
    if active_count == 0 {
        writeln!(
            out,
            "      No active periods detected (all query bursts below {active_rate}/min threshold)"
        )?;
        return Ok(());
    }

    for sub in subs {
        let span = format!(
            "{} \u{2013} {}  {}",
            sub.start_time.format("%H:%M"),
            sub.end_time.format("%H:%M"),
            fmt_duration(sub.duration())
        );
        match sub.kind {
            SubBlockKind::Active => writeln!(
                out,
                "      [ACTIVE]  {span}  {} queries  avg {:.1}/min  peak {}/min",
                sub.query_count, sub.avg_rate, sub.peak_rate
            )?,
            SubBlockKind::Idle if sub.query_count == 0 => {
                writeln!(out, "      [ IDLE ]  {span}  0 queries")?
            }
            SubBlockKind::Idle => writeln!(
                out,
                "      [ IDLE ]  {span}  {} queries  avg {:.1}/min",
                sub.query_count, sub.avg_rate
            )?,
        }
    }

    let (active, idle) = subs.iter().fold(
        (TimeDelta::zero(), TimeDelta::zero()),
        |(active, idle), sub| match sub.kind {
            SubBlockKind::Active => (active + sub.duration(), idle),
            SubBlockKind::Idle => (active, idle + sub.duration()),
        },
    );
    let span = (active + idle).num_seconds().max(1);
    let pct = active.num_seconds() as f64 / span as f64 * 100.0;

    writeln!(out, "      {}", rule('\u{2500}', 48))?;
    writeln!(out, "      Active sub-blocks : {active_count}")?;
    writeln!(out, "      Active time       : {} ({pct:.0}% of block)", fmt_duration(active))?;
    writeln!(out, "      Idle time         : {}", fmt_duration(idle))
}

fn render_filter_summary<W: Write>(
    out: &mut W,
    criteria: &FilterCriteria,
    report: &ActivityReport,
) -> io::Result<()> {
    let bg_active = criteria.background_filter_active();
    if !bg_active && report.dropped.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    if bg_active && report.summary.background_filtered > 0 {
        writeln!(
            out,
            "  [filtered]  {} background-hostname queries removed",
            report.summary.background_filtered
        )?;
    }
    if !report.dropped.is_empty() {
        writeln!(
            out,
            "  [filtered]  {} thin block(s) dropped (< {} queries each, {} queries total):",
            report.summary.dropped_blocks, report.thresholds.min_queries, report.summary.dropped_queries
        )?;
        for dropped in &report.dropped {
            render_dropped(out, dropped)?;
        }
    }
    Ok(())
}

fn render_dropped<W: Write>(out: &mut W, dropped: &DroppedBlock) -> io::Result<()> {
    let noun = if dropped.query_count == 1 { "query" } else { "queries" };
    writeln!(
        out,
        "              {} \u{2013} {}  ({} {noun})",
        dropped.start_time.format("%H:%M:%S"),
        dropped.end_time.format("%H:%M:%S"),
        dropped.query_count
    )
}
