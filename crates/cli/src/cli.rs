use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use querylens_domain::{CliOverrides, FilterCriteria, OutcomeFilter};

#[derive(Parser)]
#[command(name = "querylens")]
#[command(version)]
#[command(about = "Querylens - activity blocks and top domains from an AdGuard Home query log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show when a client was active on a given day
    Activity(ActivityArgs),

    /// Rank the domains a client queried on a given day
    TopDomains(TopDomainsArgs),
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Activity(args) => &args.common,
            Command::TopDomains(args) => &args.common,
        }
    }

    pub fn cli_overrides(&self) -> CliOverrides {
        match self {
            Command::Activity(args) => args.cli_overrides(),
            Command::TopDomains(args) => args.cli_overrides(),
        }
    }
}

/// Arguments shared by every report
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Client IP address (e.g. 192.168.88.23)
    pub ip: String,

    /// Day to analyse (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub date: NaiveDate,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Path to querylog.json
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,

    /// Disable background-hostname filtering
    #[arg(long)]
    pub no_bg_filter: bool,

    /// Count only queries that were not blocked
    #[arg(long, conflicts_with = "only_blocked")]
    pub only_allowed: bool,

    /// Count only blocked queries
    #[arg(long)]
    pub only_blocked: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CommonArgs {
    fn query_filter(&self) -> Option<OutcomeFilter> {
        if self.only_allowed {
            Some(OutcomeFilter::AllowedOnly)
        } else if self.only_blocked {
            Some(OutcomeFilter::BlockedOnly)
        } else {
            None
        }
    }

    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            log: self.log.clone(),
            no_bg_filter: self.no_bg_filter,
            query_filter: self.query_filter(),
            log_level: self.log_level.clone(),
            ..CliOverrides::default()
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ActivityArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Minutes of inactivity that close a block
    #[arg(long, value_name = "MINUTES")]
    pub gap: Option<u32>,

    /// Drop blocks with fewer queries than this
    #[arg(long, value_name = "N")]
    pub min_queries: Option<u32>,

    /// Only count queries to this domain and its subdomains
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Queries per minute that count as active (domain mode)
    #[arg(long, value_name = "N")]
    pub active_rate: Option<u32>,

    /// Cold minutes tolerated inside an active period (domain mode)
    #[arg(long, value_name = "MINUTES")]
    pub idle_gap: Option<u32>,
}

impl ActivityArgs {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            gap: self.gap,
            min_queries: self.min_queries,
            active_rate: self.active_rate,
            idle_gap: self.idle_gap,
            ..self.common.cli_overrides()
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TopDomainsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of domains to list
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Count exact hostnames instead of root domains
    #[arg(long)]
    pub exact: bool,

    /// List the busiest hostnames under each root domain
    #[arg(long)]
    pub show_subdomains: bool,
}

impl TopDomainsArgs {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            top_n: self.top,
            exact: self.exact,
            show_subdomains: self.show_subdomains,
            ..self.common.cli_overrides()
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    FilterCriteria::parse_date(s).map_err(|e| e.to_string())
}
