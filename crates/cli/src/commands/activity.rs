use crate::cli::ActivityArgs;
use crate::di::UseCases;
use crate::render::render_activity;
use querylens_domain::Config;
use std::io::Write;
use tracing::info;

pub async fn run_activity(
    args: &ActivityArgs,
    config: &Config,
    use_cases: &UseCases,
) -> anyhow::Result<()> {
    let criteria =
        config.filter_criteria(&args.common.ip, args.common.date, args.domain.as_deref());
    let thresholds = config.activity.thresholds(criteria.is_domain_mode());
    info!(?thresholds, domain_mode = criteria.is_domain_mode(), "Running activity report");

    let report = use_cases.get_activity.execute(&criteria, thresholds).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_activity(&mut out, &criteria, &report)?;
    out.flush()?;
    Ok(())
}
