use crate::cli::TopDomainsArgs;
use crate::di::UseCases;
use crate::render::render_top_domains;
use querylens_domain::Config;
use std::io::Write;
use tracing::info;

pub async fn run_top_domains(
    args: &TopDomainsArgs,
    config: &Config,
    use_cases: &UseCases,
) -> anyhow::Result<()> {
    let criteria = config.filter_criteria(&args.common.ip, args.common.date, None);
    let options = config.top_domains.options();
    info!(?options, "Running top-domains report");

    let report = use_cases.get_top_domains.execute(&criteria, options).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_top_domains(&mut out, &criteria, &report)?;
    out.flush()?;
    Ok(())
}
