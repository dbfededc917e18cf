use anyhow::{bail, Context};
use querylens_domain::{CliOverrides, Config};
use std::path::{Path, PathBuf};

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let log_from_cli = cli_overrides.log.is_some();
    let config = Config::load(config_path, cli_overrides).context("Failed to load configuration")?;

    config.validate().context("Invalid configuration")?;

    let log = log_path(&config)?;
    if !log.is_file() {
        match (&config.source_path, log_from_cli) {
            (Some(source), false) => bail!(
                "log file not found: {}\n  Check the path and make sure the file exists.\n  (path came from config file: {})",
                log.display(),
                source.display()
            ),
            _ => bail!(
                "log file not found: {}\n  Check the path and make sure the file exists.\n  Tip: set the correct path with --log or via `log` in querylens.toml",
                log.display()
            ),
        }
    }

    Ok(config)
}

/// The validated query log location.
pub fn log_path(config: &Config) -> anyhow::Result<PathBuf> {
    match config.log.as_deref() {
        Some(log) if !log.is_empty() => Ok(Path::new(log).to_path_buf()),
        _ => bail!("no log file specified"),
    }
}
