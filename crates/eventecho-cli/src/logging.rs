use anyhow::{anyhow, Result};
use eventecho_planner::Config;

/// Install the global logger from the `log_level` / `log_coloured` settings.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init(config: &Config) -> Result<()> {
    let opts = twyg::OptsBuilder::new()
        .coloured(config.log_coloured)
        .level(parse_level(&config.log_level)?)
        .output(twyg::Output::Stderr)
        .build()
        .map_err(|e| anyhow!("Invalid logging options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow!("Failed to initialize logging: {e:?}"))?;
    Ok(())
}

fn parse_level(level: &str) -> Result<twyg::LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(twyg::LogLevel::Trace),
        "debug" => Ok(twyg::LogLevel::Debug),
        "info" => Ok(twyg::LogLevel::Info),
        "warn" | "warning" => Ok(twyg::LogLevel::Warn),
        "error" => Ok(twyg::LogLevel::Error),
        other => Err(anyhow!(
            "Unknown log_level '{other}' (expected trace, debug, info, warn, or error)"
        )),
    }
}
