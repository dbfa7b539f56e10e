use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `elasticmetrics.toml`)
    #[arg(value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    init_logging(args.log_level);

    let config_path = args.config.as_ref();
    let config = Config::load(Utf8Path::new("."), config_path)?;
    log::debug!("validated configuration for {}:{}", config.host, config.port);

    let _ = writeln!(host.output(), "Configuration file is valid");
    if let Some(path) = config_path {
        let _ = writeln!(host.output(), "Config file: {path}");
    } else {
        let _ = writeln!(host.output(), "Using default configuration (no config file given)");
    }

    Ok(())
}
