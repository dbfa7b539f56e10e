use super::common::Target;
use crate::Result;
use crate::collector::DEFAULT_PORT;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use strum::IntoEnumIterator;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "elasticmetrics.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server hostname or address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect over HTTPS
    #[serde(default)]
    pub ssl: bool,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Time allowed for each request
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// What to collect when no targets are given on the command line
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,

    /// Placed between the segments of metric paths
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Leading segment of every metric path
    #[serde(default)]
    pub prefix: String,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_host() -> String {
    "localhost".to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_targets() -> Vec<Target> {
    Target::iter().collect()
}

fn default_separator() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `elasticmetrics.toml` is looked up in `base_path`, and the
    /// defaults are used when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds invalid values
    pub fn load(base_path: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading elasticmetrics configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_path.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading elasticmetrics configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!("loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or empty
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(app_err!("host must not be empty"));
        }

        if self.port == 0 {
            return Err(app_err!("port must be between 1 and 65535"));
        }

        if self.timeout.is_zero() {
            return Err(app_err!("timeout must be greater than zero"));
        }

        if self.separator.is_empty() {
            return Err(app_err!("separator must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
