//! Common types and setup shared between commands.

use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Exit status for a command that failed while running.
pub const EX_SOFTWARE: i32 = 70;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// What to collect from the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Cluster health metrics
    ClusterHealth,

    /// Raw cluster statistics
    ClusterStats,

    /// Raw pending cluster tasks
    ClusterTasks,

    /// Performance metrics of the local node
    NodeStats,
}

impl Target {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON keyed by target
    #[default]
    Json,

    /// One `<path> <value>` line per metric, sorted by path
    Lines,
}

/// Arguments shared between commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `elasticmetrics.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
