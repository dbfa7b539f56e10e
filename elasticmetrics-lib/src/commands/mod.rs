//! Command-line interface and orchestration for elasticmetrics
//!
//! This module implements the CLI commands and ties the collector, metric extraction,
//! and report generation together. It handles argument parsing, configuration
//! management, and the high-level workflows.
//!
//! # Commands
//!
//! - **collect**: Poll the selected endpoints, extract and aggregate metrics, and
//!   write a JSON or line-per-metric report
//! - **init**: Generate a default configuration file
//! - **validate**: Check that a configuration file loads and holds sane values
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. A failing command has its error written to the
//! host's error stream and exits with `EX_SOFTWARE`.
//!
//! Settings come from a TOML file (`elasticmetrics.toml`) with command-line options
//! taking precedence.

mod collect;
mod common;
mod config;
mod host;
mod init;
mod run;
mod validate;

pub use collect::{CollectArgs, process_collect};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
