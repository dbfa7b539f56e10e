//! Command dispatch logic for elasticmetrics

use super::common::EX_SOFTWARE;
use super::{CollectArgs, InitArgs, ValidateArgs, init_config, process_collect, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "elasticmetrics", version, author, long_about = None)]
#[command(about = "Collect operational metrics from an Elasticsearch cluster")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the cluster and report its metrics
    Collect(Box<CollectArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// Designed to be called from main.rs with the program arguments. When the selected
/// command fails, its error is written to the host's error stream and the host is
/// asked to exit with `EX_SOFTWARE`.
///
/// # Errors
///
/// Returns the error of the executed command if it fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    let result = match &cli.command {
        Command::Collect(collect_args) => process_collect(host, collect_args).await,
        Command::Init(init_args) => init_config(host, init_args),
        Command::Validate(validate_args) => validate_config(host, validate_args),
    };

    if let Err(e) = &result {
        let _ = writeln!(host.error(), "error: {e}");
        host.exit(EX_SOFTWARE);
    }

    result
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::common::{OutputFormat, Target};
    use crate::commands::host::TestHost;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_collect_arguments_are_parsed() {
        let cli = Cli::try_parse_from(["elasticmetrics", "collect", "--targets", "node_stats", "--format", "lines"]).unwrap();
        let Command::Collect(args) = cli.command else {
            panic!("expected the collect command");
        };
        assert_eq!(args.targets.as_deref(), Some(&[Target::NodeStats][..]));
        assert_eq!(args.format, OutputFormat::Lines);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        let _ = Cli::try_parse_from(["elasticmetrics", "bogus"]).unwrap_err();
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_failing_command_reports_and_exits() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");
        let mut host = TestHost::new();

        let result = run(&mut host, ["elasticmetrics".into(), "validate".into(), missing.into_os_string()]).await;

        let _ = result.unwrap_err();
        assert_eq!(host.exit_code, Some(EX_SOFTWARE));
        assert!(host.error_str().starts_with("error: "));
        assert!(host.output_str().is_empty());
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_successful_command_does_not_exit() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("elasticmetrics.toml");
        let mut host = TestHost::new();

        run(&mut host, ["elasticmetrics".into(), "init".into(), path.clone().into_os_string()]).await.unwrap();
        run(&mut host, ["elasticmetrics".into(), "validate".into(), path.into_os_string()]).await.unwrap();

        assert_eq!(host.exit_code, None);
        assert!(host.output_str().contains("Configuration file is valid"));
    }
}
