use super::Host;
use super::common::{CommonArgs, OutputFormat, Target, init_logging};
use super::config::Config;
use crate::Result;
use crate::collector::{ClientOptions, Collector, Scheme};
use crate::metrics::{FlattenOptions, Metrics, extract_cluster_health, extract_node_stats};
use crate::reports::{ReportableTarget, generate_json, generate_lines};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use serde_json::Value;
use std::fs;
use std::io::Write;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
#[expect(clippy::struct_excessive_bools, reason = "each flag pair maps to one command-line switch")]
pub struct CollectArgs {
    /// Server hostname or address
    #[arg(long, value_name = "HOST", help_heading = "Connection")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, value_name = "PORT", help_heading = "Connection")]
    pub port: Option<u16>,

    /// HTTP basic auth user
    #[arg(long, short = 'u', value_name = "USER", env = "ELASTICSEARCH_USER", help_heading = "Connection")]
    pub user: Option<String>,

    /// HTTP basic auth password
    #[arg(long, short = 'p', value_name = "PASSWORD", env = "ELASTICSEARCH_PASSWORD", hide_env_values = true, help_heading = "Connection")]
    pub password: Option<String>,

    /// Connect over HTTPS
    #[arg(long, overrides_with = "no_ssl", help_heading = "Connection")]
    pub ssl: bool,

    /// Connect over plain HTTP, even if the configuration file enables HTTPS
    #[arg(long, overrides_with = "ssl", help_heading = "Connection")]
    pub no_ssl: bool,

    /// Skip TLS certificate verification (insecure)
    #[arg(long, overrides_with = "no_insecure", help_heading = "Connection")]
    pub insecure: bool,

    /// Verify TLS certificates, even if the configuration file skips verification
    #[arg(long, overrides_with = "insecure", help_heading = "Connection")]
    pub no_insecure: bool,

    /// Time allowed for each request (e.g. `10s`, `1m`)
    #[arg(long, value_name = "DURATION", value_parser = parse_duration, help_heading = "Connection")]
    pub timeout: Option<Duration>,

    /// Comma separated list of what to collect
    #[arg(long, value_name = "TARGETS", value_delimiter = ',')]
    pub targets: Option<Vec<Target>>,

    /// Report format
    #[arg(long, value_name = "FORMAT", default_value = "json", help_heading = "Report Output")]
    pub format: OutputFormat,

    /// Separator between the segments of metric paths in line output
    #[arg(long, value_name = "SEPARATOR", help_heading = "Report Output")]
    pub separator: Option<String>,

    /// Prefix for metric paths in line output, typically a node alias
    #[arg(long, value_name = "PREFIX", help_heading = "Report Output")]
    pub prefix: Option<String>,

    /// Write the report to a file instead of to the terminal
    #[arg(long, short = 'o', value_name = "PATH", help_heading = "Report Output")]
    pub output: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

fn parse_duration(s: &str) -> Result<Duration, humantime_serde::re::humantime::DurationError> {
    humantime_serde::re::humantime::parse_duration(s)
}

/// Settings resolved from the configuration file and the command line, with the command line winning.
#[derive(Debug)]
struct Settings {
    client: ClientOptions,
    targets: Vec<Target>,
    flatten: FlattenOptions,
}

impl Settings {
    fn resolve(config: Config, args: &CollectArgs) -> Result<Self> {
        let separator = args.separator.clone().unwrap_or(config.separator);
        if separator.is_empty() {
            bail!("separator must not be empty");
        }

        let selected = args.targets.as_deref().unwrap_or(&config.targets);
        if selected.is_empty() {
            bail!("no targets to collect");
        }

        // fixed order, no duplicates
        let targets = Target::iter().filter(|target| selected.contains(target)).collect();

        let client = ClientOptions {
            host: args.host.clone().unwrap_or(config.host),
            port: args.port.unwrap_or(config.port),
            scheme: if flag(args.ssl, args.no_ssl, config.ssl) { Scheme::Https } else { Scheme::Http },
            user: args.user.clone().or(config.user),
            password: args.password.clone().or(config.password),
            insecure: flag(args.insecure, args.no_insecure, config.insecure),
            timeout: args.timeout.unwrap_or(config.timeout),
            headers: config.headers,
        };

        Ok(Self {
            client,
            targets,
            flatten: FlattenOptions {
                separator,
                prefix: args.prefix.clone().unwrap_or(config.prefix),
            },
        })
    }
}

/// A boolean set on, off, or left to the configuration file by a pair of flags.
const fn flag(on: bool, off: bool, configured: bool) -> bool {
    on || (!off && configured)
}

pub async fn process_collect<H: Host>(host: &mut H, args: &CollectArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let config = Config::load(Utf8Path::new("."), args.common.config.as_ref())?;
    let settings = Settings::resolve(config, args)?;
    let collector = Collector::new(&settings.client)?;

    log::info!("collecting metrics from {}", collector.client().base_url());

    let mut reportable_targets = Vec::with_capacity(settings.targets.len());
    for target in &settings.targets {
        let metrics = collect_target(&collector, *target).await?;
        reportable_targets.push(ReportableTarget::new(target.name(), metrics));
    }

    let mut report = String::new();
    match args.format {
        OutputFormat::Json => generate_json(&reportable_targets, &mut report)?,
        OutputFormat::Lines => generate_lines(&reportable_targets, &settings.flatten, &mut report)?,
    }

    if let Some(path) = &args.output {
        fs::write(path, report).into_app_err_with(|| format!("writing report to '{path}'"))?;
        log::info!("wrote report to '{path}'");
    } else {
        write!(host.output(), "{report}")?;
    }

    Ok(())
}

async fn collect_target(collector: &Collector, target: Target) -> Result<Metrics> {
    match target {
        Target::ClusterHealth => Ok(extract_cluster_health(&collector.cluster_health().await?)),
        Target::NodeStats => extract_node_stats(&collector.node_stats().await?),
        Target::ClusterStats => raw_metrics(target, collector.cluster_stats().await?),
        Target::ClusterTasks => raw_metrics(target, collector.cluster_pending_tasks().await?),
    }
}

fn raw_metrics(target: Target, payload: Value) -> Result<Metrics> {
    match payload {
        Value::Object(metrics) => Ok(metrics),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            bail!("{} response is not a JSON object", target.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_args(args: &[&str]) -> CollectArgs {
        CollectArgs::parse_from(std::iter::once("collect").chain(args.iter().copied()))
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let args = parse_args(&["--user", "", "--password", ""]);
        let settings = Settings::resolve(Config::default(), &args).unwrap();
        assert_eq!(settings.client.host, "localhost");
        assert_eq!(settings.client.port, 9200);
        assert_eq!(settings.client.scheme, Scheme::Http);
        assert_eq!(settings.client.timeout, Duration::from_secs(30));
        assert_eq!(settings.targets, Target::iter().collect::<Vec<_>>());
        assert_eq!(settings.flatten, FlattenOptions::default());
    }

    #[test]
    fn test_resolve_command_line_wins() {
        let args = parse_args(&[
            "--host",
            "es1",
            "--port",
            "9300",
            "--ssl",
            "--insecure",
            "--timeout",
            "2s",
            "--targets",
            "node_stats",
            "--separator",
            "/",
            "--prefix",
            "n1",
            "-u",
            "elastic",
            "-p",
            "secret",
        ]);
        let settings = Settings::resolve(Config::default(), &args).unwrap();
        assert_eq!(settings.client.host, "es1");
        assert_eq!(settings.client.port, 9300);
        assert_eq!(settings.client.scheme, Scheme::Https);
        assert!(settings.client.insecure);
        assert_eq!(settings.client.timeout, Duration::from_secs(2));
        assert_eq!(settings.client.user.as_deref(), Some("elastic"));
        assert_eq!(settings.client.password.as_deref(), Some("secret"));
        assert_eq!(settings.targets, vec![Target::NodeStats]);
        assert_eq!(settings.flatten.separator, "/");
        assert_eq!(settings.flatten.prefix, "n1");
    }

    #[test]
    fn test_resolve_targets_are_ordered_and_unique() {
        let args = parse_args(&["--targets", "node_stats,cluster_health,node_stats"]);
        let settings = Settings::resolve(Config::default(), &args).unwrap();
        assert_eq!(settings.targets, vec![Target::ClusterHealth, Target::NodeStats]);
    }

    #[test]
    fn test_resolve_ssl_from_config() {
        let config = Config { ssl: true, ..Config::default() };
        let settings = Settings::resolve(config, &parse_args(&[])).unwrap();
        assert_eq!(settings.client.scheme, Scheme::Https);
    }

    #[test]
    fn test_resolve_command_line_turns_off_config_flags() {
        let config = Config {
            ssl: true,
            insecure: true,
            ..Config::default()
        };
        let settings = Settings::resolve(config, &parse_args(&["--no-ssl", "--no-insecure"])).unwrap();
        assert_eq!(settings.client.scheme, Scheme::Http);
        assert!(!settings.client.insecure);
    }

    #[test]
    fn test_resolve_last_of_paired_flags_wins() {
        let args = parse_args(&["--no-ssl", "--ssl", "--insecure", "--no-insecure"]);
        let settings = Settings::resolve(Config::default(), &args).unwrap();
        assert_eq!(settings.client.scheme, Scheme::Https);
        assert!(!settings.client.insecure);
    }

    #[test]
    fn test_resolve_empty_separator_is_an_error() {
        let args = parse_args(&["--separator", ""]);
        let _ = Settings::resolve(Config::default(), &args).unwrap_err();
    }

    #[test]
    fn test_resolve_no_targets_is_an_error() {
        let config = Config { targets: Vec::new(), ..Config::default() };
        let _ = Settings::resolve(config, &parse_args(&[])).unwrap_err();
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let result = CollectArgs::try_parse_from(["collect", "--targets", "cluster_health,bogus"]);
        let _ = result.unwrap_err();
    }

    #[test]
    fn test_raw_metrics_requires_object() {
        let metrics = raw_metrics(Target::ClusterTasks, json!({"tasks": []})).unwrap();
        assert_eq!(metrics["tasks"], json!([]));
        let _ = raw_metrics(Target::ClusterStats, json!([1])).unwrap_err();
    }
}
