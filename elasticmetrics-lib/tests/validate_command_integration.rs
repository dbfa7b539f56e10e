//! Integration tests for the `init` and `validate` commands.

use elasticmetrics_lib::Host;
use std::fs;
use std::io::Write;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_init_then_validate() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("elasticmetrics.toml");
    let config_path = config_path.to_str().unwrap();

    let mut host = TestHost::new();
    elasticmetrics_lib::run(&mut host, ["elasticmetrics", "init", config_path])
        .await
        .expect("init should succeed");
    assert!(fs::read_to_string(config_path).unwrap().contains("targets"));

    let mut host = TestHost::new();
    elasticmetrics_lib::run(&mut host, ["elasticmetrics", "validate", config_path])
        .await
        .expect("validate should succeed");

    let output = host.output_str();
    assert!(output.contains("Configuration file is valid"), "got: {output}");
    assert!(output.contains(config_path), "got: {output}");
    assert_eq!(host.exit_code, None);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_validate_without_explicit_config() {
    let mut host = TestHost::new();
    let result = elasticmetrics_lib::run(&mut host, ["elasticmetrics", "validate"]).await;

    assert!(result.is_ok(), "validate without a config file should succeed: {result:?}");
    assert!(host.output_str().contains("default configuration"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_validate_rejects_unknown_field() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("unknown_field.toml");
    fs::write(&config_path, "host = \"localhost\"\nunknown_field = \"value\"\n").expect("Failed to write test config");

    let mut host = TestHost::new();
    let result = elasticmetrics_lib::run(&mut host, ["elasticmetrics", "validate", config_path.to_str().unwrap()]).await;

    let _ = result.expect_err("an unknown field should fail validation");
    assert_eq!(host.exit_code, Some(70));
    assert!(host.error_str().contains("unknown_field.toml"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_init_does_not_overwrite_existing_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("elasticmetrics.toml");
    fs::write(&config_path, "port = 9201\n").expect("Failed to write test config");

    let mut host = TestHost::new();
    let result = elasticmetrics_lib::run(&mut host, ["elasticmetrics", "init", config_path.to_str().unwrap()]).await;

    let _ = result.expect_err("init should refuse to overwrite");
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "port = 9201\n");
}
