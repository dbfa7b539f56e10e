use super::ReportableTarget;
use crate::Result;
use crate::metrics::{FlattenOptions, Metrics, merge_and_sort};
use core::fmt::Write;
use serde_json::Value;

/// Write one `<path> <value>` line per metric, sorted by path.
///
/// Each target's metrics are nested under the target name before flattening, so that
/// targets reporting the same field names never overwrite each other.
pub fn generate<W: Write>(targets: &[ReportableTarget], options: &FlattenOptions, writer: &mut W) -> Result<()> {
    let keyed: Vec<Metrics> = targets
        .iter()
        .map(|target| {
            let mut wrapped = Metrics::new();
            let _ = wrapped.insert(target.name.to_string(), Value::Object(target.metrics.clone()));
            wrapped
        })
        .collect();
    let merged = merge_and_sort(&keyed, options);

    for (path, value) in &merged {
        writeln!(writer, "{path} {}", format_value(value))?;
    }

    Ok(())
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
