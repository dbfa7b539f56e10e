use super::ReportableTarget;
use crate::Result;
use core::fmt::Write;
use serde_json::Value;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(targets: &[ReportableTarget], writer: &mut W) -> Result<()> {
    let mut output = serde_json::Map::new();
    for target in targets {
        output.insert(target.name.to_string(), Value::Object(target.metrics.clone()));
    }

    writeln!(writer, "{}", serde_json::to_string_pretty(&Value::Object(output))?)?;
    Ok(())
}
