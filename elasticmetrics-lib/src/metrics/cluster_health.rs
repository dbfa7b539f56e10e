use super::Metrics;
use super::projector::{integer_value, project};
use super::schema::CLUSTER_HEALTH_FIELDS;
use serde_json::Value;

/// Ordinal encoding of the textual cluster status, so it can flow through numeric-only sinks.
const STATUS_CODES: &[(&str, i64)] = &[("green", 2), ("yellow", 4), ("red", 6)];

const STATUS: &str = "status";

/// Map a cluster status string to its numeric code, `0` when unknown.
#[must_use]
pub fn status_code(status: Option<&str>) -> i64 {
    let Some(status) = status else {
        return 0;
    };

    let status = status.trim().to_lowercase();
    STATUS_CODES
        .iter()
        .find(|(name, _)| *name == status)
        .map_or(0, |&(_, code)| code)
}

/// Extract the numeric cluster metrics from a cluster health payload.
///
/// Every projected value is coerced to an integer, and a numeric `status` is always present.
#[must_use]
pub fn extract_cluster_health(payload: &Value) -> Metrics {
    let health = payload.as_object();

    let mut metrics: Metrics = project(health, CLUSTER_HEALTH_FIELDS)
        .into_iter()
        .filter_map(|(field, value)| match integer_value(&value) {
            Some(n) => Some((field, Value::from(n))),
            None => {
                log::warn!("ignoring non-numeric cluster health field '{field}': {value}");
                None
            }
        })
        .collect();

    let status = health.and_then(|h| h.get(STATUS)).and_then(Value::as_str);
    let _ = metrics.insert(STATUS.to_string(), Value::from(status_code(status)));

    metrics
}
