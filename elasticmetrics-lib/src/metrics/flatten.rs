use super::Metrics;
use serde_json::Value;
use std::collections::BTreeMap;

/// How nested metric names are joined into flat paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Placed between the segments of a path.
    pub separator: String,

    /// Leading segment of every path; omitted when empty.
    pub prefix: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
            prefix: String::new(),
        }
    }
}

/// Flatten nested metrics into `(path, value)` pairs sorted by path.
///
/// Only mappings are descended into. Every other value, arrays included, is a leaf and
/// is emitted unchanged. Paths are unique: when a key containing the separator collides
/// with a nested path, the leaf visited last wins.
#[must_use]
pub fn flatten(metrics: &Metrics, options: &FlattenOptions) -> Vec<(String, Value)> {
    let mut flattened = Vec::new();
    flatten_into(metrics, &options.separator, &options.prefix, &mut flattened);

    // stable sort, so equal paths stay in visiting order
    flattened.sort_by(|(a, _), (b, _)| a.cmp(b));
    flattened.dedup_by(|(later_path, later_value), (kept_path, kept_value)| {
        let duplicate = later_path == kept_path;
        if duplicate {
            core::mem::swap(later_value, kept_value);
        }
        duplicate
    });

    flattened
}

fn flatten_into(metrics: &Metrics, separator: &str, prefix: &str, flattened: &mut Vec<(String, Value)>) {
    for (name, value) in metrics {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}{separator}{name}")
        };

        match value {
            Value::Object(nested) => flatten_into(nested, separator, &path, flattened),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
                flattened.push((path, value.clone()));
            }
        }
    }
}

/// Flatten several metric sets with the same options and merge them into one ordered map.
///
/// When two sets produce the same path, the value from the later set wins.
#[must_use]
pub fn merge_and_sort<'a>(metric_sets: impl IntoIterator<Item = &'a Metrics>, options: &FlattenOptions) -> BTreeMap<String, Value> {
    metric_sets
        .into_iter()
        .flat_map(|metrics| flatten(metrics, options))
        .collect()
}
