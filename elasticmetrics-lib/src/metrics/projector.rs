use super::Metrics;
use super::schema::MetricSection;
use serde_json::Value;

/// Return the wanted fields that are present in `section`.
///
/// Fields missing from the section are omitted rather than defaulted, and a missing
/// section yields an empty projection.
#[must_use]
pub fn project(section: Option<&Metrics>, wanted: &[&str]) -> Metrics {
    let Some(section) = section else {
        return Metrics::new();
    };

    wanted
        .iter()
        .filter_map(|&field| section.get(field).map(|value| (field.to_string(), value.clone())))
        .collect()
}

/// Project the sub-section of `parent` named by `section`.
///
/// Returns `None` when the sub-section is absent or is not a mapping, so that callers
/// can leave the key out of their output entirely.
#[must_use]
pub fn project_section(parent: &Metrics, section: &MetricSection) -> Option<Metrics> {
    parent
        .get(section.name)
        .and_then(Value::as_object)
        .map(|sub| project(Some(sub), section.fields))
}

/// Coerce a JSON value to an integer.
///
/// Integers are kept, floats are truncated toward zero, and numeric strings are parsed.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "truncating fractional metrics is intended")]
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Metrics {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_project_keeps_only_present_wanted_fields() {
        let section = as_map(json!({"a": 1, "b": 2, "c": 3}));
        let projected = project(Some(&section), &["a", "c", "z"]);
        assert_eq!(Value::Object(projected), json!({"a": 1, "c": 3}));
    }

    #[test]
    fn test_project_missing_section_is_empty() {
        assert!(project(None, &["a", "b"]).is_empty());
    }

    #[test]
    fn test_project_empty_section_is_empty() {
        assert!(project(Some(&Metrics::new()), &["a"]).is_empty());
    }

    #[test]
    fn test_project_copies_nested_values() {
        let section = as_map(json!({"cpu": {"percent": 13}, "other": 1}));
        let projected = project(Some(&section), &["cpu"]);
        assert_eq!(projected["cpu"], json!({"percent": 13}));
        assert!(!projected.contains_key("other"));
    }

    #[test]
    fn test_project_keeps_null_values() {
        let section = as_map(json!({"a": null}));
        let projected = project(Some(&section), &["a"]);
        assert_eq!(projected.get("a"), Some(&Value::Null));
    }

    #[test]
    fn test_project_section_absent() {
        let parent = as_map(json!({"docs": {"count": 1}}));
        let section = MetricSection { name: "store", fields: &["size_in_bytes"] };
        assert!(project_section(&parent, &section).is_none());
    }

    #[test]
    fn test_project_section_not_a_mapping() {
        let parent = as_map(json!({"store": 42}));
        let section = MetricSection { name: "store", fields: &["size_in_bytes"] };
        assert!(project_section(&parent, &section).is_none());
    }

    #[test]
    fn test_project_section_present() {
        let parent = as_map(json!({"docs": {"count": 10, "deleted": 2, "extra": 5}}));
        let section = MetricSection { name: "docs", fields: &["count", "deleted"] };
        let projected = project_section(&parent, &section).unwrap();
        assert_eq!(Value::Object(projected), json!({"count": 10, "deleted": 2}));
    }

    #[test]
    fn test_integer_value_numbers() {
        assert_eq!(integer_value(&json!(5)), Some(5));
        assert_eq!(integer_value(&json!(-3)), Some(-3));
        assert_eq!(integer_value(&json!(100.0)), Some(100));
        assert_eq!(integer_value(&json!(99.9)), Some(99));
        assert_eq!(integer_value(&json!(-1.5)), Some(-1));
    }

    #[test]
    fn test_integer_value_large_unsigned_saturates() {
        assert_eq!(integer_value(&json!(u64::MAX)), Some(i64::MAX));
    }

    #[test]
    fn test_integer_value_strings() {
        assert_eq!(integer_value(&json!("42")), Some(42));
        assert_eq!(integer_value(&json!(" 7.8 ")), Some(7));
        assert_eq!(integer_value(&json!("abc")), None);
    }

    #[test]
    fn test_integer_value_non_numeric() {
        assert_eq!(integer_value(&Value::Null), None);
        assert_eq!(integer_value(&json!(true)), None);
        assert_eq!(integer_value(&json!([1])), None);
        assert_eq!(integer_value(&json!({"a": 1})), None);
    }
}
