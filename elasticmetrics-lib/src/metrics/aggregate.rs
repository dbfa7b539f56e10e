use super::Metrics;
use super::projector::integer_value;
use super::schema::{BUFFER_POOL_TOTAL_FIELDS, GC_TOTAL_FIELDS};
use serde_json::Value;

const GC_COLLECTORS: &str = "collectors";
const BUFFER_POOL_TOTAL: &str = "total";

/// Sum each of `numeric_fields` across every entry of `collectors`.
///
/// Each field is summed independently. Entries that are not mappings, and fields that
/// are missing or not numeric within an entry, contribute nothing. An empty collectors
/// mapping yields zero for every field.
#[must_use]
pub fn aggregate_sum(collectors: &Metrics, numeric_fields: &[&str]) -> Metrics {
    let entries: Vec<&Metrics> = collectors.values().filter_map(Value::as_object).collect();

    numeric_fields
        .iter()
        .map(|&field| {
            let total = entries
                .iter()
                .filter_map(|entry| entry.get(field).and_then(integer_value))
                .fold(0_i64, i64::saturating_add);
            (field.to_string(), Value::from(total))
        })
        .collect()
}

/// Add `collection_count` and `collection_time_in_millis` totals to a `gc` section.
///
/// Totals are written flat into the section, and only for keys the section does not
/// define already. Nothing is derived when the section has no `collectors` mapping.
pub fn apply_gc_totals(gc: &mut Metrics) {
    let Some(collectors) = gc.get(GC_COLLECTORS).and_then(Value::as_object) else {
        log::debug!("gc section has no collectors, skipping totals");
        return;
    };

    let totals = aggregate_sum(collectors, GC_TOTAL_FIELDS);
    for (field, total) in totals {
        let _ = gc.entry(field).or_insert(total);
    }
}

/// Add a nested `total` entry summing every pool of a `buffer_pools` section.
///
/// Nothing changes when the section already has a `total` key.
pub fn apply_buffer_pool_totals(buffer_pools: &mut Metrics) {
    if buffer_pools.contains_key(BUFFER_POOL_TOTAL) {
        return;
    }

    let totals = aggregate_sum(buffer_pools, BUFFER_POOL_TOTAL_FIELDS);
    let _ = buffer_pools.insert(BUFFER_POOL_TOTAL.to_string(), Value::Object(totals));
}
