use super::Metrics;
use super::aggregate::{apply_buffer_pool_totals, apply_gc_totals};
use super::projector::{project, project_section};
use super::schema::{FS_IO_STATS_TOTAL, FS_TOTAL, INDICES_SECTIONS, JVM_SECTIONS, PROCESS_FIELDS, VERBATIM_NODE_SECTIONS};
use crate::Result;
use ohno::{app_err, bail};
use serde_json::Value;

/// Extract node performance metrics from a node stats payload.
///
/// The payload must hold exactly one node under its `nodes` mapping; the node-local stats
/// endpoint always reports a single node, and metrics from several nodes are never merged.
/// Each section is optional and is left out of the result when the node does not report it.
pub fn extract_node_stats(payload: &Value) -> Result<Metrics> {
    let node = single_node(payload)?;
    let mut metrics = Metrics::new();

    if let Some(fs) = non_empty_section(node, "fs") {
        let _ = metrics.insert("fs".into(), Value::Object(fs_metrics(fs)));
    }

    if let Some(process) = non_empty_section(node, "process") {
        let _ = metrics.insert("process".into(), Value::Object(project(Some(process), PROCESS_FIELDS)));
    }

    if let Some(jvm) = non_empty_section(node, "jvm") {
        let _ = metrics.insert("jvm".into(), Value::Object(jvm_metrics(jvm)));
    }

    for &name in VERBATIM_NODE_SECTIONS {
        if let Some(section) = node.get(name) {
            let _ = metrics.insert(name.into(), section.clone());
        }
    }

    if let Some(indices) = non_empty_section(node, "indices") {
        let _ = metrics.insert("indices".into(), Value::Object(indices_metrics(indices)));
    }

    Ok(metrics)
}

fn single_node(payload: &Value) -> Result<&Metrics> {
    let nodes = payload
        .get("nodes")
        .and_then(Value::as_object)
        .ok_or_else(|| app_err!("node stats payload has no 'nodes' mapping"))?;

    let mut entries = nodes.iter();
    let (node_id, node) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        (None, _) => bail!("node stats payload contains no nodes"),
        (Some(_), Some(_)) => bail!(
            "node stats payload contains {} nodes, expected exactly one (node ids: {})",
            nodes.len(),
            nodes.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
        ),
    };

    log::debug!("extracting stats of node '{node_id}'");
    node.as_object()
        .ok_or_else(|| app_err!("stats of node '{node_id}' is not a JSON object"))
}

fn non_empty_section<'a>(parent: &'a Metrics, name: &str) -> Option<&'a Metrics> {
    parent.get(name).and_then(Value::as_object).filter(|section| !section.is_empty())
}

fn fs_metrics(fs: &Metrics) -> Metrics {
    let mut metrics = Metrics::new();

    if let Some(total) = project_section(fs, &FS_TOTAL) {
        let _ = metrics.insert(FS_TOTAL.name.into(), Value::Object(total));
    }

    // io_stats is not reported on every platform
    let io_total = fs
        .get("io_stats")
        .and_then(Value::as_object)
        .and_then(|io_stats| project_section(io_stats, &FS_IO_STATS_TOTAL));
    if let Some(io_total) = io_total {
        let mut io_stats = Metrics::new();
        let _ = io_stats.insert(FS_IO_STATS_TOTAL.name.into(), Value::Object(io_total));
        let _ = metrics.insert("io_stats".into(), Value::Object(io_stats));
    }

    metrics
}

fn jvm_metrics(jvm: &Metrics) -> Metrics {
    let mut metrics = Metrics::new();

    for section in JVM_SECTIONS {
        if let Some(projected) = project_section(jvm, section) {
            let _ = metrics.insert(section.name.into(), Value::Object(projected));
        }
    }

    if let Some(gc) = jvm.get("gc").and_then(Value::as_object) {
        let mut gc = gc.clone();
        apply_gc_totals(&mut gc);
        let _ = metrics.insert("gc".into(), Value::Object(gc));
    }

    if let Some(buffer_pools) = jvm.get("buffer_pools").and_then(Value::as_object) {
        let mut buffer_pools = buffer_pools.clone();
        apply_buffer_pool_totals(&mut buffer_pools);
        let _ = metrics.insert("buffer_pools".into(), Value::Object(buffer_pools));
    }

    metrics
}

fn indices_metrics(indices: &Metrics) -> Metrics {
    INDICES_SECTIONS
        .iter()
        .filter_map(|section| project_section(indices, section).map(|projected| (section.name.to_string(), Value::Object(projected))))
        .collect()
}
