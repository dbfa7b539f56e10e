//! Static tables describing which fields are worth reporting for each section.

/// A named section of a stats payload, along with the fields considered meaningful in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSection {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

macro_rules! section {
    ($name:expr, [$($field:expr),* $(,)?]) => {
        MetricSection {
            name: $name,
            fields: &[$($field),*],
        }
    };
}

/// Numeric fields reported by the cluster health endpoint.
pub const CLUSTER_HEALTH_FIELDS: &[&str] = &[
    "active_primary_shards",
    "active_shards",
    "active_shards_percent_as_number",
    "delayed_unassigned_shards",
    "initializing_shards",
    "number_of_in_flight_fetch",
    "number_of_pending_tasks",
    "relocating_shards",
    "task_max_waiting_in_queue_millis",
];

pub const FS_TOTAL: MetricSection = section!("total", ["available_in_bytes", "free_in_bytes", "total_in_bytes"]);

pub const FS_IO_STATS_TOTAL: MetricSection = section!(
    "total",
    ["operations", "read_kilobytes", "read_operations", "write_kilobytes", "write_operations"]
);

pub const PROCESS_FIELDS: &[&str] = &["cpu", "mem", "max_file_descriptors", "open_file_descriptors"];

pub const JVM_SECTIONS: &[MetricSection] = &[
    section!(
        "mem",
        [
            "heap_committed_in_bytes",
            "heap_used_in_bytes",
            "heap_used_percent",
            "heap_max_in_bytes",
            "non_heap_committed_in_bytes",
            "non_heap_used_in_bytes",
        ]
    ),
    section!("threads", ["count", "peak_count"]),
];

pub const INDICES_SECTIONS: &[MetricSection] = &[
    section!("docs", ["count", "deleted"]),
    section!("fielddata", ["evictions", "memory_size_in_bytes"]),
    section!("query_cache", ["evictions", "hit_count", "miss_count", "memory_size_in_bytes"]),
    section!("request_cache", ["evictions", "hit_count", "miss_count", "memory_size_in_bytes"]),
    section!("search", ["fetch_current", "query_current", "scroll_current", "suggest_current"]),
    section!(
        "segments",
        [
            "count",
            "memory_in_bytes",
            "index_writer_memory_in_bytes",
            "fixed_bit_set_memory_in_bytes",
            "doc_values_memory_in_bytes",
            "version_map_memory_in_bytes",
        ]
    ),
    section!("store", ["size_in_bytes"]),
    section!("translog", ["operations", "size_in_bytes", "uncommitted_operations", "uncommitted_size_in_bytes"]),
    section!("warmer", ["current", "total"]),
];

/// Per-collector GC fields summed into flat totals on the `gc` section.
pub const GC_TOTAL_FIELDS: &[&str] = &["collection_count", "collection_time_in_millis"];

/// Per-pool fields summed into `buffer_pools.total`.
pub const BUFFER_POOL_TOTAL_FIELDS: &[&str] = &["count", "used_in_bytes", "total_capacity_in_bytes"];

/// Node sections copied through without any projection.
pub const VERBATIM_NODE_SECTIONS: &[&str] = &["http", "transport", "thread_pool"];
