//! Metric extraction and normalization from cluster payloads
//!
//! This module transforms the large, version-varying JSON documents returned by the
//! cluster's stats endpoints into a curated, nested metrics structure, and flattens
//! that structure into path-keyed values suitable for time-series ingestion.
//!
//! # Implementation Model
//!
//! Every payload is handled as a [`serde_json::Value`] tree. The pieces are, leaf-first:
//!
//! - **Projection** ([`project`]): selects the known fields of a section, silently
//!   skipping fields the server did not report. The wanted fields of each section are
//!   statically declared in [`schema`] tables.
//! - **Aggregation** ([`aggregate_sum`]): derives totals that the payload does not
//!   carry, such as GC counts summed across all collectors. Derived values never
//!   replace values that are already present in the raw payload.
//! - **Extraction** ([`extract_cluster_health`], [`extract_node_stats`]): assemble
//!   projections and aggregates for one endpoint's payload.
//! - **Flattening** ([`flatten`], [`merge_and_sort`]): turn nested metrics into a
//!   lexicographically ordered list of `path → value` entries.
//!
//! All functions here are pure: they perform no I/O and hold no state between calls.
//! A missing section is never an error; it simply results in a missing key.

mod aggregate;
mod cluster_health;
mod flatten;
mod node_stats;
mod projector;
pub mod schema;

pub use aggregate::{aggregate_sum, apply_buffer_pool_totals, apply_gc_totals};
pub use cluster_health::{extract_cluster_health, status_code};
pub use flatten::{FlattenOptions, flatten, merge_and_sort};
pub use node_stats::extract_node_stats;
pub use projector::{integer_value, project, project_section};

/// A nested structure of named metrics.
pub type Metrics = serde_json::Map<String, serde_json::Value>;
