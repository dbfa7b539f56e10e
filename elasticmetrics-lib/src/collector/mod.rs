//! HTTP access to the cluster's administrative endpoints
//!
//! This module is the only part of the crate that performs network I/O. It fetches the
//! JSON documents that the [`metrics`](crate::metrics) extractors work on.
//!
//! # Implementation Model
//!
//! [`Client`] owns a configured `reqwest` client: scheme, host, port, credentials,
//! timeout, and TLS verification. Its `get_json` call is a single shot: any failure to
//! connect, a non-success status, or an undecodable body is reported as one request
//! error naming the URL, so that callers can tell a failed poll apart from a successful
//! but empty response.
//!
//! [`Collector`] layers the well-known endpoint paths on top of the client. It knows
//! nothing about the shape of the documents it returns.

mod client;
mod endpoints;

pub use client::{Client, ClientOptions, DEFAULT_PORT, Scheme};
pub use endpoints::{CLUSTER_HEALTH_PATH, CLUSTER_PENDING_TASKS_PATH, CLUSTER_STATS_PATH, Collector, NODE_STATS_PATH};
