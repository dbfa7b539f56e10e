#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for elasticmetrics
//!
//! This library consolidates all functionality for the elasticmetrics tool, which polls
//! the administrative endpoints of an Elasticsearch cluster and reports a curated set of
//! operational metrics.
//!
//! # Module Organization
//!
//! - [`collector`]: HTTP access to the cluster endpoints
//! - [`metrics`]: Metric extraction, aggregation, and flattening
//! - [`reports`]: Report generation in JSON and line-per-metric text
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod collector;
pub mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
