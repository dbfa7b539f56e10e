//! Report generation for collected metrics
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **JSON**: a pretty-printed object keyed by target name, holding each target's nested metrics
//! - **Lines**: one `<path> <value>` line per metric, with the metrics of every target
//!   flattened, merged, and sorted by path
//!
//! Both operate on the same input, a slice of [`ReportableTarget`].

mod json;
mod lines;
mod reportable_target;

pub use json::generate as generate_json;
pub use lines::generate as generate_lines;
pub use reportable_target::ReportableTarget;
