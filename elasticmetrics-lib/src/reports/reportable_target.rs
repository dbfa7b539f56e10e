use crate::metrics::Metrics;

/// The metrics gathered for one collection target, ready for reporting.
#[derive(Debug, Clone)]
pub struct ReportableTarget {
    pub name: &'static str,
    pub metrics: Metrics,
}

impl ReportableTarget {
    #[must_use]
    pub const fn new(name: &'static str, metrics: Metrics) -> Self {
        Self { name, metrics }
    }
}
