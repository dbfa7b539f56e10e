use super::{Client, ClientOptions};
use crate::Result;
use serde_json::Value;

pub const CLUSTER_HEALTH_PATH: &str = "_cluster/health";
pub const CLUSTER_STATS_PATH: &str = "_cluster/stats";
pub const CLUSTER_PENDING_TASKS_PATH: &str = "_cluster/pending_tasks";
pub const NODE_STATS_PATH: &str = "_nodes/_local/stats";

/// Fetches raw stats documents from the cluster endpoints.
#[derive(Debug, Clone)]
pub struct Collector {
    client: Client,
}

impl Collector {
    /// Create a collector for the configured server
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(options: &ClientOptions) -> Result<Self> {
        Ok(Self {
            client: Client::new(options)?,
        })
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Cluster health status
    pub async fn cluster_health(&self) -> Result<Value> {
        log::debug!("getting cluster health info");
        self.client.get_json(CLUSTER_HEALTH_PATH).await
    }

    /// Statistics from a cluster point of view, including basic index metrics and node information
    pub async fn cluster_stats(&self) -> Result<Value> {
        log::debug!("getting cluster statistics");
        self.client.get_json(CLUSTER_STATS_PATH).await
    }

    /// Cluster-level changes that have not been executed yet
    pub async fn cluster_pending_tasks(&self) -> Result<Value> {
        log::debug!("getting cluster pending tasks");
        self.client.get_json(CLUSTER_PENDING_TASKS_PATH).await
    }

    /// Statistics of the node serving the request
    pub async fn node_stats(&self) -> Result<Value> {
        log::debug!("getting node statistics");
        self.client.get_json(NODE_STATS_PATH).await
    }
}
