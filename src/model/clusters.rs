use chrono::{DateTime, Utc};
use hv_status::{ClusterStatus, ComputeFleetStatus};
use serde::{Deserialize, Serialize};

use crate::model::instances::NodeInstance;

/// Row shape returned by the cluster list API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub cluster_name: String,
    pub cluster_status: ClusterStatus,
    pub region: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Full cluster shape returned by the describe API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDescription {
    pub cluster_name: String,
    pub cluster_status: ClusterStatus,
    pub compute_fleet_status: ComputeFleetStatus,
    pub region: String,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub head_node: Option<NodeInstance>,
}
