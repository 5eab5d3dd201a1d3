use chrono::{DateTime, Utc};
use hv_status::InstanceState;
use serde::{Deserialize, Serialize};

/// Instance as reported by the cloud provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudInstance {
    pub instance_id: String,
    pub instance_type: String,
    pub state: InstanceState,
    pub launch_time: DateTime<Utc>,
    #[serde(default)]
    pub public_ip_address: Option<String>,
    #[serde(default)]
    pub private_ip_address: Option<String>,
}

/// Slimmer instance shape embedded in cluster descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInstance {
    pub instance_id: String,
    pub state: InstanceState,
    #[serde(default)]
    pub private_ip_address: Option<String>,
}
