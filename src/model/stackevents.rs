use chrono::{DateTime, Utc};
use hv_status::StackEventStatus;
use serde::{Deserialize, Serialize};

/// One resource transition from the deployment-tracking feed of the stack
/// backing a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackEvent {
    pub stack_name: String,
    pub event_id: String,
    pub logical_resource_id: String,
    pub resource_type: String,
    pub resource_status: StackEventStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub resource_status_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_feed_payload() {
        let event: StackEvent = serde_json::from_str(
            r#"{
                "stackName": "prod-hpc",
                "eventId": "HeadNode-CREATE_COMPLETE-2025-11-03",
                "logicalResourceId": "HeadNode",
                "resourceType": "EC2::Instance",
                "resourceStatus": "DELETE_IN_PROGRESS",
                "timestamp": "2025-11-03T10:15:30Z"
            }"#,
        )
        .unwrap();
        assert_eq!(event.resource_status, StackEventStatus::DeleteInProgress);
        assert_eq!(event.resource_status_reason, None);
    }
}
