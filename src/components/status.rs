use hv_status::{
    ClusterStatus, ComputeFleetStatus, ImageBuildStatus, InstanceState, JobState,
    MachineImageState, SeverityClass, format_status,
};

use crate::model::{CloudInstance, ClusterDescription, ClusterSummary, NodeInstance, StackEvent};

/// Ready-to-render indicator: severity kind plus display label.
///
/// The rendering layer maps the severity onto a visual treatment (color,
/// icon); nothing visual is decided here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub severity: SeverityClass,
    pub label: String,
}

impl StatusIndicator {
    fn of(severity: SeverityClass, code: &str) -> Self {
        Self {
            severity,
            label: format_status(Some(code)),
        }
    }
}

/// Access to the one cluster field the indicator reads, so the list and
/// describe shapes render identically without the indicator caring which
/// one arrived.
pub trait HasClusterStatus {
    fn cluster_status(&self) -> ClusterStatus;
}

impl HasClusterStatus for ClusterSummary {
    fn cluster_status(&self) -> ClusterStatus {
        self.cluster_status
    }
}

impl HasClusterStatus for ClusterDescription {
    fn cluster_status(&self) -> ClusterStatus {
        self.cluster_status
    }
}

/// Access to the one instance field the indicator reads.
pub trait HasInstanceState {
    fn instance_state(&self) -> InstanceState;
}

impl HasInstanceState for CloudInstance {
    fn instance_state(&self) -> InstanceState {
        self.state
    }
}

impl HasInstanceState for NodeInstance {
    fn instance_state(&self) -> InstanceState {
        self.state
    }
}

pub fn cluster_indicator(cluster: &impl HasClusterStatus) -> StatusIndicator {
    let status = cluster.cluster_status();
    StatusIndicator::of(status.severity(), status.as_str())
}

pub fn compute_fleet_indicator(status: ComputeFleetStatus) -> StatusIndicator {
    StatusIndicator::of(status.severity(), status.as_str())
}

pub fn job_indicator(state: JobState) -> StatusIndicator {
    StatusIndicator::of(state.severity(), state.as_str())
}

pub fn instance_indicator(instance: &impl HasInstanceState) -> StatusIndicator {
    let state = instance.instance_state();
    StatusIndicator::of(state.severity(), state.as_str())
}

pub fn stack_event_indicator(event: &StackEvent) -> StatusIndicator {
    let status = event.resource_status;
    StatusIndicator::of(status.severity(), status.as_str())
}

pub fn image_build_indicator(status: ImageBuildStatus) -> StatusIndicator {
    StatusIndicator::of(status.severity(), status.as_str())
}

pub fn machine_image_indicator(state: MachineImageState) -> StatusIndicator {
    StatusIndicator::of(state.severity(), state.as_str())
}

#[cfg(test)]
mod tests {
    use hv_status::StackEventStatus;

    use super::*;

    fn summary(status: ClusterStatus) -> ClusterSummary {
        ClusterSummary {
            cluster_name: "prod-hpc".to_string(),
            cluster_status: status,
            region: "eu-west-1".to_string(),
            version: None,
        }
    }

    #[test]
    fn test_cluster_indicator_pairs_severity_and_label() {
        let indicator = cluster_indicator(&summary(ClusterStatus::CreateFailed));
        assert_eq!(indicator.severity, SeverityClass::Error);
        assert_eq!(indicator.label, "Create failed");
    }

    #[test]
    fn test_both_cluster_shapes_render_identically() {
        let description = ClusterDescription {
            cluster_name: "prod-hpc".to_string(),
            cluster_status: ClusterStatus::UpdateInProgress,
            compute_fleet_status: ComputeFleetStatus::Running,
            region: "eu-west-1".to_string(),
            creation_time: None,
            head_node: None,
        };
        assert_eq!(
            cluster_indicator(&description),
            cluster_indicator(&summary(ClusterStatus::UpdateInProgress))
        );
    }

    #[test]
    fn test_instance_indicator_reads_either_shape() {
        let node = NodeInstance {
            instance_id: "i-0123456789abcdef0".to_string(),
            state: InstanceState::ShuttingDown,
            private_ip_address: None,
        };
        let indicator = instance_indicator(&node);
        assert_eq!(indicator.severity, SeverityClass::Loading);
        assert_eq!(indicator.label, "Shutting down");
    }

    #[test]
    fn test_job_indicator() {
        let indicator = job_indicator(JobState::OutOfMemory);
        assert_eq!(indicator.severity, SeverityClass::Error);
        assert_eq!(indicator.label, "Out of memory");
    }

    #[test]
    fn test_stack_event_indicator_keeps_delete_asymmetry() {
        let event = StackEvent {
            stack_name: "prod-hpc".to_string(),
            event_id: "HeadNode-1".to_string(),
            logical_resource_id: "HeadNode".to_string(),
            resource_type: "EC2::Instance".to_string(),
            resource_status: StackEventStatus::DeleteInProgress,
            timestamp: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
            resource_status_reason: None,
        };
        assert_eq!(stack_event_indicator(&event).severity, SeverityClass::Error);
    }
}
