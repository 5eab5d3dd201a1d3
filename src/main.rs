use anyhow::Result;
use hpcview::components::sidebar::{self, NavItem};
use hpcview::components::status::{
    cluster_indicator, compute_fleet_indicator, image_build_indicator, instance_indicator,
    job_indicator, machine_image_indicator, stack_event_indicator,
};
use hpcview::model::{CloudInstance, ClusterSummary, StackEvent};
use hv_auth::AuthKind;
use hv_status::{ClusterStatus, ComputeFleetStatus, ImageBuildStatus, JobState, MachineImageState};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let clusters = vec![
        ClusterSummary {
            cluster_name: "prod-hpc".to_string(),
            cluster_status: ClusterStatus::CreateComplete,
            region: "eu-west-1".to_string(),
            version: Some("3.7.0".to_string()),
        },
        ClusterSummary {
            cluster_name: "staging-hpc".to_string(),
            cluster_status: ClusterStatus::UpdateInProgress,
            region: "eu-west-1".to_string(),
            version: Some("3.7.0".to_string()),
        },
        ClusterSummary {
            cluster_name: "old-hpc".to_string(),
            cluster_status: ClusterStatus::DeleteInProgress,
            region: "us-east-1".to_string(),
            version: None,
        },
    ];

    println!("Clusters:");
    for cluster in &clusters {
        let indicator = cluster_indicator(cluster);
        println!(
            "  {:<14} {:<12} {}",
            cluster.cluster_name,
            indicator.severity.as_str(),
            indicator.label
        );
    }

    let fleet = compute_fleet_indicator(ComputeFleetStatus::StartRequested);
    println!(
        "\nCompute fleet:\n  {:<14} {:<12} {}",
        "prod-hpc",
        fleet.severity.as_str(),
        fleet.label
    );

    println!("\nJobs:");
    for state in [JobState::Running, JobState::Pending, JobState::OutOfMemory] {
        let indicator = job_indicator(state);
        println!(
            "  {:<14} {:<12} {}",
            state.as_str(),
            indicator.severity.as_str(),
            indicator.label
        );
    }

    // Payloads below are wire-shaped, as the API clients would hand them over.
    let head_node: CloudInstance = serde_json::from_str(
        r#"{
            "instanceId": "i-0123456789abcdef0",
            "instanceType": "c5.xlarge",
            "state": "running",
            "launchTime": "2025-11-03T09:00:00Z"
        }"#,
    )?;
    let indicator = instance_indicator(&head_node);
    println!(
        "\nInstances:\n  {:<14} {:<12} {}",
        head_node.instance_id,
        indicator.severity.as_str(),
        indicator.label
    );

    let event: StackEvent = serde_json::from_str(
        r#"{
            "stackName": "old-hpc",
            "eventId": "HeadNode-2025-11-03",
            "logicalResourceId": "HeadNode",
            "resourceType": "EC2::Instance",
            "resourceStatus": "DELETE_IN_PROGRESS",
            "timestamp": "2025-11-03T10:15:30Z"
        }"#,
    )?;
    let indicator = stack_event_indicator(&event);
    println!(
        "\nStack events:\n  {:<14} {:<12} {}",
        event.logical_resource_id,
        indicator.severity.as_str(),
        indicator.label
    );

    let build = image_build_indicator(ImageBuildStatus::BuildInProgress);
    let image = machine_image_indicator(MachineImageState::Available);
    println!("\nImages:");
    println!(
        "  {:<14} {:<12} {}",
        "custom-gpu",
        build.severity.as_str(),
        build.label
    );
    println!(
        "  {:<14} {:<12} {}",
        "base-2025.11",
        image.severity.as_str(),
        image.label
    );

    for kind in [AuthKind::Cognito, AuthKind::AzureAd] {
        println!("\nNavigation ({kind}):");
        for item in sidebar::navigation_items(kind) {
            match item {
                NavItem::Link { text, href, external } => {
                    let marker = if external { " (external)" } else { "" };
                    println!("  {text:<14} {href}{marker}");
                }
                NavItem::Divider => println!("  --"),
            }
        }
    }

    Ok(())
}
