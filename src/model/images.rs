use hv_status::{ImageBuildStatus, MachineImageState};
use serde::{Deserialize, Serialize};

/// Custom image build as reported by the image pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub image_id: String,
    pub image_build_status: ImageBuildStatus,
    pub region: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Machine image backing a built custom image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineImage {
    pub image_id: String,
    pub state: MachineImageState,
    #[serde(default)]
    pub description: Option<String>,
}
