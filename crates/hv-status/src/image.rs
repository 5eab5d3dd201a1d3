use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusDomain;
use crate::errors::StatusError;
use crate::format::format_status;
use crate::severity::SeverityClass;

/// Status of a custom image build run by the image pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageBuildStatus {
    BuildComplete,
    BuildFailed,
    BuildInProgress,
    DeleteComplete,
    DeleteFailed,
    DeleteInProgress,
}

impl ImageBuildStatus {
    /// Every defined build status, for exhaustiveness checks.
    pub const ALL: [Self; 6] = [
        Self::BuildComplete,
        Self::BuildFailed,
        Self::BuildInProgress,
        Self::DeleteComplete,
        Self::DeleteFailed,
        Self::DeleteInProgress,
    ];

    /// Raw status code as reported by the image pipeline.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuildComplete => "BUILD_COMPLETE",
            Self::BuildFailed => "BUILD_FAILED",
            Self::BuildInProgress => "BUILD_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
        }
    }

    /// Severity class driving the build's status indicator.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::BuildComplete | Self::DeleteComplete => SeverityClass::Success,
            Self::BuildFailed | Self::DeleteFailed => SeverityClass::Error,
            Self::BuildInProgress | Self::DeleteInProgress => SeverityClass::InProgress,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for ImageBuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageBuildStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::ImageBuild, s))
    }
}

/// Registry state of a machine image.
///
/// `PENDING` and `TRANSIENT` are the only non-terminal states; everything
/// else that is not `AVAILABLE` means the image is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MachineImageState {
    Available,
    Deregistered,
    Error,
    Failed,
    Invalid,
    Pending,
    Transient,
}

impl MachineImageState {
    /// Every defined image state, for exhaustiveness checks.
    pub const ALL: [Self; 7] = [
        Self::Available,
        Self::Deregistered,
        Self::Error,
        Self::Failed,
        Self::Invalid,
        Self::Pending,
        Self::Transient,
    ];

    /// Raw state code as reported by the image registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Deregistered => "DEREGISTERED",
            Self::Error => "ERROR",
            Self::Failed => "FAILED",
            Self::Invalid => "INVALID",
            Self::Pending => "PENDING",
            Self::Transient => "TRANSIENT",
        }
    }

    /// Severity class driving the image's status indicator.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::Available => SeverityClass::Success,
            Self::Pending | Self::Transient => SeverityClass::InProgress,
            Self::Deregistered | Self::Error | Self::Failed | Self::Invalid => SeverityClass::Error,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for MachineImageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineImageState {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::MachineImage, s))
    }
}
