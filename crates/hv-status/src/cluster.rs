use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusDomain;
use crate::errors::StatusError;
use crate::format::format_status;
use crate::severity::SeverityClass;

/// Lifecycle status of a managed cluster, as reported by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    CreateComplete,
    CreateFailed,
    CreateInProgress,
    DeleteFailed,
    DeleteInProgress,
    DeleteComplete,
    UpdateComplete,
    UpdateFailed,
    UpdateInProgress,
}

impl ClusterStatus {
    /// Every defined cluster status, for exhaustiveness checks.
    pub const ALL: [Self; 9] = [
        Self::CreateComplete,
        Self::CreateFailed,
        Self::CreateInProgress,
        Self::DeleteFailed,
        Self::DeleteInProgress,
        Self::DeleteComplete,
        Self::UpdateComplete,
        Self::UpdateFailed,
        Self::UpdateInProgress,
    ];

    /// Raw status code as reported by the orchestrator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::CreateFailed => "CREATE_FAILED",
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::UpdateComplete => "UPDATE_COMPLETE",
            Self::UpdateFailed => "UPDATE_FAILED",
            Self::UpdateInProgress => "UPDATE_IN_PROGRESS",
        }
    }

    /// Severity class driving the cluster's status indicator.
    ///
    /// `DELETE_COMPLETE` is an error here, unlike the stack-event domain:
    /// a cluster whose deletion completed no longer exists from the
    /// console's point of view.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::CreateComplete | Self::UpdateComplete => SeverityClass::Success,
            Self::CreateFailed | Self::DeleteFailed | Self::UpdateFailed | Self::DeleteComplete => {
                SeverityClass::Error
            }
            Self::CreateInProgress | Self::DeleteInProgress | Self::UpdateInProgress => {
                SeverityClass::InProgress
            }
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::Cluster, s))
    }
}
