use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusDomain;
use crate::errors::StatusError;
use crate::format::format_status;
use crate::severity::SeverityClass;

/// Per-resource status of an infrastructure-stack event.
///
/// These come from the deployment-tracking feed for the stack backing a
/// cluster, one event per resource transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackEventStatus {
    CreateComplete,
    CreateFailed,
    CreateInProgress,
    DeleteComplete,
    DeleteFailed,
    DeleteInProgress,
    DeleteSkipped,
    ImportComplete,
    ImportFailed,
    ImportInProgress,
    ImportRollbackComplete,
    ImportRollbackFailed,
    ImportRollbackInProgress,
    UpdateComplete,
    UpdateFailed,
    UpdateInProgress,
}

impl StackEventStatus {
    /// Every defined stack-event status, for exhaustiveness checks.
    pub const ALL: [Self; 16] = [
        Self::CreateComplete,
        Self::CreateFailed,
        Self::CreateInProgress,
        Self::DeleteComplete,
        Self::DeleteFailed,
        Self::DeleteInProgress,
        Self::DeleteSkipped,
        Self::ImportComplete,
        Self::ImportFailed,
        Self::ImportInProgress,
        Self::ImportRollbackComplete,
        Self::ImportRollbackFailed,
        Self::ImportRollbackInProgress,
        Self::UpdateComplete,
        Self::UpdateFailed,
        Self::UpdateInProgress,
    ];

    /// Raw status code as reported by the deployment-tracking feed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::CreateFailed => "CREATE_FAILED",
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteSkipped => "DELETE_SKIPPED",
            Self::ImportComplete => "IMPORT_COMPLETE",
            Self::ImportFailed => "IMPORT_FAILED",
            Self::ImportInProgress => "IMPORT_IN_PROGRESS",
            Self::ImportRollbackComplete => "IMPORT_ROLLBACK_COMPLETE",
            Self::ImportRollbackFailed => "IMPORT_ROLLBACK_FAILED",
            Self::ImportRollbackInProgress => "IMPORT_ROLLBACK_IN_PROGRESS",
            Self::UpdateComplete => "UPDATE_COMPLETE",
            Self::UpdateFailed => "UPDATE_FAILED",
            Self::UpdateInProgress => "UPDATE_IN_PROGRESS",
        }
    }

    /// Severity class driving the event's status indicator.
    ///
    /// Two codes break the obvious pattern and must stay that way:
    /// `DELETE_IN_PROGRESS` is an error (a resource disappearing mid-event
    /// stream usually means the stack is rolling back), and
    /// `UPDATE_IN_PROGRESS` is informational rather than in-progress.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::CreateComplete
            | Self::DeleteComplete
            | Self::ImportComplete
            | Self::ImportRollbackComplete
            | Self::UpdateComplete => SeverityClass::Success,
            Self::CreateFailed
            | Self::DeleteFailed
            | Self::DeleteInProgress
            | Self::DeleteSkipped
            | Self::ImportFailed
            | Self::ImportRollbackFailed
            | Self::UpdateFailed => SeverityClass::Error,
            Self::CreateInProgress | Self::ImportInProgress | Self::ImportRollbackInProgress => {
                SeverityClass::InProgress
            }
            Self::UpdateInProgress => SeverityClass::Info,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for StackEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackEventStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::StackEvent, s))
    }
}
