use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusDomain;
use crate::errors::StatusError;
use crate::format::format_status;
use crate::severity::SeverityClass;

/// State of a scheduler job.
///
/// The enumeration follows the scheduler's own state codes; the long tail
/// of transitional and administrative codes all classify as informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    BootFail,
    Cancelled,
    Completed,
    Completing,
    Configuring,
    Deadline,
    Failed,
    NodeFail,
    OutOfMemory,
    Pending,
    Preempted,
    Requeued,
    RequeueFed,
    RequeueHold,
    Resizing,
    ResvDelHold,
    Revoked,
    Running,
    Signaling,
    SpecialExit,
    StageOut,
    Stopped,
    Suspended,
    Timeout,
}

impl JobState {
    /// Every defined job state, for exhaustiveness checks.
    pub const ALL: [Self; 24] = [
        Self::BootFail,
        Self::Cancelled,
        Self::Completed,
        Self::Completing,
        Self::Configuring,
        Self::Deadline,
        Self::Failed,
        Self::NodeFail,
        Self::OutOfMemory,
        Self::Pending,
        Self::Preempted,
        Self::Requeued,
        Self::RequeueFed,
        Self::RequeueHold,
        Self::Resizing,
        Self::ResvDelHold,
        Self::Revoked,
        Self::Running,
        Self::Signaling,
        Self::SpecialExit,
        Self::StageOut,
        Self::Stopped,
        Self::Suspended,
        Self::Timeout,
    ];

    /// Raw state code as reported by the scheduler.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BootFail => "BOOT_FAIL",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
            Self::Completing => "COMPLETING",
            Self::Configuring => "CONFIGURING",
            Self::Deadline => "DEADLINE",
            Self::Failed => "FAILED",
            Self::NodeFail => "NODE_FAIL",
            Self::OutOfMemory => "OUT_OF_MEMORY",
            Self::Pending => "PENDING",
            Self::Preempted => "PREEMPTED",
            Self::Requeued => "REQUEUED",
            Self::RequeueFed => "REQUEUE_FED",
            Self::RequeueHold => "REQUEUE_HOLD",
            Self::Resizing => "RESIZING",
            Self::ResvDelHold => "RESV_DEL_HOLD",
            Self::Revoked => "REVOKED",
            Self::Running => "RUNNING",
            Self::Signaling => "SIGNALING",
            Self::SpecialExit => "SPECIAL_EXIT",
            Self::StageOut => "STAGE_OUT",
            Self::Stopped => "STOPPED",
            Self::Suspended => "SUSPENDED",
            Self::Timeout => "TIMEOUT",
        }
    }

    /// Severity class driving the job's status indicator.
    ///
    /// A running job already renders as success: from the submitter's
    /// perspective it made it through the queue.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::Completed | Self::Running => SeverityClass::Success,
            Self::BootFail
            | Self::Cancelled
            | Self::Failed
            | Self::NodeFail
            | Self::OutOfMemory
            | Self::Timeout => SeverityClass::Error,
            Self::Completing => SeverityClass::InProgress,
            Self::Configuring => SeverityClass::Loading,
            Self::Pending => SeverityClass::Pending,
            Self::Stopped | Self::Suspended => SeverityClass::Stopped,
            Self::Deadline
            | Self::Preempted
            | Self::Requeued
            | Self::RequeueFed
            | Self::RequeueHold
            | Self::Resizing
            | Self::ResvDelHold
            | Self::Revoked
            | Self::Signaling
            | Self::SpecialExit
            | Self::StageOut => SeverityClass::Info,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobState {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::Job, s))
    }
}
