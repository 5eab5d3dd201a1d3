use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusDomain;
use crate::errors::StatusError;
use crate::format::format_status;
use crate::severity::SeverityClass;

/// Status of a cluster's compute fleet.
///
/// Covers both the start/stop lifecycle and the enabled/disabled pair
/// reported by schedulers that model the fleet as a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComputeFleetStatus {
    StartRequested,
    Starting,
    Running,
    Protected,
    StopRequested,
    Stopping,
    Stopped,
    Unknown,
    Enabled,
    Disabled,
}

impl ComputeFleetStatus {
    /// Every defined fleet status, for exhaustiveness checks.
    pub const ALL: [Self; 10] = [
        Self::StartRequested,
        Self::Starting,
        Self::Running,
        Self::Protected,
        Self::StopRequested,
        Self::Stopping,
        Self::Stopped,
        Self::Unknown,
        Self::Enabled,
        Self::Disabled,
    ];

    /// Raw status code as reported by the scheduler.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartRequested => "START_REQUESTED",
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Protected => "PROTECTED",
            Self::StopRequested => "STOP_REQUESTED",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Unknown => "UNKNOWN",
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        }
    }

    /// Severity class driving the fleet's status indicator.
    ///
    /// A `PROTECTED` fleet refuses new work, so it renders as stopped; the
    /// two `*_REQUESTED` codes render as loading while the request is in
    /// flight, before the fleet reports `STARTING`/`STOPPING`.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::Running | Self::Enabled => SeverityClass::Success,
            Self::Protected | Self::Stopping | Self::Stopped | Self::Disabled => {
                SeverityClass::Stopped
            }
            Self::StartRequested | Self::StopRequested => SeverityClass::Loading,
            Self::Starting => SeverityClass::Pending,
            Self::Unknown => SeverityClass::Info,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for ComputeFleetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComputeFleetStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::ComputeFleet, s))
    }
}
