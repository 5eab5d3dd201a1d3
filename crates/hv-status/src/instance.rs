use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::StatusDomain;
use crate::errors::StatusError;
use crate::format::format_status;
use crate::severity::SeverityClass;

/// Lifecycle state of a cloud instance.
///
/// Unlike the other domains, the provider reports these codes in
/// lowercase kebab-case (`shutting-down`, not `SHUTTING_DOWN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Stopped,
    Stopping,
    Terminated,
}

impl InstanceState {
    /// Every defined instance state, for exhaustiveness checks.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Running,
        Self::ShuttingDown,
        Self::Stopped,
        Self::Stopping,
        Self::Terminated,
    ];

    /// Raw state code as reported by the cloud provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
            Self::Stopped => "stopped",
            Self::Stopping => "stopping",
            Self::Terminated => "terminated",
        }
    }

    /// Severity class driving the instance's status indicator.
    pub fn severity(&self) -> SeverityClass {
        match self {
            Self::Running => SeverityClass::Success,
            Self::Pending | Self::Stopping => SeverityClass::Pending,
            Self::Stopped | Self::Terminated => SeverityClass::Stopped,
            Self::ShuttingDown => SeverityClass::Loading,
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> String {
        format_status(Some(self.as_str()))
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceState {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StatusError::unknown_code(StatusDomain::Instance, s))
    }
}
