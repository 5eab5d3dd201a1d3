use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual-urgency category used to drive status indicator rendering.
///
/// The set is closed: every domain maps into exactly these seven kinds and
/// no domain may introduce a new one. The rendering layer owns the visual
/// treatment (color, icon); this type only names the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityClass {
    Success,
    Error,
    InProgress,
    Pending,
    Loading,
    Info,
    Stopped,
}

impl SeverityClass {
    /// Every severity class, for exhaustiveness checks.
    pub const ALL: [Self; 7] = [
        Self::Success,
        Self::Error,
        Self::InProgress,
        Self::Pending,
        Self::Loading,
        Self::Info,
        Self::Stopped,
    ];

    /// Indicator kind as consumed by the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
            Self::Loading => "loading",
            Self::Info => "info",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
