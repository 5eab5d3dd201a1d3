use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cluster::ClusterStatus;
use crate::errors::{Result, StatusError};
use crate::fleet::ComputeFleetStatus;
use crate::image::{ImageBuildStatus, MachineImageState};
use crate::instance::InstanceState;
use crate::job::JobState;
use crate::severity::SeverityClass;
use crate::stack::StackEventStatus;

/// Originating subsystem of a raw status code.
///
/// Domains have independent, non-interchangeable code sets. The same
/// spelling can belong to several domains and classify differently in
/// each, so a raw code is meaningless without its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusDomain {
    Cluster,
    ComputeFleet,
    Job,
    Instance,
    StackEvent,
    ImageBuild,
    MachineImage,
}

impl StatusDomain {
    /// Every status domain, for exhaustiveness checks.
    pub const ALL: [Self; 7] = [
        Self::Cluster,
        Self::ComputeFleet,
        Self::Job,
        Self::Instance,
        Self::StackEvent,
        Self::ImageBuild,
        Self::MachineImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::ComputeFleet => "compute-fleet",
            Self::Job => "job",
            Self::Instance => "instance",
            Self::StackEvent => "stack-event",
            Self::ImageBuild => "image-build",
            Self::MachineImage => "machine-image",
        }
    }
}

impl fmt::Display for StatusDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusDomain {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| StatusError::UnknownDomain(s.to_string()))
    }
}

/// Classify a raw status code from `domain` into a severity class.
///
/// This is the string entry point for callers holding codes straight off
/// the wire; callers that already deserialized into the typed enums can
/// use the infallible `severity()` on those instead.
///
/// Fails with [`StatusError::UnknownStatusCode`] when the code is not part
/// of the domain's enumeration. There is no fallback class: an unknown
/// code must surface to the caller, not render as an empty indicator.
pub fn classify(domain: StatusDomain, code: &str) -> Result<SeverityClass> {
    let severity = match domain {
        StatusDomain::Cluster => code.parse::<ClusterStatus>().map(|s| s.severity()),
        StatusDomain::ComputeFleet => code.parse::<ComputeFleetStatus>().map(|s| s.severity()),
        StatusDomain::Job => code.parse::<JobState>().map(|s| s.severity()),
        StatusDomain::Instance => code.parse::<InstanceState>().map(|s| s.severity()),
        StatusDomain::StackEvent => code.parse::<StackEventStatus>().map(|s| s.severity()),
        StatusDomain::ImageBuild => code.parse::<ImageBuildStatus>().map(|s| s.severity()),
        StatusDomain::MachineImage => code.parse::<MachineImageState>().map(|s| s.severity()),
    };

    severity.map_err(|e| {
        warn!("Refusing to classify unknown {} status code {:?}", domain, code);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_deterministic() {
        let first = classify(StatusDomain::Cluster, "UPDATE_IN_PROGRESS");
        let second = classify(StatusDomain::Cluster, "UPDATE_IN_PROGRESS");
        assert_eq!(first, second);
        assert_eq!(first, Ok(SeverityClass::InProgress));
    }

    #[test]
    fn test_running_classifies_independently_per_domain() {
        // Three domains spell a running resource almost identically; each
        // classification comes from its own table.
        assert_eq!(classify(StatusDomain::Job, "RUNNING"), Ok(SeverityClass::Success));
        assert_eq!(
            classify(StatusDomain::ComputeFleet, "RUNNING"),
            Ok(SeverityClass::Success)
        );
        assert_eq!(
            classify(StatusDomain::Instance, "running"),
            Ok(SeverityClass::Success)
        );
        // Casing belongs to the domain: the instance domain does not know
        // the uppercase spelling and vice versa.
        assert!(classify(StatusDomain::Instance, "RUNNING").is_err());
        assert!(classify(StatusDomain::Job, "running").is_err());
    }

    #[test]
    fn test_delete_asymmetries_across_domains() {
        assert_eq!(
            classify(StatusDomain::StackEvent, "DELETE_IN_PROGRESS"),
            Ok(SeverityClass::Error)
        );
        assert_eq!(
            classify(StatusDomain::Cluster, "DELETE_IN_PROGRESS"),
            Ok(SeverityClass::InProgress)
        );
        assert_eq!(
            classify(StatusDomain::Cluster, "DELETE_COMPLETE"),
            Ok(SeverityClass::Error)
        );
        assert_eq!(
            classify(StatusDomain::StackEvent, "DELETE_COMPLETE"),
            Ok(SeverityClass::Success)
        );
    }

    #[test]
    fn test_unknown_code_is_an_explicit_error() {
        let err = classify(StatusDomain::Job, "EXPLODED").unwrap_err();
        assert_eq!(
            err,
            StatusError::UnknownStatusCode {
                domain: StatusDomain::Job,
                code: "EXPLODED".to_string(),
            }
        );
    }

    #[test]
    fn test_every_domain_classifies_its_whole_enumeration() {
        let cases: Vec<(StatusDomain, Vec<&'static str>)> = vec![
            (
                StatusDomain::Cluster,
                ClusterStatus::ALL.iter().map(|s| s.as_str()).collect(),
            ),
            (
                StatusDomain::ComputeFleet,
                ComputeFleetStatus::ALL.iter().map(|s| s.as_str()).collect(),
            ),
            (StatusDomain::Job, JobState::ALL.iter().map(|s| s.as_str()).collect()),
            (
                StatusDomain::Instance,
                InstanceState::ALL.iter().map(|s| s.as_str()).collect(),
            ),
            (
                StatusDomain::StackEvent,
                StackEventStatus::ALL.iter().map(|s| s.as_str()).collect(),
            ),
            (
                StatusDomain::ImageBuild,
                ImageBuildStatus::ALL.iter().map(|s| s.as_str()).collect(),
            ),
            (
                StatusDomain::MachineImage,
                MachineImageState::ALL.iter().map(|s| s.as_str()).collect(),
            ),
        ];

        for (domain, codes) in cases {
            for code in codes {
                let severity = classify(domain, code)
                    .unwrap_or_else(|e| panic!("{domain} {code} failed to classify: {e}"));
                assert!(SeverityClass::ALL.contains(&severity));
            }
        }
    }

    #[test]
    fn test_domain_names_round_trip() {
        for domain in StatusDomain::ALL {
            assert_eq!(domain.as_str().parse::<StatusDomain>(), Ok(domain));
        }
    }

    #[test]
    fn test_unknown_domain_name_is_rejected() {
        let err = "filesystem".parse::<StatusDomain>().unwrap_err();
        assert_eq!(err, StatusError::UnknownDomain("filesystem".to_string()));
    }
}
