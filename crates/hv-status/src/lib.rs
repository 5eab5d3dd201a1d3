//! Status classification for the hpcview console
//!
//! Raw status codes arrive as strings from a handful of independent
//! external systems: the cluster orchestrator, the compute fleet, the job
//! scheduler, the cloud instance API, the infrastructure-stack event feed
//! and the image pipeline. This crate maps each code onto a small closed
//! set of severity classes that drive indicator rendering, and normalizes
//! codes into human-readable labels.
//!
//! Every domain keeps its own closed enumeration. Codes are never shared
//! across domains, even when spelled identically: `RUNNING` for a job and
//! `RUNNING` for a compute fleet classify independently, and some
//! spellings deliberately classify differently from one domain to the
//! next (a deleted cluster is an error, a deleted stack resource is a
//! success).
//!
//! # Example
//!
//! ```
//! use hv_status::{classify, format_status, SeverityClass, StatusDomain};
//!
//! let severity = classify(StatusDomain::Cluster, "CREATE_COMPLETE")?;
//! assert_eq!(severity, SeverityClass::Success);
//! assert_eq!(format_status(Some("CREATE_COMPLETE")), "Create complete");
//! # Ok::<(), hv_status::StatusError>(())
//! ```
//!
//! Unknown codes are an explicit error, never a silently missing
//! indicator: [`classify`] fails with [`StatusError::UnknownStatusCode`]
//! for any string outside the domain's enumeration.

pub mod cluster;
pub mod domain;
pub mod errors;
pub mod fleet;
pub mod format;
pub mod image;
pub mod instance;
pub mod job;
pub mod severity;
pub mod stack;

// Re-export main types
pub use cluster::ClusterStatus;
pub use domain::{StatusDomain, classify};
pub use errors::{Result, StatusError};
pub use fleet::ComputeFleetStatus;
pub use format::format_status;
pub use image::{ImageBuildStatus, MachineImageState};
pub use instance::InstanceState;
pub use job::JobState;
pub use severity::SeverityClass;
pub use stack::StackEventStatus;
