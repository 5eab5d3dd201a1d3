//! Database accounting provisioning for cluster head nodes
//!
//! During cluster bootstrap the head node is wired to the accounting
//! database: the database client package is installed, the scheduler's
//! accounting snippet and the accounting daemon config are rendered from
//! the database secret, the daemon's systemd unit is installed, and the
//! services are cycled.
//!
//! The step is deliberately not a one-shot script:
//!
//! - the secret fetch is retried with backoff;
//! - file writes are idempotent, so re-running on a converged node
//!   changes nothing and leaves the services alone;
//! - a failed run restores every file it touched;
//! - secret material lives in [`DbCredentials`], is zeroized on drop and
//!   never logged.
//!
//! External collaborators (secret store, service manager, package
//! manager) sit behind traits so the step can run against fakes in tests
//! and against `systemctl`/the distro package manager on a real node.

pub mod config;
pub mod errors;
pub mod provision;
pub mod secret;
pub mod service;
pub mod template;

// Re-export main types
pub use config::{AccountingConfig, AccountingPaths, NodeType, Platform, RetryPolicy, ServiceNames};
pub use errors::{ProvisionError, Result};
pub use provision::{AccountingProvisioner, ProvisionReport, StepOutcome, StepRecord};
pub use secret::{DbCredentials, FileSecretSource, SecretSource, StaticSecretSource};
pub use service::{DistroPackageInstaller, PackageInstaller, ServiceManager, SystemdServiceManager};
