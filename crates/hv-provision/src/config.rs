use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::{ProvisionError, Result};

/// Role of the node this process runs on. Accounting is only provisioned
/// on the head node; every other role is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    HeadNode,
    ComputeNode,
    LoginNode,
}

/// Base platform of the node image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ubuntu,
    Amazon,
    Centos,
}

impl Platform {
    /// Distro package providing the database client.
    pub fn db_client_package(&self) -> &'static str {
        match self {
            Self::Ubuntu => "mysql-client",
            Self::Amazon | Self::Centos => "mysql",
        }
    }
}

/// Target paths for the rendered accounting files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingPaths {
    /// Scheduler-side accounting snippet, included from the main
    /// scheduler config.
    pub accounting_snippet: PathBuf,
    /// Accounting daemon config; contains the storage password.
    pub dbd_config: PathBuf,
    /// Systemd unit for the accounting daemon.
    pub dbd_unit: PathBuf,
}

impl Default for AccountingPaths {
    fn default() -> Self {
        Self {
            accounting_snippet: PathBuf::from("/opt/slurm/etc/slurm_sacct.conf"),
            dbd_config: PathBuf::from("/opt/slurm/etc/slurmdbd.conf"),
            dbd_unit: PathBuf::from("/etc/systemd/system/slurmdbd.service"),
        }
    }
}

/// Service units cycled after the accounting files change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceNames {
    /// Accounting daemon, started once its config exists.
    pub dbd: String,
    /// Scheduler controller, restarted to pick up the accounting snippet.
    pub controller: String,
}

impl Default for ServiceNames {
    fn default() -> Self {
        Self {
            dbd: "slurmdbd".to_string(),
            controller: "slurmctld".to_string(),
        }
    }
}

/// Retry policy for the secret fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// Settings for the accounting provisioning step, loaded from the node's
/// bootstrap TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingConfig {
    pub node_type: NodeType,
    pub platform: Platform,
    pub region: String,
    /// Identifier of the database secret in the secret store.
    pub secret_id: String,
    /// Override for the accounting daemon host; defaults to this host's
    /// name when absent.
    #[serde(default)]
    pub dbd_host: Option<String>,
    #[serde(default)]
    pub paths: AccountingPaths,
    #[serde(default)]
    pub services: ServiceNames,
}

impl AccountingConfig {
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read accounting config {}: {}", path.display(), e);
            ProvisionError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        toml::from_str(&content).map_err(|e| {
            error!("Failed to parse accounting config {}: {}", path.display(), e);
            ProvisionError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }
}
