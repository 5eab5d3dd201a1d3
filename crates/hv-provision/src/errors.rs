use std::path::PathBuf;

use thiserror::Error;

/// Accounting provisioning error types
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to fetch secret {secret_id:?} after {attempts} attempts: {source}")]
    SecretFetch {
        secret_id: String,
        attempts: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to resolve accounting daemon host: {source}")]
    DbdHost {
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to install package {package}: {source}")]
    PackageInstall {
        package: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to set permissions on {path}: {source}")]
    FilePermissions {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to {action} service {unit}: {source}")]
    Service {
        unit: String,
        action: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
