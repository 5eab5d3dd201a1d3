use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use zeroize::Zeroizing;

/// Database credentials for the accounting storage backend.
///
/// The password is zeroized on drop and kept out of `Debug` output; it is
/// only ever interpolated into the daemon config, which is written with
/// mode 0600.
pub struct DbCredentials {
    pub username: String,
    password: Zeroizing<String>,
}

impl DbCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Parse the payload as stored by the secret store: a JSON object
    /// with `username` and `password` fields.
    pub fn from_json(payload: &str) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct RawSecret {
            username: String,
            password: String,
        }

        let raw: RawSecret =
            serde_json::from_str(payload).context("Secret payload is not valid credentials JSON")?;
        Ok(Self {
            username: raw.username,
            password: Zeroizing::new(raw.password),
        })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Source of the accounting database secret.
///
/// Network-backed secret stores live behind this seam; the provisioner
/// never talks to one directly.
#[async_trait::async_trait]
pub trait SecretSource: Send + Sync {
    async fn fetch(&self, secret_id: &str) -> anyhow::Result<DbCredentials>;
}

/// Reads secrets from JSON files named `<secret_id>.json` in a directory.
///
/// For head nodes where an earlier bootstrap phase stages the secret onto
/// local disk.
#[derive(Debug, Clone)]
pub struct FileSecretSource {
    dir: PathBuf,
}

impl FileSecretSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default staging directory under the per-user data dir.
    pub fn default_location() -> anyhow::Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("io", "hpcview", "hpcview")
            .context("Failed to get project directories")?;
        Ok(Self::new(proj_dirs.data_dir().join("secrets")))
    }
}

#[async_trait::async_trait]
impl SecretSource for FileSecretSource {
    async fn fetch(&self, secret_id: &str) -> anyhow::Result<DbCredentials> {
        let path = self.dir.join(format!("{secret_id}.json"));
        let payload = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read staged secret {}", path.display()))?;
        DbCredentials::from_json(&payload)
    }
}

/// Static secret source for tests
#[derive(Debug, Clone)]
pub struct StaticSecretSource {
    username: String,
    password: String,
}

impl StaticSecretSource {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait::async_trait]
impl SecretSource for StaticSecretSource {
    async fn fetch(&self, _secret_id: &str) -> anyhow::Result<DbCredentials> {
        Ok(DbCredentials::new(
            self.username.clone(),
            self.password.clone(),
        ))
    }
}
