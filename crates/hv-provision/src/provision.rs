use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{AccountingConfig, NodeType, RetryPolicy};
use crate::errors::{ProvisionError, Result};
use crate::secret::{DbCredentials, SecretSource};
use crate::service::{PackageInstaller, ServiceManager};
use crate::template;

/// Outcome of one provisioning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step changed node state.
    Changed,
    /// The node already matched the desired state.
    Unchanged,
    /// The step does not apply to this node.
    Skipped,
}

/// Record of a completed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: &'static str,
    pub outcome: StepOutcome,
}

/// What the provisioning run did, step by step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    steps: Vec<StepRecord>,
}

impl ProvisionReport {
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// True when any step changed node state.
    pub fn changed(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.outcome == StepOutcome::Changed)
    }

    pub fn outcome(&self, name: &str) -> Option<StepOutcome> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(|step| step.outcome)
    }

    fn record(&mut self, name: &'static str, outcome: StepOutcome) {
        debug!("Step {} -> {:?}", name, outcome);
        self.steps.push(StepRecord { name, outcome });
    }
}

/// Files touched by the current run, with their prior state, so a failed
/// run can put the node back the way it found it.
#[derive(Default)]
struct Rollback {
    entries: Vec<(PathBuf, Option<Vec<u8>>)>,
}

impl Rollback {
    fn note(&mut self, path: &Path, prior: Option<Vec<u8>>) {
        self.entries.push((path.to_path_buf(), prior));
    }

    async fn undo(self) {
        for (path, prior) in self.entries.into_iter().rev() {
            let result = match prior {
                Some(bytes) => tokio::fs::write(&path, bytes).await,
                None => tokio::fs::remove_file(&path).await,
            };
            if let Err(e) = result {
                warn!("Rollback failed for {}: {}", path.display(), e);
            }
        }
    }
}

/// Provisions database accounting on a cluster head node.
///
/// Secret fetch is retried, file writes are idempotent, services only
/// cycle when a file actually changed, and any failure restores the files
/// this run touched.
pub struct AccountingProvisioner {
    config: AccountingConfig,
    secrets: Arc<dyn SecretSource>,
    packages: Arc<dyn PackageInstaller>,
    services: Arc<dyn ServiceManager>,
    retry: RetryPolicy,
}

impl AccountingProvisioner {
    pub fn new(
        config: AccountingConfig,
        secrets: Arc<dyn SecretSource>,
        packages: Arc<dyn PackageInstaller>,
        services: Arc<dyn ServiceManager>,
    ) -> Self {
        Self {
            config,
            secrets,
            packages,
            services,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[instrument(
        skip(self),
        fields(region = %self.config.region, secret_id = %self.config.secret_id)
    )]
    pub async fn run(&self) -> Result<ProvisionReport> {
        if self.config.node_type != NodeType::HeadNode {
            info!(
                "Accounting is provisioned on the head node only; nothing to do on a {:?}",
                self.config.node_type
            );
            let mut report = ProvisionReport::default();
            report.record("accounting", StepOutcome::Skipped);
            return Ok(report);
        }

        let mut rollback = Rollback::default();
        match self.apply(&mut rollback).await {
            Ok(report) => {
                info!(
                    "Accounting provisioning finished: {} steps, changed: {}",
                    report.steps().len(),
                    report.changed()
                );
                Ok(report)
            }
            Err(e) => {
                error!("Accounting provisioning failed, restoring touched files: {e}");
                rollback.undo().await;
                Err(e)
            }
        }
    }

    async fn apply(&self, rollback: &mut Rollback) -> Result<ProvisionReport> {
        let mut report = ProvisionReport::default();

        let credentials = self.fetch_credentials().await?;
        let dbd_host = self.dbd_host().await?;

        let package = self.config.platform.db_client_package();
        let newly_installed = self
            .packages
            .ensure_installed(package)
            .await
            .map_err(|source| ProvisionError::PackageInstall {
                package: package.to_string(),
                source,
            })?;
        report.record(
            "db-client-package",
            if newly_installed {
                StepOutcome::Changed
            } else {
                StepOutcome::Unchanged
            },
        );

        let snippet = template::render_accounting_snippet(&credentials.username, &dbd_host);
        let outcome = self
            .write_file(
                &self.config.paths.accounting_snippet,
                snippet.as_bytes(),
                0o600,
                false,
                rollback,
            )
            .await?;
        report.record("accounting-snippet", outcome);

        let dbd_config = template::render_dbd_config(&credentials, &dbd_host);
        let outcome = self
            .write_file(
                &self.config.paths.dbd_config,
                dbd_config.as_bytes(),
                0o600,
                true,
                rollback,
            )
            .await?;
        report.record("dbd-config", outcome);

        let unit = template::render_dbd_unit();
        let outcome = self
            .write_file(&self.config.paths.dbd_unit, unit.as_bytes(), 0o644, false, rollback)
            .await?;
        report.record("dbd-unit", outcome);

        if report.changed() {
            let dbd = &self.config.services.dbd;
            self.services
                .start(dbd)
                .await
                .map_err(|source| ProvisionError::Service {
                    unit: dbd.clone(),
                    action: "start",
                    source,
                })?;

            let controller = &self.config.services.controller;
            self.services
                .restart(controller)
                .await
                .map_err(|source| ProvisionError::Service {
                    unit: controller.clone(),
                    action: "restart",
                    source,
                })?;
            report.record("services", StepOutcome::Changed);
        } else {
            info!("Accounting already converged; leaving services untouched");
            report.record("services", StepOutcome::Unchanged);
        }

        Ok(report)
    }

    async fn fetch_credentials(&self) -> Result<DbCredentials> {
        let secret_id = &self.config.secret_id;
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.secrets.fetch(secret_id).await {
                Ok(credentials) => {
                    debug!(
                        "Fetched accounting credentials for user {}",
                        credentials.username
                    );
                    return Ok(credentials);
                }
                Err(source) if attempt > self.retry.max_retries => {
                    return Err(ProvisionError::SecretFetch {
                        secret_id: secret_id.clone(),
                        attempts: attempt,
                        source,
                    });
                }
                Err(e) => {
                    let delay = self.retry.base_delay * 2u32.saturating_pow(attempt - 1);
                    warn!(
                        "Secret fetch attempt {} failed: {}; retrying in {:?}",
                        attempt, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn dbd_host(&self) -> Result<String> {
        if let Some(host) = &self.config.dbd_host {
            return Ok(host.clone());
        }

        let output = tokio::process::Command::new("hostname")
            .output()
            .await
            .context("Failed to run hostname")
            .map_err(|source| ProvisionError::DbdHost { source })?;
        if !output.status.success() {
            return Err(ProvisionError::DbdHost {
                source: anyhow::anyhow!("hostname exited with {}", output.status),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Write `contents` to `path` unless it already matches, recording the
    /// prior state for rollback. The mode is (re)applied either way.
    async fn write_file(
        &self,
        path: &Path,
        contents: &[u8],
        mode: u32,
        sensitive: bool,
        rollback: &mut Rollback,
    ) -> Result<StepOutcome> {
        let prior = match tokio::fs::read(path).await {
            Ok(existing) if existing == contents => {
                debug!("{} already up to date", path.display());
                self.set_mode(path, mode).await?;
                return Ok(StepOutcome::Unchanged);
            }
            Ok(existing) => Some(existing),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(ProvisionError::FileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ProvisionError::FileWrite {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        rollback.note(path, prior);
        tokio::fs::write(path, contents)
            .await
            .map_err(|source| ProvisionError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        self.set_mode(path, mode).await?;

        if sensitive {
            info!(
                "Wrote {} ({} bytes, contents elided)",
                path.display(),
                contents.len()
            );
        } else {
            info!("Wrote {} ({} bytes)", path.display(), contents.len());
        }
        Ok(StepOutcome::Changed)
    }

    #[cfg(unix)]
    async fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .await
            .map_err(|source| ProvisionError::FilePermissions {
                path: path.to_path_buf(),
                source,
            })
    }

    #[cfg(not(unix))]
    async fn set_mode(&self, _path: &Path, _mode: u32) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::config::{AccountingPaths, Platform, ServiceNames};
    use crate::secret::StaticSecretSource;

    struct RecordingServiceManager {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingServiceManager {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ServiceManager for RecordingServiceManager {
        async fn start(&self, unit: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("unit {unit} refused to start");
            }
            self.calls.lock().unwrap().push(format!("start {unit}"));
            Ok(())
        }

        async fn restart(&self, unit: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("unit {unit} refused to restart");
            }
            self.calls.lock().unwrap().push(format!("restart {unit}"));
            Ok(())
        }
    }

    struct RecordingPackageInstaller {
        installed: Mutex<HashSet<String>>,
    }

    impl RecordingPackageInstaller {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                installed: Mutex::new(HashSet::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl PackageInstaller for RecordingPackageInstaller {
        async fn ensure_installed(&self, package: &str) -> anyhow::Result<bool> {
            Ok(self.installed.lock().unwrap().insert(package.to_string()))
        }
    }

    struct FlakySecretSource {
        failures_left: Mutex<u32>,
    }

    impl FlakySecretSource {
        fn new(failures: u32) -> Arc<Self> {
            Arc::new(Self {
                failures_left: Mutex::new(failures),
            })
        }
    }

    #[async_trait::async_trait]
    impl SecretSource for FlakySecretSource {
        async fn fetch(&self, _secret_id: &str) -> anyhow::Result<DbCredentials> {
            let mut failures = self.failures_left.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                anyhow::bail!("secret store unavailable");
            }
            Ok(DbCredentials::new("slurm", "pw"))
        }
    }

    fn test_config(dir: &TempDir) -> AccountingConfig {
        AccountingConfig {
            node_type: NodeType::HeadNode,
            platform: Platform::Ubuntu,
            region: "eu-west-1".to_string(),
            secret_id: "accounting-db".to_string(),
            dbd_host: Some("head-node-1".to_string()),
            paths: AccountingPaths {
                accounting_snippet: dir.path().join("slurm_sacct.conf"),
                dbd_config: dir.path().join("slurmdbd.conf"),
                dbd_unit: dir.path().join("slurmdbd.service"),
            },
            services: ServiceNames::default(),
        }
    }

    fn provisioner(
        config: AccountingConfig,
        services: Arc<RecordingServiceManager>,
    ) -> AccountingProvisioner {
        AccountingProvisioner::new(
            config,
            Arc::new(StaticSecretSource::new("slurm", "pw")),
            RecordingPackageInstaller::new(),
            services,
        )
    }

    #[tokio::test]
    async fn test_head_node_run_provisions_everything() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let services = RecordingServiceManager::new();
        let report = provisioner(config.clone(), services.clone()).run().await.unwrap();

        assert!(report.changed());
        let dbd_config = tokio::fs::read_to_string(&config.paths.dbd_config)
            .await
            .unwrap();
        assert!(dbd_config.contains("StorageUser=slurm"));
        assert!(dbd_config.contains("StoragePass=pw"));
        assert!(dbd_config.contains("DbdHost=head-node-1"));

        let snippet = tokio::fs::read_to_string(&config.paths.accounting_snippet)
            .await
            .unwrap();
        assert!(snippet.contains("AccountingStorageUser=slurm"));
        assert!(!snippet.contains("pw\n"));

        assert!(config.paths.dbd_unit.exists());
        assert_eq!(services.calls(), ["start slurmdbd", "restart slurmctld"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_rendered_files_get_tight_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        provisioner(config.clone(), RecordingServiceManager::new())
            .run()
            .await
            .unwrap();

        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&config.paths.accounting_snippet), 0o600);
        assert_eq!(mode(&config.paths.dbd_config), 0o600);
        assert_eq!(mode(&config.paths.dbd_unit), 0o644);
    }

    #[tokio::test]
    async fn test_second_run_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let services = RecordingServiceManager::new();
        let packages = RecordingPackageInstaller::new();
        let provisioner = AccountingProvisioner::new(
            config,
            Arc::new(StaticSecretSource::new("slurm", "pw")),
            packages,
            services.clone(),
        );

        let first = provisioner.run().await.unwrap();
        assert!(first.changed());

        let second = provisioner.run().await.unwrap();
        assert!(!second.changed());
        assert_eq!(second.outcome("services"), Some(StepOutcome::Unchanged));
        // Services were only cycled by the first run.
        assert_eq!(services.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_non_head_node_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(&dir);
        config.node_type = NodeType::ComputeNode;
        let services = RecordingServiceManager::new();
        let report = provisioner(config.clone(), services.clone()).run().await.unwrap();

        assert_eq!(report.outcome("accounting"), Some(StepOutcome::Skipped));
        assert!(!config.paths.dbd_config.exists());
        assert!(services.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_rolls_back_created_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let result = provisioner(config.clone(), RecordingServiceManager::failing())
            .run()
            .await;

        assert!(matches!(result, Err(ProvisionError::Service { .. })));
        assert!(!config.paths.accounting_snippet.exists());
        assert!(!config.paths.dbd_config.exists());
        assert!(!config.paths.dbd_unit.exists());
    }

    #[tokio::test]
    async fn test_failure_restores_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        tokio::fs::write(&config.paths.dbd_config, "old contents")
            .await
            .unwrap();

        let result = provisioner(config.clone(), RecordingServiceManager::failing())
            .run()
            .await;
        assert!(result.is_err());

        let restored = tokio::fs::read_to_string(&config.paths.dbd_config)
            .await
            .unwrap();
        assert_eq!(restored, "old contents");
        assert!(!config.paths.accounting_snippet.exists());
    }

    #[tokio::test]
    async fn test_drifted_file_is_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let services = RecordingServiceManager::new();
        let provisioner = provisioner(config.clone(), services.clone());

        provisioner.run().await.unwrap();
        tokio::fs::write(&config.paths.accounting_snippet, "tampered")
            .await
            .unwrap();

        let report = provisioner.run().await.unwrap();
        assert_eq!(
            report.outcome("accounting-snippet"),
            Some(StepOutcome::Changed)
        );
        assert_eq!(report.outcome("dbd-config"), Some(StepOutcome::Unchanged));

        let repaired = tokio::fs::read_to_string(&config.paths.accounting_snippet)
            .await
            .unwrap();
        assert!(repaired.contains("AccountingStorageUser=slurm"));
    }

    #[tokio::test]
    async fn test_secret_fetch_retries_until_success() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let provisioner = AccountingProvisioner::new(
            config,
            FlakySecretSource::new(2),
            RecordingPackageInstaller::new(),
            RecordingServiceManager::new(),
        )
        .with_retry_policy(RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(1),
        });

        let report = provisioner.run().await.unwrap();
        assert!(report.changed());
    }

    #[tokio::test]
    async fn test_secret_fetch_gives_up_after_exhausting_retries() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let provisioner = AccountingProvisioner::new(
            config,
            FlakySecretSource::new(10),
            RecordingPackageInstaller::new(),
            RecordingServiceManager::new(),
        )
        .with_retry_policy(RetryPolicy {
            max_retries: 1,
            base_delay: Duration::from_millis(1),
        });

        match provisioner.run().await {
            Err(ProvisionError::SecretFetch { attempts, .. }) => assert_eq!(attempts, 2),
            other => panic!("expected SecretFetch error, got {other:?}"),
        }
    }
}
