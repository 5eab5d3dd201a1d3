use anyhow::{Context, bail};
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::Platform;

/// Controls system services on the node.
#[async_trait::async_trait]
pub trait ServiceManager: Send + Sync {
    async fn start(&self, unit: &str) -> anyhow::Result<()>;
    async fn restart(&self, unit: &str) -> anyhow::Result<()>;
}

/// Drives services through `systemctl`.
#[derive(Debug, Clone, Default)]
pub struct SystemdServiceManager;

impl SystemdServiceManager {
    async fn systemctl(&self, action: &str, unit: &str) -> anyhow::Result<()> {
        info!("Running systemctl {} {}", action, unit);
        let output = Command::new("systemctl")
            .arg(action)
            .arg(unit)
            .output()
            .await
            .with_context(|| format!("Failed to spawn systemctl {action} {unit}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "systemctl {action} {unit} exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ServiceManager for SystemdServiceManager {
    async fn start(&self, unit: &str) -> anyhow::Result<()> {
        self.systemctl("start", unit).await
    }

    async fn restart(&self, unit: &str) -> anyhow::Result<()> {
        self.systemctl("restart", unit).await
    }
}

/// Installs distro packages.
///
/// `ensure_installed` reports whether the package was newly installed so
/// the caller can record the step as a change or a no-op.
#[async_trait::async_trait]
pub trait PackageInstaller: Send + Sync {
    async fn ensure_installed(&self, package: &str) -> anyhow::Result<bool>;
}

/// Uses the platform's native package manager.
#[derive(Debug, Clone)]
pub struct DistroPackageInstaller {
    platform: Platform,
}

impl DistroPackageInstaller {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    async fn run(program: &str, args: &[&str]) -> anyhow::Result<std::process::Output> {
        Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to spawn {program}"))
    }

    async fn is_installed(&self, package: &str) -> anyhow::Result<bool> {
        let output = match self.platform {
            Platform::Ubuntu => Self::run("dpkg", &["-s", package]).await?,
            Platform::Amazon | Platform::Centos => Self::run("rpm", &["-q", package]).await?,
        };
        Ok(output.status.success())
    }
}

#[async_trait::async_trait]
impl PackageInstaller for DistroPackageInstaller {
    async fn ensure_installed(&self, package: &str) -> anyhow::Result<bool> {
        if self.is_installed(package).await? {
            debug!("Package {} already installed", package);
            return Ok(false);
        }

        info!("Installing package {}", package);
        let output = match self.platform {
            Platform::Ubuntu => Self::run("apt-get", &["install", "-y", package]).await?,
            Platform::Amazon | Platform::Centos => {
                Self::run("yum", &["install", "-y", package]).await?
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Package install for {package} exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }
        Ok(true)
    }
}
