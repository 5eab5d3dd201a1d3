use crate::secret::DbCredentials;

/// Scheduler-side accounting snippet, included from the main scheduler
/// config. Carries no secret material: the daemon host and storage user
/// only.
pub fn render_accounting_snippet(db_user: &str, dbd_host: &str) -> String {
    format!(
        "# Managed by hpcview accounting provisioning; do not edit.\n\
         JobAcctGatherType=jobacct_gather/cgroup\n\
         AccountingStorageType=accounting_storage/slurmdbd\n\
         AccountingStorageHost={dbd_host}\n\
         AccountingStorageUser={db_user}\n\
         AccountingStoragePort=6819\n"
    )
}

/// Accounting daemon config. Contains the storage password: written with
/// mode 0600 and never logged.
pub fn render_dbd_config(credentials: &DbCredentials, dbd_host: &str) -> String {
    format!(
        "# Managed by hpcview accounting provisioning; do not edit.\n\
         AuthType=auth/munge\n\
         DbdHost={dbd_host}\n\
         SlurmUser=slurm\n\
         LogFile=/var/log/slurmdbd.log\n\
         PidFile=/var/run/slurmdbd.pid\n\
         StorageType=accounting_storage/mysql\n\
         StorageUser={user}\n\
         StoragePass={pass}\n\
         StorageLoc=slurm_acct_db\n",
        user = credentials.username,
        pass = credentials.password(),
    )
}

const DBD_UNIT: &str = "\
[Unit]
Description=Slurm database daemon
After=network.target munge.service mysql.service

[Service]
Type=simple
User=slurm
ExecStart=/opt/slurm/sbin/slurmdbd -D
Restart=on-failure
LimitNOFILE=65536

[Install]
WantedBy=multi-user.target
";

/// Systemd unit for the accounting daemon.
pub fn render_dbd_unit() -> String {
    DBD_UNIT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_wires_storage_without_password() {
        let snippet = render_accounting_snippet("slurm", "head-node-1");
        assert!(snippet.contains("AccountingStorageHost=head-node-1"));
        assert!(snippet.contains("AccountingStorageUser=slurm"));
        assert!(snippet.contains("AccountingStorageType=accounting_storage/slurmdbd"));
        assert!(!snippet.contains("Pass"));
    }

    #[test]
    fn test_dbd_config_contains_credentials() {
        let credentials = DbCredentials::new("slurm", "pw");
        let config = render_dbd_config(&credentials, "head-node-1");
        assert!(config.contains("DbdHost=head-node-1"));
        assert!(config.contains("StorageUser=slurm"));
        assert!(config.contains("StoragePass=pw"));
    }

    #[test]
    fn test_unit_file_is_installable() {
        let unit = render_dbd_unit();
        assert!(unit.starts_with("[Unit]"));
        assert!(unit.contains("ExecStart="));
        assert!(unit.contains("WantedBy=multi-user.target"));
    }
}
