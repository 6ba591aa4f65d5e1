//! Resolution of command flags to effective file paths. Every command
//! resolves its paths exactly once, here; defaults never leak into the
//! command logic itself.

use std::path::{Path, PathBuf};

use kubeconf::{backup_dir, kube_dir};

/// Active config location: `--kubeconfig` flag, or `~/.kube/config`.
pub fn kubeconfig_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| kube_dir().join("config"))
}

/// Merge output location: `--output` flag, or the active config itself
/// (merge overwrites it in place).
pub fn output_path(flag: Option<PathBuf>, kubeconfig: &Path) -> PathBuf {
    flag.unwrap_or_else(|| kubeconfig.to_path_buf())
}

/// Backup file location: `--backup` flag, or `~/.kcm/config`.
pub fn backup_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| backup_dir().join("config"))
}
