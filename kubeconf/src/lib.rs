pub mod config;
pub mod merge;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

pub use config::*;
pub use merge::{merge, MergeError};

/// Directory where kubectl keeps its config files.
pub fn kube_dir() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    Path::new(&home).join(".kube")
}

/// Directory where kcm keeps backups of the active config.
pub fn backup_dir() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    Path::new(&home).join(".kcm")
}

/// Copies the content of `src` over `dst`, replacing whatever `dst` held.
/// Both handles are closed on every exit path; the write is synced before
/// returning. A failure mid-copy can leave `dst` truncated.
pub fn copy_file_content(src: &Path, dst: &Path) -> anyhow::Result<()> {
    let mut input = fs::File::open(src)
        .with_context(|| format!("Opening {}", src.display()))?;
    let mut output = fs::File::create(dst)
        .with_context(|| format!("Creating {}", dst.display()))?;

    io::copy(&mut input, &mut output)
        .with_context(|| format!("Copying {} to {}", src.display(), dst.display()))?;
    output.sync_all().context("Syncing copied config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_replaces_destination_content() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("backup");
        let dst = dir.path().join("config");
        fs::write(&src, "clusters: from backup\n").unwrap();
        fs::write(&dst, "clusters: about to be replaced\n").unwrap();

        copy_file_content(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "clusters: from backup\n");
        // the source is only ever read
        assert_eq!(fs::read_to_string(&src).unwrap(), "clusters: from backup\n");
    }

    #[test]
    fn copy_creates_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("backup");
        let dst = dir.path().join("config");
        fs::write(&src, "x").unwrap();

        copy_file_content(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "x");
    }

    #[test]
    fn missing_source_fails_and_leaves_destination_alone() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("nope");
        let dst = dir.path().join("config");
        fs::write(&dst, "still here").unwrap();

        assert!(copy_file_content(&src, &dst).is_err());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "still here");
    }
}
