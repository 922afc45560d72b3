//! Staging: copy unit sources and install dependencies into `dist/`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Recreate the unit's `dist/` directory and copy its Python sources in.
///
/// Returns the staging directory path. Any pre-existing `dist/` is
/// removed first so stale artifacts never leak into the archive.
pub fn stage_sources(unit_dir: &Path) -> Result<PathBuf> {
    let dist_dir = unit_dir.join("dist");

    if dist_dir.exists() {
        fs::remove_dir_all(&dist_dir)
            .with_context(|| format!("failed to remove {}", dist_dir.display()))?;
    }
    fs::create_dir_all(&dist_dir)
        .with_context(|| format!("failed to create {}", dist_dir.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(unit_dir)
        .with_context(|| format!("failed to read {}", unit_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "py") {
            let file_name = entry.file_name();
            fs::copy(&path, dist_dir.join(&file_name))
                .with_context(|| format!("failed to copy {}", path.display()))?;
            debug!("Staged {}", file_name.to_string_lossy());
            copied += 1;
        }
    }

    info!("Staged {} source files into {}", copied, dist_dir.display());
    Ok(dist_dir)
}

/// Install third-party dependencies into the staging directory.
///
/// No-op when the unit carries no `requirements.txt`. The resolver is
/// pip with `--target`, so packages land next to the sources and ship
/// inside the archive.
pub async fn install_dependencies(unit_dir: &Path, dist_dir: &Path) -> Result<()> {
    let requirements = unit_dir.join("requirements.txt");
    if !requirements.exists() {
        debug!("No requirements.txt in {}, skipping install", unit_dir.display());
        return Ok(());
    }

    info!("Installing dependencies from requirements.txt");
    let status = Command::new("pip")
        .arg("install")
        .arg("--target")
        .arg(dist_dir)
        .arg("-r")
        .arg(&requirements)
        .arg("--upgrade")
        .status()
        .await
        .context("failed to run pip")?;

    anyhow::ensure!(status.success(), "pip install exited with {status}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_stage_copies_only_python_sources() {
        let unit = tempfile::tempdir().unwrap();
        write_file(unit.path(), "main.py", "def handler(event, context): pass\n");
        write_file(unit.path(), "util.py", "x = 1\n");
        write_file(unit.path(), "notes.md", "not shipped\n");

        let dist = stage_sources(unit.path()).unwrap();

        assert!(dist.join("main.py").exists());
        assert!(dist.join("util.py").exists());
        assert!(!dist.join("notes.md").exists());
    }

    #[test]
    fn test_stage_replaces_existing_dist() {
        let unit = tempfile::tempdir().unwrap();
        write_file(unit.path(), "main.py", "pass\n");

        let dist = stage_sources(unit.path()).unwrap();
        write_file(&dist, "stale.pyc", "junk");

        let dist = stage_sources(unit.path()).unwrap();
        assert!(dist.join("main.py").exists());
        assert!(!dist.join("stale.pyc").exists());
    }

    #[tokio::test]
    async fn test_install_skips_without_requirements() {
        let unit = tempfile::tempdir().unwrap();
        let dist = unit.path().join("dist");
        fs::create_dir(&dist).unwrap();

        install_dependencies(unit.path(), &dist).await.unwrap();
    }
}
