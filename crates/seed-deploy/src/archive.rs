//! Zip the staging directory into the deployable archive.

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create `<dist_dir>/<unit>.zip` from everything under `dist_dir`.
///
/// Entry names are relative to the staging directory so the archive
/// unpacks flat, the layout the function runtime expects. The archive
/// itself is excluded from the walk.
pub fn build_archive(dist_dir: &Path, unit: &str) -> Result<PathBuf> {
    let archive_path = dist_dir.join(format!("{unit}.zip"));
    let file = File::create(&archive_path)
        .with_context(|| format!("failed to create {}", archive_path.display()))?;

    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dist_dir).min_depth(1) {
        let entry = entry.context("failed to walk staging directory")?;
        let path = entry.path();
        if path == archive_path {
            continue;
        }

        let relative = path
            .strip_prefix(dist_dir)
            .context("entry outside staging directory")?;
        let name = relative.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            writer.add_directory(&name, options)?;
        } else {
            writer.start_file(&name, options)?;
            let mut source = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            io::copy(&mut source, &mut writer)?;
        }
    }

    writer.finish().context("failed to finalize archive")?;
    info!("Created archive {}", archive_path.display());
    Ok(archive_path)
}
