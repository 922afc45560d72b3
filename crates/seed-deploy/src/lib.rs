//! Packages a lambda function unit and publishes it.
//!
//! A unit is a directory under `lambdas/<name>/` holding the function's
//! source files and an optional `requirements.txt`. Deployment stages
//! sources and resolved dependencies into `dist/`, zips the staging
//! directory, uploads the archive to AWS Lambda requesting a new
//! published version, and records the unversioned function ARN in SSM.
//!
//! Every step failure aborts the chain; there is no rollback of steps
//! that already completed.

mod archive;
mod publish;
mod stage;

pub use archive::build_archive;
pub use publish::{publish_function, record_runtime_parameter, unversioned_arn};
pub use stage::{install_dependencies, stage_sources};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory (relative to the repository root) holding function units.
pub const LAMBDAS_DIR: &str = "lambdas";

/// What a completed deployment produced.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub unit: String,
    pub archive: PathBuf,
    pub versioned_arn: String,
    pub unversioned_arn: String,
    pub parameter_path: String,
}

/// Deploy the named unit from `root/lambdas/<unit>/`.
pub async fn deploy(root: &Path, unit: &str) -> Result<DeployOutcome> {
    let unit_dir = root.join(LAMBDAS_DIR).join(unit);
    anyhow::ensure!(
        unit_dir.is_dir(),
        "no such unit: {} (expected {})",
        unit,
        unit_dir.display()
    );

    let dist_dir = stage_sources(&unit_dir).context("failed to stage sources")?;
    install_dependencies(&unit_dir, &dist_dir)
        .await
        .context("failed to install dependencies")?;

    let archive = build_archive(&dist_dir, unit).context("failed to build archive")?;

    let versioned_arn = publish_function(unit, &archive)
        .await
        .context("failed to publish function")?;
    let unversioned = unversioned_arn(&versioned_arn);

    let parameter_path = record_runtime_parameter(unit, &unversioned)
        .await
        .context("failed to record runtime parameter")?;

    info!("Deployed {} as {}", unit, versioned_arn);
    Ok(DeployOutcome {
        unit: unit.to_string(),
        archive,
        versioned_arn,
        unversioned_arn: unversioned,
        parameter_path,
    })
}
