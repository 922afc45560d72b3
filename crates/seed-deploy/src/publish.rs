//! Publish the archive to AWS Lambda and record the runtime ARN in SSM.

use anyhow::{Context, Result};
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_ssm::types::ParameterType;
use std::path::Path;
use tracing::info;

/// Upload the archive as the function's new code, requesting a new
/// published version. Returns the versioned function ARN.
pub async fn publish_function(unit: &str, archive: &Path) -> Result<String> {
    info!("Publishing Lambda function: {}", unit);

    let code = tokio::fs::read(archive)
        .await
        .with_context(|| format!("failed to read {}", archive.display()))?;

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let lambda = aws_sdk_lambda::Client::new(&sdk_config);

    let response = lambda
        .update_function_code()
        .function_name(unit)
        .zip_file(Blob::new(code))
        .publish(true)
        .send()
        .await
        .context("update_function_code failed")?;

    response
        .function_arn()
        .map(str::to_string)
        .context("Lambda response carried no function ARN")
}

/// Strip the version suffix from a versioned function ARN.
///
/// Lambda ARNs have 7 `:`-separated segments up to the function name;
/// an 8th segment is the published version.
pub fn unversioned_arn(versioned: &str) -> String {
    versioned.split(':').take(7).collect::<Vec<_>>().join(":")
}

/// Write the unversioned ARN to the config store under the unit's
/// runtime path. Returns the parameter path written.
pub async fn record_runtime_parameter(unit: &str, arn: &str) -> Result<String> {
    let parameter_path = format!("/iac/lambda/{unit}/runtime");
    info!("Writing runtime ARN to SSM: {}", parameter_path);

    let value = serde_json::json!({ "arn": arn }).to_string();

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let ssm = aws_sdk_ssm::Client::new(&sdk_config);

    ssm.put_parameter()
        .name(&parameter_path)
        .value(value)
        .r#type(ParameterType::String)
        .overwrite(true)
        .send()
        .await
        .context("put_parameter failed")?;

    Ok(parameter_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unversioned_arn_strips_version() {
        let versioned = "arn:aws:lambda:us-east-1:123456789012:function:seed-sales-data:7";
        assert_eq!(
            unversioned_arn(versioned),
            "arn:aws:lambda:us-east-1:123456789012:function:seed-sales-data"
        );
    }

    #[test]
    fn test_unversioned_arn_idempotent_on_unversioned_input() {
        let arn = "arn:aws:lambda:us-east-1:123456789012:function:time";
        assert_eq!(unversioned_arn(arn), arn);
    }
}
