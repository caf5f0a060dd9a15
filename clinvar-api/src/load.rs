use std::path::Path;

use anyhow::{Context, Result};

use clinvar_api_models::sub_payload::SubmissionContainer;
use clinvar_api_models::sub_response::SummaryResponse;
use clinvar_api_models::sub_status::SubmissionStatus;
use clinvar_api_msg::{codec, CodecConfig};

/// Read a batch summary report and convert it to the model.
pub fn load_summary<P: AsRef<Path>>(path: P) -> Result<SummaryResponse> {
    let path = path.as_ref();
    let wire: clinvar_api_msg::SummaryResponse = codec::from_path(path, &CodecConfig::default())
        .with_context(|| format!("Failed to decode summary report {}", path.display()))?;
    Ok(wire.into())
}

/// Read a submission status response and convert it to the model.
pub fn load_status<P: AsRef<Path>>(path: P) -> Result<SubmissionStatus> {
    let path = path.as_ref();
    let wire: clinvar_api_msg::SubmissionStatus = codec::from_path(path, &CodecConfig::default())
        .with_context(|| format!("Failed to decode submission status {}", path.display()))?;
    Ok(wire.into())
}

/// Read a submission container and check that every record describes exactly one variant shape.
pub fn load_submission<P: AsRef<Path>>(path: P) -> Result<SubmissionContainer> {
    let path = path.as_ref();
    let wire: clinvar_api_msg::SubmissionContainer =
        codec::from_path(path, &CodecConfig::default()).with_context(|| {
            format!("Failed to decode submission container {}", path.display())
        })?;
    let container = SubmissionContainer::try_from(wire)
        .with_context(|| format!("Invalid submission container {}", path.display()))?;
    log::debug!(
        "Loaded {} submission(s) from {}",
        container.clinvar_submission().map_or(0, |s| s.len()),
        path.display()
    );
    Ok(container)
}

/// Write a submission container as the JSON payload expected by the API.
pub fn save_submission<P: AsRef<Path>>(path: P, container: &SubmissionContainer) -> Result<()> {
    let path = path.as_ref();
    let wire = clinvar_api_msg::SubmissionContainer::from(container.clone());
    codec::to_path(path, &wire)
        .with_context(|| format!("Failed to write submission container {}", path.display()))?;
    Ok(())
}
