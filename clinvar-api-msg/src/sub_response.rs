//! Replies of the ClinVar API to submission requests and the per-batch summary.
//!
//! The summary document is fetched from one of the `files[*].url` of a processed status
//! response. Its shape depends on whether the batch carried submissions, deletions or both.

use serde::{Deserialize, Serialize};

use crate::vocab::{BatchProcessingStatus, BatchReleaseStatus};

/// Reply to a successful submission request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    /// The submission ID, e.g. `SUB999999`.
    pub id: String,
}

/// Reply to a failed submission request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// The error response's message.
    pub message: String,
}

/// One offending input value of a failed record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponseErrorInput {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponseErrorOutputError {
    pub user_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponseErrorOutput {
    pub errors: Vec<SummaryResponseErrorOutputError>,
}

/// A structured error pairing the offending input with the messages shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponseError {
    /// The API schema marks `input` as required but real summaries omit it, so it is optional
    /// here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<SummaryResponseErrorInput>>,
    pub output: SummaryResponseErrorOutput,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponseDeletionIdentifier {
    pub clinvar_accession: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinvar_local_key: Option<String>,
}

/// Outcome of one deletion request of the batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponseDeletion {
    pub identifiers: SummaryResponseDeletionIdentifier,
    pub processing_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SummaryResponseError>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponseSubmissionIdentifiers {
    pub clinvar_local_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinvar_accession: Option<String>,
    #[serde(rename = "localID", default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_key: Option<String>,
}

/// Outcome of one submitted record of the batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponseSubmission {
    pub identifiers: SummaryResponseSubmissionIdentifiers,
    pub processing_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinvar_accession_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SummaryResponseError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_status: Option<String>,
}

/// Summary of a processed submission batch.
///
/// The `totalDelete*` counters are only present for batches that carried deletions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub batch_processing_status: BatchProcessingStatus,
    pub batch_release_status: BatchReleaseStatus,
    pub submission_date: String,
    pub submission_name: String,
    pub total_count: u64,
    pub total_errors: u64,
    pub total_public: u64,
    pub total_success: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<Vec<SummaryResponseDeletion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submissions: Option<Vec<SummaryResponseSubmission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_delete_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_deleted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_delete_errors: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_delete_success: Option<u64>,
}
