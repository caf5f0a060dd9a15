//! Response to polling the status of a submission (`/submissions/{id}/actions`).
//!
//! Per the API documentation `actions` and `actions[*].responses` hold a single entry, but both
//! are lists on the wire and are kept as such.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::ErrorCode;
use crate::vocab::ProcessingStatus;

/// Entry of `actions[*].responses[*].files[*]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatusFile {
    /// URL of the file, usually the summary JSON of the batch.
    pub url: String,
}

/// Entry of `actions[*].responses[*].objects[*].content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStatusObjectContent {
    pub clinvar_processing_status: ProcessingStatus,
    /// The API does not document the vocabulary of this field, so it is kept as a string.
    pub clinvar_release_status: String,
}

/// Entry of `actions[*].responses[*].objects[*]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStatusObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
    pub content: SubmissionStatusObjectContent,
    /// Target database, usually "clinvar".
    pub target_db: String,
}

/// Entry of `actions[*].responses[*].message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStatusResponseMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub severity: String,
    pub text: String,
}

impl SubmissionStatusResponseMessage {
    /// The reserved meaning of `error_code`, if it has one.
    pub fn error_code_kind(&self) -> Option<ErrorCode> {
        self.error_code.as_deref().and_then(ErrorCode::from_code)
    }
}

/// Entry of `actions[*].responses[*]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatusResponse {
    pub status: ProcessingStatus,
    pub files: Vec<SubmissionStatusFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<SubmissionStatusResponseMessage>,
    pub objects: Vec<SubmissionStatusObject>,
}

/// Entry of `actions[*]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStatusActions {
    /// Identifier of the submission.
    pub id: String,
    pub responses: Vec<SubmissionStatusResponse>,
    pub status: ProcessingStatus,
    /// Target database, usually "clinvar".
    pub target_db: String,
    /// Last update of the action. Any offset is normalized to UTC, so re-encoding writes the same
    /// instant with a `Z` suffix.
    pub updated: DateTime<Utc>,
}

/// The server's reply to a submission status query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub actions: Vec<SubmissionStatusActions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/clinvar")
            .join(file_name)
    }

    #[rstest]
    fn test_decode_processed_status() {
        let json = std::fs::read_to_string(get_test_path("status_processed.json")).unwrap();
        let status: SubmissionStatus = serde_json::from_str(&json).unwrap();

        assert_eq!(status.actions.len(), 1);
        let action = &status.actions[0];
        assert_eq!(action.id, "SUB999999-1");
        assert_eq!(action.status, ProcessingStatus::Processed);
        assert_eq!(action.target_db, crate::consts::TARGET_DB_CLINVAR);
        assert_eq!(
            action.updated,
            Utc.with_ymd_and_hms(2023, 2, 1, 13, 25, 32).unwrap()
                + chrono::Duration::milliseconds(477)
        );

        let response = &action.responses[0];
        assert_eq!(response.status, ProcessingStatus::Processed);
        assert_eq!(response.files.len(), 2);
        assert_eq!(
            response.files[0].url,
            "https://submit.ncbi.nlm.nih.gov/api/2.0/files/kf4wzqbx/sub999999-summary-report.json/?format=attachment"
        );
        assert_eq!(response.message, None);
        assert_eq!(response.objects[0].accession.as_deref(), Some("SCV000839746"));
        assert_eq!(
            response.objects[0].content.clinvar_processing_status,
            ProcessingStatus::Processed
        );
    }

    #[rstest]
    fn test_decode_error_status() {
        let json = std::fs::read_to_string(get_test_path("status_error.json")).unwrap();
        let status: SubmissionStatus = serde_json::from_str(&json).unwrap();

        let response = &status.actions[0].responses[0];
        assert_eq!(response.status, ProcessingStatus::Error);
        let message = response.message.as_ref().unwrap();
        assert_eq!(message.severity, "error");
        assert_eq!(message.error_code_kind(), Some(ErrorCode::AllFailure));
        assert!(response.objects.is_empty());
    }

    #[rstest]
    #[case(Some("1"), Some(ErrorCode::PartialSuccess))]
    #[case(Some("2"), Some(ErrorCode::AllFailure))]
    #[case(Some("42"), None)]
    #[case(None, None)]
    fn test_error_code_kind(#[case] code: Option<&str>, #[case] expected: Option<ErrorCode>) {
        let message = SubmissionStatusResponseMessage {
            error_code: code.map(str::to_string),
            severity: "error".to_string(),
            text: "Your submission was processed".to_string(),
        };
        assert_eq!(message.error_code_kind(), expected);
    }

    #[rstest]
    fn test_reject_bogus_processing_status() {
        let result = serde_json::from_value::<SubmissionStatusObjectContent>(json!({
            "clinvarProcessingStatus": "bogus",
            "clinvarReleaseStatus": "Not released"
        }));
        assert!(result.is_err());

        let content: SubmissionStatusObjectContent = serde_json::from_value(json!({
            "clinvarProcessingStatus": "processed",
            "clinvarReleaseStatus": "Not released"
        }))
        .unwrap();
        assert_eq!(content.clinvar_processing_status, ProcessingStatus::Processed);
        assert_eq!(
            serde_json::to_value(&content).unwrap()["clinvarProcessingStatus"],
            json!("processed")
        );
    }

    #[rstest]
    #[case("2023-02-01T15:25:32+02:00")]
    #[case("2023-02-01T13:25:32+00:00")]
    #[case("2023-02-01T13:25:32Z")]
    fn test_updated_is_normalized_to_utc(#[case] updated: &str) {
        let action: SubmissionStatusActions = serde_json::from_value(json!({
            "id": "SUB999999-1",
            "responses": [],
            "status": "processed",
            "targetDb": "clinvar",
            "updated": updated
        }))
        .unwrap();

        assert_eq!(action.updated, Utc.with_ymd_and_hms(2023, 2, 1, 13, 25, 32).unwrap());
        assert_eq!(
            serde_json::to_value(&action).unwrap()["updated"],
            json!("2023-02-01T13:25:32Z")
        );
    }
}
