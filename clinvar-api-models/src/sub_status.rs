//! Records describing the processing state of a submission.

use chrono::{DateTime, Utc};
use serde::Serialize;

use clinvar_api_msg as msg;

pub use clinvar_api_msg::{ErrorCode, ProcessingStatus};

use crate::sub_response::convert_all;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatusFile {
    url: String,
}

impl SubmissionStatusFile {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<msg::SubmissionStatusFile> for SubmissionStatusFile {
    fn from(other: msg::SubmissionStatusFile) -> Self {
        let msg::SubmissionStatusFile { url } = other;
        SubmissionStatusFile { url }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatusObjectContent {
    clinvar_processing_status: ProcessingStatus,
    clinvar_release_status: String,
}

impl SubmissionStatusObjectContent {
    pub fn clinvar_processing_status(&self) -> ProcessingStatus {
        self.clinvar_processing_status
    }

    pub fn clinvar_release_status(&self) -> &str {
        &self.clinvar_release_status
    }
}

impl From<msg::SubmissionStatusObjectContent> for SubmissionStatusObjectContent {
    fn from(other: msg::SubmissionStatusObjectContent) -> Self {
        let msg::SubmissionStatusObjectContent {
            clinvar_processing_status,
            clinvar_release_status,
        } = other;
        SubmissionStatusObjectContent {
            clinvar_processing_status,
            clinvar_release_status,
        }
    }
}

/// A record the submission created or touched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatusObject {
    accession: Option<String>,
    content: SubmissionStatusObjectContent,
    target_db: String,
}

impl SubmissionStatusObject {
    pub fn accession(&self) -> Option<&str> {
        self.accession.as_deref()
    }

    pub fn content(&self) -> &SubmissionStatusObjectContent {
        &self.content
    }

    pub fn target_db(&self) -> &str {
        &self.target_db
    }
}

impl From<msg::SubmissionStatusObject> for SubmissionStatusObject {
    fn from(other: msg::SubmissionStatusObject) -> Self {
        let msg::SubmissionStatusObject {
            accession,
            content,
            target_db,
        } = other;
        SubmissionStatusObject {
            accession,
            content: content.into(),
            target_db,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatusResponseMessage {
    error_code: Option<String>,
    severity: String,
    text: String,
}

impl SubmissionStatusResponseMessage {
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// The reserved meaning of the error code, if it has one.
    pub fn error_code_kind(&self) -> Option<ErrorCode> {
        self.error_code.as_deref().and_then(ErrorCode::from_code)
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<msg::SubmissionStatusResponseMessage> for SubmissionStatusResponseMessage {
    fn from(other: msg::SubmissionStatusResponseMessage) -> Self {
        let msg::SubmissionStatusResponseMessage {
            error_code,
            severity,
            text,
        } = other;
        SubmissionStatusResponseMessage {
            error_code,
            severity,
            text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatusResponse {
    status: ProcessingStatus,
    files: Vec<SubmissionStatusFile>,
    message: Option<SubmissionStatusResponseMessage>,
    objects: Vec<SubmissionStatusObject>,
}

impl SubmissionStatusResponse {
    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn files(&self) -> &[SubmissionStatusFile] {
        &self.files
    }

    pub fn message(&self) -> Option<&SubmissionStatusResponseMessage> {
        self.message.as_ref()
    }

    pub fn objects(&self) -> &[SubmissionStatusObject] {
        &self.objects
    }
}

impl From<msg::SubmissionStatusResponse> for SubmissionStatusResponse {
    fn from(other: msg::SubmissionStatusResponse) -> Self {
        let msg::SubmissionStatusResponse {
            status,
            files,
            message,
            objects,
        } = other;
        SubmissionStatusResponse {
            status,
            files: convert_all(files),
            message: message.map(Into::into),
            objects: convert_all(objects),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatusActions {
    id: String,
    responses: Vec<SubmissionStatusResponse>,
    status: ProcessingStatus,
    target_db: String,
    updated: DateTime<Utc>,
}

impl SubmissionStatusActions {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn responses(&self) -> &[SubmissionStatusResponse] {
        &self.responses
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn target_db(&self) -> &str {
        &self.target_db
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }
}

impl From<msg::SubmissionStatusActions> for SubmissionStatusActions {
    fn from(other: msg::SubmissionStatusActions) -> Self {
        let msg::SubmissionStatusActions {
            id,
            responses,
            status,
            target_db,
            updated,
        } = other;
        SubmissionStatusActions {
            id,
            responses: convert_all(responses),
            status,
            target_db,
            updated,
        }
    }
}

/// The processing state of a submission.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionStatus {
    actions: Vec<SubmissionStatusActions>,
}

impl SubmissionStatus {
    pub fn actions(&self) -> &[SubmissionStatusActions] {
        &self.actions
    }

    /// Whether every action has left the `submitted`/`processing` states.
    pub fn is_done(&self) -> bool {
        self.actions.iter().all(|action| {
            matches!(
                action.status,
                ProcessingStatus::Processed | ProcessingStatus::Error
            )
        })
    }

    /// URLs of all files attached to the responses, in message order.
    pub fn file_urls(&self) -> Vec<&str> {
        self.actions
            .iter()
            .flat_map(|action| action.responses.iter())
            .flat_map(|response| response.files.iter())
            .map(|file| file.url())
            .collect()
    }
}

impl From<msg::SubmissionStatus> for SubmissionStatus {
    fn from(other: msg::SubmissionStatus) -> Self {
        let msg::SubmissionStatus { actions } = other;
        SubmissionStatus {
            actions: convert_all(actions),
        }
    }
}
