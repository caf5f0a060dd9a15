//! Records describing the outcome of a submission.

use serde::Serialize;

use clinvar_api_msg as msg;

// The batch status vocabularies are shared with the wire layer so both can never disagree.
pub use clinvar_api_msg::{BatchProcessingStatus, BatchReleaseStatus, ErrorCode};

/// A successfully created submission.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Created {
    id: String,
}

impl Created {
    /// The submission ID.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl From<msg::Created> for Created {
    fn from(other: msg::Created) -> Self {
        let msg::Created { id } = other;
        Created { id }
    }
}

/// A failed request, as reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Error {
    message: String,
}

impl Error {
    /// The error response's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<msg::Error> for Error {
    fn from(other: msg::Error) -> Self {
        let msg::Error { message } = other;
        Error { message }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseErrorInput {
    value: String,
    field: Option<String>,
}

impl SummaryResponseErrorInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl From<msg::SummaryResponseErrorInput> for SummaryResponseErrorInput {
    fn from(other: msg::SummaryResponseErrorInput) -> Self {
        let msg::SummaryResponseErrorInput { value, field } = other;
        SummaryResponseErrorInput { value, field }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseErrorOutputError {
    user_message: String,
}

impl SummaryResponseErrorOutputError {
    pub fn user_message(&self) -> &str {
        &self.user_message
    }
}

impl From<msg::SummaryResponseErrorOutputError> for SummaryResponseErrorOutputError {
    fn from(other: msg::SummaryResponseErrorOutputError) -> Self {
        let msg::SummaryResponseErrorOutputError { user_message } = other;
        SummaryResponseErrorOutputError { user_message }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseErrorOutput {
    errors: Vec<SummaryResponseErrorOutputError>,
}

impl SummaryResponseErrorOutput {
    pub fn errors(&self) -> &[SummaryResponseErrorOutputError] {
        &self.errors
    }
}

impl From<msg::SummaryResponseErrorOutput> for SummaryResponseErrorOutput {
    fn from(other: msg::SummaryResponseErrorOutput) -> Self {
        let msg::SummaryResponseErrorOutput { errors } = other;
        SummaryResponseErrorOutput {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }
}

/// A structured error of a failed record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseError {
    input: Option<Vec<SummaryResponseErrorInput>>,
    output: SummaryResponseErrorOutput,
}

impl SummaryResponseError {
    /// The offending input values; `None` when the server did not report them.
    pub fn input(&self) -> Option<&[SummaryResponseErrorInput]> {
        self.input.as_deref()
    }

    pub fn output(&self) -> &SummaryResponseErrorOutput {
        &self.output
    }
}

impl From<msg::SummaryResponseError> for SummaryResponseError {
    fn from(other: msg::SummaryResponseError) -> Self {
        let msg::SummaryResponseError { input, output } = other;
        SummaryResponseError {
            input: input.map(convert_all),
            output: output.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseDeletionIdentifier {
    clinvar_accession: String,
    clinvar_local_key: Option<String>,
}

impl SummaryResponseDeletionIdentifier {
    pub fn clinvar_accession(&self) -> &str {
        &self.clinvar_accession
    }

    pub fn clinvar_local_key(&self) -> Option<&str> {
        self.clinvar_local_key.as_deref()
    }
}

impl From<msg::SummaryResponseDeletionIdentifier> for SummaryResponseDeletionIdentifier {
    fn from(other: msg::SummaryResponseDeletionIdentifier) -> Self {
        let msg::SummaryResponseDeletionIdentifier {
            clinvar_accession,
            clinvar_local_key,
        } = other;
        SummaryResponseDeletionIdentifier {
            clinvar_accession,
            clinvar_local_key,
        }
    }
}

/// Outcome of one deletion request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseDeletion {
    identifiers: SummaryResponseDeletionIdentifier,
    processing_status: String,
    delete_date: Option<String>,
    delete_status: Option<String>,
    errors: Option<Vec<SummaryResponseError>>,
}

impl SummaryResponseDeletion {
    pub fn identifiers(&self) -> &SummaryResponseDeletionIdentifier {
        &self.identifiers
    }

    pub fn processing_status(&self) -> &str {
        &self.processing_status
    }

    pub fn delete_date(&self) -> Option<&str> {
        self.delete_date.as_deref()
    }

    pub fn delete_status(&self) -> Option<&str> {
        self.delete_status.as_deref()
    }

    pub fn errors(&self) -> Option<&[SummaryResponseError]> {
        self.errors.as_deref()
    }
}

impl From<msg::SummaryResponseDeletion> for SummaryResponseDeletion {
    fn from(other: msg::SummaryResponseDeletion) -> Self {
        let msg::SummaryResponseDeletion {
            identifiers,
            processing_status,
            delete_date,
            delete_status,
            errors,
        } = other;
        SummaryResponseDeletion {
            identifiers: identifiers.into(),
            processing_status,
            delete_date,
            delete_status,
            errors: errors.map(convert_all),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseSubmissionIdentifiers {
    clinvar_local_key: String,
    clinvar_accession: Option<String>,
    local_id: Option<String>,
    local_key: Option<String>,
}

impl SummaryResponseSubmissionIdentifiers {
    pub fn clinvar_local_key(&self) -> &str {
        &self.clinvar_local_key
    }

    pub fn clinvar_accession(&self) -> Option<&str> {
        self.clinvar_accession.as_deref()
    }

    pub fn local_id(&self) -> Option<&str> {
        self.local_id.as_deref()
    }

    pub fn local_key(&self) -> Option<&str> {
        self.local_key.as_deref()
    }
}

impl From<msg::SummaryResponseSubmissionIdentifiers> for SummaryResponseSubmissionIdentifiers {
    fn from(other: msg::SummaryResponseSubmissionIdentifiers) -> Self {
        let msg::SummaryResponseSubmissionIdentifiers {
            clinvar_local_key,
            clinvar_accession,
            local_id,
            local_key,
        } = other;
        SummaryResponseSubmissionIdentifiers {
            clinvar_local_key,
            clinvar_accession,
            local_id,
            local_key,
        }
    }
}

/// Outcome of one submitted record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponseSubmission {
    identifiers: SummaryResponseSubmissionIdentifiers,
    processing_status: String,
    clinvar_accession_version: Option<String>,
    errors: Option<Vec<SummaryResponseError>>,
    release_date: Option<String>,
    release_status: Option<String>,
}

impl SummaryResponseSubmission {
    pub fn identifiers(&self) -> &SummaryResponseSubmissionIdentifiers {
        &self.identifiers
    }

    pub fn processing_status(&self) -> &str {
        &self.processing_status
    }

    pub fn clinvar_accession_version(&self) -> Option<&str> {
        self.clinvar_accession_version.as_deref()
    }

    pub fn errors(&self) -> Option<&[SummaryResponseError]> {
        self.errors.as_deref()
    }

    pub fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }

    pub fn release_status(&self) -> Option<&str> {
        self.release_status.as_deref()
    }
}

impl From<msg::SummaryResponseSubmission> for SummaryResponseSubmission {
    fn from(other: msg::SummaryResponseSubmission) -> Self {
        let msg::SummaryResponseSubmission {
            identifiers,
            processing_status,
            clinvar_accession_version,
            errors,
            release_date,
            release_status,
        } = other;
        SummaryResponseSubmission {
            identifiers: identifiers.into(),
            processing_status,
            clinvar_accession_version,
            errors: errors.map(convert_all),
            release_date,
            release_status,
        }
    }
}

/// The server's summary of a processed submission batch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SummaryResponse {
    batch_processing_status: BatchProcessingStatus,
    batch_release_status: BatchReleaseStatus,
    submission_date: String,
    submission_name: String,
    total_count: u64,
    total_errors: u64,
    total_public: u64,
    total_success: u64,
    deletions: Option<Vec<SummaryResponseDeletion>>,
    submissions: Option<Vec<SummaryResponseSubmission>>,
    total_delete_count: Option<u64>,
    total_deleted: Option<u64>,
    total_delete_errors: Option<u64>,
    total_delete_success: Option<u64>,
}

impl SummaryResponse {
    pub fn batch_processing_status(&self) -> BatchProcessingStatus {
        self.batch_processing_status
    }

    pub fn batch_release_status(&self) -> BatchReleaseStatus {
        self.batch_release_status
    }

    pub fn submission_date(&self) -> &str {
        &self.submission_date
    }

    pub fn submission_name(&self) -> &str {
        &self.submission_name
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_errors(&self) -> u64 {
        self.total_errors
    }

    pub fn total_public(&self) -> u64 {
        self.total_public
    }

    pub fn total_success(&self) -> u64 {
        self.total_success
    }

    pub fn deletions(&self) -> Option<&[SummaryResponseDeletion]> {
        self.deletions.as_deref()
    }

    pub fn submissions(&self) -> Option<&[SummaryResponseSubmission]> {
        self.submissions.as_deref()
    }

    pub fn total_delete_count(&self) -> Option<u64> {
        self.total_delete_count
    }

    pub fn total_deleted(&self) -> Option<u64> {
        self.total_deleted
    }

    pub fn total_delete_errors(&self) -> Option<u64> {
        self.total_delete_errors
    }

    pub fn total_delete_success(&self) -> Option<u64> {
        self.total_delete_success
    }

    ///
    /// The reserved error code matching the counters of this summary.
    ///
    /// Submissions and deletions are counted together. Returns `None` when no record failed,
    /// [`ErrorCode::AllFailure`] when every record failed and [`ErrorCode::PartialSuccess`]
    /// otherwise.
    ///
    pub fn error_code(&self) -> Option<ErrorCode> {
        let errors = self
            .total_errors
            .saturating_add(self.total_delete_errors.unwrap_or(0));
        let count = self
            .total_count
            .saturating_add(self.total_delete_count.unwrap_or(0));
        if errors == 0 {
            None
        } else if errors >= count {
            Some(ErrorCode::AllFailure)
        } else {
            Some(ErrorCode::PartialSuccess)
        }
    }
}

impl From<msg::SummaryResponse> for SummaryResponse {
    fn from(other: msg::SummaryResponse) -> Self {
        let msg::SummaryResponse {
            batch_processing_status,
            batch_release_status,
            submission_date,
            submission_name,
            total_count,
            total_errors,
            total_public,
            total_success,
            deletions,
            submissions,
            total_delete_count,
            total_deleted,
            total_delete_errors,
            total_delete_success,
        } = other;
        SummaryResponse {
            batch_processing_status,
            batch_release_status,
            submission_date,
            submission_name,
            total_count,
            total_errors,
            total_public,
            total_success,
            deletions: deletions.map(convert_all),
            submissions: submissions.map(convert_all),
            total_delete_count,
            total_deleted,
            total_delete_errors,
            total_delete_success,
        }
    }
}

/// Convert every element of a wire list, keeping the order.
pub(crate) fn convert_all<W, M: From<W>>(items: Vec<W>) -> Vec<M> {
    items.into_iter().map(M::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn error(user_messages: &[&str]) -> msg::SummaryResponseError {
        msg::SummaryResponseError {
            input: Some(vec![msg::SummaryResponseErrorInput {
                value: "bad".to_string(),
                field: None,
            }]),
            output: msg::SummaryResponseErrorOutput {
                errors: user_messages
                    .iter()
                    .map(|m| msg::SummaryResponseErrorOutputError {
                        user_message: m.to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[fixture]
    fn wire_summary() -> msg::SummaryResponse {
        msg::SummaryResponse {
            batch_processing_status: BatchProcessingStatus::Error,
            batch_release_status: BatchReleaseStatus::NotReleased,
            submission_date: "2023-02-01".to_string(),
            submission_name: "batch".to_string(),
            total_count: 1,
            total_errors: 1,
            total_public: 0,
            total_success: 0,
            deletions: None,
            submissions: Some(vec![msg::SummaryResponseSubmission {
                identifiers: msg::SummaryResponseSubmissionIdentifiers {
                    clinvar_local_key: "key1".to_string(),
                    clinvar_accession: None,
                    local_id: None,
                    local_key: None,
                },
                processing_status: "Error".to_string(),
                clinvar_accession_version: None,
                errors: Some(vec![error(&["invalid HGVS"])]),
                release_date: None,
                release_status: None,
            }]),
            total_delete_count: None,
            total_deleted: None,
            total_delete_errors: None,
            total_delete_success: None,
        }
    }

    #[rstest]
    fn test_created_and_error() {
        let created = Created::from(msg::Created {
            id: "SUB123".to_string(),
        });
        assert_eq!(created.id(), "SUB123");

        let error = Error::from(msg::Error {
            message: "Unauthorized".to_string(),
        });
        assert_eq!(error.message(), "Unauthorized");
    }

    #[rstest]
    fn test_summary_nested_fields(wire_summary: msg::SummaryResponse) {
        let summary = SummaryResponse::from(wire_summary);

        assert_eq!(summary.batch_processing_status(), BatchProcessingStatus::Error);
        assert_eq!(summary.batch_release_status(), BatchReleaseStatus::NotReleased);
        let submission = &summary.submissions().unwrap()[0];
        assert_eq!(submission.identifiers().clinvar_local_key(), "key1");
        assert_eq!(
            submission.errors().unwrap()[0].output().errors()[0].user_message(),
            "invalid HGVS"
        );
        assert_eq!(submission.errors().unwrap()[0].input().unwrap()[0].value(), "bad");
        assert_eq!(summary.deletions(), None);
        assert_eq!(summary.error_code(), Some(ErrorCode::AllFailure));
    }

    #[rstest]
    fn test_error_order_is_preserved() {
        let messages = ["first", "second", "third", "fourth"];
        let converted = SummaryResponseError::from(error(&messages));
        let got: Vec<&str> = converted
            .output()
            .errors()
            .iter()
            .map(|e| e.user_message())
            .collect();
        assert_eq!(got, messages);
    }

    #[rstest]
    fn test_absent_and_empty_errors_stay_distinct() {
        let base = msg::SummaryResponseDeletion {
            identifiers: msg::SummaryResponseDeletionIdentifier {
                clinvar_accession: "SCV000000001".to_string(),
                clinvar_local_key: None,
            },
            processing_status: "Success".to_string(),
            delete_date: None,
            delete_status: None,
            errors: None,
        };

        let absent = SummaryResponseDeletion::from(base.clone());
        assert_eq!(absent.errors(), None);

        let empty = SummaryResponseDeletion::from(msg::SummaryResponseDeletion {
            errors: Some(vec![]),
            ..base
        });
        assert_eq!(empty.errors(), Some(&[][..]));
    }

    #[rstest]
    fn test_missing_error_input_stays_absent() {
        let converted = SummaryResponseError::from(msg::SummaryResponseError {
            input: None,
            output: msg::SummaryResponseErrorOutput { errors: vec![] },
        });
        assert_eq!(converted.input(), None);
        assert!(converted.output().errors().is_empty());
    }

    #[rstest]
    fn test_equal_input_gives_equal_models(wire_summary: msg::SummaryResponse) {
        let first = SummaryResponse::from(wire_summary.clone());
        let second = SummaryResponse::from(wire_summary);
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(3, 0, None, None, None)]
    #[case(3, 1, None, None, Some(ErrorCode::PartialSuccess))]
    #[case(3, 3, None, None, Some(ErrorCode::AllFailure))]
    #[case(0, 0, Some(2), Some(2), Some(ErrorCode::AllFailure))]
    #[case(1, 0, Some(2), Some(1), Some(ErrorCode::PartialSuccess))]
    #[case(u64::MAX, u64::MAX, Some(1), Some(1), Some(ErrorCode::AllFailure))]
    #[case(u64::MAX, 1, Some(u64::MAX), None, Some(ErrorCode::PartialSuccess))]
    fn test_error_code(
        wire_summary: msg::SummaryResponse,
        #[case] total_count: u64,
        #[case] total_errors: u64,
        #[case] total_delete_count: Option<u64>,
        #[case] total_delete_errors: Option<u64>,
        #[case] expected: Option<ErrorCode>,
    ) {
        let summary = SummaryResponse::from(msg::SummaryResponse {
            total_count,
            total_errors,
            total_delete_count,
            total_delete_errors,
            ..wire_summary
        });
        assert_eq!(summary.error_code(), expected);
    }
}
