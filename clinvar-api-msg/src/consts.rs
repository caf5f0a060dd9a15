/// Error code reported in a status message when only some records of a batch failed.
pub const ERROR_CODE_PARTIAL_SUCCESS: &str = "1";

/// Error code reported in a status message when every record of a batch failed.
pub const ERROR_CODE_ALL_FAILURE: &str = "2";

/// Target database name used by the API for ClinVar actions and objects.
pub const TARGET_DB_CLINVAR: &str = "clinvar";

/// The reserved error codes of a submission status message.
///
/// The error code field itself stays an open string on the wire; only these two values carry
/// a meaning the client relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Some records were processed, some failed.
    PartialSuccess,
    /// No record was processed successfully.
    AllFailure,
}

impl ErrorCode {
    /// Classify a raw error code, `None` for codes without a reserved meaning.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            ERROR_CODE_PARTIAL_SUCCESS => Some(ErrorCode::PartialSuccess),
            ERROR_CODE_ALL_FAILURE => Some(ErrorCode::AllFailure),
            _ => None,
        }
    }

    /// The raw error code as sent by the API.
    pub fn as_code(&self) -> &'static str {
        match self {
            ErrorCode::PartialSuccess => ERROR_CODE_PARTIAL_SUCCESS,
            ErrorCode::AllFailure => ERROR_CODE_ALL_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(ErrorCode::PartialSuccess))]
    #[case("2", Some(ErrorCode::AllFailure))]
    #[case("0", None)]
    #[case("", None)]
    #[case(" 1", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<ErrorCode>) {
        assert_eq!(ErrorCode::from_code(code), expected);
    }

    #[rstest]
    fn test_as_code_matches_constants() {
        assert_eq!(ErrorCode::PartialSuccess.as_code(), ERROR_CODE_PARTIAL_SUCCESS);
        assert_eq!(ErrorCode::AllFailure.as_code(), ERROR_CODE_ALL_FAILURE);
    }
}
