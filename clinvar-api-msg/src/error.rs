use std::io;
use thiserror::Error;

/// Error raised when a string is not a member of one of the closed API vocabularies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("Unknown {vocabulary} value: {value:?}")]
    UnknownValue {
        vocabulary: &'static str,
        value: String,
    },
}

/// Error type for decoding and encoding wire messages.
#[derive(Error, Debug)]
pub enum CodecError {
    /// IO error while reading or writing a message.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The message is not valid JSON or does not match the schema: a required field is
    /// missing, a value has the wrong type or an enumeration value is out of its set.
    #[error("Message does not match the ClinVar API schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The message carries fields the schema does not model (JSON pointers).
    #[error("Message contains fields unknown to the ClinVar API schema: {}", .0.join(", "))]
    UnknownFields(Vec<String>),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
