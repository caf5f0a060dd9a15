//! # clinvar-api-msg
//!
//! Wire-level message types for the ClinVar submission API.
//!
//! Every record in this crate mirrors one JSON object of the API: field names, optionality and
//! enumeration strings follow the remote schema so that a message can be decoded and re-encoded
//! without loss. The records carry no behavior beyond field access; they are plain data to be
//! consumed by `clinvar-api-models`.
//!
//! ## Main Components
//!
//! - **`sub_payload`**: the outbound submission container (`SubmissionContainer`)
//! - **`sub_status`**: the submission status polling response (`SubmissionStatus`)
//! - **`sub_response`**: creation/failure replies and the batch summary (`SummaryResponse`)
//! - **`vocab`**: closed vocabularies (assemblies, chromosomes, significance, ...)
//! - **`codec`**: JSON decoding/encoding with detection of fields the schema does not model
//!
//! ## Example
//!
//! ```rust
//! use clinvar_api_msg::{codec, CodecConfig, Created};
//!
//! let created: Created = codec::from_str(r#"{"id": "SUB999999"}"#, &CodecConfig::default()).unwrap();
//! assert_eq!(created.id, "SUB999999");
//! ```
//!
pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod sub_payload;
pub mod sub_response;
pub mod sub_status;
pub mod vocab;

// re-export things
pub use config::*;
pub use consts::*;
pub use error::*;
pub use sub_payload::*;
pub use sub_response::*;
pub use sub_status::*;
pub use vocab::*;
