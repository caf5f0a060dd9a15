//! # clinvar-api-models
//!
//! Internal record types built from ClinVar submission API messages.
//!
//! Where `clinvar-api-msg` mirrors the JSON of the API, this crate offers the view the rest of
//! the application works with: snake_case accessors, fields that cannot be changed once a record
//! is built, and a sum type in place of the mutually exclusive variant fields of a submission.
//!
//! ## Conversions
//!
//! - **wire to model**: `From<msg::X> for X` for the status and summary trees,
//!   `TryFrom<msg::X> for X` for the submission payload (which must carry exactly one variant
//!   description)
//! - **model to wire**: `From<X> for msg::X` for the submission payload only
//!
//! Conversions consume their input and own every piece of the result; nested lists keep the
//! order of the wire message, and an absent optional list stays absent (it is never turned into
//! an empty one, nor the other way around).
//!
//! ## Example
//!
//! ```rust
//! use clinvar_api_models::sub_response::Created;
//!
//! let wire = clinvar_api_msg::Created { id: "SUB123".to_string() };
//! let created = Created::from(wire);
//! assert_eq!(created.id(), "SUB123");
//! ```
//!
pub mod error;
pub mod sub_payload;
pub mod sub_response;
pub mod sub_status;

pub use error::*;
