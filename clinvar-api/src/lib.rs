//! # clinvar-api
//!
//! Data contracts and translation layer for the ClinVar submission API.
//!
//! The crate bundles the wire schema (`msg`) and the internal model (`models`) behind features of
//! the same name, and adds a few helpers that go from a JSON file straight to a model record.
//!
//! ```rust,no_run
//! let summary = clinvar_api::load_summary("summary.json")?;
//! println!("{} of {} records failed", summary.total_errors(), summary.total_count());
//! # Ok::<(), anyhow::Error>(())
//! ```
#[cfg(feature = "msg")]
#[doc(inline)]
pub use clinvar_api_msg as msg;

#[cfg(feature = "models")]
#[doc(inline)]
pub use clinvar_api_models as models;

#[cfg(feature = "models")]
mod load;

#[cfg(feature = "models")]
pub use load::*;
