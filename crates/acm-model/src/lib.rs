#![deny(unsafe_code)]

//! Data model for the manifest schema inference engine.
//!
//! Pure types, no logic: the catalog, scorers, and assignment engine live in
//! their own crates and all speak these types.

pub mod column;
pub mod field;
pub mod mapping;
pub mod options;
pub mod waybill;

pub use column::RawColumn;
pub use field::{FieldDefinition, FieldId};
pub use mapping::{AlternateCandidate, CandidateMatch, SchemaMapping};
pub use options::InferOptions;
pub use waybill::WaybillRecord;
