#![deny(unsafe_code)]

//! Static reference tables for manifest schema inference: the bilingual
//! field vocabulary and the IATA carrier-prefix list.
//!
//! Both tables are loaded once per process and never mutated.

pub mod carriers;
pub mod error;
pub mod fields;

pub use carriers::{carrier_for_prefix, known_prefix_count};
pub use error::CatalogError;
pub use fields::FieldCatalog;
