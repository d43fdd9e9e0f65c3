#![deny(unsafe_code)]

//! Reporting over inferred schema mappings: typed findings with severities,
//! assembled into a serializable report for the UI and ingestion layers.

pub mod issue;
pub mod report;

pub use issue::{MappingIssue, Severity};
pub use report::{MappingReport, build_report};
