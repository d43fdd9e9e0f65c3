//! Mapping issue types.
//!
//! Each variant carries only its own data; severity and message rendering
//! live here so the report stays plain data.

use acm_model::FieldId;
use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The mapping is unusable for ingestion without manual intervention.
    Error,
    /// Should be reviewed before ingestion proceeds.
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A finding about an inferred mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MappingIssue {
    /// A required field found no acceptable header.
    RequiredUnmatched { field: FieldId },
    /// An assignment was accepted below the review threshold.
    LowConfidence {
        field: FieldId,
        header: String,
        confidence: f32,
    },
    /// Input columns no field claimed.
    UnassignedColumns { headers: Vec<String> },
    /// The same header text appears on several columns.
    DuplicateHeader { header: String, count: usize },
    /// The column assigned to the master waybill never validates.
    WaybillSamplesInvalid {
        header: String,
        checked: usize,
        matched: usize,
    },
}

impl MappingIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::RequiredUnmatched { .. } => Severity::Error,
            Self::LowConfidence { .. }
            | Self::UnassignedColumns { .. }
            | Self::DuplicateHeader { .. }
            | Self::WaybillSamplesInvalid { .. } => Severity::Warning,
        }
    }

    /// Human-readable message for UI and logs.
    pub fn message(&self) -> String {
        match self {
            Self::RequiredUnmatched { field } => {
                format!("No column found for required field '{}'", field.label())
            }
            Self::LowConfidence {
                field,
                header,
                confidence,
            } => format!(
                "'{header}' mapped to {} at low confidence {:.0}%",
                field.label(),
                confidence * 100.0
            ),
            Self::UnassignedColumns { headers } => {
                format!("{} column(s) matched no field: {}", headers.len(), headers.join(", "))
            }
            Self::DuplicateHeader { header, count } => {
                format!("Header '{header}' appears on {count} columns")
            }
            Self::WaybillSamplesInvalid {
                header,
                checked,
                matched,
            } => format!(
                "Column '{header}' mapped to master waybill, but {matched} of {checked} sampled values have a valid waybill format"
            ),
        }
    }
}
