//! Report assembly over an inferred mapping.

use std::collections::BTreeMap;

use acm_model::{FieldId, RawColumn, SchemaMapping};
use acm_waybill::validate_waybill;
use serde::{Deserialize, Serialize};

use crate::issue::{MappingIssue, Severity};

/// Assignments accepted below this confidence are flagged for review.
const LOW_CONFIDENCE_MAX: f32 = 0.70;

/// The mapping plus everything a human (or the ingestion policy layer)
/// should look at before trusting it.
///
/// Whether to block ingestion, ask for a manual column mapping, or proceed
/// with partial data is the caller's policy decision, not this crate's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingReport {
    pub mapping: SchemaMapping,
    pub issues: Vec<MappingIssue>,
}

impl MappingReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// One-line overview for logs and list views.
    pub fn summary(&self) -> String {
        format!(
            "{} field(s) assigned, {} column(s) unassigned, {} error(s), {} warning(s)",
            self.mapping.assigned_count(),
            self.mapping.unassigned_headers.len(),
            self.error_count(),
            self.warning_count()
        )
    }
}

/// Assemble the report for one inference run.
///
/// `columns` must be the same slice the mapping was inferred from; the
/// waybill cross-check re-reads its sampled values.
pub fn build_report(columns: &[RawColumn], mapping: SchemaMapping) -> MappingReport {
    let mut issues = Vec::new();

    for field in &mapping.unmatched_required {
        issues.push(MappingIssue::RequiredUnmatched { field: *field });
    }

    for (field, header) in &mapping.assignments {
        if let Some(confidence) = mapping.confidence_for(*field)
            && confidence < LOW_CONFIDENCE_MAX
        {
            issues.push(MappingIssue::LowConfidence {
                field: *field,
                header: header.clone(),
                confidence,
            });
        }
    }

    if !mapping.unassigned_headers.is_empty() {
        issues.push(MappingIssue::UnassignedColumns {
            headers: mapping.unassigned_headers.clone(),
        });
    }

    let mut header_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for column in columns {
        let header = column.header.trim();
        if !header.is_empty() {
            *header_counts.entry(header).or_insert(0) += 1;
        }
    }
    for (header, count) in header_counts {
        if count > 1 {
            issues.push(MappingIssue::DuplicateHeader {
                header: header.to_string(),
                count,
            });
        }
    }

    if let Some(issue) = waybill_cross_check(columns, &mapping) {
        issues.push(issue);
    }

    MappingReport { mapping, issues }
}

/// Run the structural validator over the column assigned to the master
/// waybill; a column whose values never validate is a warning even though
/// the name evidence was convincing.
fn waybill_cross_check(columns: &[RawColumn], mapping: &SchemaMapping) -> Option<MappingIssue> {
    let header = mapping.header_for(FieldId::MasterWaybill)?;
    let column = columns.iter().find(|column| column.header == header)?;
    let values: Vec<&str> = column
        .sample
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        return None;
    }
    let matched = values
        .iter()
        .filter(|value| validate_waybill(value).valid)
        .count();
    if matched == 0 {
        Some(MappingIssue::WaybillSamplesInvalid {
            header: header.to_string(),
            checked: values.len(),
            matched,
        })
    } else {
        None
    }
}
