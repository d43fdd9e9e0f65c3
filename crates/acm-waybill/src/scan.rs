//! Fallback waybill search across whole columns.
//!
//! When no header maps cleanly to the master waybill, the ingestion
//! pipeline can still sweep every sampled cell for waybill-shaped values.

use std::collections::BTreeSet;

use acm_model::{RawColumn, WaybillRecord};

use crate::validator::validate_waybill;

/// Validate every sampled cell of every column and return the valid
/// waybills, deduplicated by normalized value, in first-appearance order.
pub fn scan_columns(columns: &[RawColumn]) -> Vec<WaybillRecord> {
    let mut seen = BTreeSet::new();
    let mut found = Vec::new();
    for column in columns {
        for value in &column.sample {
            let record = validate_waybill(value);
            if !record.valid {
                continue;
            }
            if let Some(normalized) = &record.normalized
                && seen.insert(normalized.clone())
            {
                found.push(record);
            }
        }
    }
    found
}
