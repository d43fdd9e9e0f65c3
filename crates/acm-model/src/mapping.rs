//! Inference output types.
//!
//! A [`SchemaMapping`] is the engine's whole answer for one uploaded
//! manifest: which header feeds which semantic field, how confident the
//! engine is, what else came close, and which required fields went unmet.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Score breakdown for a single (header, field) pair.
///
/// Ephemeral: computed during one inference run and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub header: String,
    pub field: FieldId,
    /// Evidence from the header text against the field's variant list.
    pub name_score: f32,
    /// Evidence from the sampled cell values (0.0 when the field abstains
    /// or the sample is empty).
    pub content_score: f32,
    /// Blended score; this is the confidence reported on assignment.
    pub final_score: f32,
}

/// A runner-up header for a field, recorded for manual override flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternateCandidate {
    pub header: String,
    pub score: f32,
}

/// The engine's output for one manifest.
///
/// Invariants: each field appears at most once in `assignments`; each input
/// column is claimed at most once; `confidence[f]` is exactly the final
/// score of the assigned pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaMapping {
    /// Accepted header per field.
    pub assignments: BTreeMap<FieldId, String>,
    /// Final score of each accepted assignment, in `[0, 1]`.
    pub confidence: BTreeMap<FieldId, f32>,
    /// Up to three runner-up headers per assigned field, best first.
    pub alternates: BTreeMap<FieldId, Vec<AlternateCandidate>>,
    /// Required fields no header was accepted for.
    pub unmatched_required: BTreeSet<FieldId>,
    /// Input headers claimed by no field, in input order.
    pub unassigned_headers: Vec<String>,
}

impl SchemaMapping {
    /// Header assigned to `field`, if any.
    pub fn header_for(&self, field: FieldId) -> Option<&str> {
        self.assignments.get(&field).map(String::as_str)
    }

    /// Confidence of the assignment for `field`, if assigned.
    pub fn confidence_for(&self, field: FieldId) -> Option<f32> {
        self.confidence.get(&field).copied()
    }

    /// True when every required field found a header.
    pub fn is_complete(&self) -> bool {
        self.unmatched_required.is_empty()
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }
}
