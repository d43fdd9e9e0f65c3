//! Greedy, priority-ordered assignment of manifest columns to fields.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use acm_catalog::FieldCatalog;
use acm_model::{
    AlternateCandidate, CandidateMatch, FieldId, InferOptions, RawColumn, SchemaMapping,
};

use crate::content::{content_evidence, is_decisive};
use crate::score::{NameForm, score_name_forms};

/// Content fraction at which a decisive shape claims a header even below
/// the acceptance threshold.
const CONTENT_OVERRIDE_MIN: f32 = 0.80;
/// Runner-up candidates recorded per assigned field.
const ALTERNATE_LIMIT: usize = 3;

/// Engine mapping raw manifest columns onto semantic fields.
///
/// Holds only the immutable catalog (with variant forms pre-normalized at
/// construction) and the options; [`Self::infer`] is a pure function of its
/// argument, so one engine may serve any number of concurrent callers.
///
/// # Example
///
/// ```ignore
/// use acm_infer::InferenceEngine;
/// use acm_model::RawColumn;
///
/// let engine = InferenceEngine::standard();
/// let mapping = engine.infer(&[RawColumn::new("Tracking Number")]);
/// ```
pub struct InferenceEngine {
    catalog: FieldCatalog,
    options: InferOptions,
    variant_forms: BTreeMap<FieldId, Vec<NameForm>>,
}

struct Scored {
    name: f32,
    content: Option<f32>,
    final_score: f32,
}

impl InferenceEngine {
    /// Engine over a custom catalog.
    pub fn new(catalog: FieldCatalog, options: InferOptions) -> Self {
        let variant_forms = catalog
            .fields()
            .iter()
            .map(|definition| {
                let forms = definition.variants.iter().map(|v| NameForm::new(v)).collect();
                (definition.id, forms)
            })
            .collect();
        Self {
            catalog,
            options,
            variant_forms,
        }
    }

    /// Engine over the built-in catalog with default options.
    pub fn standard() -> Self {
        Self::new(FieldCatalog::standard().clone(), InferOptions::default())
    }

    /// Engine over the built-in catalog with custom options.
    pub fn with_options(options: InferOptions) -> Self {
        Self::new(FieldCatalog::standard().clone(), options)
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &InferOptions {
        &self.options
    }

    /// Score one (column, field) pair, exposing the full breakdown.
    ///
    /// Returns `None` if the field is not in this engine's catalog.
    pub fn score_pair(&self, column: &RawColumn, field: FieldId) -> Option<CandidateMatch> {
        let forms = self.variant_forms.get(&field)?;
        let header_form = NameForm::new(&column.header);
        let scored = self.score_forms(&header_form, self.truncated_sample(column), field, forms);
        Some(CandidateMatch {
            header: column.header.clone(),
            field,
            name_score: scored.name,
            content_score: scored.content.unwrap_or(0.0),
            final_score: scored.final_score,
        })
    }

    /// Map columns to fields.
    ///
    /// Greedy one-pass bipartite assignment: fields claim headers in
    /// descending catalog priority, each header at most once, each field at
    /// most once. Exact vocabulary hits are settled in a first pass so a
    /// higher-priority field's containment match cannot steal a header that
    /// *is* a lower-priority field's variant.
    ///
    /// Never fails on messy input: empty, duplicate, or unknown headers and
    /// blank samples simply end up unassigned.
    pub fn infer(&self, columns: &[RawColumn]) -> SchemaMapping {
        let fields = self.catalog.by_priority();
        let header_forms: Vec<NameForm> = columns
            .iter()
            .map(|column| NameForm::new(&column.header))
            .collect();

        // Score every pair up front; each cell is an independent pure
        // computation.
        let matrix: Vec<Vec<Scored>> = fields
            .iter()
            .map(|definition| {
                let forms = self
                    .variant_forms
                    .get(&definition.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                columns
                    .iter()
                    .enumerate()
                    .map(|(idx, column)| {
                        self.score_forms(
                            &header_forms[idx],
                            self.truncated_sample(column),
                            definition.id,
                            forms,
                        )
                    })
                    .collect()
            })
            .collect();

        let mut claimed = vec![false; columns.len()];
        let mut exact_winners: BTreeMap<FieldId, usize> = BTreeMap::new();

        // Pass 1: exact vocabulary matches, in priority order.
        for (field_idx, definition) in fields.iter().enumerate() {
            let mut best: Option<usize> = None;
            for (column_idx, scored) in matrix[field_idx].iter().enumerate() {
                if claimed[column_idx] || scored.name < 1.0 {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some(current) => scored.final_score > matrix[field_idx][current].final_score,
                };
                if better {
                    best = Some(column_idx);
                }
            }
            if let Some(column_idx) = best {
                claimed[column_idx] = true;
                exact_winners.insert(definition.id, column_idx);
                tracing::debug!(
                    field = %definition.id,
                    header = %columns[column_idx].header,
                    "claimed on exact vocabulary match"
                );
            }
        }

        // Pass 2: scored claims over the remaining pool, still in priority
        // order; this sequencing is what makes ties deterministic.
        let mut mapping = SchemaMapping::default();
        for (field_idx, definition) in fields.iter().enumerate() {
            let winner = match exact_winners.get(&definition.id) {
                Some(&column_idx) => Some(column_idx),
                None => {
                    let mut best: Option<usize> = None;
                    for (column_idx, scored) in matrix[field_idx].iter().enumerate() {
                        if claimed[column_idx] {
                            continue;
                        }
                        let better = match best {
                            None => true,
                            Some(current) => {
                                scored.final_score > matrix[field_idx][current].final_score
                            }
                        };
                        if better {
                            best = Some(column_idx);
                        }
                    }
                    let accepted = best.filter(|&column_idx| {
                        self.accepts(definition.id, &matrix[field_idx][column_idx])
                    });
                    if let Some(column_idx) = accepted {
                        claimed[column_idx] = true;
                        tracing::debug!(
                            field = %definition.id,
                            header = %columns[column_idx].header,
                            confidence = matrix[field_idx][column_idx].final_score,
                            "claimed on blended score"
                        );
                    }
                    accepted
                }
            };

            match winner {
                Some(column_idx) => {
                    let scored = &matrix[field_idx][column_idx];
                    mapping
                        .assignments
                        .insert(definition.id, columns[column_idx].header.clone());
                    mapping.confidence.insert(definition.id, scored.final_score);
                    let alternates = top_alternates(
                        &matrix[field_idx],
                        &claimed,
                        columns,
                        self.options.acceptance_threshold,
                    );
                    if !alternates.is_empty() {
                        mapping.alternates.insert(definition.id, alternates);
                    }
                }
                None if definition.required => {
                    tracing::warn!(field = %definition.id, "required field unmatched");
                    mapping.unmatched_required.insert(definition.id);
                }
                None => {}
            }
        }

        mapping.unassigned_headers = columns
            .iter()
            .zip(&claimed)
            .filter(|(_, was_claimed)| !**was_claimed)
            .map(|(column, _)| column.header.clone())
            .collect();
        mapping
    }

    fn truncated_sample<'a>(&self, column: &'a RawColumn) -> &'a [String] {
        let take = self.options.sample_size.min(column.sample.len());
        &column.sample[..take]
    }

    fn score_forms(
        &self,
        header: &NameForm,
        sample: &[String],
        field: FieldId,
        forms: &[NameForm],
    ) -> Scored {
        let name = score_name_forms(header, forms);
        let content = content_evidence(sample, field);
        // Content only enters the blend when evidence exists; a blank
        // sample or an abstaining field must not dilute name evidence.
        let final_score = match content {
            Some(fraction) => (self.options.name_weight * name
                + self.options.content_weight * fraction)
                .clamp(0.0, 1.0),
            None => name.clamp(0.0, 1.0),
        };
        Scored {
            name,
            content,
            final_score,
        }
    }

    fn accepts(&self, field: FieldId, scored: &Scored) -> bool {
        if scored.final_score >= self.options.acceptance_threshold {
            return true;
        }
        // The content safety net: an unambiguous waybill-shaped column is
        // claimed even under a useless header like "Col1".
        is_decisive(field)
            && scored
                .content
                .is_some_and(|fraction| fraction >= CONTENT_OVERRIDE_MIN)
    }
}

fn top_alternates(
    scores: &[Scored],
    claimed: &[bool],
    columns: &[RawColumn],
    threshold: f32,
) -> Vec<AlternateCandidate> {
    let mut ranked: Vec<(usize, f32)> = scores
        .iter()
        .enumerate()
        .filter(|(idx, scored)| !claimed[*idx] && scored.final_score >= threshold)
        .map(|(idx, scored)| (idx, scored.final_score))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(ALTERNATE_LIMIT);
    ranked
        .into_iter()
        .map(|(idx, score)| AlternateCandidate {
            header: columns[idx].header.clone(),
            score,
        })
        .collect()
}
