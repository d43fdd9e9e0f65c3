//! Name similarity scoring against a field's variant list.
//!
//! Three-rung ladder per variant: exact normalized equality (1.0),
//! token-sequence containment (0.90), then normalized Levenshtein
//! similarity. A header's score for a field is the best rung any variant
//! reaches.

use acm_model::FieldDefinition;
use rapidfuzz::distance::levenshtein;

use crate::normalize::{normalize, normalize_spaced};

/// Score for one side's token sequence containing the other's.
const CONTAINMENT_SCORE: f32 = 0.90;
/// Edit similarity below this is noise between unrelated words, not
/// evidence; it contributes nothing.
const FUZZY_FLOOR: f32 = 0.50;

/// A name pre-normalized both ways, built once and compared many times.
#[derive(Debug, Clone)]
pub(crate) struct NameForm {
    folded: String,
    tokens: Vec<String>,
}

impl NameForm {
    pub(crate) fn new(raw: &str) -> Self {
        Self {
            folded: normalize(raw),
            tokens: normalize_spaced(raw)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Score a raw header against a field definition's variants.
pub fn score_name(header: &str, definition: &FieldDefinition) -> f32 {
    let header_form = NameForm::new(header);
    let variant_forms: Vec<NameForm> = definition
        .variants
        .iter()
        .map(|variant| NameForm::new(variant))
        .collect();
    score_name_forms(&header_form, &variant_forms)
}

/// Same scoring over pre-normalized forms; the engine builds the variant
/// forms once per field at construction.
pub(crate) fn score_name_forms(header: &NameForm, variants: &[NameForm]) -> f32 {
    let mut best = 0.0_f32;
    for variant in variants {
        if variant.is_empty() {
            continue;
        }
        if header.folded == variant.folded {
            // Exact match is the maximum for the whole field.
            return 1.0;
        }
        let score = if contains_tokens(&header.tokens, &variant.tokens)
            || contains_tokens(&variant.tokens, &header.tokens)
        {
            CONTAINMENT_SCORE
        } else {
            edit_similarity(&header.folded, &variant.folded)
        };
        if score > best {
            best = score;
        }
    }
    best
}

/// Contiguous token-sequence containment: `["consignee"]` inside
/// `["consignee", "name"]`. Whole tokens only, so short variants like `ci`
/// never hide inside unrelated words like `ciudad`.
fn contains_tokens(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Normalized Levenshtein similarity: `1 − distance / max(len, len)`,
/// floored to zero below [`FUZZY_FLOOR`] and when either side is empty.
fn edit_similarity(a: &str, b: &str) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let similarity = levenshtein::normalized_similarity(a.chars(), b.chars()) as f32;
    if similarity >= FUZZY_FLOOR { similarity } else { 0.0 }
}
