use std::collections::BTreeSet;

use acm_infer::{InferenceEngine, normalize, normalize_spaced, score_name};
use acm_model::{FieldDefinition, FieldId, RawColumn};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in ".*") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_spaced_is_idempotent(raw in ".*") {
        let once = normalize_spaced(&raw);
        prop_assert_eq!(normalize_spaced(&once), once);
    }

    #[test]
    fn a_header_that_is_its_own_variant_scores_one(name in "[a-z0-9][a-z0-9 ]{0,18}") {
        let definition =
            FieldDefinition::new(FieldId::City, 10, false, vec![name.clone()]);
        prop_assert_eq!(score_name(&name, &definition), 1.0);
    }

    #[test]
    fn inference_keeps_bounds_and_uniqueness(
        input in prop::collection::btree_map(
            "[A-Za-z0-9 _()-]{1,12}",
            prop::collection::vec("[A-Za-z0-9,$. -]{0,14}", 0..5),
            0..8,
        )
    ) {
        let columns: Vec<RawColumn> = input
            .iter()
            .map(|(header, sample)| RawColumn::with_sample(header.clone(), sample.clone()))
            .collect();
        let engine = InferenceEngine::standard();
        let mapping = engine.infer(&columns);

        for confidence in mapping.confidence.values() {
            prop_assert!((0.0..=1.0).contains(confidence), "confidence {confidence} out of bounds");
        }
        // No header claimed twice, no field assigned twice (field-side
        // uniqueness is structural: it's a map key).
        let mut seen = BTreeSet::new();
        for header in mapping.assignments.values() {
            prop_assert!(seen.insert(header.clone()), "header {header} assigned twice");
        }
        prop_assert_eq!(
            mapping.assigned_count() + mapping.unassigned_headers.len(),
            columns.len()
        );
        for alternates in mapping.alternates.values() {
            prop_assert!(alternates.len() <= 3);
        }
    }
}
