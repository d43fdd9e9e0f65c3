use std::collections::BTreeSet;

use acm_catalog::FieldCatalog;
use acm_model::FieldId;

#[test]
fn standard_catalog_covers_every_field() {
    let catalog = FieldCatalog::standard();
    for field in FieldId::ALL {
        let variants = catalog
            .variants_for(field)
            .unwrap_or_else(|| panic!("{field} missing from standard catalog"));
        assert!(!variants.is_empty(), "{field} has no variants");
    }
    assert_eq!(catalog.len(), FieldId::ALL.len());
}

#[test]
fn standard_catalog_validates() {
    let catalog = FieldCatalog::standard();
    FieldCatalog::new(catalog.fields().to_vec()).expect("standard catalog passes validation");
}

#[test]
fn standard_priorities_form_a_strict_order() {
    let ordered = FieldCatalog::standard().by_priority();
    let priorities: Vec<u32> = ordered.iter().map(|d| d.priority).collect();
    let unique: BTreeSet<u32> = priorities.iter().copied().collect();
    assert_eq!(unique.len(), priorities.len(), "priorities must be distinct");
    let mut sorted = priorities.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(priorities, sorted, "by_priority must be descending");
}

#[test]
fn assignment_order_pins_the_diagnostic_fields_first() {
    let ordered: Vec<FieldId> = FieldCatalog::standard()
        .by_priority()
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ordered[0], FieldId::MasterWaybill);
    assert_eq!(ordered[1], FieldId::TrackingCode);
    let tracking = ordered.iter().position(|f| *f == FieldId::TrackingCode);
    let description = ordered.iter().position(|f| *f == FieldId::Description);
    assert!(tracking < description);
}

#[test]
fn required_fields_are_the_customs_minimum() {
    let required: BTreeSet<FieldId> = FieldCatalog::standard().required_fields().collect();
    let expected: BTreeSet<FieldId> = [
        FieldId::TrackingCode,
        FieldId::ConsigneeName,
        FieldId::Description,
        FieldId::DeclaredValue,
        FieldId::Weight,
    ]
    .into_iter()
    .collect();
    assert_eq!(required, expected);
}

#[test]
fn variants_are_stored_in_comparable_form() {
    // The scorer folds headers to lowercase ASCII; the vocabulary must
    // already be there, or a variant could never match anything.
    for definition in FieldCatalog::standard().fields() {
        for variant in &definition.variants {
            assert!(
                variant
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
                "variant {variant:?} of {} is not normalized",
                definition.id
            );
        }
    }
}
