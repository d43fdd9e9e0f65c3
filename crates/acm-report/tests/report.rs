use acm_infer::InferenceEngine;
use acm_model::{FieldId, RawColumn, SchemaMapping};
use acm_report::{MappingIssue, Severity, build_report};

#[test]
fn clean_mapping_produces_no_issues() {
    let columns = vec![
        RawColumn::new("Tracking Number"),
        RawColumn::new("Consignee Name"),
        RawColumn::new("Descripcion"),
        RawColumn::new("Valor Declarado"),
        RawColumn::new("Peso KG"),
    ];
    let mapping = InferenceEngine::standard().infer(&columns);
    let report = build_report(&columns, mapping);

    assert!(report.issues.is_empty(), "unexpected: {:?}", report.issues);
    assert!(!report.has_errors());
    assert_eq!(
        report.summary(),
        "5 field(s) assigned, 0 column(s) unassigned, 0 error(s), 0 warning(s)"
    );
}

#[test]
fn unmatched_required_fields_are_errors() {
    let columns = vec![RawColumn::new("Ciudad")];
    let mapping = InferenceEngine::standard().infer(&columns);
    let report = build_report(&columns, mapping);

    assert_eq!(report.error_count(), 5);
    assert!(report.has_errors());
    assert!(report.issues.iter().any(|issue| matches!(
        issue,
        MappingIssue::RequiredUnmatched {
            field: FieldId::TrackingCode
        }
    )));
}

#[test]
fn low_confidence_assignments_are_flagged() {
    let mut mapping = SchemaMapping::default();
    mapping
        .assignments
        .insert(FieldId::Weight, "Wgt".to_string());
    mapping.confidence.insert(FieldId::Weight, 0.60);
    let report = build_report(&[RawColumn::new("Wgt")], mapping);

    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.severity(), Severity::Warning);
    assert!(issue.message().contains("low confidence 60%"));
}

#[test]
fn unassigned_and_duplicate_headers_warn() {
    let columns = vec![
        RawColumn::new("Peso"),
        RawColumn::new("Peso"),
        RawColumn::new("Zzz999"),
    ];
    let mapping = InferenceEngine::standard().infer(&columns);
    let report = build_report(&columns, mapping);

    assert!(report.issues.iter().any(|issue| matches!(
        issue,
        MappingIssue::DuplicateHeader { count: 2, .. }
    )));
    assert!(
        report
            .issues
            .iter()
            .any(|issue| matches!(issue, MappingIssue::UnassignedColumns { .. }))
    );
}

#[test]
fn assigned_waybill_column_with_no_valid_values_warns() {
    let columns = vec![RawColumn::with_sample(
        "MAWB",
        ["not a waybill", "also junk"],
    )];
    let mapping = InferenceEngine::standard().infer(&columns);
    assert_eq!(mapping.header_for(FieldId::MasterWaybill), Some("MAWB"));

    let report = build_report(&columns, mapping);
    assert!(report.issues.iter().any(|issue| matches!(
        issue,
        MappingIssue::WaybillSamplesInvalid {
            checked: 2,
            matched: 0,
            ..
        }
    )));
}

#[test]
fn waybill_cross_check_stays_quiet_when_values_validate() {
    let columns = vec![RawColumn::with_sample("MAWB", ["230-87654321"])];
    let mapping = InferenceEngine::standard().infer(&columns);
    let report = build_report(&columns, mapping);
    assert!(
        !report
            .issues
            .iter()
            .any(|issue| matches!(issue, MappingIssue::WaybillSamplesInvalid { .. }))
    );
}

#[test]
fn report_serializes_for_the_ui_layer() {
    let columns = vec![RawColumn::new("Guia")];
    let mapping = InferenceEngine::standard().infer(&columns);
    let report = build_report(&columns, mapping);

    let json = serde_json::to_string(&report).expect("serialize report");
    assert!(json.contains("TRACKING_CODE"));
    let round: acm_report::MappingReport =
        serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round.mapping.header_for(FieldId::TrackingCode), Some("Guia"));
}
