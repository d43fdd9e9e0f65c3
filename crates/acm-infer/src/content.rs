//! Content classification: shape heuristics over sampled cell values.
//!
//! Each field with a reliable value shape gets a predicate; the score is the
//! fraction of non-blank sampled values satisfying it. Fields with no
//! reliable shape (city, province, free-text codes) abstain rather than
//! guess.

use std::sync::LazyLock;

use acm_model::FieldId;
use regex::Regex;

/// Master air waybill: 3-digit IATA prefix, dash, 8-digit serial.
static MASTER_WAYBILL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{8}$").expect("invalid master waybill regex"));

/// House waybill / courier tracking code: 8-30 alphanumerics.
static HOUSE_CODE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9]{8,30}$").expect("invalid house code regex"));

/// Fraction of non-blank sampled values matching the field's shape.
///
/// Returns 0.0 when the sample is empty or the field abstains: absence of
/// evidence, not evidence of absence.
pub fn score_content(sample: &[String], field: FieldId) -> f32 {
    content_evidence(sample, field).unwrap_or(0.0)
}

/// Like [`score_content`], but distinguishes "no evidence" (`None`: blank
/// sample, or a field with no shape predicate) from a measured fraction.
/// The engine only blends content into the final score when evidence
/// actually exists.
pub(crate) fn content_evidence(sample: &[String], field: FieldId) -> Option<f32> {
    let predicate = shape_predicate(field)?;
    let values: Vec<&str> = sample
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        return None;
    }
    let hits = values.iter().filter(|value| predicate(value)).count();
    Some(hits as f32 / values.len() as f32)
}

/// Fields whose shape is precise enough to claim a header on content alone
/// (the safety net for absent or generic headers like `Col1`).
pub(crate) fn is_decisive(field: FieldId) -> bool {
    matches!(field, FieldId::TrackingCode | FieldId::MasterWaybill)
}

fn shape_predicate(field: FieldId) -> Option<fn(&str) -> bool> {
    match field {
        FieldId::TrackingCode | FieldId::MasterWaybill => Some(looks_like_waybill_code),
        FieldId::Weight | FieldId::DeclaredValue => Some(is_amount),
        FieldId::Description | FieldId::Address => Some(is_long_text),
        FieldId::ConsigneeName => Some(is_person_name),
        _ => None,
    }
}

fn looks_like_waybill_code(value: &str) -> bool {
    MASTER_WAYBILL_SHAPE.is_match(value) || HOUSE_CODE_SHAPE.is_match(value)
}

fn is_amount(value: &str) -> bool {
    parse_amount(value).is_some()
}

fn is_long_text(value: &str) -> bool {
    value.chars().count() > 10
}

fn is_person_name(value: &str) -> bool {
    value.chars().count() >= 5 && value.chars().any(char::is_alphabetic)
}

/// Parse a declared-value or weight cell as a non-negative number.
///
/// Tolerates currency symbols, thousands separators, and recognized unit
/// suffixes (`$1,234.50`, `12.5 kg`, `USD 100`, `10kg`). Arbitrary
/// alphanumeric junk (`xk1`) does not parse.
fn parse_amount(raw: &str) -> Option<f64> {
    const UNIT_TOKENS: &[&str] = &[
        "usd", "us", "eur", "kg", "kgs", "lb", "lbs", "g", "oz", "cbm", "m3",
    ];
    let cleaned: String = raw
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|ch| if matches!(ch, '$' | '€' | '£') { ' ' } else { ch })
        .filter(|ch| *ch != ',')
        .collect();

    let mut number: Option<f64> = None;
    for token in cleaned.split_whitespace() {
        let numeric = token.trim_end_matches(|ch: char| ch.is_ascii_alphabetic());
        let suffix = &token[numeric.len()..];
        if numeric.is_empty() {
            // A bare unit word is fine; any other bare word is not a number.
            if UNIT_TOKENS.contains(&token) {
                continue;
            }
            return None;
        }
        if !suffix.is_empty() && !UNIT_TOKENS.contains(&suffix) {
            return None;
        }
        if number.is_some() {
            return None;
        }
        number = Some(numeric.parse().ok()?);
    }
    number.filter(|value| *value >= 0.0 && value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn waybill_shapes_match_master_and_house_codes() {
        let values = sample(&["230-87654321", "GHX83720091KD", "AB-1234"]);
        let score = score_content(&values, FieldId::MasterWaybill);
        assert!((score - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(score_content(&values, FieldId::TrackingCode), score);
    }

    #[test]
    fn amounts_tolerate_currency_and_units() {
        let values = sample(&["$1,234.50", "12.5 kg", "USD 100", "10kg"]);
        assert_eq!(score_content(&values, FieldId::DeclaredValue), 1.0);
        assert_eq!(score_content(&values, FieldId::Weight), 1.0);
    }

    #[test]
    fn junk_is_not_an_amount() {
        for value in ["xk1", "n/a", "-5", "230-87654321", "two", "1 2"] {
            let values = sample(&[value]);
            assert_eq!(
                score_content(&values, FieldId::DeclaredValue),
                0.0,
                "{value:?} must not parse as an amount"
            );
        }
    }

    #[test]
    fn text_length_heuristics() {
        let long = sample(&["Av. Amazonas N34-451 y Juan Pablo Sanz"]);
        assert_eq!(score_content(&long, FieldId::Address), 1.0);
        assert_eq!(score_content(&long, FieldId::Description), 1.0);
        let short = sample(&["caja"]);
        assert_eq!(score_content(&short, FieldId::Description), 0.0);

        let names = sample(&["Maria Lopez", "1234"]);
        assert_eq!(score_content(&names, FieldId::ConsigneeName), 0.5);
    }

    #[test]
    fn fields_without_a_shape_abstain() {
        let values = sample(&["Quito", "Guayaquil"]);
        assert_eq!(score_content(&values, FieldId::City), 0.0);
        assert_eq!(content_evidence(&values, FieldId::City), None);
    }

    #[test]
    fn blank_samples_are_no_evidence() {
        assert_eq!(score_content(&[], FieldId::Weight), 0.0);
        let blanks = sample(&["", "  "]);
        assert_eq!(content_evidence(&blanks, FieldId::Weight), None);
        assert_eq!(score_content(&blanks, FieldId::Weight), 0.0);
    }
}
