//! Master air waybill format validation.
//!
//! A MAWB is a 3-digit IATA carrier prefix, a dash, and an 8-digit serial.
//! Format validity and carrier identification are independent checks: a
//! well-formed number with an unlisted prefix is still valid.

use std::sync::LazyLock;

use acm_catalog::carrier_for_prefix;
use acm_model::WaybillRecord;
use regex::Regex;

/// Carrier name reported when the prefix is not in the IATA table.
pub const UNKNOWN_CARRIER: &str = "Unknown Carrier";

static WAYBILL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})-(\d{8})$").expect("invalid waybill regex"));

/// Structurally validate one candidate master-waybill value.
///
/// Trims surrounding whitespace, then requires the exact `NNN-NNNNNNNN`
/// shape. Never fails: a non-matching value yields `valid = false` with
/// every derived field `None`.
pub fn validate_waybill(raw: &str) -> WaybillRecord {
    let trimmed = raw.trim();
    let Some(captures) = WAYBILL_SHAPE.captures(trimmed) else {
        return WaybillRecord::invalid(raw);
    };
    let prefix = &captures[1];
    let serial = &captures[2];
    let carrier = carrier_for_prefix(prefix).unwrap_or(UNKNOWN_CARRIER);
    WaybillRecord {
        raw: raw.to_string(),
        valid: true,
        normalized: Some(format!("{prefix}-{serial}")),
        carrier_prefix: Some(prefix.to_string()),
        carrier_name: Some(carrier.to_string()),
        serial_check_ok: Some(serial_check_digit_ok(serial)),
    }
}

/// IATA mod-7 rule: the serial's eighth digit is the first seven mod 7.
///
/// Recorded for reporting only; plenty of real-world house systems emit
/// serials that ignore the rule, so it never gates validity.
fn serial_check_digit_ok(serial: &str) -> bool {
    let digits: Vec<u32> = serial.chars().filter_map(|ch| ch.to_digit(10)).collect();
    if digits.len() != 8 {
        return false;
    }
    let body = digits[..7].iter().fold(0u32, |acc, digit| acc * 10 + digit);
    body % 7 == digits[7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_follows_the_mod_seven_rule() {
        // 1234567 % 7 == 5
        assert!(serial_check_digit_ok("12345675"));
        assert!(!serial_check_digit_ok("12345674"));
        // 8765432 % 7 == 4
        assert!(serial_check_digit_ok("87654324"));
        assert!(!serial_check_digit_ok("87654321"));
    }
}
