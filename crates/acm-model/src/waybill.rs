use serde::{Deserialize, Serialize};

/// Result of structurally validating one candidate master-waybill value.
///
/// Format validity and carrier identification are independent: an
/// unrecognized IATA prefix still yields `valid = true`, with the carrier
/// name reported as unknown by the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaybillRecord {
    /// The input value, untouched.
    pub raw: String,
    /// True when the value matches the `NNN-NNNNNNNN` master-waybill shape.
    pub valid: bool,
    /// Canonical `prefix-serial` form; `None` when invalid.
    pub normalized: Option<String>,
    /// 3-digit IATA carrier prefix; `None` when invalid.
    pub carrier_prefix: Option<String>,
    /// Resolved carrier name, or the unknown-carrier placeholder.
    pub carrier_name: Option<String>,
    /// IATA mod-7 check digit result for the serial. Recorded for
    /// reporting; never affects `valid`.
    pub serial_check_ok: Option<bool>,
}

impl WaybillRecord {
    /// Record for a value that does not match the waybill shape.
    pub fn invalid(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            valid: false,
            normalized: None,
            carrier_prefix: None,
            carrier_name: None,
            serial_check_ok: None,
        }
    }
}
