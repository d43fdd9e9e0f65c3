//! IATA airline-prefix table for master air waybills.
//!
//! The first three digits of a MAWB are the carrier's IATA accounting
//! prefix. The table is read-only reference data; an absent prefix is not a
//! format error, the waybill validator reports the carrier as unknown.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Carrier prefixes seen in the manifests we ingest.
const CARRIER_PREFIXES: &[(&str, &str)] = &[
    ("001", "American Airlines Cargo"),
    ("006", "Delta Cargo"),
    ("014", "Air Canada Cargo"),
    ("016", "United Cargo"),
    ("020", "Lufthansa Cargo"),
    ("023", "FedEx Express"),
    ("027", "Alaska Air Cargo"),
    ("045", "LATAM Cargo"),
    ("047", "TAP Air Portugal Cargo"),
    ("057", "Air France Cargo"),
    ("074", "KLM Cargo"),
    ("075", "Iberia Cargo"),
    ("081", "Qantas Freight"),
    ("086", "Air New Zealand Cargo"),
    ("098", "Air India Cargo"),
    ("114", "El Al Cargo"),
    ("125", "British Airways World Cargo"),
    ("131", "Japan Airlines Cargo"),
    ("139", "Aeromexico Cargo"),
    ("160", "Cathay Pacific Cargo"),
    ("172", "Cargolux"),
    ("176", "Emirates SkyCargo"),
    ("180", "Korean Air Cargo"),
    ("205", "All Nippon Airways Cargo"),
    ("217", "Thai Cargo"),
    ("230", "Avianca Cargo"),
    ("235", "Turkish Cargo"),
    ("297", "China Airlines Cargo"),
    ("307", "Copa Airlines Cargo"),
    ("406", "UPS Airlines"),
    ("618", "Singapore Airlines Cargo"),
    ("784", "China Southern Cargo"),
    ("932", "Virgin Atlantic Cargo"),
    ("988", "Asiana Cargo"),
];

static PREFIX_INDEX: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| CARRIER_PREFIXES.iter().copied().collect());

/// Resolve a 3-digit IATA prefix to a carrier name.
pub fn carrier_for_prefix(prefix: &str) -> Option<&'static str> {
    PREFIX_INDEX.get(prefix).copied()
}

/// Number of prefixes in the table.
pub fn known_prefix_count() -> usize {
    PREFIX_INDEX.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_prefixes() {
        assert_eq!(carrier_for_prefix("230"), Some("Avianca Cargo"));
        assert_eq!(carrier_for_prefix("045"), Some("LATAM Cargo"));
        assert_eq!(carrier_for_prefix("999"), None);
    }

    #[test]
    fn prefixes_are_unique_three_digit_codes() {
        assert_eq!(known_prefix_count(), CARRIER_PREFIXES.len());
        for (prefix, name) in CARRIER_PREFIXES {
            assert_eq!(prefix.len(), 3);
            assert!(prefix.chars().all(|c| c.is_ascii_digit()));
            assert!(!name.is_empty());
        }
    }
}
