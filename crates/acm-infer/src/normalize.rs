//! Header and value canonicalization.
//!
//! Manifest headers arrive as `Ship_To`, `ship-to`, `SHIP TO`, `Dirección`,
//! `direccion`... Both normalizers here are total (any input, including the
//! empty string) and idempotent.

/// Fold common Latin diacritics to their ASCII base letter.
///
/// Input is already lowercased char-by-char. The table covers the Spanish,
/// Portuguese, and French forms that actually show up in shipper
/// spreadsheets; anything else passes through untouched.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => ch,
    }
}

/// Strict normal form: lowercase, diacritics folded, everything outside
/// `[a-z0-9]` removed.
///
/// `Ship_To`, `ship-to` and `ship to` all normalize to `shipto`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect()
}

/// Word-boundary-preserving normal form: lowercase, diacritics folded,
/// non-alphanumeric runs collapsed to single spaces, camelCase humps split.
///
/// Used where token boundaries matter (substring containment tests):
/// `ShipToAddress` becomes `ship to address`.
pub fn normalize_spaced(raw: &str) -> String {
    let mut expanded = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if prev_lower && ch.is_uppercase() {
                expanded.push(' ');
            }
            prev_lower = ch.is_lowercase();
            for lower in ch.to_lowercase() {
                let folded = fold_diacritic(lower);
                // Lowercasing can emit combining marks (e.g. İ); those are
                // separators here, or the form would not be idempotent.
                if folded.is_alphanumeric() {
                    expanded.push(folded);
                } else {
                    expanded.push(' ');
                }
            }
        } else {
            expanded.push(' ');
            prev_lower = false;
        }
    }
    expanded.split_whitespace().collect::<Vec<_>>().join(" ")
}
