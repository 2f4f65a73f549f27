//! Fixed attribute vocabulary
//!
//! Every exported player rating the scorer understands, in a stable order.
//! Normalized records store one value per entry of [`VOCABULARY`], indexed by
//! [`attribute_index`].

/// Lowest rating the game displays.
pub const MIN_RATING: f64 = 1.0;

/// Highest rating the game displays.
pub const MAX_RATING: f64 = 20.0;

/// Column codes of every 1-20 attribute, as they appear in export headers.
pub const VOCABULARY: &[&str] = &[
    // Technical
    "Cor", "Cro", "Dri", "Fin", "Fir", "Fre", "Hea", "Lon", "L Th", "Mar", "Pas", "Pen", "Tck",
    "Tec",
    // Mental
    "Agg", "Ant", "Bra", "Cmp", "Cnt", "Dec", "Det", "Fla", "Ldr", "OtB", "Pos", "Tea", "Vis",
    "Wor",
    // Physical
    "Acc", "Agi", "Bal", "Jum", "Nat", "Pac", "Sta", "Str",
    // Goalkeeping
    "Aer", "Cmd", "Com", "Ecc", "Han", "Kic", "1v1", "Pun", "Ref", "TRO", "Thr",
];

/// Position of an attribute code in [`VOCABULARY`].
///
/// Matching is exact first, then ASCII case-insensitive, since some exports
/// lowercase a handful of headers (`OTB`, `tro`).
pub fn attribute_index(code: &str) -> Option<usize> {
    let code = code.trim();
    VOCABULARY
        .iter()
        .position(|a| *a == code)
        .or_else(|| VOCABULARY.iter().position(|a| a.eq_ignore_ascii_case(code)))
}

/// Whether a header names a known attribute.
pub fn is_attribute(code: &str) -> bool {
    attribute_index(code).is_some()
}

/// Canonical spelling of an attribute header, if it is one.
pub fn canonical(code: &str) -> Option<&'static str> {
    attribute_index(code).map(|i| VOCABULARY[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_is_unique() {
        let unique: HashSet<_> = VOCABULARY.iter().collect();
        assert_eq!(unique.len(), VOCABULARY.len());
    }

    #[test]
    fn test_attribute_index() {
        assert_eq!(attribute_index("Cor"), Some(0));
        assert_eq!(canonical("otb"), Some("OtB"));
        assert_eq!(canonical(" 1v1 "), Some("1v1"));
        assert!(attribute_index("Name").is_none());
        assert!(!is_attribute("Age"));
    }
}
