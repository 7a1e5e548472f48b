//! Property tests for field-name normalization.

use dprof_core::normalize_field_name;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalization_is_idempotent(header in ".{0,40}") {
        let once = normalize_field_name(&header);
        prop_assert_eq!(normalize_field_name(&once), once.clone());
    }

    #[test]
    fn normalized_names_use_a_restricted_alphabet(header in ".{0,40}") {
        let normalized = normalize_field_name(&header);
        prop_assert!(normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!normalized.starts_with('_'));
        prop_assert!(!normalized.ends_with('_'));
        prop_assert!(!normalized.contains("__"));
    }
}
