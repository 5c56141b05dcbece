//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify normalization invariants across many random inputs.

use domain::value_objects::{CanonicalDate, CountryCode, RawDateToken};
use proptest::prelude::*;

fn normalize(raw: &str) -> Result<String, domain::DomainError> {
    CanonicalDate::normalize(&RawDateToken::new(raw)).map(|d| d.to_string())
}

// ============================================================================
// CanonicalDate Property Tests
// ============================================================================

mod canonical_date_tests {
    use super::*;

    proptest! {
        #[test]
        fn iso_tokens_normalize_to_themselves(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28
        ) {
            let iso = format!("{year:04}-{month:02}-{day:02}");
            prop_assert_eq!(normalize(&iso).unwrap(), iso);
        }

        #[test]
        fn slash_tokens_keep_day_and_month(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28
        ) {
            let raw = format!("{day:02}/{month:02}/{year:04}");
            let expected = format!("{year:04}-{month:02}-{day:02}");
            prop_assert_eq!(normalize(&raw).unwrap(), expected);
        }

        #[test]
        fn dash_tokens_keep_day_and_month(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28
        ) {
            let raw = format!("{day}-{month}-{year:04}");
            let expected = format!("{year:04}-{month:02}-{day:02}");
            prop_assert_eq!(normalize(&raw).unwrap(), expected);
        }

        #[test]
        fn month_above_twelve_never_normalizes(
            year in 1000i32..=9999,
            month in 13u32..=99,
            day in 13u32..=99
        ) {
            let raw = format!("{day}/{month}/{year:04}");
            prop_assert!(normalize(&raw).is_err());
        }

        #[test]
        fn canonical_year_matches_input(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28
        ) {
            let raw = format!("{day:02}-{month:02}-{year:04}");
            let date = CanonicalDate::normalize(&RawDateToken::new(raw)).unwrap();
            prop_assert_eq!(date.year(), year);
        }
    }
}

// ============================================================================
// CountryCode Property Tests
// ============================================================================

mod country_code_tests {
    use super::*;

    proptest! {
        #[test]
        fn two_letters_always_valid(code in "[a-zA-Z]{2}") {
            let parsed = CountryCode::new(&code).unwrap();
            prop_assert_eq!(parsed.as_str(), code.to_ascii_uppercase());
        }

        #[test]
        fn other_lengths_rejected(code in "[a-zA-Z]{3,8}") {
            prop_assert!(CountryCode::new(&code).is_err());
        }
    }
}
