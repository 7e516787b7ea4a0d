//! Property tests: deduplication keeps exactly the first occurrence of each value.

use drills_core::{
    remove_duplicate_numbers, remove_duplicate_numbers_hashed, remove_duplicates,
    remove_duplicates_hashed, same_value_zero,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Small value range so duplicates are common.
fn arb_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-8i32..8, 0..40)
}

/// Floats drawn mostly from a few special values so ±0 and NaN collide often.
fn arb_numbers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            Just(0.0f64),
            Just(-0.0f64),
            Just(f64::NAN),
            Just(-f64::NAN),
            Just(1.5f64),
            (-4i32..4).prop_map(f64::from),
        ],
        0..30,
    )
}

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// No value appears twice in the output.
    #[test]
    fn output_has_no_repeats(input in arb_sequence()) {
        let out = remove_duplicates(&input);
        for (i, a) in out.iter().enumerate() {
            prop_assert!(!out[i + 1..].contains(a));
        }
    }

    /// Output is the input's values in order of first appearance.
    #[test]
    fn output_follows_first_occurrence_order(input in arb_sequence()) {
        let out = remove_duplicates(&input);
        let first_positions: Vec<usize> = out
            .iter()
            .map(|v| input.iter().position(|x| x == v).unwrap())
            .collect();
        prop_assert!(first_positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(input.iter().all(|v| out.contains(v)));
    }

    /// Deduplicating twice changes nothing.
    #[test]
    fn dedup_is_idempotent(input in arb_sequence()) {
        let once = remove_duplicates(&input);
        prop_assert_eq!(remove_duplicates(&once), once);
    }

    /// The set-backed variant is observably identical.
    #[test]
    fn hashed_variant_agrees(input in arb_sequence()) {
        prop_assert_eq!(remove_duplicates_hashed(&input), remove_duplicates(&input));
    }

    /// No two numbers in the output are equal under same-value-zero.
    #[test]
    fn numbers_have_no_repeats(input in arb_numbers()) {
        let out = remove_duplicate_numbers(&input);
        for (i, a) in out.iter().enumerate() {
            prop_assert!(!out[i + 1..].iter().any(|b| same_value_zero(*a, *b)));
        }
        prop_assert!(input.iter().all(|v| out.iter().any(|o| same_value_zero(*o, *v))));
    }

    /// Number dedup is idempotent, bit for bit.
    #[test]
    fn numbers_dedup_is_idempotent(input in arb_numbers()) {
        let once = remove_duplicate_numbers(&input);
        prop_assert_eq!(bits(&remove_duplicate_numbers(&once)), bits(&once));
    }

    /// The set-backed number dedup keeps exactly the same values, bit for bit.
    #[test]
    fn hashed_numbers_agree(input in arb_numbers()) {
        prop_assert_eq!(
            bits(&remove_duplicate_numbers_hashed(&input)),
            bits(&remove_duplicate_numbers(&input))
        );
    }
}
