//! Order-preserving deduplication of sequences.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

/// Remove repeated values, keeping the first occurrence of each.
///
/// Each candidate is checked against the values already kept, so this is
/// quadratic in the number of distinct values. For floats use
/// [`remove_duplicate_numbers`], which also treats `NaN` as equal to itself.
pub fn remove_duplicates<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    remove_duplicates_by(values, |a, b| a == b)
}

/// Remove repeated values under a caller-supplied equality.
pub fn remove_duplicates_by<T, F>(values: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let unique = values.iter().fold(Vec::new(), |mut kept: Vec<T>, value| {
        if !kept.iter().any(|k| eq(k, value)) {
            kept.push(value.clone());
        }
        kept
    });

    debug!(
        input_len = values.len(),
        unique = unique.len(),
        "Removed duplicates"
    );
    unique
}

/// Set-backed variant of [`remove_duplicates`] with the same output.
pub fn remove_duplicates_hashed<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    remove_duplicates_hashed_by(values, |value| value.clone())
}

fn remove_duplicates_hashed_by<T, K, F>(values: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(values.len());
    let unique: Vec<T> = values
        .iter()
        .filter(|value| seen.insert(key(*value)))
        .cloned()
        .collect();

    debug!(
        input_len = values.len(),
        unique = unique.len(),
        "Removed duplicates (hashed)"
    );
    unique
}

/// Number equality where `0.0` equals `-0.0` and every `NaN` equals every
/// other `NaN`.
pub fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Hash key consistent with [`same_value_zero`].
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Deduplicate numbers under [`same_value_zero`], keeping first occurrences.
pub fn remove_duplicate_numbers(values: &[f64]) -> Vec<f64> {
    remove_duplicates_by(values, |a, b| same_value_zero(*a, *b))
}

/// Set-backed variant of [`remove_duplicate_numbers`] with the same output.
pub fn remove_duplicate_numbers_hashed(values: &[f64]) -> Vec<f64> {
    remove_duplicates_hashed_by(values, |value| canonical_bits(*value))
}
