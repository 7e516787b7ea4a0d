//! Property tests: word counting is case-insensitive and whole-token.

use drills_core::count_word_occurrences;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,6}"
}

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![arb_word(), Just("rust".to_string()), Just("RUST,".to_string())],
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Changing the case of the target never changes the count.
    #[test]
    fn count_ignores_target_case(sentence in arb_sentence(), word in arb_word()) {
        let base = count_word_occurrences(&sentence, &word);
        prop_assert_eq!(count_word_occurrences(&sentence, &word.to_uppercase()), base);
        prop_assert_eq!(count_word_occurrences(&sentence, &word.to_lowercase()), base);
    }

    /// Changing the case of the sentence never changes the count.
    #[test]
    fn count_ignores_sentence_case(sentence in arb_sentence(), word in arb_word()) {
        prop_assert_eq!(
            count_word_occurrences(&sentence.to_uppercase(), &word),
            count_word_occurrences(&sentence, &word)
        );
    }

    /// The count never exceeds the number of tokens.
    #[test]
    fn count_bounded_by_token_count(sentence in arb_sentence(), word in arb_word()) {
        let tokens = sentence.split_whitespace().count();
        prop_assert!(count_word_occurrences(&sentence, &word) <= tokens);
    }

    /// Appending the target as a whole token adds exactly one; appending it
    /// with trailing punctuation adds none.
    #[test]
    fn appended_token_counts_once(sentence in arb_sentence(), word in arb_word()) {
        let base = count_word_occurrences(&sentence, &word);
        let with_word = format!("{} {}", sentence, word);
        let with_comma = format!("{} {},", sentence, word);
        prop_assert_eq!(count_word_occurrences(&with_word, &word), base + 1);
        prop_assert_eq!(count_word_occurrences(&with_comma, &word), base);
    }
}
