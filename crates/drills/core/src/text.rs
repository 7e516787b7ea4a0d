//! Whole-word counting.

use tracing::debug;

/// Count whitespace-delimited tokens of `sentence` equal to `word`,
/// ignoring case.
///
/// Tokens are compared whole, so punctuation stays attached: `"typescript,"`
/// is not a match for `"typescript"`.
///
/// An empty `word` always counts zero. This departs from a regex split on
/// `\s+`, which yields empty edge tokens and would count one for
/// `("", "")` and two for `(" a ", "")`.
pub fn count_word_occurrences(sentence: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let sentence = sentence.to_lowercase();
    let word = word.to_lowercase();
    let matches = sentence
        .split_whitespace()
        .filter(|token| *token == word)
        .count();

    debug!(word = %word, matches, "Counted word occurrences");
    matches
}
