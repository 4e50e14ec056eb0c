//! Deterministic local essay checks.
//!
//! These run before any generator feedback and never call out: a plain
//! word count and a case-insensitive check for required vocabulary.

/// Minimum acceptable essay length, in words.
pub const MIN_ESSAY_WORDS: usize = 250;

/// Number of whitespace-delimited tokens in the text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Required terms whose lowercase form does not appear as a substring of
/// the lowercase essay text, in their original order.
pub fn missing_vocabulary(essay: &str, required: &[String]) -> Vec<String> {
    let haystack = essay.to_lowercase();
    required
        .iter()
        .filter(|word| !haystack.contains(&word.to_lowercase()))
        .cloned()
        .collect()
}
