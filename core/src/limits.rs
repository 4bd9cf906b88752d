use serde::{Deserialize, Serialize};

pub const MAX_INPUT_BYTES: usize = 256 * 1024;
pub const MAX_SENTENCES: usize = 2048;
pub const MAX_TOKENS_PER_SENTENCE: usize = 2048;
pub const MAX_TOKEN_BYTES: usize = 64;
pub const MAX_VOCABULARY: usize = 65536;

/// Capacity bounds applied during one summarization call.
///
/// Every bound truncates silently: input past `max_input_bytes` is ignored,
/// sentences past `max_sentences` are dropped, long tokens are cut and words
/// arriving after the vocabulary is full are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_input_bytes: usize,
    pub max_sentences: usize,
    pub max_tokens_per_sentence: usize,
    pub max_token_bytes: usize,
    pub max_vocabulary: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: MAX_INPUT_BYTES,
            max_sentences: MAX_SENTENCES,
            max_tokens_per_sentence: MAX_TOKENS_PER_SENTENCE,
            max_token_bytes: MAX_TOKEN_BYTES,
            max_vocabulary: MAX_VOCABULARY,
        }
    }
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a character.
pub fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max { return s; }
    let mut end = max;
    while !s.is_char_boundary(end) { end -= 1; }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_at_boundary("hello", 10), "hello");
        assert_eq!(truncate_at_boundary("hello", 3), "hel");
        // 'é' is two bytes; cutting inside it backs off to before it
        assert_eq!(truncate_at_boundary("café", 4), "caf");
        assert_eq!(truncate_at_boundary("café", 5), "café");
    }

    #[test]
    fn limits_deserialize_with_defaults() {
        let l: Limits = serde_json::from_str(r#"{"max_sentences": 4}"#).unwrap();
        assert_eq!(l.max_sentences, 4);
        assert_eq!(l.max_vocabulary, MAX_VOCABULARY);
    }
}
