use crate::limits::{truncate_at_boundary, Limits};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{Alphabetic}\p{N}]+").expect("valid regex");
}

/// Tokenize a sentence with the default limits.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &Limits::default())
}

/// Split a sentence into lowercase alphanumeric runs after NFKC normalization.
///
/// Everything that is not a letter or digit separates tokens and is dropped.
/// Case folding happens per run; marks produced by folding (the dot of a
/// lowercased `İ`) are dropped so a run always stays one token.
/// At most `max_tokens_per_sentence` tokens are returned and each one is cut
/// to `max_token_bytes`.
pub fn tokenize_with(text: &str, limits: &Limits) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>();
    RE.find_iter(&normalized)
        .take(limits.max_tokens_per_sentence)
        .map(|m| fold_case(m.as_str()))
        .map(|t| truncate_at_boundary(&t, limits.max_token_bytes).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn fold_case(run: &str) -> String {
    run.to_lowercase().chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The Cat's 3 toys, (mostly) red!");
        assert_eq!(t, vec!["the", "cat", "s", "3", "toys", "mostly", "red"]);
    }

    #[test]
    fn long_tokens_are_cut_not_dropped() {
        let limits = Limits { max_token_bytes: 4, ..Limits::default() };
        assert_eq!(tokenize_with("abcdefgh xy", &limits), vec!["abcd", "xy"]);
    }

    #[test]
    fn case_folding_keeps_words_whole() {
        assert_eq!(tokenize("İstanbul"), vec!["istanbul"]);
        // NFKC splits the "ǅ" digraph into "Dž" before folding
        assert_eq!(tokenize("Straße ǅemal"), vec!["straße", "d\u{17e}emal"]);
        assert_eq!(tokenize("ΣΊΣΥΦΟΣ").len(), 1);
    }
}
