use crate::error::{Result, SummaryError};

fn is_terminator(b: u8) -> bool { matches!(b, b'.' | b'?' | b'!' | b'\n') }

/// Split a document into trimmed, non-empty sentences in document order.
///
/// A sentence ends at `.`, `?`, `!` or a newline and keeps its terminator.
/// Whitespace after a terminator is skipped. A trailing fragment without a
/// terminator still counts as a sentence. Once `max_sentences` have been
/// collected the rest of the document is ignored.
pub fn split_sentences(text: &str, max_sentences: usize) -> Result<Vec<String>> {
    let bytes = text.as_bytes();
    let mut sentences: Vec<String> = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() && sentences.len() < max_sentences {
        if is_terminator(bytes[i]) {
            push_trimmed(&text[start..=i], &mut sentences)?;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() { i += 1; }
            start = i;
            continue;
        }
        i += 1;
    }
    if start < bytes.len() && sentences.len() < max_sentences {
        push_trimmed(&text[start..], &mut sentences)?;
    } else if start < bytes.len() && !text[start..].trim().is_empty() {
        tracing::warn!(max_sentences, dropped_bytes = bytes.len() - start, "sentence limit reached, rest of document ignored");
    }
    Ok(sentences)
}

fn push_trimmed(chunk: &str, sentences: &mut Vec<String>) -> Result<()> {
    let s = chunk.trim();
    if s.is_empty() { return Ok(()); }
    sentences.try_reserve(1).map_err(SummaryError::oom("sentence list"))?;
    sentences.push(s.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_terminators_and_trims() {
        let s = split_sentences("  Hello there.  How are you?\nFine!  tail", 16).unwrap();
        assert_eq!(s, vec!["Hello there.", "How are you?", "Fine!", "tail"]);
    }

    #[test]
    fn empty_chunks_are_discarded() {
        let s = split_sentences("...\n\n  \n!", 16).unwrap();
        assert_eq!(s, vec![".", ".", ".", "!"]);
        assert!(split_sentences(" \t\n ", 16).unwrap().is_empty());
        assert!(split_sentences("", 16).unwrap().is_empty());
    }

    #[test]
    fn cap_drops_extra_sentences() {
        let s = split_sentences("a. b. c. d", 2).unwrap();
        assert_eq!(s, vec!["a.", "b."]);
    }

    #[test]
    fn multibyte_text_splits_cleanly() {
        let s = split_sentences("Ça va? Très bien. 東京", 8).unwrap();
        assert_eq!(s, vec!["Ça va?", "Très bien.", "東京"]);
    }
}
