use crate::error::{Result, SummaryError};
use crate::index::SentenceIndex;
use crate::limits::{truncate_at_boundary, Limits};
use crate::scoring::{compute_idf, score_sentences};
use crate::segmenter::split_sentences;
use crate::select::{depth_to_k, select_top_k};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

/// An extractive summary. Empty when the input had no sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Selected sentences in document order.
    pub sentences: Vec<String>,
    /// Position of each selected sentence in the segmented document.
    pub positions: Vec<usize>,
    pub scores: Vec<f64>,
    /// Sentences found in the document before selection.
    pub sentence_count: usize,
    pub vocabulary_size: usize,
    pub depth: i64,
    /// Processing time, present only when timing was requested.
    pub elapsed: Option<Duration>,
}

impl Summary {
    fn empty(depth: i64, elapsed: Option<Duration>) -> Self {
        Self { sentences: Vec::new(), positions: Vec::new(), scores: Vec::new(), sentence_count: 0, vocabulary_size: 0, depth, elapsed }
    }

    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }
    pub fn len(&self) -> usize { self.sentences.len() }
}

#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    limits: Limits,
    timing: bool,
}

impl Summarizer {
    pub fn new() -> Self { Self::default() }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_timing(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }

    pub fn limits(&self) -> &Limits { &self.limits }

    pub fn summarize_file<P: AsRef<Path>>(&self, path: P, depth: i64) -> Result<Summary> {
        let text = load_document(path.as_ref(), self.limits.max_input_bytes)?;
        self.run(&text, depth)
    }

    /// Summarize in-memory text. Text past `max_input_bytes` is ignored, as with files.
    pub fn summarize_text(&self, text: &str, depth: i64) -> Result<Summary> {
        let text = truncate_at_boundary(text, self.limits.max_input_bytes);
        self.run(text, depth)
    }

    fn run(&self, text: &str, depth: i64) -> Result<Summary> {
        let start = self.timing.then(Instant::now);

        let sentences = split_sentences(text, self.limits.max_sentences)?;
        if sentences.is_empty() {
            tracing::debug!("no sentences in input");
            return Ok(Summary::empty(depth, start.map(|s| s.elapsed())));
        }

        let index = SentenceIndex::build(sentences, &self.limits)?;
        let idf = compute_idf(&index)?;
        let scores = score_sentences(&index, &idf)?;
        let k = depth_to_k(depth).min(index.num_sentences());
        let positions = select_top_k(&scores, k);
        tracing::debug!(depth, k, sentences = index.num_sentences(), "selected sentences");

        let elapsed = start.map(|s| s.elapsed());
        let sentence_count = index.num_sentences();
        let vocabulary_size = index.vocabulary().len();
        let selected_scores = positions.iter().map(|&i| scores[i]).collect();
        let mut all = index.into_sentences();
        let sentences = positions.iter().map(|&i| std::mem::take(&mut all[i])).collect();
        Ok(Summary { sentences, positions, scores: selected_scores, sentence_count, vocabulary_size, depth, elapsed })
    }
}

/// Summarize a file with default limits and return the selected sentences.
pub fn summarize<P: AsRef<Path>>(path: P, depth: i64) -> Result<Vec<String>> {
    Ok(Summarizer::new().summarize_file(path, depth)?.sentences)
}

/// Read at most `max_bytes` of a file as text.
///
/// When the limit cuts a multi-byte character in half, the partial character
/// is dropped. Any other invalid UTF-8, including an incomplete sequence at
/// the real end of the file, is replaced with U+FFFD.
pub fn load_document(path: &Path, max_bytes: usize) -> Result<String> {
    let file = File::open(path).map_err(SummaryError::io(path))?;
    let len = file.metadata().map(|m| m.len() as usize).unwrap_or(max_bytes);
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(len.min(max_bytes).saturating_add(1)).map_err(SummaryError::oom("input buffer"))?;
    // one byte past the limit tells a truncated file from one that fits exactly
    file.take((max_bytes as u64).saturating_add(1)).read_to_end(&mut buf).map_err(SummaryError::io(path))?;
    let truncated = buf.len() > max_bytes;
    if truncated {
        buf.truncate(max_bytes);
        tracing::warn!(path = %path.display(), len, max_bytes, "input truncated");
    }
    Ok(decode_lossy(buf, truncated))
}

fn decode_lossy(mut bytes: Vec<u8>, truncated: bool) -> String {
    if truncated {
        if let Err(e) = std::str::from_utf8(&bytes) {
            if e.error_len().is_none() { bytes.truncate(e.valid_up_to()); }
        }
    }
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_drops_split_character_only_when_truncated() {
        let mut bytes = "ok é".as_bytes().to_vec();
        bytes.pop();
        assert_eq!(decode_lossy(bytes.clone(), true), "ok ");
        assert_eq!(decode_lossy(bytes, false), "ok \u{fffd}");
        assert_eq!(decode_lossy(vec![b'a', 0xff, b'b'], true), "a\u{fffd}b");
    }

    #[test]
    fn timing_only_when_requested() {
        let s = Summarizer::new().summarize_text("One. Two.", 1).unwrap();
        assert!(s.elapsed.is_none());
        let s = Summarizer::new().with_timing(true).summarize_text("One. Two.", 1).unwrap();
        assert!(s.elapsed.is_some());
    }

    #[test]
    fn empty_summary_for_blank_text() {
        let s = Summarizer::new().summarize_text("  \n\t ", 3).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.sentence_count, 0);
        assert_eq!(s.depth, 3);
    }
}
