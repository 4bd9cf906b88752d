use crate::error::{Result, SummaryError};
use crate::limits::Limits;
use crate::tokenizer::tokenize_with;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TermId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    /// Number of sentences containing the word at least once.
    pub document_frequency: u32,
    /// Occurrences across the whole document.
    pub term_frequency_total: u64,
}

/// Exact-match word table. Case folding happens in the tokenizer, not here.
#[derive(Debug)]
pub struct Vocabulary {
    dictionary: HashMap<String, TermId>,
    entries: Vec<VocabEntry>,
    max_entries: usize,
}

impl Vocabulary {
    pub fn new(max_entries: usize) -> Self {
        Self { dictionary: HashMap::new(), entries: Vec::new(), max_entries }
    }

    pub fn lookup(&self, word: &str) -> Option<TermId> { self.dictionary.get(word).copied() }

    /// Index of `word`, inserting a zeroed entry on first sight.
    ///
    /// Returns `Ok(None)` when the table is full; the caller skips the word.
    pub fn insert_or_get(&mut self, word: &str) -> Result<Option<TermId>> {
        if let Some(id) = self.lookup(word) { return Ok(Some(id)); }
        if self.entries.len() >= self.max_entries { return Ok(None); }
        self.entries.try_reserve(1).map_err(SummaryError::oom("vocabulary"))?;
        self.dictionary.try_reserve(1).map_err(SummaryError::oom("vocabulary"))?;
        let id = self.entries.len() as TermId;
        self.entries.push(VocabEntry { word: word.to_string(), document_frequency: 0, term_frequency_total: 0 });
        self.dictionary.insert(word.to_string(), id);
        Ok(Some(id))
    }

    pub fn get(&self, id: TermId) -> Option<&VocabEntry> { self.entries.get(id as usize) }
    pub fn entries(&self) -> &[VocabEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    fn entry_mut(&mut self, id: TermId) -> &mut VocabEntry { &mut self.entries[id as usize] }
}

/// Distinct words of one sentence with their in-sentence counts, in order of first occurrence.
pub type TermVector = Vec<(TermId, u32)>;

/// Sentences plus the vocabulary and term vectors built from them.
///
/// Only [`SentenceIndex::build`] produces one, so holding a value means every
/// sentence has been scanned and document frequencies are final.
#[derive(Debug)]
pub struct SentenceIndex {
    sentences: Vec<String>,
    vocabulary: Vocabulary,
    term_vectors: Vec<TermVector>,
}

impl SentenceIndex {
    pub fn build(sentences: Vec<String>, limits: &Limits) -> Result<Self> {
        let mut vocabulary = Vocabulary::new(limits.max_vocabulary);
        let mut term_vectors: Vec<TermVector> = Vec::new();
        term_vectors.try_reserve_exact(sentences.len()).map_err(SummaryError::oom("term vectors"))?;
        let mut skipped = 0usize;

        for sentence in &sentences {
            let tokens = tokenize_with(sentence, limits);
            let mut counts: TermVector = Vec::new();
            let mut slot_of: HashMap<TermId, usize> = HashMap::new();
            for token in tokens {
                let tid = match vocabulary.insert_or_get(&token)? {
                    Some(tid) => tid,
                    None => { skipped += 1; continue; }
                };
                vocabulary.entry_mut(tid).term_frequency_total += 1;
                match slot_of.get(&tid) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        counts.try_reserve(1).map_err(SummaryError::oom("term vectors"))?;
                        slot_of.insert(tid, counts.len());
                        counts.push((tid, 1));
                    }
                }
            }
            // df counts a sentence once per distinct word
            for &(tid, _) in &counts {
                vocabulary.entry_mut(tid).document_frequency += 1;
            }
            counts.shrink_to_fit();
            term_vectors.push(counts);
        }

        if skipped > 0 {
            tracing::warn!(skipped, max_vocabulary = limits.max_vocabulary, "vocabulary full, words skipped");
        }
        tracing::debug!(sentences = sentences.len(), vocabulary = vocabulary.len(), "built sentence index");
        Ok(Self { sentences, vocabulary, term_vectors })
    }

    pub fn num_sentences(&self) -> usize { self.sentences.len() }
    pub fn sentences(&self) -> &[String] { &self.sentences }
    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }
    pub fn term_vectors(&self) -> &[TermVector] { &self.term_vectors }
    pub fn into_sentences(self) -> Vec<String> { self.sentences }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(s: &[&str]) -> Vec<String> { s.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn insert_or_get_is_stable() {
        let mut v = Vocabulary::new(8);
        assert_eq!(v.insert_or_get("dog").unwrap(), Some(0));
        assert_eq!(v.insert_or_get("cat").unwrap(), Some(1));
        assert_eq!(v.insert_or_get("dog").unwrap(), Some(0));
        assert_eq!(v.lookup("cat"), Some(1));
        assert_eq!(v.lookup("Cat"), None);
        assert_eq!(v.get(0).unwrap().document_frequency, 0);
    }

    #[test]
    fn full_vocabulary_rejects_new_words() {
        let mut v = Vocabulary::new(1);
        assert_eq!(v.insert_or_get("a").unwrap(), Some(0));
        assert_eq!(v.insert_or_get("b").unwrap(), None);
        assert_eq!(v.insert_or_get("a").unwrap(), Some(0));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn df_counts_once_per_sentence() {
        let idx = SentenceIndex::build(owned(&["dog dog DOG.", "Dog cat.", "bird."]), &Limits::default()).unwrap();
        let dog = idx.vocabulary().lookup("dog").unwrap();
        let e = idx.vocabulary().get(dog).unwrap();
        assert_eq!(e.document_frequency, 2);
        assert_eq!(e.term_frequency_total, 4);
        assert_eq!(idx.term_vectors()[0], vec![(dog, 3)]);
        assert_eq!(idx.term_vectors()[1].len(), 2);
    }

    #[test]
    fn words_past_capacity_are_skipped_not_fatal() {
        let limits = Limits { max_vocabulary: 2, ..Limits::default() };
        let idx = SentenceIndex::build(owned(&["a b c a.", "c d b."]), &limits).unwrap();
        assert_eq!(idx.vocabulary().len(), 2);
        assert_eq!(idx.term_vectors()[0], vec![(0, 2), (1, 1)]);
        assert_eq!(idx.term_vectors()[1], vec![(1, 1)]);
    }

    #[test]
    fn sentence_without_tokens_has_empty_vector() {
        let idx = SentenceIndex::build(owned(&["...", "word."]), &Limits::default()).unwrap();
        assert!(idx.term_vectors()[0].is_empty());
        assert_eq!(idx.num_sentences(), 2);
    }
}
