use crate::error::{Result, SummaryError};
use crate::index::SentenceIndex;

/// Smoothed inverse document frequency per vocabulary entry: `ln(N / (1 + df))`.
///
/// Words present in every sentence get a small negative weight.
pub fn compute_idf(index: &SentenceIndex) -> Result<Vec<f64>> {
    let n = index.num_sentences() as f64;
    let entries = index.vocabulary().entries();
    let mut idf: Vec<f64> = Vec::new();
    idf.try_reserve_exact(entries.len()).map_err(SummaryError::oom("idf table"))?;
    idf.extend(entries.iter().map(|e| (n / (1.0 + e.document_frequency as f64)).ln()));
    Ok(idf)
}

/// Sum of `count * idf` over each sentence's term vector.
pub fn score_sentences(index: &SentenceIndex, idf: &[f64]) -> Result<Vec<f64>> {
    let mut scores: Vec<f64> = Vec::new();
    scores.try_reserve_exact(index.num_sentences()).map_err(SummaryError::oom("sentence scores"))?;
    for terms in index.term_vectors() {
        let score = terms.iter().fold(0.0, |acc, &(tid, tf)| acc + tf as f64 * idf[tid as usize]);
        scores.push(score);
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::Limits;

    fn index_of(s: &[&str]) -> SentenceIndex {
        SentenceIndex::build(s.iter().map(|s| s.to_string()).collect(), &Limits::default()).unwrap()
    }

    #[test]
    fn idf_uses_plus_one_smoothing() {
        let idx = index_of(&["The cat sat.", "The cat slept.", "A dog barked loudly outside."]);
        let idf = compute_idf(&idx).unwrap();
        let the = idx.vocabulary().lookup("the").unwrap() as usize;
        let dog = idx.vocabulary().lookup("dog").unwrap() as usize;
        assert!(idf[the].abs() < 1e-12);
        assert!((idf[dog] - 1.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn scores_weight_by_term_count() {
        let idx = index_of(&["rare rare.", "common x.", "common y.", "..."]);
        let idf = compute_idf(&idx).unwrap();
        let scores = score_sentences(&idx, &idf).unwrap();
        let rare = idf[idx.vocabulary().lookup("rare").unwrap() as usize];
        assert!((scores[0] - 2.0 * rare).abs() < 1e-12);
        assert_eq!(scores[3], 0.0);
    }
}
