//! Extractive summarization: sentences are treated as documents, scored by
//! summed TF-IDF and the best ones are returned in their original order.

pub mod error;
pub mod index;
pub mod limits;
pub mod persist;
pub mod scoring;
pub mod segmenter;
pub mod select;
pub mod summarize;
pub mod tokenizer;

pub use error::{Result, SummaryError};
pub use index::{SentenceIndex, TermId, TermVector, VocabEntry, Vocabulary};
pub use limits::Limits;
pub use select::depth_to_k;
pub use summarize::{load_document, summarize, Summarizer, Summary};
