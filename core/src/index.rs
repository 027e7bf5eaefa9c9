use std::collections::{HashMap, HashSet};

use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Inverted index over caller-supplied document ids.
///
/// All per-document state lives in maps keyed by the same id set, mutated
/// together by `add_document`/`remove_document` only.
pub struct InvertedIndex {
    tokenizer: Box<dyn Tokenizer>,
    /// term -> ids of documents containing it; never holds an empty set
    postings: HashMap<String, HashSet<String>>,
    /// document id -> term -> occurrence count
    term_frequencies: HashMap<String, HashMap<String, usize>>,
    /// document id -> term sequence as produced by the tokenizer, duplicates kept
    term_sequences: HashMap<String, Vec<String>>,
    /// document id -> original text, kept for re-tokenization
    documents: HashMap<String, String>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(WhitespaceTokenizer))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        InvertedIndex {
            tokenizer,
            postings: HashMap::new(),
            term_frequencies: HashMap::new(),
            term_sequences: HashMap::new(),
            documents: HashMap::new(),
        }
    }

    /// The tokenizer this index was built with; queries must go through the
    /// same one.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Index a document, replacing any previous state for the same id.
    pub fn add_document(&mut self, document_id: &str, content: &str) {
        if self.documents.contains_key(document_id) {
            self.remove_document(document_id);
        }

        let terms = self.tokenizer.tokenize(content);

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for term in &terms {
            *frequencies.entry(term.clone()).or_insert(0) += 1;
        }
        for term in frequencies.keys() {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(document_id.to_string());
        }

        tracing::debug!(
            document_id,
            terms = terms.len(),
            distinct = frequencies.len(),
            "indexed document"
        );

        self.documents
            .insert(document_id.to_string(), content.to_string());
        self.term_sequences.insert(document_id.to_string(), terms);
        self.term_frequencies
            .insert(document_id.to_string(), frequencies);
    }

    /// Remove a document. Unknown ids are a no-op.
    pub fn remove_document(&mut self, document_id: &str) {
        let frequencies = match self.term_frequencies.remove(document_id) {
            Some(frequencies) => frequencies,
            None => return,
        };

        // Only the terms that were in this document are touched.
        for term in frequencies.keys() {
            if let Some(ids) = self.postings.get_mut(term) {
                ids.remove(document_id);
                if ids.is_empty() {
                    self.postings.remove(term);
                }
            }
        }

        self.term_sequences.remove(document_id);
        self.documents.remove(document_id);
        tracing::debug!(document_id, "removed document");
    }

    /// Ids of documents containing `term`, order-irrelevant. Defensive copy.
    pub fn document_ids(&self, term: &str) -> Vec<String> {
        self.postings
            .get(term)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Occurrence count of `term` in `document_id`; 0 when either is absent.
    pub fn term_frequency(&self, document_id: &str, term: &str) -> usize {
        self.term_frequencies
            .get(document_id)
            .and_then(|frequencies| frequencies.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// The ordered, duplicate-preserving term sequence recorded at index time.
    pub fn terms_in_document(&self, document_id: &str) -> &[String] {
        self.term_sequences
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_document(&self, document_id: &str) -> bool {
        self.documents.contains_key(document_id)
    }

    /// Original text as supplied to `add_document`.
    pub fn raw_text(&self, document_id: &str) -> Option<&str> {
        self.documents.get(document_id).map(String::as_str)
    }

    pub fn document_count(&self) -> usize {
        self.term_frequencies.len()
    }

    /// Number of documents containing `term`; 0 when unknown.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map(HashSet::len).unwrap_or(0)
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_a_single_document() {
        let mut index = InvertedIndex::new();
        index.add_document("doc1", "rust search engine");

        assert_eq!(index.document_count(), 1);
        assert_eq!(index.document_ids("rust"), vec!["doc1".to_string()]);
        assert_eq!(index.term_frequency("doc1", "engine"), 1);
        assert!(index.document_ids("missing").is_empty());
    }

    #[test]
    fn overwrite_replaces_previous_terms() {
        let mut index = InvertedIndex::new();
        index.add_document("doc1", "rust search");
        index.add_document("doc1", "python indexing");

        assert_eq!(index.document_count(), 1);
        assert!(index.document_ids("rust").is_empty());
        assert!(index.document_ids("search").is_empty());
        assert_eq!(index.document_ids("python"), vec!["doc1".to_string()]);
        assert_eq!(index.raw_text("doc1"), Some("python indexing"));
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut index = InvertedIndex::new();
        index.add_document("doc1", "rust");
        index.remove_document("ghost");

        assert_eq!(index.document_count(), 1);
        assert_eq!(index.document_frequency("rust"), 1);
    }

    #[test]
    fn empty_content_keeps_document_present() {
        let mut index = InvertedIndex::new();
        index.add_document("doc1", "");

        assert_eq!(index.document_count(), 1);
        assert!(index.contains_document("doc1"));
        assert!(index.terms_in_document("doc1").is_empty());

        index.remove_document("doc1");
        assert_eq!(index.document_count(), 0);
    }

    #[test]
    fn removal_prunes_empty_postings() {
        let mut index = InvertedIndex::new();
        index.add_document("doc1", "shared unique1");
        index.add_document("doc2", "shared unique2");

        index.remove_document("doc1");

        assert_eq!(index.document_frequency("unique1"), 0);
        assert_eq!(index.document_frequency("shared"), 1);
        assert_eq!(index.document_ids("shared"), vec!["doc2".to_string()]);
    }
}
