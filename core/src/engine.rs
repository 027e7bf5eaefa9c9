use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::index::InvertedIndex;
use crate::ranking::TfIdf;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermImportance {
    pub term: String,
    pub score: f32,
}

/// Facade over [`InvertedIndex`] + [`TfIdf`]. Queries are tokenized with the
/// same tokenizer the index was built with.
#[derive(Default)]
pub struct SearchEngine {
    index: InvertedIndex,
    ranker: TfIdf,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        SearchEngine {
            index: InvertedIndex::with_tokenizer(tokenizer),
            ranker: TfIdf::new(),
        }
    }

    pub fn index_document(&mut self, document_id: &str, content: &str) {
        self.index.add_document(document_id, content);
    }

    pub fn remove_document(&mut self, document_id: &str) {
        self.index.remove_document(document_id);
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let query_terms = self.index.tokenizer().tokenize(query);
        let ranked = self.ranker.rank_documents(&self.index, &query_terms);
        tracing::debug!(query, hits = ranked.len(), "search complete");
        ranked
            .into_iter()
            .map(|(document_id, score)| SearchResult { document_id, score })
            .collect()
    }

    pub fn term_importance(&self, document_id: &str) -> Vec<TermImportance> {
        self.ranker
            .term_importance(&self.index, document_id)
            .into_iter()
            .map(|(term, score)| TermImportance { term, score })
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Direct access to index statistics (document frequency, raw text, ...).
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

/// [`SearchEngine`] behind `Arc<RwLock>`: writers exclusive, readers
/// concurrent. All four index maps mutate under one write lock, so readers
/// never observe a torn view.
#[derive(Clone, Default)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        SharedSearchEngine {
            inner: Arc::new(RwLock::new(SearchEngine::with_tokenizer(tokenizer))),
        }
    }

    pub fn index_document(&self, document_id: &str, content: &str) {
        self.inner.write().index_document(document_id, content);
    }

    pub fn remove_document(&self, document_id: &str) {
        self.inner.write().remove_document(document_id);
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.inner.read().search(query)
    }

    pub fn term_importance(&self, document_id: &str) -> Vec<TermImportance> {
        self.inner.read().term_importance(document_id)
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }
}
