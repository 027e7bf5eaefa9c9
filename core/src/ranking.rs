use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use crate::index::InvertedIndex;

/// Floor for tf and idf where they would otherwise be zero or undefined
/// (term absent from the document or the corpus, or the corpus is empty).
/// Keeps scores total and finite.
pub const MIN_WEIGHT: f32 = 1.0;

/// TF-IDF scoring and ranking over an [`InvertedIndex`]. Stateless; every
/// call takes the index it operates on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf;

impl TfIdf {
    pub fn new() -> Self {
        TfIdf
    }

    /// `tf(document, term) * idf(term)`.
    pub fn score(&self, index: &InvertedIndex, document_id: &str, term: &str) -> f32 {
        self.tf(index, document_id, term) * self.idf(index, term)
    }

    fn tf(&self, index: &InvertedIndex, document_id: &str, term: &str) -> f32 {
        let count = index.term_frequency(document_id, term);
        if count > 0 {
            count as f32
        } else {
            MIN_WEIGHT
        }
    }

    fn idf(&self, index: &InvertedIndex, term: &str) -> f32 {
        let total = index.document_count();
        let containing = index.document_frequency(term);
        if total == 0 || containing == 0 {
            return MIN_WEIGHT;
        }
        1.0 + (total as f32 / containing as f32).ln()
    }

    /// Rank every document containing at least one query term.
    ///
    /// Order: descending count of distinct query terms present, then
    /// descending summed score over all query terms, then ascending document
    /// id so repeated rankings are deterministic.
    pub fn rank_documents(
        &self,
        index: &InvertedIndex,
        query_terms: &[String],
    ) -> Vec<(String, f32)> {
        let mut seen = HashSet::new();
        let distinct_terms: Vec<&str> = query_terms
            .iter()
            .map(String::as_str)
            .filter(|term| seen.insert(*term))
            .collect();

        // BTreeSet fixes the candidate order before the stable sort below.
        let mut candidates = BTreeSet::new();
        for term in &distinct_terms {
            for id in index.document_ids(term) {
                candidates.insert(id);
            }
        }

        let mut ranked: Vec<(String, usize, f32)> = candidates
            .into_iter()
            .map(|id| {
                let coverage = distinct_terms
                    .iter()
                    .filter(|term| index.term_frequency(&id, term) > 0)
                    .count();
                let score = query_terms
                    .iter()
                    .map(|term| self.score(index, &id, term))
                    .sum();
                (id, coverage, score)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal))
        });

        ranked
            .into_iter()
            .map(|(id, _, score)| (id, score))
            .collect()
    }

    /// Score every distinct term of a document's vocabulary, most important
    /// first. Ties go to the higher raw term frequency, then to first
    /// occurrence in the document.
    pub fn term_importance(
        &self,
        index: &InvertedIndex,
        document_id: &str,
    ) -> Vec<(String, f32)> {
        let mut seen = HashSet::new();
        let mut scored: Vec<(String, f32, usize)> = index
            .terms_in_document(document_id)
            .iter()
            .filter(|term| seen.insert(term.as_str()))
            .map(|term| {
                (
                    term.clone(),
                    self.score(index, document_id, term),
                    index.term_frequency(document_id, term),
                )
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.2.cmp(&a.2))
        });

        scored
            .into_iter()
            .map(|(term, score, _)| (term, score))
            .collect()
    }
}
