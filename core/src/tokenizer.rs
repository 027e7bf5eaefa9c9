use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Splits text into an ordered sequence of terms, duplicates preserved.
///
/// Implementations may split, merge, or drop surface forms; the index never
/// assumes terms are substrings of the input. `Send + Sync` so an engine can
/// sit behind a shared lock.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on Unicode whitespace, nothing else. The engine default.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }
}

lazy_static! {
    static ref WORD: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from",
            "had", "has", "have", "he", "her", "his", "if", "in", "into", "is", "it",
            "its", "no", "not", "of", "on", "or", "she", "such", "that", "the",
            "their", "then", "there", "these", "they", "this", "to", "was", "were",
            "which", "will", "with",
        ];
        words.iter().copied().collect()
    };
}

/// Analyzing tokenizer: NFKC normalization, lowercase, word extraction,
/// stopword removal, and English Snowball stemming.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzingTokenizer;

impl Tokenizer for AnalyzingTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        WORD.find_iter(&normalized)
            .map(|m| m.as_str())
            .filter(|token| !STOPWORDS.contains(token))
            .map(|token| STEMMER.stem(token).to_string())
            .collect()
    }
}
