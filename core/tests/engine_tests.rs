use microsearch_core::{AnalyzingTokenizer, SearchEngine};

fn sample_engine() -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.index_document("doc1", "search engine returns ranked search results");
    engine.index_document("doc2", "search engine crawlers build an index");
    engine.index_document("doc3", "ranking algorithms order results by relevance");
    engine.index_document("doc4", "search systems rank results for relevance");
    engine
}

#[test]
fn search_prefers_documents_covering_more_query_terms() {
    let engine = sample_engine();
    let results = engine.search("search results");

    let ids: Vec<&str> = results.iter().map(|r| r.document_id.as_str()).collect();
    // doc1 and doc4 match both terms; doc2 and doc3 one each, tied on score,
    // so they fall back to id order.
    assert_eq!(ids, vec!["doc1", "doc4", "doc2", "doc3"]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn search_without_matches_is_empty_not_an_error() {
    let engine = sample_engine();
    assert!(engine.search("quantum entanglement").is_empty());

    let empty = SearchEngine::new();
    assert!(empty.search("anything at all").is_empty());
}

#[test]
fn reindexing_replaces_the_previous_content() {
    let mut engine = SearchEngine::new();
    engine.index_document("doc1", "rust memory safety");
    assert_eq!(engine.search("rust").len(), 1);

    engine.index_document("doc1", "garbage collected runtimes");
    assert!(engine.search("rust").is_empty());
    assert_eq!(engine.search("garbage").len(), 1);
    assert_eq!(engine.document_count(), 1);
}

#[test]
fn term_importance_surfaces_the_most_distinctive_terms() {
    let mut engine = SearchEngine::new();
    engine.index_document("doc1", "search engine returns ranked search results");
    engine.index_document("doc2", "search engine crawlers build an index");
    engine.index_document("doc3", "ranking algorithms order results by relevance");

    let importance = engine.term_importance("doc1");
    assert_eq!(importance[0].term, "search");
    // one entry per distinct term
    assert_eq!(importance.len(), 5);

    assert!(engine.term_importance("ghost").is_empty());
}

#[test]
fn document_count_tracks_adds_and_removes() {
    let mut engine = sample_engine();
    assert_eq!(engine.document_count(), 4);

    engine.remove_document("doc3");
    assert_eq!(engine.document_count(), 3);

    engine.remove_document("doc3");
    assert_eq!(engine.document_count(), 3);

    engine.index_document("doc5", "a new arrival");
    assert_eq!(engine.document_count(), 4);
}

#[test]
fn analyzing_tokenizer_matches_across_surface_forms() {
    let mut engine = SearchEngine::with_tokenizer(Box::new(AnalyzingTokenizer));
    engine.index_document("doc1", "Searching and Indexing Documents");
    engine.index_document("doc2", "Cooking with Cast Iron");

    let results = engine.search("searches indexes");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document_id, "doc1");
}

#[test]
fn index_statistics_are_reachable_through_the_engine() {
    let engine = sample_engine();

    assert_eq!(engine.index().document_frequency("search"), 3);
    assert_eq!(engine.index().term_frequency("doc1", "search"), 2);
    assert!(engine
        .index()
        .raw_text("doc2")
        .unwrap()
        .contains("crawlers"));
}
