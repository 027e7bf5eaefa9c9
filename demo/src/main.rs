use anyhow::Result;
use clap::Parser;
use microsearch_core::{AnalyzingTokenizer, SearchEngine, WhitespaceTokenizer};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "microsearch-demo")]
#[command(about = "Index a sample corpus and run TF-IDF searches against it", long_about = None)]
struct Args {
    /// Query to run; a canned query set runs when omitted
    #[arg(long)]
    query: Option<String>,
    /// Tokenize with stemming and stopword removal instead of whitespace
    #[arg(long, default_value_t = false)]
    analyze: bool,
    /// Print search results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

struct SampleDoc {
    id: &'static str,
    title: &'static str,
    content: &'static str,
}

const SAMPLE_DOCS: &[SampleDoc] = &[
    SampleDoc {
        id: "doc1",
        title: "Search Engine Basics",
        content: "A search engine is an information retrieval system that helps users \
                  find relevant information quickly.",
    },
    SampleDoc {
        id: "doc2",
        title: "The Inverted Index",
        content: "An inverted index maps every term to the documents containing it and \
                  is the core data structure of a search engine.",
    },
    SampleDoc {
        id: "doc3",
        title: "TF-IDF Ranking",
        content: "TF-IDF multiplies term frequency by inverse document frequency to \
                  rank search results by term importance.",
    },
    SampleDoc {
        id: "doc4",
        title: "Search Engine Optimization",
        content: "Search engine optimization improves how visible a website is in \
                  search results.",
    },
    SampleDoc {
        id: "doc5",
        title: "A Short History of Search",
        content: "Early search engines used simple keyword matching while modern \
                  engines combine ranking algorithms and machine learning.",
    },
];

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut engine = if args.analyze {
        SearchEngine::with_tokenizer(Box::new(AnalyzingTokenizer))
    } else {
        SearchEngine::with_tokenizer(Box::new(WhitespaceTokenizer))
    };

    for doc in SAMPLE_DOCS {
        engine.index_document(doc.id, doc.content);
        tracing::info!(id = doc.id, title = doc.title, "indexed document");
    }
    tracing::info!(count = engine.document_count(), "sample corpus ready");

    let queries: Vec<String> = match &args.query {
        Some(query) => vec![query.clone()],
        None => ["search engine", "inverted index", "ranking algorithms"]
            .iter()
            .map(|q| q.to_string())
            .collect(),
    };

    for query in &queries {
        let results = engine.search(query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            continue;
        }
        println!("query: {query:?}");
        if results.is_empty() {
            println!("  no matches");
        }
        for (rank, hit) in results.iter().enumerate() {
            let title = SAMPLE_DOCS
                .iter()
                .find(|doc| doc.id == hit.document_id)
                .map(|doc| doc.title)
                .unwrap_or("unknown");
            println!("  {}. [{}] score {:.4}", rank + 1, title, hit.score);
        }
        println!();
    }

    println!("top terms in {:?}:", SAMPLE_DOCS[0].title);
    for entry in engine.term_importance("doc1").iter().take(5) {
        println!("  {:<14} {:.4}", entry.term, entry.score);
    }

    Ok(())
}
