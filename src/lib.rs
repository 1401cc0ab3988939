/// This crate is a text relevance scoring engine built on a TF-IDF vectorizer.
pub mod scorer;

/// A searchable document
/// The unit of input for corpus-mode indexing: id, title, summary, content
/// and category, with absent text fields treated as empty strings.
pub use scorer::Document;

/// Tokenization profile
/// Minimum token length plus a stopword set. The two dashboard call sites
/// are reproduced by `TokenProfile::node_filter()` (length 3, small domain
/// stopword set) and `TokenProfile::corpus_search()` (length 1, classic
/// English stopwords). Profiles are deliberately separate configuration;
/// do not unify them.
pub use scorer::token::TokenProfile;

/// Tokenizer
/// Pure normalize-and-split: lowercase, strip non-word characters, apply
/// the profile filters. Empty input yields an empty vector.
pub use scorer::token::tokenize;

/// Term Frequency structure
/// Per-document term occurrence counts, the base data for TF calculation.
pub use scorer::token::TermFrequency;

/// Corpus statistics
/// Vocabulary, document frequency and IDF over a tokenized corpus.
/// Mode-agnostic: the corpus may be the full document set or exactly two
/// synthetic documents (pairwise mode).
pub use scorer::corpus::CorpusStats;

/// TF-IDF weighting engine trait and its default implementation
/// The engine turns a token sequence into a dense TF-IDF vector aligned to
/// the corpus vocabulary. The default engine performs textbook
/// `(count / len) * ln(N / df)` weighting and supports the following
/// parameter quantizations:
/// - f32
/// - f64
pub use scorer::tfidf::{DefaultTfidfEngine, TfidfEngine};

/// Corpus-mode index
/// Vocabulary + IDF + one TF-IDF vector per document, built once per corpus
/// snapshot and immutable afterwards. `IndexData` is the detachable
/// serializable form (CBOR helpers included); `IndexCache` memoizes the
/// build on a corpus fingerprint.
pub use scorer::index::{Index, IndexCache, IndexData};

/// Similarity primitives
/// Cosine similarity (clamped to [0, 1], zero-magnitude safe), raw
/// case-insensitive substring matching, and Jaccard overlap of token sets.
pub use scorer::compare::{cosine_similarity, exact_match, jaccard_overlap};

/// Composite ranking
/// `Index::rank` combines the three signals into one percentage score per
/// document (weights and result floor live in `RankWeights`) and returns
/// `Hits`, a sortable list of `ScoredResult`s.
pub use scorer::evaluate::scoring::{Hits, RankWeights, ScoredResult};

/// Range bucketizer
/// Classifies a whole-percentage score into a named bucket for filtering,
/// coloring and histogram counts. The default boundaries carry the
/// dashboard's literal gap at exactly 20%. `SizeScaling` holds the node
/// size formula constants.
pub use scorer::evaluate::range::{percent_of, RangeBoundaries, SimilarityRange, SizeScaling};

/// Pairwise similarity
/// The node-filter call shape: an ad-hoc two-document corpus per call, no
/// caching, with the preserved identical-input-scores-zero IDF consequence.
pub use scorer::pairwise::pairwise_similarity;
