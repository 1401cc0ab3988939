use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use indexmap::IndexSet;
use num::Num;
use rayon::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::scorer::{
    corpus::CorpusStats,
    tfidf::{DefaultTfidfEngine, TfidfEngine},
    token::{tokenize, TokenProfile},
    Document,
};

/// Per-document state kept by the index.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocEntry<N> {
    pub doc_id: String,
    /// Dense TF-IDF vector aligned to the index vocabulary.
    pub tfidf_vec: Vec<N>,
    /// Distinct tokens, for the word-overlap signal.
    pub term_set: IndexSet<String>,
    /// Raw combined text, for the exact-substring signal.
    pub combined_text: String,
    /// Token count after profiling (duplicates included).
    pub token_len: u64,
}

/// Corpus-mode index: shared vocabulary, IDF table and one TF-IDF vector per
/// document. Built once per corpus snapshot and immutable afterwards; when
/// the corpus changes the caller rebuilds (or lets [`IndexCache`] decide).
///
/// `Index<N, E>` has the following generic parameters:
/// - `N`: vector parameter type (`f32`, `f64`)
/// - `E`: TF-IDF weighting engine (e.g. `DefaultTfidfEngine`)
#[derive(Debug, Clone)]
pub struct Index<N = f32, E = DefaultTfidfEngine>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TfidfEngine<N>,
{
    pub stats: CorpusStats,
    pub documents: Vec<DocEntry<N>>,
    pub profile: TokenProfile,
    _marker: PhantomData<E>,
}

impl<N, E> Index<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TfidfEngine<N>,
{
    /// Build an index from a document corpus.
    /// Tokenization and vectorization run per document in parallel; the
    /// result is deterministic and document order is preserved.
    pub fn build(docs: &[Document], profile: TokenProfile) -> Self {
        let tokenized: Vec<Vec<String>> = docs
            .par_iter()
            .map(|doc| tokenize(&doc.combined_text(), &profile))
            .collect();
        let stats = CorpusStats::build(&tokenized);

        let documents: Vec<DocEntry<N>> = docs
            .par_iter()
            .zip(tokenized.par_iter())
            .map(|(doc, tokens)| DocEntry {
                doc_id: doc.id.clone(),
                tfidf_vec: E::tfidf_vec(tokens, &stats),
                term_set: tokens.iter().cloned().collect(),
                combined_text: doc.combined_text(),
                token_len: tokens.len() as u64,
            })
            .collect();

        Index {
            stats,
            documents,
            profile,
            _marker: PhantomData,
        }
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Entry lookup by document id.
    pub fn get_doc(&self, doc_id: &str) -> Option<&DocEntry<N>> {
        self.documents.iter().find(|doc| doc.doc_id == doc_id)
    }

    /// Check if the term is a vocabulary dimension.
    pub fn contains_term(&self, term: &str) -> bool {
        self.stats.term_index(term).is_some()
    }

    /// Detach the index state for serialization.
    pub fn to_data(&self) -> IndexData<N> {
        IndexData {
            stats: self.stats.clone(),
            documents: self.documents.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Serializable form of [`Index`].
/// エンジン型を持たないので保存・転送に向いています
/// Rebuilding from a snapshot skips re-tokenizing the corpus.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IndexData<N> {
    pub stats: CorpusStats,
    pub documents: Vec<DocEntry<N>>,
    pub profile: TokenProfile,
}

impl<N> IndexData<N> {
    /// Reattach a weighting engine type and restore a usable index.
    pub fn into_index<E>(self) -> Index<N, E>
    where
        N: Num + Copy + Into<f64> + Send + Sync,
        E: TfidfEngine<N>,
    {
        Index {
            stats: self.stats,
            documents: self.documents,
            profile: self.profile,
            _marker: PhantomData,
        }
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, serde_cbor::Error>
    where
        N: Serialize,
    {
        serde_cbor::to_vec(self)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self, serde_cbor::Error>
    where
        N: DeserializeOwned,
    {
        serde_cbor::from_slice(bytes)
    }
}

/// Memoizes the built index on a corpus fingerprint so UI layers can call
/// into it on every interaction without paying the O(corpus × vocabulary)
/// build each time. Rebuilds only when the documents or the profile change.
#[derive(Debug, Default)]
pub struct IndexCache<N = f32, E = DefaultTfidfEngine>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TfidfEngine<N>,
{
    cached: Option<(u64, Arc<Index<N, E>>)>,
}

impl<N, E> IndexCache<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TfidfEngine<N>,
{
    pub fn new() -> Self {
        IndexCache { cached: None }
    }

    /// Return the cached index when the corpus snapshot is unchanged,
    /// otherwise rebuild and cache.
    pub fn get_or_build(&mut self, docs: &[Document], profile: &TokenProfile) -> Arc<Index<N, E>> {
        let fingerprint = corpus_fingerprint(docs, profile);
        if let Some((cached_fp, index)) = &self.cached {
            if *cached_fp == fingerprint {
                return Arc::clone(index);
            }
        }
        let index = Arc::new(Index::build(docs, profile.clone()));
        self.cached = Some((fingerprint, Arc::clone(&index)));
        index
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// コーパススナップショットの同一性判定用ハッシュ
fn corpus_fingerprint(docs: &[Document], profile: &TokenProfile) -> u64 {
    let mut hasher = DefaultHasher::new();
    profile.min_token_len.hash(&mut hasher);
    for stopword in &profile.stopwords {
        stopword.hash(&mut hasher);
    }
    docs.len().hash(&mut hasher);
    for doc in docs {
        doc.id.hash(&mut hasher);
        doc.title.hash(&mut hasher);
        doc.summary.hash(&mut hasher);
        doc.content.hash(&mut hasher);
        doc.category.hash(&mut hasher);
    }
    hasher.finish()
}
