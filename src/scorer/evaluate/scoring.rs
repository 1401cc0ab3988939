use std::fmt::{self, Debug};

use indexmap::IndexSet;
use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scorer::{
    compare::{cosine_similarity, exact_match, jaccard_overlap, overlap_count},
    index::Index,
    tfidf::TfidfEngine,
    token::tokenize,
};

/// Weighting policy for the composite ranking score.
/// The defaults reproduce the dashboard search panel: 40% exact substring,
/// 40% TF-IDF cosine, 20% word overlap, with results below 5% dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankWeights {
    pub exact_weight: f64,
    pub tfidf_weight: f64,
    pub overlap_weight: f64,
    /// Results scoring below this percentage are filtered out.
    pub min_percent: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        RankWeights {
            exact_weight: 0.4,
            tfidf_weight: 0.4,
            overlap_weight: 0.2,
            min_percent: 5.0,
        }
    }
}

/// One ranked document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub doc_id: String,
    /// Composite score in [0, 100].
    pub similarity_percent: f64,
    /// Whether the raw query occurred as a substring of the document text.
    pub exact_match: bool,
    /// Number of query terms also present in the document.
    pub word_overlap: usize,
}

/// Structure to store search results
#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<ScoredResult>,
}

impl Hits {
    pub fn new(list: Vec<ScoredResult>) -> Self {
        Hits { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredResult> {
        self.list.iter()
    }

    /// Drop results scoring below the floor.
    pub fn retain_above(&mut self, min_percent: f64) -> &mut Self {
        self.list.retain(|hit| hit.similarity_percent >= min_percent);
        self
    }

    /// Sort results by descending score
    /// 同点は元の順序を保持 (stable sort)
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|hit| !hit.similarity_percent.is_nan());
        self.list
            .sort_by(|a, b| b.similarity_percent.total_cmp(&a.similarity_percent));
        self
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(
                    f,
                    "    {:?}: {:.1}% (exact: {}, overlap: {})",
                    hit.doc_id, hit.similarity_percent, hit.exact_match, hit.word_overlap
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<N, E> Index<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TfidfEngine<N> + Send + Sync,
{
    /// Rank every indexed document against a free-text query with the
    /// default weights.
    pub fn rank(&self, query: &str) -> Hits {
        self.rank_with(query, &RankWeights::default())
    }

    /// Rank with an explicit weighting policy.
    ///
    /// Per document, three signals feed the composite percentage:
    /// exact substring match (0/1), TF-IDF cosine similarity and Jaccard
    /// word overlap. Blank queries return empty hits; documents under the
    /// floor are dropped; the rest are sorted by descending score, ties in
    /// corpus order.
    pub fn rank_with(&self, query: &str, weights: &RankWeights) -> Hits {
        if query.trim().is_empty() {
            return Hits::new(Vec::new());
        }

        let query_tokens = tokenize(query, &self.profile);
        let query_vec: Vec<N> = E::tfidf_vec(&query_tokens, &self.stats);
        let query_terms: IndexSet<String> = query_tokens.iter().cloned().collect();

        let list: Vec<ScoredResult> = self
            .documents
            .par_iter()
            .map(|doc| {
                let is_exact = exact_match(query, &doc.combined_text);
                let exact_score = if is_exact { 1.0 } else { 0.0 };
                let tfidf_score = cosine_similarity(&query_vec, &doc.tfidf_vec);
                let overlap_score = jaccard_overlap(&query_terms, &doc.term_set);
                let similarity_percent = 100.0
                    * (weights.exact_weight * exact_score
                        + weights.tfidf_weight * tfidf_score
                        + weights.overlap_weight * overlap_score);
                ScoredResult {
                    doc_id: doc.doc_id.clone(),
                    similarity_percent,
                    exact_match: is_exact,
                    word_overlap: overlap_count(&query_terms, &doc.term_set),
                }
            })
            .collect();

        let mut hits = Hits::new(list);
        hits.retain_above(weights.min_percent);
        hits.sort_by_score_desc();
        hits
    }
}
