use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Corpus-level term statistics: the shared vocabulary and the IDF weight of
/// every vocabulary term. Built once per corpus snapshot and immutable after
/// that; corpus mode passes the whole document set, pairwise mode passes
/// exactly two synthetic documents. The math is the same in both modes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CorpusStats {
    /// Distinct terms across the corpus, in first-seen order.
    /// Vector dimensions are aligned to this order.
    pub vocabulary: IndexSet<String>,
    /// IDF weight per vocabulary term, same order as `vocabulary`.
    pub idf: Vec<f64>,
    /// Number of documents the statistics were built from.
    pub doc_num: u64,
}

impl CorpusStats {
    /// Build statistics from already-tokenized documents.
    ///
    /// `df(term)` counts documents whose token *set* contains the term, so
    /// repeated occurrences inside one document count once. The IDF formula
    /// is `ln(N / df)` with df floored to 1; by construction every
    /// vocabulary term appears in at least one document, the floor only
    /// guards the division.
    pub fn build<T>(tokenized_docs: &[T]) -> Self
    where
        T: AsRef<[String]>,
    {
        let doc_num = tokenized_docs.len() as u64;
        // df集計: 文書ごとにユニークなtermだけ数える
        let mut doc_freq: IndexMap<String, u64> = IndexMap::new();
        for tokens in tokenized_docs {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in tokens.as_ref() {
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        let vocabulary: IndexSet<String> = doc_freq.keys().cloned().collect();
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| (doc_num as f64 / df.max(1) as f64).ln())
            .collect();

        CorpusStats {
            vocabulary,
            idf,
            doc_num,
        }
    }

    /// Dimension index of a term, if it is in the vocabulary.
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get_index_of(term)
    }

    /// IDF weight of a term, `None` for out-of-vocabulary terms.
    #[inline]
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// Number of vector dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|doc| doc.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn vocabulary_is_union_of_distinct_terms() {
        let stats = CorpusStats::build(&docs(&[&["a", "b", "a"], &["b", "c"]]));
        let vocab: Vec<&str> = stats.vocabulary.iter().map(|s| s.as_str()).collect();
        assert_eq!(vocab, vec!["a", "b", "c"]);
        assert_eq!(stats.dim(), 3);
        assert_eq!(stats.doc_num, 2);
    }

    #[test]
    fn df_counts_set_membership_not_occurrences() {
        // "a" appears 3 times in doc 0 but only in that one document
        let stats = CorpusStats::build(&docs(&[&["a", "a", "a"], &["b"]]));
        assert_eq!(stats.idf_of("a"), Some((2.0_f64).ln()));
    }

    #[test]
    fn idf_is_ln_n_over_df() {
        let stats = CorpusStats::build(&docs(&[&["a", "b"], &["a", "c"], &["a"]]));
        // "a" in all 3 docs: ln(3/3) = 0
        assert_eq!(stats.idf_of("a"), Some(0.0));
        // "b" in 1 of 3: ln(3)
        assert_eq!(stats.idf_of("b"), Some((3.0_f64).ln()));
        assert_eq!(stats.idf_of("zzz"), None);
    }

    #[test]
    fn two_document_mode_uses_the_same_formula() {
        let stats = CorpusStats::build(&docs(&[&["shared", "left"], &["shared", "right"]]));
        // shared term: ln(2/2) = 0, unique terms: ln(2/1)
        assert_eq!(stats.idf_of("shared"), Some(0.0));
        assert_eq!(stats.idf_of("left"), Some((2.0_f64).ln()));
        assert_eq!(stats.idf_of("right"), Some((2.0_f64).ln()));
    }

    #[test]
    fn empty_corpus_builds_empty_stats() {
        let stats = CorpusStats::build(&docs(&[]));
        assert_eq!(stats.dim(), 0);
        assert_eq!(stats.doc_num, 0);
        assert!(stats.idf.is_empty());
    }
}
