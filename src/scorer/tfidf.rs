use num::Num;

use crate::scorer::{corpus::CorpusStats, token::TermFrequency};

/// TF-IDF weighting engine trait.
/// 実装を差し替えることで重み付け戦略を変更できます
///
/// # Arguments
/// * `tokens` - tokenized document or query
/// * `stats` - corpus statistics the vector is aligned to
///
/// # Returns
/// * `Vec<N>` - dense TF-IDF vector, one entry per vocabulary term
pub trait TfidfEngine<N>
where
    N: Num,
{
    fn tfidf_vec(tokens: &[String], stats: &CorpusStats) -> Vec<N>;
}

/// デフォルトのTF-IDFエンジン
/// `tf = count / token_len`, weight = `tf * idf`. An empty token list yields
/// an all-zero vector instead of dividing by zero; terms outside the
/// vocabulary are ignored. `f32`と`f64`の型に対応
#[derive(Debug, Default, Clone)]
pub struct DefaultTfidfEngine;

impl DefaultTfidfEngine {
    pub fn new() -> Self {
        DefaultTfidfEngine
    }
}

impl TfidfEngine<f32> for DefaultTfidfEngine {
    fn tfidf_vec(tokens: &[String], stats: &CorpusStats) -> Vec<f32> {
        let freq = TermFrequency::from_terms(tokens);
        let total = freq.term_sum() as f64;
        let mut vec = Vec::with_capacity(stats.dim());
        for (i, term) in stats.vocabulary.iter().enumerate() {
            if total == 0.0 {
                vec.push(0.0);
                continue;
            }
            let tf = freq.term_count(term) as f64 / total;
            vec.push((tf * stats.idf[i]) as f32);
        }
        vec
    }
}

impl TfidfEngine<f64> for DefaultTfidfEngine {
    fn tfidf_vec(tokens: &[String], stats: &CorpusStats) -> Vec<f64> {
        let freq = TermFrequency::from_terms(tokens);
        let total = freq.term_sum() as f64;
        let mut vec = Vec::with_capacity(stats.dim());
        for (i, term) in stats.vocabulary.iter().enumerate() {
            if total == 0.0 {
                vec.push(0.0);
                continue;
            }
            let tf = freq.term_count(term) as f64 / total;
            vec.push(tf * stats.idf[i]);
        }
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn tf_is_count_over_token_len() {
        let docs = vec![terms(&["a", "a", "b", "c"]), terms(&["d"])];
        let stats = CorpusStats::build(&docs);
        let vec: Vec<f64> = DefaultTfidfEngine::tfidf_vec(&docs[0], &stats);

        let ln2 = (2.0_f64).ln();
        // a: tf 2/4, b and c: tf 1/4, d: absent
        assert_eq!(vec[stats.term_index("a").unwrap()], 0.5 * ln2);
        assert_eq!(vec[stats.term_index("b").unwrap()], 0.25 * ln2);
        assert_eq!(vec[stats.term_index("d").unwrap()], 0.0);
    }

    #[test]
    fn empty_token_list_yields_all_zero_vector() {
        let docs = vec![terms(&["a", "b"]), terms(&[])];
        let stats = CorpusStats::build(&docs);
        let vec: Vec<f64> = DefaultTfidfEngine::tfidf_vec(&docs[1], &stats);
        assert_eq!(vec.len(), stats.dim());
        assert!(vec.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn out_of_vocabulary_tokens_are_ignored() {
        let docs = vec![terms(&["a"]), terms(&["b"])];
        let stats = CorpusStats::build(&docs);
        // "zzz" is not a dimension; it only inflates the token length
        let vec: Vec<f64> = DefaultTfidfEngine::tfidf_vec(&terms(&["a", "zzz"]), &stats);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec[stats.term_index("a").unwrap()], 0.5 * (2.0_f64).ln());
    }

    #[test]
    fn f32_quantization_matches_f64_closely() {
        let docs = vec![terms(&["x", "y", "x"]), terms(&["y", "z"])];
        let stats = CorpusStats::build(&docs);
        let v32: Vec<f32> = DefaultTfidfEngine::tfidf_vec(&docs[0], &stats);
        let v64: Vec<f64> = DefaultTfidfEngine::tfidf_vec(&docs[0], &stats);
        for (a, b) in v32.iter().zip(v64.iter()) {
            assert!((*a as f64 - b).abs() < 1e-6);
        }
    }
}
