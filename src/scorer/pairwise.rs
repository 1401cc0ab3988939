use crate::scorer::{
    compare::cosine_similarity,
    corpus::CorpusStats,
    tfidf::{DefaultTfidfEngine, TfidfEngine},
    token::{tokenize, TokenProfile},
};

/// Similarity between a query and a single text, computed over an ad-hoc
/// two-document corpus `[query, text]`.
///
/// Vocabulary and IDF are rebuilt from just these two documents on every
/// call; there is no cached state, so the function is safe to invoke once
/// per node per filter pass from any number of threads.
///
/// Note the consequence of the two-document IDF: a term present in both
/// documents has `df = 2` and `idf = ln(2/2) = 0`, so fully overlapping
/// inputs (including identical strings) score 0, not 1. Downstream node
/// filtering and sizing are written against this behavior; keep it.
///
/// # Arguments
/// * `query` - the free-text query
/// * `text` - the node text to compare against
/// * `profile` - tokenization profile (normally [`TokenProfile::node_filter`])
///
/// # Returns
/// * `f64` - cosine similarity in [0, 1]
pub fn pairwise_similarity(query: &str, text: &str, profile: &TokenProfile) -> f64 {
    let docs = [tokenize(query, profile), tokenize(text, profile)];
    let stats = CorpusStats::build(&docs);
    let query_vec: Vec<f64> = DefaultTfidfEngine::tfidf_vec(&docs[0], &stats);
    let text_vec: Vec<f64> = DefaultTfidfEngine::tfidf_vec(&docs[1], &stats);
    cosine_similarity(&query_vec, &text_vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_zero() {
        // every shared term cancels to idf 0 in the two-document corpus
        let profile = TokenProfile::node_filter();
        assert_eq!(pairwise_similarity("AI regulation", "AI regulation", &profile), 0.0);
    }

    #[test]
    fn fully_overlapping_term_sets_score_zero() {
        let profile = TokenProfile::node_filter();
        // same term set, different order and counts
        assert_eq!(
            pairwise_similarity("privacy policy", "policy privacy policy", &profile),
            0.0
        );
    }

    #[test]
    fn empty_inputs_score_zero() {
        let profile = TokenProfile::node_filter();
        assert_eq!(pairwise_similarity("", "", &profile), 0.0);
        assert_eq!(pairwise_similarity("regulation", "", &profile), 0.0);
        assert_eq!(pairwise_similarity("", "regulation", &profile), 0.0);
    }

    #[test]
    fn result_stays_in_unit_range() {
        let profile = TokenProfile::node_filter();
        let sim = pairwise_similarity(
            "climate policy reform",
            "energy policy and climate adaptation news",
            &profile,
        );
        assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn profile_filters_apply_before_comparison() {
        let profile = TokenProfile::node_filter();
        // "ai" is below the length minimum, "data" is a stopword; both
        // inputs tokenize empty and the zero-magnitude guard kicks in
        assert_eq!(pairwise_similarity("ai data", "data ai", &profile), 0.0);
    }
}
