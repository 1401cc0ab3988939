use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Tokenization profile.
/// Controls the minimum token length and the stopword set applied after
/// normalization. The two dashboard call sites use different profiles, so the
/// profile is explicit configuration rather than a global constant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenProfile {
    /// Tokens shorter than this are dropped (character count).
    pub min_token_len: usize,
    /// Tokens contained in this set are dropped.
    pub stopwords: IndexSet<String>,
}

impl TokenProfile {
    /// Create a profile from raw parts.
    pub fn new<I, S>(min_token_len: usize, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TokenProfile {
            min_token_len,
            stopwords: stopwords
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
        }
    }

    /// Profile used when comparing a query against a single node text.
    /// Short tokens carry little signal there, so length-3 minimum plus a
    /// small set of overly common domain words.
    pub fn node_filter() -> Self {
        Self::new(3, ["data", "system", "service", "management"])
    }

    /// Profile used by the corpus search surface.
    /// Keeps every non-stopword token; the classic English stopword list.
    pub fn corpus_search() -> Self {
        Self::new(
            1,
            [
                "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
                "with", "by", "is", "are", "was", "were", "be", "been", "being", "have",
                "has", "had", "do", "does", "did",
            ],
        )
    }
}

/// Normalize and split raw text into terms.
///
/// Lowercases the input, treats every character that is not alphanumeric or
/// `_` as a separator, then applies the profile's length and stopword
/// filters. Pure function; empty input yields an empty vector.
///
/// # Arguments
/// * `text` - raw input text
/// * `profile` - tokenization profile to apply
///
/// # Returns
/// * `Vec<String>` - surviving terms in input order
pub fn tokenize(text: &str, profile: &TokenProfile) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|term| !term.is_empty())
        .filter(|term| term.chars().count() >= profile.min_token_len)
        .filter(|term| !profile.stopwords.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// TermFrequency 構造体
/// 1ドキュメント内のterm出現頻度を管理するための構造体です
/// TFの計算の基礎データになります
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    /// 新しいTermFrequencyを作成するメソッド
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count a tokenized document in one pass.
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = TermFrequency::new();
        freq.add_terms(terms);
        freq
    }

    /// termを追加する
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// 複数のtermを追加する
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrence count for a term (0 when absent).
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of counted terms, duplicates included.
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms.
    #[inline]
    pub fn unique_term_count(&self) -> usize {
        self.term_count.len()
    }

    /// Distinct terms in first-seen order.
    pub fn term_set(&self) -> IndexSet<String> {
        self.term_count.keys().cloned().collect()
    }

    /// カウントを全リセットします
    #[inline]
    pub fn clear(&mut self) {
        self.term_count.clear();
        self.total_term_count = 0;
    }
}
