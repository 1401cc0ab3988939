use indexmap::IndexSet;
use num::Num;

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
/// Both vectors must be aligned to the same vocabulary. Accumulates in f64,
/// returns 0 when either norm is 0, and clamps the result to [0, 1] so
/// floating-point drift never leaks out of range.
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        let va: f64 = va.into();
        let vb: f64 = vb.into();
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }
    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Case-insensitive substring test of the raw query against raw text.
/// Neither side is tokenized.
#[inline]
pub fn exact_match(query: &str, haystack: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Number of terms present in both sets.
#[inline]
pub fn overlap_count(a: &IndexSet<String>, b: &IndexSet<String>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|term| large.contains(term.as_str())).count()
}

/// Jaccard重なり係数 |A ∩ B| / |A ∪ B|
/// 0 if the union is empty.
pub fn jaccard_overlap(a: &IndexSet<String>, b: &IndexSet<String>) -> f64 {
    let intersection = overlap_count(a, b);
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(raw: &[&str]) -> IndexSet<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = vec![0.3_f64, 0.0, 1.2, 0.7];
        let b = vec![0.1_f64, 0.9, 0.0, 0.4];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![2.0_f64, 4.0, 6.0];
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 1.0).abs() < 1e-12);
        // clamp keeps rounding noise inside the range
        assert!(sim <= 1.0);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let a = vec![1.0_f64, 0.0];
        let b = vec![0.0_f64, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn cosine_zero_magnitude_guard() {
        let zero = vec![0.0_f64, 0.0, 0.0];
        let other = vec![1.0_f64, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn cosine_accepts_f32_vectors() {
        let a = vec![1.0_f32, 1.0];
        let b = vec![1.0_f32, 1.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn exact_match_is_case_insensitive_substring() {
        assert!(exact_match("Machine Learning", "a machine learning pipeline"));
        assert!(exact_match("pipeline", "Machine Learning Pipeline"));
        assert!(!exact_match("pipelines", "Machine Learning Pipeline"));
    }

    #[test]
    fn jaccard_empty_union_is_zero() {
        assert_eq!(jaccard_overlap(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn jaccard_counts_intersection_over_union() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d"]);
        assert_eq!(overlap_count(&a, &b), 2);
        assert_eq!(jaccard_overlap(&a, &b), 2.0 / 4.0);
    }

    #[test]
    fn jaccard_disjoint_sets_score_zero() {
        let a = set(&["a"]);
        let b = set(&["b"]);
        assert_eq!(jaccard_overlap(&a, &b), 0.0);
    }
}
