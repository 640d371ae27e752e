use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Number of ranked recommendations returned per method
pub const TOP_N: usize = 3;

/// Similarity metric between the query profile and a catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Cosine similarity, range [-1, 1]
    Cosine,
    /// Pearson correlation coefficient (1 - correlation distance), range [-1, 1]
    Pearson,
    /// `1 / (1 + euclidean_distance)`, range (0, 1]
    Euclidean,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Cosine, Method::Pearson, Method::Euclidean];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Cosine => "cosine",
            Method::Pearson => "pearson",
            Method::Euclidean => "euclidean",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores the profile against every matrix row under the given method
///
/// Higher is always more similar, for all three methods.
pub fn score(method: Method, profile: &[f64], matrix: &[Vec<f64>]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| match method {
            Method::Cosine => cosine(profile, row),
            Method::Pearson => pearson(profile, row),
            Method::Euclidean => euclidean_similarity(profile, row),
        })
        .collect()
}

/// Ranks indices by descending score and returns the runners-up
///
/// The single highest-scoring entry is dropped: it is the profile matching
/// itself or its nearest-identical neighbor. The next `TOP_N` entries are
/// returned as `(index, score)` pairs. Ties order by ascending index.
pub fn rank(scores: &[f64]) -> Vec<(usize, f64)> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    indices
        .into_iter()
        .skip(1)
        .take(TOP_N)
        .map(|i| (i, scores[i]))
        .collect()
}

/// Rounds a score to 3 decimal places for presentation
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = (norm_a * norm_b).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}

fn euclidean_similarity(a: &[f64], b: &[f64]) -> f64 {
    let distance = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt();
    1.0 / (1.0 + distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors_score_one() {
        let v = vec![1.0, -2.0, 0.5];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_opposite_vectors_score_minus_one() {
        let a = vec![1.0, 2.0];
        let b = vec![-1.0, -2.0];
        assert!((cosine(&a, &b) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector_scores_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_pearson_perfect_linear_relation() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![10.0, 20.0, 30.0];
        assert!((pearson(&a, &b) - 1.0).abs() < 1e-9);

        let inverted = vec![30.0, 20.0, 10.0];
        assert!((pearson(&a, &inverted) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_constant_vector_scores_zero() {
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_euclidean_similarity_decreases_with_distance() {
        let origin = vec![0.0, 0.0];
        assert_eq!(euclidean_similarity(&origin, &origin), 1.0);

        let near = euclidean_similarity(&origin, &[1.0, 0.0]);
        let far = euclidean_similarity(&origin, &[3.0, 4.0]);
        assert!((near - 0.5).abs() < 1e-9);
        assert!((far - 1.0 / 6.0).abs() < 1e-9);
        assert!(near > far);
    }

    #[test]
    fn test_score_dispatches_per_method() {
        let profile = vec![1.0, 0.0];
        let matrix = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        let cos = score(Method::Cosine, &profile, &matrix);
        assert!((cos[0] - 1.0).abs() < 1e-9);
        assert!(cos[1].abs() < 1e-9);

        let euc = score(Method::Euclidean, &profile, &matrix);
        assert_eq!(euc[0], 1.0);
        assert!(euc[1] < 1.0);
    }

    #[test]
    fn test_rank_drops_top_result() {
        let scores = vec![0.9, 0.5, 0.7, 0.3, 0.8];
        let ranked = rank(&scores);
        assert_eq!(ranked, vec![(4, 0.8), (2, 0.7), (1, 0.5)]);
        // The single best entry never appears.
        assert!(ranked.iter().all(|&(i, _)| i != 0));
    }

    #[test]
    fn test_rank_ties_order_by_index() {
        let scores = vec![0.5, 0.5, 0.5, 0.5];
        let ranked = rank(&scores);
        assert_eq!(ranked, vec![(1, 0.5), (2, 0.5), (3, 0.5)]);
    }

    #[test]
    fn test_rank_short_catalog_returns_what_remains() {
        let scores = vec![0.9, 0.1];
        let ranked = rank(&scores);
        assert_eq!(ranked, vec![(1, 0.1)]);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.123456), 0.123);
        assert_eq!(round3(0.99951), 1.0);
        assert_eq!(round3(-0.55549), -0.555);
    }
}
