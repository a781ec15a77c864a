// Pairwise similarity and anchor ranking.
//
// The similarity matrix stores `None` on its diagonal: a document is never a
// candidate for itself, so self-similarity can't leak into a ranking through
// a careless sort. Ranking uses a stable sort over candidates listed in
// corpus order, which makes ties resolve to the lower corpus index.

use rayon::prelude::*;
use tracing::debug;

use super::tfidf::{sparse_dot, TfIdfVectorizer};
use crate::error::{CiteRankError, Result};

/// Symmetric N×N cosine-similarity matrix with an excluded diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<Option<f64>>>,
}

impl SimilarityMatrix {
    /// Compute pairwise cosine similarity for every document in `corpus`.
    ///
    /// Rows are computed in parallel; the result does not depend on it.
    pub fn compute(vectorizer: &TfIdfVectorizer, corpus: &[String]) -> Self {
        let vectors = vectorizer.fit_transform(corpus);

        let rows = (0..vectors.len())
            .into_par_iter()
            .map(|i| {
                (0..vectors.len())
                    .map(|j| {
                        (i != j).then(|| sparse_dot(&vectors[i], &vectors[j]).clamp(0.0, 1.0))
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Similarity between documents `i` and `j`; `None` when `i == j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i)?.get(j).copied().flatten()
    }

    /// Candidates for `anchor` sorted most-to-least similar.
    ///
    /// Ties keep ascending corpus order (`sort_by` is stable).
    pub fn ranked_row(&self, anchor: usize) -> Vec<(usize, f64)> {
        let Some(row) = self.rows.get(anchor) else {
            return Vec::new();
        };
        let mut candidates: Vec<(usize, f64)> = row
            .iter()
            .enumerate()
            .filter_map(|(idx, score)| score.map(|s| (idx, s)))
            .collect();
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates
    }
}

/// Rank every other corpus document by similarity to `corpus[anchor_index]`.
///
/// Returns corpus indices, most similar first, never including the anchor.
/// A corpus holding only the anchor yields an empty ranking.
pub fn rank(corpus: &[String], anchor_index: usize) -> Result<Vec<usize>> {
    Ok(rank_with_scores(corpus, anchor_index)?
        .into_iter()
        .map(|(idx, _)| idx)
        .collect())
}

/// Like `rank`, paired with each document's similarity to the anchor.
pub fn rank_with_scores(corpus: &[String], anchor_index: usize) -> Result<Vec<(usize, f64)>> {
    if anchor_index >= corpus.len() {
        return Err(CiteRankError::AnchorOutOfRange {
            index: anchor_index,
            len: corpus.len(),
        });
    }
    if corpus.len() == 1 {
        return Ok(Vec::new());
    }

    let matrix = SimilarityMatrix::compute(&TfIdfVectorizer::default(), corpus);
    let ranked = matrix.ranked_row(anchor_index);

    debug!(
        documents = corpus.len(),
        anchor = anchor_index,
        top_score = ranked.first().map(|(_, s)| *s).unwrap_or(0.0),
        "Ranked corpus by similarity"
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_matrix_diagonal_excluded_and_symmetric() {
        let corpus = docs(&["alpha beta", "beta gamma", "delta"]);
        let m = SimilarityMatrix::compute(&TfIdfVectorizer::default(), &corpus);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), None);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!(m.get(0, 1).unwrap() > 0.0);
        assert_eq!(m.get(0, 2), Some(0.0));
        assert_eq!(m.get(5, 0), None);
    }

    #[test]
    fn test_ties_break_by_corpus_index() {
        let corpus = docs(&["anchor words", "zebra", "yak", "xylophone"]);
        assert_eq!(rank(&corpus, 0).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_non_zero_anchor() {
        let corpus = docs(&["neural network", "protein folding", "neural network training"]);
        assert_eq!(rank(&corpus, 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_anchor_only_is_empty() {
        assert!(rank(&docs(&["just me"]), 0).unwrap().is_empty());
    }

    #[test]
    fn test_anchor_out_of_range() {
        let err = rank(&docs(&["one"]), 1).unwrap_err();
        assert!(matches!(
            err,
            CiteRankError::AnchorOutOfRange { index: 1, len: 1 }
        ));
        assert!(rank(&[], 0).is_err());
    }

    #[test]
    fn test_identical_candidates_keep_full_score() {
        let corpus = docs(&["graph theory", "graph theory", "graph coloring"]);
        let ranked = rank_with_scores(&corpus, 0).unwrap();
        assert_eq!(ranked[0].0, 1);
        assert!((ranked[0].1 - 1.0).abs() < 1e-9);
    }
}
