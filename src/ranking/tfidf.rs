// TF-IDF vectorization of a small document corpus.
//
// Each document becomes a sparse, L2-normalized vector over a vocabulary
// shared by the whole corpus. Tokens are lowercased runs of two or more
// Unicode word characters; English stop words are dropped. Every remaining
// term is kept (minimum document frequency of 1).
//
// Weights are raw term counts times a smoothed IDF:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// so a term present in every document still carries weight 1.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// Sparse document vector: (term id, weight), sorted by term id.
pub type SparseVector = Vec<(usize, f64)>;

/// Tokenizer and stop-word filter for TF-IDF vectorization.
pub struct TfIdfVectorizer {
    token_pattern: Regex,
    stop_words: HashSet<String>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::with_stop_words(get(LANGUAGE::English))
    }
}

impl TfIdfVectorizer {
    /// Build a vectorizer with a custom stop-word list (matched lowercase).
    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            token_pattern: Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"),
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Lowercase, split into tokens, drop stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.token_pattern
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }

    /// Vectorize every document against the corpus-wide vocabulary.
    ///
    /// Returns one vector per input document, in input order. A document
    /// with no surviving tokens gets an empty (zero) vector.
    pub fn fit_transform(&self, documents: &[String]) -> Vec<SparseVector> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        // Vocabulary in sorted term order so term ids are deterministic.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }
        let vocabulary: BTreeMap<&str, usize> = doc_freq
            .keys()
            .enumerate()
            .map(|(id, term)| (*term, id))
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vocabulary"
        );

        tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
                for token in tokens {
                    if let Some(&id) = vocabulary.get(token.as_str()) {
                        *counts.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                let mut vector: SparseVector =
                    counts.into_iter().map(|(id, tf)| (id, tf * idf[id])).collect();
                l2_normalize(&mut vector);
                vector
            })
            .collect()
    }
}

/// Scale a vector to unit length. Zero vectors are left as they are.
fn l2_normalize(vector: &mut SparseVector) {
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sparse vectors sorted by term id.
///
/// For L2-normalized vectors this is their cosine similarity.
pub fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}
