// Similarity ranking — corpus building, TF-IDF, cosine ranking, projection.

pub mod corpus;
pub mod projection;
pub mod similarity;
pub mod tfidf;

pub use corpus::{build_corpus, clean_abstract, Corpus};
pub use projection::{project, RankedPublication};
pub use similarity::{rank, rank_with_scores, SimilarityMatrix};
