// Scholarly index trait — the retrieval seam.
//
// The ranking core never talks to the network. Anything that can find a
// paper by title and list the works citing it can feed the pipeline: the
// Semantic Scholar client in production, an in-memory fake in tests.

use async_trait::async_trait;

use super::models::Publication;
use crate::error::Result;

#[async_trait]
pub trait ScholarlyIndex: Send + Sync {
    /// Find the best-matching publication for a title query.
    ///
    /// Fails with `CiteRankError::NotFound` when the index has no candidate.
    async fn search(&self, query: &str) -> Result<Publication>;

    /// List the publications citing `publication`, in the index's order.
    async fn citations_of(&self, publication: &Publication) -> Result<Vec<Publication>>;
}
