// Scholarly index access — the publication record and the retrieval seam.
//
// The production index is the Semantic Scholar Graph API. Everything the
// ranking core consumes goes through the ScholarlyIndex trait.

pub mod client;
pub mod models;
pub mod traits;
