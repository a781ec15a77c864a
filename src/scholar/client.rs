// HTTP client for the Semantic Scholar Graph API.
//
// A thin reqwest wrapper with a generic GET helper, plus the two calls the
// pipeline needs: title search and paginated citation listing. No retries
// and no rate limiting; a failed request surfaces as a RetrievalError.

use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::models::{CitationsResponse, Publication, SearchResponse, PAPER_FIELDS};
use super::traits::ScholarlyIndex;
use crate::error::{CiteRankError, Result, RetrievalError};

/// Default Graph API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.semanticscholar.org/graph/v1";

/// Citations requested per page (the API allows up to 1000).
const PAGE_SIZE: usize = 100;

/// Page size for the next request, given how many citations are already held.
fn page_limit(collected: usize, max: usize) -> usize {
    PAGE_SIZE.min(max.saturating_sub(collected))
}

/// Offset of the next page to request, or `None` when listing should stop.
///
/// Stops on the last page (no `next`), on an empty page, and once `max`
/// citations have been collected.
fn next_offset(next: Option<u32>, page_len: usize, collected: usize, max: usize) -> Option<usize> {
    if page_len == 0 || collected >= max {
        return None;
    }
    next.map(|n| n as usize)
}

/// Unauthenticated (or API-key) client for the Semantic Scholar Graph API.
pub struct SemanticScholarClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_citations: usize,
}

impl SemanticScholarClient {
    /// Create a client pointing at the given base URL.
    ///
    /// `max_citations` caps how many citing papers `citations_of` collects.
    pub fn new(base_url: &str, api_key: Option<String>, max_citations: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("citerank/0.1 (citation-similarity)")
            .build()
            .map_err(|source| RetrievalError::Http {
                context: "Failed to build HTTP client".to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            max_citations,
        })
    }

    /// GET `{base_url}/{path}` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        debug!(path = path, "Graph API GET request");

        let mut request = self.client.get(&url).query(params);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|source| RetrievalError::Http {
            context: format!("Request to {path} failed"),
            source,
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Status {
                endpoint: path.to_string(),
                status,
                body,
            }
            .into());
        }

        response.json::<T>().await.map_err(|source| {
            RetrievalError::Decode {
                endpoint: path.to_string(),
                source,
            }
            .into()
        })
    }
}

#[async_trait]
impl ScholarlyIndex for SemanticScholarClient {
    async fn search(&self, query: &str) -> Result<Publication> {
        info!(query = query, "Searching for publication");

        let resp: SearchResponse = self
            .get_json(
                "paper/search",
                &[("query", query), ("limit", "1"), ("fields", PAPER_FIELDS)],
            )
            .await?;

        let record = resp
            .data
            .into_iter()
            .next()
            .ok_or_else(|| CiteRankError::NotFound {
                query: query.to_string(),
            })?;

        let publication = Publication::from(record);
        info!(
            title = %publication.title,
            total_hits = resp.total.unwrap_or(0),
            "Matched publication"
        );
        Ok(publication)
    }

    async fn citations_of(&self, publication: &Publication) -> Result<Vec<Publication>> {
        let paper_id = publication.paper_id.as_deref().ok_or_else(|| {
            RetrievalError::Unusable(format!("\"{}\" has no paper id", publication.title))
        })?;
        let path = format!("paper/{paper_id}/citations");

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Fetching citations...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        let mut citations = Vec::new();
        let mut offset = 0usize;

        while citations.len() < self.max_citations {
            let limit = page_limit(citations.len(), self.max_citations).to_string();
            let offset_str = offset.to_string();

            let page: CitationsResponse = match self
                .get_json(
                    &path,
                    &[
                        ("fields", PAPER_FIELDS),
                        ("offset", &offset_str),
                        ("limit", &limit),
                    ],
                )
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    spinner.finish_and_clear();
                    return Err(e);
                }
            };

            let page_len = page.data.len();
            citations.extend(
                page.data
                    .into_iter()
                    .map(|edge| Publication::from(edge.citing_paper)),
            );

            debug!(
                offset = page.offset,
                page_len = page_len,
                total_collected = citations.len(),
                "Fetched page of citations"
            );
            spinner.set_message(format!("Fetched {} citations...", citations.len()));

            match next_offset(page.next, page_len, citations.len(), self.max_citations) {
                Some(next) => offset = next,
                None => break,
            }
        }

        spinner.finish_and_clear();
        citations.truncate(self.max_citations);

        info!(
            paper_id = paper_id,
            count = citations.len(),
            "Collected citing publications"
        );
        Ok(citations)
    }
}
