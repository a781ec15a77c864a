// Publication record and the wire types of the Semantic Scholar Graph API.
//
// `Publication` is what the rest of the crate sees: an explicit record with
// one optional field per bibliographic attribute we care about. The wire
// types mirror the API's JSON and are converted once, at the client boundary.

use serde::{Deserialize, Serialize};

/// Bibliographic fields shown and exported for every publication, in order.
pub const BIB_FIELDS: [&str; 4] = ["title", "abstract", "author", "eprint"];

/// A single publication as seen by the ranking pipeline.
///
/// Missing fields are `None`. An empty string means the index returned the
/// field with no content, which is not the same thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Identifier in the scholarly index, needed to list citations
    #[serde(default)]
    pub paper_id: Option<String>,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    /// Author names joined with " and "
    #[serde(default)]
    pub author: Option<String>,
    /// Link to a freely available copy of the paper
    #[serde(default)]
    pub eprint: Option<String>,
}

impl Publication {
    /// Create a publication with only a title; fill the rest with the builders.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = Some(text.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_eprint(mut self, eprint: impl Into<String>) -> Self {
        self.eprint = Some(eprint.into());
        self
    }

    pub fn with_paper_id(mut self, id: impl Into<String>) -> Self {
        self.paper_id = Some(id.into());
        self
    }

    /// Look up one of the `BIB_FIELDS` by name.
    ///
    /// Returns `None` for absent fields and for names outside `BIB_FIELDS`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title.as_str()),
            "abstract" => self.abstract_text.as_deref(),
            "author" => self.author.as_deref(),
            "eprint" => self.eprint.as_deref(),
            _ => None,
        }
    }

    /// The abstract, if present and non-empty.
    pub fn usable_abstract(&self) -> Option<&str> {
        self.abstract_text.as_deref().filter(|a| !a.is_empty())
    }
}

// -- Serde types for the Graph API --

/// Fields requested for every paper; keep in sync with `PaperRecord`.
pub const PAPER_FIELDS: &str = "paperId,title,abstract,authors,openAccessPdf,externalIds";

/// Response from `GET /paper/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Vec<PaperRecord>,
}

/// Response from `GET /paper/{id}/citations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CitationsResponse {
    #[serde(default)]
    pub offset: u32,
    /// Offset of the next page; absent on the last page
    #[serde(default)]
    pub next: Option<u32>,
    #[serde(default)]
    pub data: Vec<CitationEdge>,
}

/// One edge in a citation listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    pub citing_paper: PaperRecord,
}

/// A paper as returned by the Graph API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    #[serde(default)]
    pub paper_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
    #[serde(default)]
    pub open_access_pdf: Option<OpenAccessPdf>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAccessPdf {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "ArXiv", default)]
    pub arxiv: Option<String>,
}

impl From<PaperRecord> for Publication {
    fn from(record: PaperRecord) -> Self {
        let names: Vec<String> = record
            .authors
            .into_iter()
            .filter_map(|a| a.name)
            .filter(|n| !n.is_empty())
            .collect();
        let author = (!names.is_empty()).then(|| names.join(" and "));

        // Prefer the open-access PDF; fall back to the arXiv landing page.
        let eprint = record
            .open_access_pdf
            .and_then(|pdf| pdf.url)
            .filter(|url| !url.is_empty())
            .or_else(|| {
                record
                    .external_ids
                    .and_then(|ids| ids.arxiv)
                    .map(|id| format!("https://arxiv.org/abs/{id}"))
            });

        Publication {
            paper_id: record.paper_id,
            title: record.title.unwrap_or_default(),
            abstract_text: record.abstract_text,
            author,
            eprint,
        }
    }
}
