// Corpus building — one anchor abstract plus the distinct citing abstracts.
//
// Document 0 is always the anchor. Citing abstracts follow in the order they
// were first seen, with exact-text duplicates collapsed. The text → citation
// map is built in the same pass and keeps the *last* citation that produced
// each text, so projection can get back to a publication without rescanning.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CiteRankError, Result};
use crate::scholar::models::Publication;

/// Glyph the index appends to abstracts it cut off mid-sentence.
const ELLIPSIS: char = '\u{2026}';

/// Deduplicated abstract texts and the way back to their citations.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    /// Cleaned abstracts; index 0 is the anchor
    pub documents: Vec<String>,
    /// Cleaned citing abstract → position of the last citation producing it
    pub last_index_by_text: HashMap<String, usize>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Never true: the anchor is always present.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn anchor(&self) -> &str {
        self.documents.first().map(String::as_str).unwrap_or("")
    }

    /// Position in the original citing sequence behind corpus document `idx`.
    ///
    /// `None` for the anchor and for out-of-range indices.
    pub fn citation_index(&self, idx: usize) -> Option<usize> {
        if idx == 0 {
            return None;
        }
        let text = self.documents.get(idx)?;
        self.last_index_by_text.get(text).copied()
    }
}

/// Strip the truncation marker from an abstract.
///
/// When the text ends in "…", the ellipsis and the character before it are
/// removed. Anything else is returned untouched. Works on characters, so a
/// multi-byte glyph before the ellipsis is removed whole.
pub fn clean_abstract(text: &str) -> &str {
    let mut chars = text.chars();
    if chars.next_back() != Some(ELLIPSIS) {
        return text;
    }
    chars.next_back();
    chars.as_str()
}

/// Build the corpus for an anchor and its citing publications.
///
/// Citations without an abstract (or with an empty one) are skipped. Fails
/// with `MissingField` when the anchor has no abstract at all.
pub fn build_corpus(anchor: &Publication, citing: &[Publication]) -> Result<Corpus> {
    let anchor_abstract =
        anchor
            .abstract_text
            .as_deref()
            .ok_or_else(|| CiteRankError::MissingField {
                field: "abstract",
                title: anchor.title.clone(),
            })?;

    let mut documents = vec![clean_abstract(anchor_abstract).to_string()];
    let mut last_index_by_text: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (position, citation) in citing.iter().enumerate() {
        let Some(raw) = citation.usable_abstract() else {
            skipped += 1;
            continue;
        };
        let cleaned = clean_abstract(raw);

        // Later duplicates overwrite the mapping but keep the first slot.
        if last_index_by_text
            .insert(cleaned.to_string(), position)
            .is_none()
        {
            documents.push(cleaned.to_string());
        }
    }

    debug!(
        citing = citing.len(),
        skipped_without_abstract = skipped,
        documents = documents.len(),
        "Built abstract corpus"
    );

    Ok(Corpus {
        documents,
        last_index_by_text,
    })
}
