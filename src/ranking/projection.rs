// Projection from ranked corpus indices back to publications.
//
// corpus index → abstract text → last citing position → Publication.

use serde::Serialize;

use super::corpus::Corpus;
use crate::scholar::models::Publication;

/// A citing publication with its place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPublication {
    /// 1-based rank, most similar first
    pub rank: usize,
    /// Cosine similarity of its abstract to the anchor's
    pub similarity: f64,
    pub publication: Publication,
}

/// Map a scored ranking onto the citing publications it came from.
///
/// Indices the corpus can't resolve (the anchor, or anything out of range)
/// are skipped.
pub fn project(
    corpus: &Corpus,
    citing: &[Publication],
    ranked: &[(usize, f64)],
) -> Vec<RankedPublication> {
    ranked
        .iter()
        .filter_map(|&(idx, similarity)| {
            let position = corpus.citation_index(idx)?;
            citing.get(position).map(|p| (p.clone(), similarity))
        })
        .enumerate()
        .map(|(i, (publication, similarity))| RankedPublication {
            rank: i + 1,
            similarity,
            publication,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::corpus::build_corpus;

    #[test]
    fn test_duplicate_abstract_projects_to_last_citation() {
        let anchor = Publication::new("Anchor").with_abstract("anchor");
        let citing = vec![
            Publication::new("First copy").with_abstract("shared"),
            Publication::new("Other").with_abstract("other"),
            Publication::new("Second copy").with_abstract("shared"),
        ];
        let corpus = build_corpus(&anchor, &citing).unwrap();
        let ranked = project(&corpus, &citing, &[(2, 0.5), (1, 0.25)]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].publication.title, "Other");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].publication.title, "Second copy");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].similarity, 0.25);
    }

    #[test]
    fn test_anchor_index_is_skipped() {
        let anchor = Publication::new("Anchor").with_abstract("anchor");
        let corpus = build_corpus(&anchor, &[]).unwrap();
        assert!(project(&corpus, &[], &[(0, 1.0)]).is_empty());
    }
}
