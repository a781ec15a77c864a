// Query pipeline — retrieval (or snapshot), corpus, ranking, projection.
//
// `retrieve` decides where the (publication, citations) pair comes from;
// `rank_citations` runs the pure ranking core over it. The binary glues the
// two together and handles display and export.

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::ranking::{build_corpus, project, rank_with_scores, Corpus, RankedPublication};
use crate::scholar::models::Publication;
use crate::scholar::traits::ScholarlyIndex;
use crate::snapshot;

/// Where a retrieved pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Fetched from the scholarly index during this run
    Index,
    /// Read from the snapshot file because `--load` was given
    Snapshot,
    /// Read from the snapshot file after the index could not be reached
    SnapshotFallback,
}

/// The anchor publication and the works citing it.
#[derive(Debug, Clone)]
pub struct Retrieved {
    pub publication: Publication,
    pub citations: Vec<Publication>,
    pub source: Source,
}

/// What to do about the snapshot file during retrieval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetrieveOptions {
    /// Skip the index and read the snapshot
    pub load: bool,
    /// Write a snapshot after a successful fresh retrieval
    pub save: bool,
}

/// Get the (publication, citations) pair for `query`.
///
/// A retrieval failure falls back to the configured snapshot when one
/// exists; every other failure is returned as is.
pub async fn retrieve(
    index: &dyn ScholarlyIndex,
    query: &str,
    config: &Config,
    options: RetrieveOptions,
) -> Result<Retrieved> {
    if options.load {
        let snap = snapshot::load(&config.snapshot_path)?;
        return Ok(Retrieved {
            publication: snap.publication,
            citations: snap.citations,
            source: Source::Snapshot,
        });
    }

    match fetch(index, query).await {
        Ok((publication, citations)) => {
            if options.save {
                snapshot::save(&config.snapshot_path, &publication, &citations)?;
            }
            Ok(Retrieved {
                publication,
                citations,
                source: Source::Index,
            })
        }
        Err(e) if e.is_retrieval() && config.snapshot_path.is_file() => {
            warn!(
                error = %e,
                path = %config.snapshot_path.display(),
                "Index unreachable, using saved snapshot instead"
            );
            let snap = snapshot::load(&config.snapshot_path)?;
            Ok(Retrieved {
                publication: snap.publication,
                citations: snap.citations,
                source: Source::SnapshotFallback,
            })
        }
        Err(e) => Err(e),
    }
}

async fn fetch(index: &dyn ScholarlyIndex, query: &str) -> Result<(Publication, Vec<Publication>)> {
    let publication = index.search(query).await?;
    let citations = index.citations_of(&publication).await?;
    Ok((publication, citations))
}

/// Output of the ranking core for one query.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub corpus: Corpus,
    /// Corpus indices with their similarity to the anchor, best first
    pub scored: Vec<(usize, f64)>,
    pub publications: Vec<RankedPublication>,
}

/// Build the corpus, rank it against the anchor, and project back to publications.
pub fn rank_citations(publication: &Publication, citations: &[Publication]) -> Result<Ranking> {
    let corpus = build_corpus(publication, citations)?;
    let scored = rank_with_scores(&corpus.documents, 0)?;
    let publications = project(&corpus, citations, &scored);

    info!(
        citations = citations.len(),
        ranked = publications.len(),
        "Ranked citing publications"
    );

    Ok(Ranking {
        corpus,
        scored,
        publications,
    })
}
