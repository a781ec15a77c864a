// Query snapshot — the retrieved (publication, citations) pair on disk.
//
// Saved after a fresh search with `--save`, read back with `--load`, and
// used as a stand-in when the index can't be reached. Stored as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CiteRankError, Result, SnapshotError};
use crate::scholar::models::Publication;

/// Everything retrieval produced for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub publication: Publication,
    pub citations: Vec<Publication>,
}

fn snapshot_err(path: &Path, source: impl Into<SnapshotError>) -> CiteRankError {
    CiteRankError::Snapshot {
        path: path.to_path_buf(),
        source: source.into(),
    }
}

/// Write the snapshot to `path`, replacing any previous one.
pub fn save(path: &Path, publication: &Publication, citations: &[Publication]) -> Result<()> {
    #[derive(Serialize)]
    struct SnapshotRef<'a> {
        publication: &'a Publication,
        citations: &'a [Publication],
    }

    let json = serde_json::to_string_pretty(&SnapshotRef {
        publication,
        citations,
    })
    .map_err(|e| snapshot_err(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| snapshot_err(path, e))?;
    }
    fs::write(path, json).map_err(|e| snapshot_err(path, e))?;

    info!(
        path = %path.display(),
        citations = citations.len(),
        "Saved query snapshot"
    );
    Ok(())
}

/// Read a snapshot previously written by `save`.
pub fn load(path: &Path) -> Result<Snapshot> {
    let json = fs::read_to_string(path).map_err(|e| snapshot_err(path, e))?;
    let snapshot: Snapshot = serde_json::from_str(&json).map_err(|e| snapshot_err(path, e))?;

    info!(
        path = %path.display(),
        title = %snapshot.publication.title,
        citations = snapshot.citations.len(),
        "Loaded query snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_snapshot_io_error() {
        let err = load(Path::new("/nonexistent/citerank/snapshot.json")).unwrap_err();
        assert!(matches!(
            err,
            CiteRankError::Snapshot {
                source: SnapshotError::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_corrupt_file_is_snapshot_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            CiteRankError::Snapshot {
                source: SnapshotError::Json(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_optional_fields_stay_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("q.json");
        let anchor = Publication::new("Anchor").with_abstract("text");
        let citing = vec![Publication::new("Bare"), Publication::new("Empty").with_abstract("")];

        save(&path, &anchor, &citing).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.publication, anchor);
        assert_eq!(loaded.citations[0].abstract_text, None);
        assert_eq!(loaded.citations[1].abstract_text.as_deref(), Some(""));
    }
}
