// CSV export of the anchor and its ranked citations.
//
// Header row is the bibliographic field names; the anchor comes first, then
// one row per ranked publication in rank order. Missing fields are empty.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{CiteRankError, Result};
use crate::ranking::RankedPublication;
use crate::scholar::models::{Publication, BIB_FIELDS};

fn export_err(path: &Path, source: impl Into<csv::Error>) -> CiteRankError {
    CiteRankError::Export {
        path: path.to_path_buf(),
        source: source.into(),
    }
}

/// Write the export rows to any writer.
pub fn write_rows<W: Write>(
    writer: W,
    anchor: &Publication,
    ranked: &[RankedPublication],
) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(BIB_FIELDS)?;

    let publications = std::iter::once(anchor).chain(ranked.iter().map(|r| &r.publication));
    for publication in publications {
        csv.write_record(BIB_FIELDS.iter().map(|f| publication.field(f).unwrap_or("")))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the export to `path` as UTF-8 CSV.
pub fn save(path: &Path, anchor: &Publication, ranked: &[RankedPublication]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| export_err(path, e))?;
    }
    let file = File::create(path).map_err(|e| export_err(path, e))?;
    write_rows(file, anchor, ranked).map_err(|e| export_err(path, e))?;

    info!(path = %path.display(), rows = ranked.len() + 1, "Wrote CSV export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_path_keeps_io_source() {
        use std::error::Error as _;

        let dir = tempfile::tempdir().unwrap();
        // A directory can't be opened as a file.
        let err = save(dir.path(), &Publication::new("A"), &[]).unwrap_err();
        assert!(matches!(err, CiteRankError::Export { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_rows_in_rank_order_with_empty_cells() {
        let anchor = Publication::new("Anchor")
            .with_abstract("about things")
            .with_author("A. Author");
        let ranked = vec![RankedPublication {
            rank: 1,
            similarity: 0.5,
            publication: Publication::new("Cited, with comma").with_eprint("https://x.org/p.pdf"),
        }];

        let mut buf = Vec::new();
        write_rows(&mut buf, &anchor, &ranked).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "title,abstract,author,eprint\n\
             Anchor,about things,A. Author,\n\
             \"Cited, with comma\",,,https://x.org/p.pdf\n"
        );
    }
}
