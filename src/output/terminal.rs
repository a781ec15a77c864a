// Colored terminal output for ranked citations.

use colored::Colorize;

use crate::ranking::{Corpus, RankedPublication};
use crate::scholar::models::{Publication, BIB_FIELDS};

/// Abstract previews in the corpus view are cut to this many characters.
const PREVIEW_CHARS: usize = 240;

/// Display the anchor title and every ranked publication's fields.
pub fn display_ranked_publications(anchor: &Publication, ranked: &[RankedPublication]) {
    println!(
        "\n{} '{}'",
        "Input Document Title:".bold(),
        anchor.title
    );
    println!();

    if ranked.is_empty() {
        println!("No citing publications with an abstract to rank.");
        return;
    }

    println!(
        "{}",
        format!("=== Ranked Similarity List ({} publications) ===", ranked.len()).bold()
    );

    for entry in ranked {
        println!(
            "\n{} {}",
            format!("{}.", entry.rank).bold(),
            format!("[similarity: {:.3}]", entry.similarity).color(similarity_color(entry.similarity))
        );
        // Absent fields are omitted rather than printed blank.
        for field in BIB_FIELDS {
            if let Some(value) = entry.publication.field(field) {
                println!("  {}: {}", field.dimmed(), value);
            }
        }
    }
    println!();
}

/// Display the anchor abstract and the ranked corpus text.
pub fn display_ranked_corpus(corpus: &Corpus, ranked: &[(usize, f64)]) {
    println!(
        "\n{} '{}'",
        "Input Document:".bold(),
        preview(corpus.anchor(), PREVIEW_CHARS)
    );
    println!();
    println!("{}", "Ranked Similarity List:".bold());

    for (i, (idx, score)) in ranked.iter().enumerate() {
        let text = corpus.documents.get(*idx).map(String::as_str).unwrap_or("");
        println!(
            "{:>4}: [{:.3}] {}",
            i + 1,
            score,
            preview(text, PREVIEW_CHARS).dimmed()
        );
    }
    println!();
}

/// Cut `text` to its first `max_chars` characters, marking the cut with "...".
///
/// Cuts on a char boundary, so accented or CJK abstracts never split a glyph.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn similarity_color(score: f64) -> colored::Color {
    if score >= 0.5 {
        colored::Color::BrightGreen
    } else if score >= 0.2 {
        colored::Color::BrightYellow
    } else {
        colored::Color::BrightBlue
    }
}
