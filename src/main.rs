use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use citerank::config::Config;
use citerank::pipeline::{self, RetrieveOptions, Source};
use citerank::scholar::client::SemanticScholarClient;

/// citerank: rank the works citing a paper by abstract similarity.
///
/// Takes the title of an article, finds it in the Semantic Scholar index,
/// and lists the publications citing it, most similar abstract first.
#[derive(Parser)]
#[command(name = "citerank", version, about)]
struct Cli {
    /// Title of the article to search for
    title: String,

    /// Load a previously saved query snapshot instead of searching
    #[arg(long)]
    load: bool,

    /// Save the retrieved publication and citations as a snapshot
    #[arg(long)]
    save: bool,

    /// Write the ranked list to a CSV file
    #[arg(long)]
    output: bool,

    /// Snapshot file location (overrides CITERANK_SNAPSHOT_PATH)
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// CSV export location (overrides CITERANK_EXPORT_PATH)
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Maximum number of citing publications to fetch
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Print the ranked abstract text instead of publication fields
    #[arg(long)]
    show_corpus: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("citerank=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?.with_overrides(cli.snapshot, cli.export, cli.limit);

    let client = SemanticScholarClient::new(
        &config.api_url,
        config.api_key.clone(),
        config.max_citations,
    )?;

    if !cli.load {
        println!("Searching for \"{}\"...", cli.title);
    }

    let retrieved = pipeline::retrieve(
        &client,
        &cli.title,
        &config,
        RetrieveOptions {
            load: cli.load,
            save: cli.save,
        },
    )
    .await
    .with_context(|| format!("Could not retrieve citations for \"{}\"", cli.title))?;

    match retrieved.source {
        Source::Index if cli.save => {
            println!("Query saved to {}", config.snapshot_path.display())
        }
        Source::SnapshotFallback => println!(
            "{} index unreachable, using snapshot {}",
            "Warning:".yellow(),
            config.snapshot_path.display()
        ),
        _ => {}
    }

    println!("Ranking {} citing publications...", retrieved.citations.len());

    let ranking = pipeline::rank_citations(&retrieved.publication, &retrieved.citations)
        .context("Could not rank citations")?;

    if cli.show_corpus {
        citerank::output::terminal::display_ranked_corpus(&ranking.corpus, &ranking.scored);
    } else {
        citerank::output::terminal::display_ranked_publications(
            &retrieved.publication,
            &ranking.publications,
        );
    }

    if cli.output {
        citerank::output::csv_export::save(
            &config.export_path,
            &retrieved.publication,
            &ranking.publications,
        )?;
        println!(
            "{}",
            format!("Results saved to: {}", config.export_path.display()).bold()
        );
    }

    info!(ranked = ranking.publications.len(), "Done");
    Ok(())
}
