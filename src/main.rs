use std::process;
use std::time::Duration;

use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use talpa::client::{Readiness, SearchClient};
use talpa::config::SearchConfig;
use talpa::corpus::corpus_stats;
use talpa::error::SearchError;
use talpa::fetch::{default_http_client, CorpusSource};
use talpa::suggest::Suggestion;

mod cli;
use cli::display;
use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            query,
            corpus,
            limit,
            threshold,
            score_cutoff,
        } => run_search(&query, &corpus, limit, threshold, score_cutoff).await,
        Commands::Inspect { corpus } => run_inspect(&corpus).await,
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

async fn run_search(
    query: &str,
    corpus: &str,
    limit: usize,
    threshold: f64,
    score_cutoff: f64,
) -> Result<(), SearchError> {
    let config = SearchConfig {
        threshold,
        score_cutoff,
        limit,
        ..SearchConfig::default()
    };
    let source = CorpusSource::parse(corpus);
    let client = SearchClient::with_config(source, config)?;

    if query.chars().count() < client.config().min_query_len {
        println!(
            "query too short (minimum {} characters)",
            client.config().min_query_len
        );
        return Ok(());
    }

    let spinner = loading_spinner(client.source());
    let readiness = client.ensure_loaded().await;
    spinner.finish_and_clear();

    if readiness == Readiness::Failed {
        let message = client.load_error().unwrap_or("unknown failure").to_string();
        return Err(SearchError::Load(message));
    }

    let hits = client.query(query).await;
    if hits.is_empty() {
        println!("no matches for \"{}\"", query);
        return Ok(());
    }

    let color = display::use_colors();
    for hit in &hits {
        let suggestion = Suggestion::from_record(&hit.record).to_string();
        let mut lines = suggestion.lines();
        if let Some(first) = lines.next() {
            println!(
                "{}  {}",
                display::score_value(hit.score, color),
                display::styled(display::colors::CYAN, first, color)
            );
        }
        for line in lines {
            println!("       {}", display::styled(display::colors::CYAN, line, color));
        }
        if let Some(span) = hit.matches.first() {
            println!("       {}", display::highlight_snippet(hit, span, color));
        }
        let url = format!("→ {}", client.navigate(&hit.record));
        println!("       {}", display::styled(display::colors::DIM, &url, color));
        println!();
    }
    Ok(())
}

async fn run_inspect(corpus: &str) -> Result<(), SearchError> {
    let source = CorpusSource::parse(corpus);
    let http = default_http_client()?;

    let spinner = loading_spinner(&source);
    let result = source.load(&http).await;
    spinner.finish_and_clear();

    let records = result?;
    let stats = corpus_stats(&records);

    println!("corpus: {}", source.describe());
    println!("  records:   {}", stats.records);
    println!("  chapters:  {}", stats.chapters);
    println!("  pages:     {}", stats.pages);
    println!("  anchored:  {}", stats.anchored);
    println!("  with code: {}", stats.with_code);
    Ok(())
}

/// Spinner shown while a corpus load is in flight. Draws to stderr, so it
/// never contaminates piped results, and indicatif hides it off-TTY.
fn loading_spinner(source: &CorpusSource) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("loading {}", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
