// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use ragrank::{
    load_database, select_candidates, ContextRecord, Document, QueryBigrams, Ranker, RankerConfig,
};

mod cli;
use cli::display::{self, BOLD};
use cli::{Cli, Commands};

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "RAGRANK_LOG";

struct SearchOptions {
    database: PathBuf,
    query: Option<String>,
    query_file: Option<PathBuf>,
    top_k: Option<usize>,
    config: Option<PathBuf>,
    json: bool,
    explain: bool,
}

/// A context record with the score that selected it, for `--json --explain`.
#[derive(Serialize)]
struct ExplainedRecord<'a> {
    #[serde(flatten)]
    record: &'a ContextRecord,
    score: u32,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            database,
            query,
            query_file,
            top_k,
            config,
            json,
            explain,
        } => run_search(SearchOptions {
            database,
            query,
            query_file,
            top_k,
            config,
            json,
            explain,
        }),
        Commands::Inspect { database, config } => run_inspect(&database, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (if any), then the `--top-k` override.
fn load_config(path: Option<&Path>, top_k: Option<usize>) -> Result<RankerConfig> {
    let mut config = match path {
        Some(path) => RankerConfig::from_file(path)?,
        None => RankerConfig::default(),
    };
    if let Some(top_k) = top_k {
        config.top_k = top_k;
    }
    config.validate()?;
    debug!(?config, "ranker configuration");
    Ok(config)
}

fn load_articles(path: &Path) -> Result<Vec<Document>> {
    let documents = load_database(path)
        .with_context(|| format!("Failed to load article database {}", path.display()))?;
    eprintln!(
        "  ✓ {} articles from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Query text from the argument, a file, or stdin.
fn read_query(query: Option<String>, query_file: Option<&Path>) -> Result<String> {
    if let Some(query) = query {
        return Ok(query);
    }

    match query_file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read query from stdin")?;
            Ok(raw)
        }
    }
}

fn run_search(opts: SearchOptions) -> Result<()> {
    let config = load_config(opts.config.as_deref(), opts.top_k)?;
    let documents = load_articles(&opts.database)?;
    let query = read_query(opts.query, opts.query_file.as_deref())?;

    let bigrams = QueryBigrams::from_query(&query);
    if bigrams.is_empty() {
        warn!("query has no bigrams to match; results follow database order");
    }

    let candidates = select_candidates(&documents, config.min_content_chars);
    if candidates.fallback {
        eprintln!(
            "⚠️  No article has more than {} characters of content; ranking all {}",
            config.min_content_chars,
            documents.len()
        );
    }

    let ranker = Ranker::new(config);
    let top = ranker.top_candidates(&query, &documents);
    if top.is_empty() {
        bail!("No related articles found in {}", opts.database.display());
    }

    let records: Vec<ContextRecord> = top
        .iter()
        .map(|candidate| ContextRecord::from_document(candidate.doc, config.max_context_chars))
        .collect();

    if opts.json {
        let output = if opts.explain {
            let explained: Vec<ExplainedRecord<'_>> = records
                .iter()
                .zip(&top)
                .map(|(record, candidate)| ExplainedRecord {
                    record,
                    score: candidate.score,
                })
                .collect();
            serde_json::to_string_pretty(&explained)?
        } else {
            serde_json::to_string_pretty(&records)?
        };
        println!("{}", output);
        return Ok(());
    }

    display::banner(&format!(
        "{} related articles · {} query bigrams",
        records.len(),
        bigrams.len()
    ));
    for (rank, (record, candidate)) in records.iter().zip(&top).enumerate() {
        display::section_top(&format!("#{} · {}", rank + 1, record.id));
        display::row(&format!(
            " {}",
            display::themed(display::BRIGHT_CYAN, &[BOLD], &record.title)
        ));
        if opts.explain {
            display::field_row(
                "score",
                &display::score_fraction(candidate.score, bigrams.len()),
                8,
            );
        }
        display::section_mid("content");
        display::text_rows(&record.content);
        display::section_bot();
    }

    Ok(())
}

fn run_inspect(database: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, None)?;
    let documents = load_articles(database)?;
    let candidates = select_candidates(&documents, config.min_content_chars);

    let missing_id = documents.iter().filter(|d| d.id().is_none()).count();
    let missing_title = documents.iter().filter(|d| d.title().is_none()).count();
    let missing_content = documents.iter().filter(|d| d.content().is_none()).count();
    let total_chars: usize = documents.iter().map(Document::content_chars).sum();
    let truncated = documents
        .iter()
        .filter(|d| d.content_chars() > config.max_context_chars)
        .count();
    let extra_columns: BTreeSet<&str> = documents
        .iter()
        .flat_map(|d| d.extra.keys().map(String::as_str))
        .collect();

    const LABEL: usize = 22;

    display::banner(&database.display().to_string());

    display::section_top("Articles");
    display::field_row("total", &documents.len().to_string(), LABEL);
    display::field_row(
        &format!("content > {} chars", config.min_content_chars),
        &candidates.len().to_string(),
        LABEL,
    );
    display::field_row("fallback", &display::flag(candidates.fallback), LABEL);
    display::field_row(
        &format!("truncated at {}", config.max_context_chars),
        &truncated.to_string(),
        LABEL,
    );
    display::field_row(
        "avg content chars",
        &format!("{:.0}", total_chars as f64 / documents.len() as f64),
        LABEL,
    );
    if let Ok(meta) = fs::metadata(database) {
        display::field_row("file size", &display::format_size(meta.len()), LABEL);
    }

    display::section_mid("Missing fields");
    display::field_row("id", &missing_id.to_string(), LABEL);
    display::field_row("title", &missing_title.to_string(), LABEL);
    display::field_row("content", &missing_content.to_string(), LABEL);

    display::section_mid("Extra columns");
    if extra_columns.is_empty() {
        display::row(&format!(" {}", display::themed(display::GRAY, &[], "(none)")));
    } else {
        display::text_rows(&extra_columns.into_iter().collect::<Vec<_>>().join(", "));
    }
    display::section_bot();

    Ok(())
}
