// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ragrank command-line interface.
//!
//! Two subcommands: `search` ranks an article database against a new article
//! and prints the selected context records, `inspect` summarizes a database
//! and shows how the content gate will treat it.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ragrank",
    about = "Find the past articles most related to a new one",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a database against an article and print the top matches
    Search {
        /// Article database (.csv or .json)
        database: PathBuf,

        /// Article text to match against
        ///
        /// If omitted, the text is read from --query-file, or from stdin
        /// when neither is given.
        query: Option<String>,

        /// Read the article text from a file ("-" for stdin)
        #[arg(short = 'f', long, conflicts_with = "query")]
        query_file: Option<PathBuf>,

        /// Maximum number of articles to return (default: 5)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// JSON file with ranker settings (top_k, min_content_chars, max_context_chars)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the records as a JSON array instead of boxes
        #[arg(long)]
        json: bool,

        /// Show each record's bigram score
        #[arg(long)]
        explain: bool,
    },

    /// Summarize an article database
    Inspect {
        /// Article database (.csv or .json)
        database: PathBuf,

        /// JSON file with ranker settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
