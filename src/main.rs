// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trietree - command-line entrypoint.
//!
//! Loads configuration, builds a tree from a word list and answers queries
//! against it.

use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use trietree_lib::config::{self, ConfigLoader, TrieTreeAppConfig};
use trietree_lib::data_structures::trie_tree;
use trietree_lib::error::{
    report_error, set_error_reporter, ErrorContext, TracingErrorReporter, TrieError, TrieResult,
};
use trietree_lib::utils::{logging, word_list};
use trietree_lib::TrieTree;

/// Command line arguments for trietree.
#[derive(Parser, Debug)]
#[clap(name = "trietree", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (overrides `words.source`)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every stored word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: OsString,
    },

    /// Report whether a word is stored
    Contains {
        /// Word to look up
        word: OsString,
    },

    /// Print every stored word
    List {
        /// Print a JSON array instead of one word per line
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Complete { .. } => "complete",
            Command::Contains { .. } => "contains",
            Command::List { .. } => "list",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

fn main() {
    let args = <Args as clap::Parser>::parse();
    let command = args.command.name();

    if let Err(error) = run(args) {
        report_error(&ErrorContext::new(error, "cli").with_details(format!("command: {command}")));
        process::exit(1);
    }
}

fn run(args: Args) -> TrieResult<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let app_config = loader.load()?;

    logging::init_logging(&app_config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration ok");
            Ok(())
        }
        Command::GenConfig { output } => write_default_config(&output),
        Command::Complete { prefix } => {
            // Arguments are raw OS strings; reject non-UTF-8 before reading input.
            let prefix = trie_tree::decode(prefix.as_encoded_bytes())?;
            let tree = build_tree(&app_config, args.words.as_deref())?;
            let completions = app_config
                .completion
                .apply(prefix, tree.complete(prefix));
            print_lines(&completions)
        }
        Command::Contains { word } => {
            let tree = build_tree(&app_config, args.words.as_deref())?;
            println!("{}", tree.contains_bytes(word.as_encoded_bytes())?);
            Ok(())
        }
        Command::List { json } => {
            let tree = build_tree(&app_config, args.words.as_deref())?;
            if json {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                serde_json::to_writer(&mut out, &tree)?;
                writeln!(out)?;
                Ok(())
            } else {
                print_lines(&tree.all_tree_strings())
            }
        }
    }
}

/// Builds the tree from the command-line word list, the configured source,
/// or standard input, in that order of preference.
fn build_tree(app_config: &TrieTreeAppConfig, words: Option<&Path>) -> TrieResult<TrieTree> {
    let mut tree = TrieTree::new();
    let source = words.or(app_config.words.source.as_deref());

    match source {
        Some(path) => {
            word_list::load_words_file(path, &app_config.words, &mut tree)?;
        }
        None => {
            info!("Reading word list from standard input");
            word_list::read_words(io::stdin().lock(), &app_config.words, &mut tree)?;
        }
    }

    info!(words = tree.len(), nodes = tree.node_count(), "Tree ready");
    Ok(tree)
}

fn print_lines(lines: &[String]) -> TrieResult<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn write_default_config(output: &Path) -> TrieResult<()> {
    info!("Generating default configuration");
    let default_config = TrieTreeAppConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| TrieError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
