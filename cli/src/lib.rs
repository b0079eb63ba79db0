use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use textsearch_core::corpus::load_directory;
use textsearch_core::{DocId, IndexStore};

pub const PROMPT: &str = "Query (empty query to stop): ";

#[derive(Parser, Debug)]
#[command(name = "textsearch")]
#[command(about = "Index a directory of text files and run AND queries against it", long_about = None)]
pub struct Cli {
    /// Directory holding the files to index (not searched recursively)
    pub directory: PathBuf,
    /// Query the index interactively instead of printing it
    #[arg(short, long, default_value_t = false)]
    pub search: bool,
    /// Extension of the files to index
    #[arg(long, default_value = "txt")]
    pub extension: String,
}

pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<()> {
    let store = load_directory(&cli.directory, &cli.extension)?;
    if cli.search {
        run_queries(&store, input, out)
    } else {
        dump_index(&store, out)
    }
}

/// Print the index and title map as JSON, keys sorted.
pub fn dump_index<W: Write>(store: &IndexStore, out: &mut W) -> Result<()> {
    writeln!(out, "Index:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&store.index().sorted())?)?;
    writeln!(out, "File names -> document titles:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&store.sorted_titles())?)?;
    Ok(())
}

/// Prompt for queries until an empty line or end of input.
///
/// Queries are lowercased here and nowhere else; punctuation is passed through untouched.
pub fn run_queries<R: BufRead, W: Write>(store: &IndexStore, mut input: R, out: &mut W) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']).to_lowercase();
        if query.is_empty() {
            break;
        }
        if query.trim().is_empty() {
            tracing::warn!("rejected query with no terms");
            writeln!(out, "Query must contain at least one term.")?;
            continue;
        }
        let results = store.search(&query)?;
        render_results(store, &query, &results, out)?;
    }
    Ok(())
}

pub fn render_results<W: Write>(store: &IndexStore, query: &str, results: &[DocId], out: &mut W) -> Result<()> {
    writeln!(out, "Results for query '{query}':")?;
    if results.is_empty() {
        writeln!(out, "No results match that query.")?;
        return Ok(());
    }
    for hit in store.hits(results) {
        writeln!(out, "{}.  Title: {},  File: {}", hit.rank, hit.title, hit.id)?;
    }
    Ok(())
}
