use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tfidf_core::{EngineConfig, Mode, SearchEngine, SearchHit, DEFAULT_TOP_K};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Build or load a TF-IDF index over an XML collection and answer queries", long_about = None)]
struct Cli {
    /// Collection name; reads <name>.xml and writes/reads <name>.idf and <name>.tf
    #[arg(long, env = "SEARCH_COLLECTION", default_value = "nytsmall")]
    collection: String,
    /// "create" builds and persists the index, "read" loads it
    #[arg(long, env = "SEARCH_MODE", default_value = "read", value_parser = Mode::from_str)]
    mode: Mode,
    /// Directory holding the collection and index files
    #[arg(long, env = "SEARCH_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
    /// Maximum number of results per query
    #[arg(long, env = "SEARCH_TOP_K", default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Answer this query and exit instead of starting the interactive console
    query: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let config = EngineConfig { data_dir: cli.data_dir, collection: cli.collection, top_k: cli.top_k };
    let engine = SearchEngine::open(&config, cli.mode)
        .with_context(|| format!("failed to open collection {:?} in {}", config.collection, config.data_dir.display()))?;
    tracing::debug!(mode = ?cli.mode, top_k = config.top_k, "session opened");

    let stdout = io::stdout();
    if !cli.query.is_empty() {
        let hits = engine.execute_query(&cli.query);
        print_hits(&mut stdout.lock(), &hits, cli.json)?;
        return Ok(());
    }
    if cli.json {
        return run_json_console(&engine);
    }
    engine.run_console(io::stdin().lock(), stdout.lock())?;
    Ok(())
}

fn print_hits<W: Write>(out: &mut W, hits: &[SearchHit], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, hits)?;
        writeln!(out)?;
    } else if hits.is_empty() {
        writeln!(out, "No results found")?;
    } else {
        for hit in hits {
            writeln!(out, "{} {}", hit.doc_id, hit.score)?;
        }
    }
    Ok(())
}

/// One JSON array per input line; stops on an empty line.
fn run_json_console(engine: &SearchEngine) -> Result<()> {
    let mut out = io::stdout().lock();
    for line in io::stdin().lines() {
        let line = line?;
        let terms: Vec<&str> = line.split_whitespace().collect();
        if terms.is_empty() {
            break;
        }
        print_hits(&mut out, &engine.execute_query(&terms), true)?;
        out.flush()?;
    }
    Ok(())
}
