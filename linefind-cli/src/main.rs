use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use linefind::{search, SearchConfig, SearchResults};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Searches every file beneath a directory for an exact, case-sensitive
/// substring and prints each matching line with its file and line number.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Word or phrase to search for; prompted for when omitted
    query: Option<String>,

    /// Root directory to search in; prompted for when omitted
    #[arg(short = 'd', long)]
    root: Option<PathBuf>,

    /// File extension to include (e.g. .txt); pass an empty string to
    /// search every file
    #[arg(short = 'e', long, default_value = linefind::config::DEFAULT_EXTENSION)]
    extension: String,

    /// Number of worker threads (default: available cores)
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Show only match statistics, not the matches themselves
    #[arg(short, long)]
    stats: bool,

    /// Emit the full result set as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    run(cli)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let query = match cli.query {
        Some(query) => query,
        None => prompt("Enter word or phrase: ")?,
    };
    let root = match cli.root {
        Some(root) => root,
        None => PathBuf::from(prompt("Enter directory to search: ")?),
    };

    // The engine cannot tell bad input from zero matches, so validate
    // before the call.
    if query.is_empty() {
        bail!("search query must not be empty");
    }
    if root.as_os_str().is_empty() {
        bail!("search directory must not be empty");
    }
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut config = SearchConfig::new(query.clone(), root).with_extension(cli.extension);
    if let Some(threads) = cli.threads {
        config = config.with_thread_count(threads);
    }

    let mut results = search(&config);
    debug!(
        "scanned {} files, skipped {}",
        results.files_scanned, results.files_skipped
    );
    // The engine reports matches in worker completion order; sort for a
    // stable presentation.
    results.sort_by_location();

    if cli.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &results)?;
        println!();
    } else {
        print_results(&results, &query, cli.stats);
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_results(results: &SearchResults, query: &str, stats_only: bool) {
    if stats_only {
        println!(
            "Found {} matches in {} files ({} scanned, {} skipped)",
            results.total_matches(),
            results.files_with_matches,
            results.files_scanned,
            results.files_skipped
        );
        return;
    }

    if results.is_empty() {
        println!("No matches found.");
        return;
    }

    for m in &results.matches {
        println!(
            "{} (line {}): {}",
            m.path.display().to_string().blue(),
            m.line_number.to_string().green(),
            highlight(&m.line_text, query)
        );
    }

    println!(
        "\nFound {} matches in {} files",
        results.total_matches(),
        results.files_with_matches
    );
}

/// Colors every occurrence of the query within the line.
fn highlight(line: &str, query: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(pos) = rest.find(query) {
        out.push_str(&rest[..pos]);
        out.push_str(&rest[pos..pos + query.len()].red().bold().to_string());
        rest = &rest[pos + query.len()..];
    }
    out.push_str(rest);
    out
}
