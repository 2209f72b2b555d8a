use ignore::WalkBuilder;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use tracing::{debug, info};

use super::scanner::scan_file;
use crate::config::SearchConfig;
use crate::filters::matches_extension;
use crate::results::SearchResults;

/// Performs a blocking concurrent search as described by `config`.
///
/// Every failure mode degrades to fewer results instead of an error: a
/// root that does not exist, is not a directory, or cannot be traversed
/// enumerates zero files; an unreadable file is skipped; an empty query
/// matches nothing. Callers that need to tell "no matches" from "bad
/// input" must validate the inputs before the call.
///
/// The worker fan-out is built fresh per call and torn down before
/// returning; no pool or other state persists between searches. Separate
/// calls share nothing and are safe to run concurrently.
pub fn search(config: &SearchConfig) -> SearchResults {
    info!(
        "Starting search for {:?} under {}",
        config.query,
        config.root_path.display()
    );

    if config.query.is_empty() {
        debug!("Empty query, returning empty result");
        return SearchResults::new();
    }

    let files = enumerate_files(config);
    debug!("Found {} files to scan", files.len());

    if files.is_empty() {
        return SearchResults::new();
    }

    let workers = worker_count(config.thread_count.get(), files.len());
    let shared = Mutex::new(SearchResults::new());

    thread::scope(|scope| {
        for worker in 0..workers {
            let files = &files;
            let shared = &shared;
            let query = config.query.as_str();
            scope.spawn(move || {
                let mut local = SearchResults::new();
                // Round-robin assignment: worker `t` takes file indices
                // t, t + workers, t + 2 * workers, ...
                for path in files.iter().skip(worker).step_by(workers) {
                    match scan_file(path, query) {
                        Ok(matches) => local.add_file_matches(matches),
                        Err(e) => {
                            debug!("Skipping {}: {}", path.display(), e);
                            local.add_skipped_file();
                        }
                    }
                }
                // One guarded append per worker; the lock is never held
                // while scanning.
                let mut results = shared.lock().unwrap_or_else(|e| e.into_inner());
                results.merge(local);
            });
        }
    });

    let results = shared.into_inner().unwrap_or_else(|e| e.into_inner());
    info!(
        "Search complete. Found {} matches in {} files",
        results.total_matches(),
        results.files_with_matches
    );
    results
}

/// Collects every regular file under the root that passes the extension
/// filter. Traversal errors are dropped, so an invalid or unreadable root
/// yields an empty list rather than an error.
fn enumerate_files(config: &SearchConfig) -> Vec<PathBuf> {
    if !config.root_path.is_dir() {
        return Vec::new();
    }

    let mut builder = WalkBuilder::new(&config.root_path);
    // No hidden-file or ignore-file filtering: every regular file in the
    // tree is a candidate.
    builder.standard_filters(false);

    builder
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| matches_extension(entry.path(), config.extension.as_deref()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Number of workers for `file_count` files: never more workers than
/// files, never zero for a non-empty list.
fn worker_count(thread_count: usize, file_count: usize) -> usize {
    thread_count.min(file_count).max(1)
}
