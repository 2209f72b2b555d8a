use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

use crate::errors::SearchError;
use crate::results::SearchMatch;

/// Scans a single file for lines containing `query`.
///
/// Returns one [`SearchMatch`] per matching line, in physical line order.
/// Lines are split on `\n` with a trailing `\r` stripped, so CRLF files
/// produce the same line numbers and text on every platform. The query
/// comparison is an exact, case-sensitive substring test; an empty query
/// matches nothing.
pub fn scan_file(path: &Path, query: &str) -> Result<Vec<SearchMatch>, SearchError> {
    trace!("Scanning file: {}", path.display());

    if query.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SearchError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => SearchError::permission_denied(path),
        _ => SearchError::IoError(e),
    })?;

    // Invalid UTF-8 is replaced rather than failing the file; the lines
    // that do decode still get scanned.
    let contents = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = contents {
        warn!("Invalid UTF-8 replaced in file: {}", path.display());
    }

    let mut matches = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.contains(query) {
            matches.push(SearchMatch {
                path: path.to_path_buf(),
                line_number: index + 1,
                line_text: line.to_string(),
            });
        }
    }

    Ok(matches)
}
