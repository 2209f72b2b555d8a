use std::path::Path;

/// Checks whether a path passes the extension filter.
///
/// `None` admits every path. The filter may be written with or without the
/// leading dot (".txt" and "txt" select the same files); the comparison
/// against the file's extension is exact and case-sensitive. A file with no
/// extension never passes a non-empty filter.
pub fn matches_extension(path: &Path, filter: Option<&str>) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    let want = filter.strip_prefix('.').unwrap_or(filter);
    if want.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == want)
}
