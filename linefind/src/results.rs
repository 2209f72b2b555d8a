use serde::Serialize;
use std::path::PathBuf;

/// A single occurrence of the query within a file.
///
/// `line_number` is 1-based and counts every line read, matching or not.
/// `line_text` holds the full matching line without its terminator. A line
/// is reported once no matter how many times the query occurs on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchMatch {
    /// Path to the file, as produced by directory enumeration
    pub path: PathBuf,
    /// 1-based line number of the matching line
    pub line_number: usize,
    /// Contents of the matching line, without the line terminator
    pub line_text: String,
}

/// The aggregated outcome of one search operation.
///
/// Matches appear in worker completion order, which is not stable across
/// runs; callers that need deterministic output should call
/// [`SearchResults::sort_by_location`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    /// Every matching line found
    pub matches: Vec<SearchMatch>,
    /// Number of files that were scanned
    pub files_scanned: usize,
    /// Number of files that held at least one match
    pub files_with_matches: usize,
    /// Number of files that could not be read and were skipped
    pub files_skipped: usize,
}

impl SearchResults {
    /// Creates a new empty result set
    pub fn new() -> Self {
        Default::default()
    }

    /// Records the outcome of scanning one file
    pub fn add_file_matches(&mut self, matches: Vec<SearchMatch>) {
        self.files_scanned += 1;
        if !matches.is_empty() {
            self.files_with_matches += 1;
        }
        self.matches.extend(matches);
    }

    /// Records a file that could not be read
    pub fn add_skipped_file(&mut self) {
        self.files_skipped += 1;
    }

    /// Merges another result set into this one
    pub fn merge(&mut self, other: SearchResults) {
        self.files_scanned += other.files_scanned;
        self.files_with_matches += other.files_with_matches;
        self.files_skipped += other.files_skipped;
        self.matches.extend(other.matches);
    }

    /// Total number of matching lines
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    /// True when no line matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Sorts matches by `(path, line_number)` for deterministic output.
    /// The engine itself never sorts.
    pub fn sort_by_location(&mut self) {
        self.matches
            .sort_by(|a, b| (&a.path, a.line_number).cmp(&(&b.path, b.line_number)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(path: &str, line_number: usize, line_text: &str) -> SearchMatch {
        SearchMatch {
            path: PathBuf::from(path),
            line_number,
            line_text: line_text.to_string(),
        }
    }

    #[test]
    fn test_new_is_empty() {
        let results = SearchResults::new();
        assert!(results.is_empty());
        assert_eq!(results.total_matches(), 0);
        assert_eq!(results.files_scanned, 0);
        assert_eq!(results.files_with_matches, 0);
        assert_eq!(results.files_skipped, 0);
    }

    #[test]
    fn test_add_file_matches() {
        let mut results = SearchResults::new();

        results.add_file_matches(vec![
            make_match("a.txt", 1, "hit one"),
            make_match("a.txt", 4, "hit two"),
        ]);
        assert_eq!(results.total_matches(), 2);
        assert_eq!(results.files_scanned, 1);
        assert_eq!(results.files_with_matches, 1);

        // A scanned file without matches bumps only the scan counter
        results.add_file_matches(vec![]);
        assert_eq!(results.total_matches(), 2);
        assert_eq!(results.files_scanned, 2);
        assert_eq!(results.files_with_matches, 1);
    }

    #[test]
    fn test_merge() {
        let mut left = SearchResults::new();
        left.add_file_matches(vec![make_match("a.txt", 1, "hit")]);

        let mut right = SearchResults::new();
        right.add_file_matches(vec![
            make_match("b.txt", 2, "hit"),
            make_match("b.txt", 3, "hit"),
        ]);
        right.add_file_matches(vec![]);
        right.add_skipped_file();

        left.merge(right);
        assert_eq!(left.total_matches(), 3);
        assert_eq!(left.files_scanned, 3);
        assert_eq!(left.files_with_matches, 2);
        assert_eq!(left.files_skipped, 1);
    }

    #[test]
    fn test_merge_empty_changes_nothing() {
        let mut results = SearchResults::new();
        results.add_file_matches(vec![make_match("a.txt", 1, "hit")]);

        results.merge(SearchResults::new());
        assert_eq!(results.total_matches(), 1);
        assert_eq!(results.files_scanned, 1);
    }

    #[test]
    fn test_sort_by_location() {
        let mut results = SearchResults::new();
        results.matches = vec![
            make_match("b.txt", 1, "z"),
            make_match("a.txt", 9, "y"),
            make_match("a.txt", 2, "x"),
        ];

        results.sort_by_location();
        let order: Vec<(&str, usize)> = results
            .matches
            .iter()
            .map(|m| (m.path.to_str().unwrap(), m.line_number))
            .collect();
        assert_eq!(order, vec![("a.txt", 2), ("a.txt", 9), ("b.txt", 1)]);
    }
}
