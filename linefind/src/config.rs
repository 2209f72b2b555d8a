use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Extension applied when no filter is given explicitly.
pub const DEFAULT_EXTENSION: &str = ".txt";

const FALLBACK_THREAD_COUNT: usize = 2;

/// Configuration for a single search operation.
///
/// Construct with [`SearchConfig::new`] and adjust through the builder
/// methods. There is no configuration file; every run is described entirely
/// by one of these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The substring to search for (exact, case-sensitive). An empty
    /// query matches nothing.
    pub query: String,

    /// The root directory to start searching from
    pub root_path: PathBuf,

    /// File extension to include (e.g. ".txt"); `None` searches every file
    #[serde(default)]
    pub extension: Option<String>,

    /// Number of worker threads to use for parallel search
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get())
        .unwrap_or_else(|| NonZeroUsize::new(FALLBACK_THREAD_COUNT).unwrap())
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            query: String::new(),
            root_path: PathBuf::from("."),
            extension: Some(DEFAULT_EXTENSION.to_string()),
            thread_count: default_thread_count(),
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with the given query and root path
    pub fn new(query: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        SearchConfig {
            query: query.into(),
            root_path: root_path.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the extension filter. An empty string
    /// disables filtering so that every file is searched.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = if extension.is_empty() {
            None
        } else {
            Some(extension)
        };
        self
    }

    /// Builder method to set the number of worker threads
    pub fn with_thread_count(mut self, count: NonZeroUsize) -> Self {
        self.thread_count = count;
        self
    }
}
