//! Run options handed from the command line to the checker.

use std::path::PathBuf;

/// Node file checked when no `--file` is given
pub const DEFAULT_NODE_FILE: &str = "/opt/OSInc/db/nervecenter.node";

/// How the result of a check is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain console lines (WARNING:/ERROR: prefixed), the historic format
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Options for a single check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub file_path: PathBuf,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl CheckConfig {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            verbose: false,
            format: OutputFormat::default(),
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_FILE)
    }
}

/// Clean up a node file argument.
///
/// Surrounding whitespace is dropped, as is a single leading `=`, so that
/// `-f=/opt/OSInc/db/nervecenter.node` and `-f "= nodes.txt"` both work.
pub fn parse_node_file_arg(raw: &str) -> Result<PathBuf, String> {
    let mut value = raw.trim();
    if let Some(stripped) = value.strip_prefix('=') {
        value = stripped.trim();
    }

    if value.is_empty() {
        return Err("node file path must not be empty".to_string());
    }

    Ok(PathBuf::from(value))
}
