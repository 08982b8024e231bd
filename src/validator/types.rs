//! Diagnostic and summary types produced by a node file check.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Placeholder used in messages for a node that never declared a name
pub const UNNAMED_NODE: &str = "<unnamed>";

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Progress output, only produced in verbose mode
    Info,
    /// Worth a look, does not fail the check
    Warning,
    /// Fails the check
    Error,
}

/// What a diagnostic is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    NodeStart,
    NodeEnd,
    FieldValue { keyword: &'static str, value: String },
    MissingId { name: Option<String>, start_line: usize },
    DuplicateId { id: String, first_line: usize, start_line: usize },
    DuplicateName { name: String, first_line: usize, start_line: usize },
    SharedAddress {
        address: String,
        name: Option<String>,
        start_line: usize,
        other_name: Option<String>,
        other_line: usize,
    },
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::NodeStart | DiagnosticKind::NodeEnd | DiagnosticKind::FieldValue { .. } => {
                Severity::Info
            }
            DiagnosticKind::MissingId { .. } | DiagnosticKind::SharedAddress { .. } => Severity::Warning,
            DiagnosticKind::DuplicateId { .. } | DiagnosticKind::DuplicateName { .. } => Severity::Error,
        }
    }
}

/// A single event raised while scanning, tied to the line that raised it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// The human-readable message, without the severity prefix
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::NodeStart => format!("New node starting at line {}", self.line),
            DiagnosticKind::NodeEnd => format!("  ends at line {}", self.line),
            DiagnosticKind::FieldValue { keyword, value } => format!("  {} {}", keyword, value),
            DiagnosticKind::MissingId { name, start_line } => format!(
                "Node {} at line {} does not have an id",
                display_name(name),
                start_line
            ),
            DiagnosticKind::DuplicateId { id, first_line, start_line } => format!(
                "The nodes at line {} and {} both have the id {}",
                first_line, start_line, id
            ),
            DiagnosticKind::DuplicateName { name, first_line, start_line } => format!(
                "The nodes at line {} and {} both have the name {}",
                first_line, start_line, name
            ),
            DiagnosticKind::SharedAddress {
                address,
                name,
                start_line,
                other_name,
                other_line,
            } => format!(
                "Node {} (line {}) and node {} (line {}) both have ip address {}",
                display_name(name),
                start_line,
                display_name(other_name),
                other_line,
                address
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity() {
            Severity::Info => write!(f, "{}", self.message()),
            Severity::Warning => write!(f, "WARNING: {}", self.message()),
            Severity::Error => write!(f, "ERROR: {}", self.message()),
        }
    }
}

fn display_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or(UNNAMED_NODE)
}

/// Final counts of a check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub node_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Overall result of a check, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No errors (warnings allowed)
    Clean,
    /// At least one duplicate id or duplicate name
    Failed,
    /// The node file could not be opened or read
    Fatal,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::Failed => 1,
            Outcome::Fatal => 2,
        }
    }
}

/// Everything a completed scan produced, in line order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub source: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

impl Report {
    pub fn outcome(&self) -> Outcome {
        if self.summary.error_count > 0 {
            Outcome::Failed
        } else {
            Outcome::Clean
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity() == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_messages() {
        let missing = Diagnostic::new(
            12,
            DiagnosticKind::MissingId { name: Some("moose".to_string()), start_line: 8 },
        );
        assert_eq!(missing.to_string(), "WARNING: Node moose at line 8 does not have an id");

        let dup_id = Diagnostic::new(
            9,
            DiagnosticKind::DuplicateId { id: "10".to_string(), first_line: 1, start_line: 7 },
        );
        assert_eq!(dup_id.to_string(), "ERROR: The nodes at line 1 and 7 both have the id 10");

        let dup_name = Diagnostic::new(
            9,
            DiagnosticKind::DuplicateName { name: "moose".to_string(), first_line: 1, start_line: 7 },
        );
        assert_eq!(dup_name.to_string(), "ERROR: The nodes at line 1 and 7 both have the name moose");

        let shared = Diagnostic::new(
            10,
            DiagnosticKind::SharedAddress {
                address: "10.0.0.1".to_string(),
                name: Some("elk".to_string()),
                start_line: 7,
                other_name: Some("moose".to_string()),
                other_line: 1,
            },
        );
        assert_eq!(
            shared.to_string(),
            "WARNING: Node elk (line 7) and node moose (line 1) both have ip address 10.0.0.1"
        );
    }

    #[test]
    fn test_verbose_messages_have_no_prefix() {
        assert_eq!(
            Diagnostic::new(3, DiagnosticKind::NodeStart).to_string(),
            "New node starting at line 3"
        );
        assert_eq!(Diagnostic::new(8, DiagnosticKind::NodeEnd).to_string(), "  ends at line 8");
        assert_eq!(
            Diagnostic::new(4, DiagnosticKind::FieldValue { keyword: "name", value: "moose".to_string() })
                .to_string(),
            "  name moose"
        );
    }

    #[test]
    fn test_unnamed_node() {
        let missing = Diagnostic::new(4, DiagnosticKind::MissingId { name: None, start_line: 2 });
        assert_eq!(missing.message(), "Node <unnamed> at line 2 does not have an id");
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Clean.exit_code(), 0);
        assert_eq!(Outcome::Failed.exit_code(), 1);
        assert_eq!(Outcome::Fatal.exit_code(), 2);

        let mut report = Report {
            source: PathBuf::from("nodes"),
            diagnostics: Vec::new(),
            summary: Summary { node_count: 2, error_count: 0, warning_count: 3 },
        };
        assert_eq!(report.outcome(), Outcome::Clean);
        report.summary.error_count = 1;
        assert_eq!(report.outcome(), Outcome::Failed);
    }
}
