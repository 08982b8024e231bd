//! Node file validator.
//!
//! A single forward pass over the lines of a node file. The validator tracks
//! whether it is inside a `begin node` / `end node` span, collects the id,
//! name and address of the open node, and checks them against the registries:
//!
//! - duplicate id: error
//! - duplicate name: error
//! - IP address already claimed by another node: warning
//! - node without an id in a file whose nodes carry ids: warning
//!
//! Per-node fields are reset on `begin node`, so nothing carries over from
//! the previous node. Field lines outside a node are ignored.
//!
//! A node's `address` line may come before its `name` line. The address is
//! then registered unnamed and named once the `name` line arrives, and a
//! shared-address warning raised in between is held back until then (or
//! until `end node`), so both nodes are reported by name. The finished
//! report is ordered by line.
//!
//! Diagnostics are collected into a [`Report`] rather than printed, so the
//! caller decides how to present them and a read failure halfway through the
//! file never leaves partial output behind.

pub mod record;
pub mod types;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::registry::{AddressOwner, NodeRegistry};
use crate::scanner::{self, Directive, Field};

pub use record::{ActiveRecord, RecordState};
pub use types::{Diagnostic, DiagnosticKind, Outcome, Report, Severity, Summary, UNNAMED_NODE};

/// State of one check run
#[derive(Debug, Default)]
pub struct Validator {
    verbose: bool,
    registry: NodeRegistry,
    record: RecordState,
    summary: Summary,
    diagnostics: Vec<Diagnostic>,
}

impl Validator {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Feed one line; `line_number` is 1-based
    pub fn process_line(&mut self, line_number: usize, line: &str) {
        match scanner::classify(line) {
            Directive::BeginNode => self.begin_node(line_number),
            Directive::EndNode => self.end_node(line_number),
            Directive::Field(field, value) => self.field(line_number, field, value),
            Directive::Blank | Directive::Other => {}
        }
    }

    /// Close the scan and hand back everything it produced
    pub fn finish(mut self, source: &Path) -> Report {
        if let Some(mut record) = self.record.end() {
            warn!(
                "{}: node starting at line {} has no matching 'end node'",
                source.display(),
                record.start_line
            );
            self.flush_shared(std::mem::take(&mut record.pending_shared), record.name.as_deref());
        }

        // Held-back warnings were emitted late; the sort is stable
        self.diagnostics.sort_by_key(|d| d.line);

        info!(
            "Checked {}: {} nodes, {} errors, {} warnings",
            source.display(),
            self.summary.node_count,
            self.summary.error_count,
            self.summary.warning_count
        );

        Report {
            source: source.to_path_buf(),
            diagnostics: self.diagnostics,
            summary: self.summary,
        }
    }

    fn begin_node(&mut self, line_number: usize) {
        self.summary.node_count += 1;

        if let Some(mut abandoned) = self.record.begin(line_number) {
            warn!(
                "Node starting at line {} has no 'end node' before the next node at line {}",
                abandoned.start_line, line_number
            );
            self.flush_shared(std::mem::take(&mut abandoned.pending_shared), abandoned.name.as_deref());
        }

        self.emit(line_number, DiagnosticKind::NodeStart);
    }

    fn end_node(&mut self, line_number: usize) {
        let Some(mut record) = self.record.end() else {
            debug!("Ignoring 'end node' outside a node at line {}", line_number);
            return;
        };

        self.flush_shared(std::mem::take(&mut record.pending_shared), record.name.as_deref());

        debug!(
            "Node at line {} closed: id={:?} name={:?} address={:?}",
            record.start_line, record.id, record.name, record.address
        );

        // Only files that use ids at all are expected to have one per node
        if self.registry.uses_ids() && record.id.is_none() {
            self.emit(
                line_number,
                DiagnosticKind::MissingId {
                    name: record.name,
                    start_line: record.start_line,
                },
            );
        }

        self.emit(line_number, DiagnosticKind::NodeEnd);
    }

    fn field(&mut self, line_number: usize, field: Field, value: &str) {
        if !self.record.is_inside() {
            debug!(
                "Ignoring '{}' line outside a node at line {}",
                field.keyword(),
                line_number
            );
            return;
        }

        self.emit(
            line_number,
            DiagnosticKind::FieldValue {
                keyword: field.keyword(),
                value: value.to_string(),
            },
        );

        let Some(record) = self.record.active_mut() else {
            return;
        };
        let start_line = record.start_line;
        let mut pending = Vec::new();

        let collision = match field {
            Field::Id => {
                record.id = Some(value.to_string());
                self.registry
                    .claim_id(value, start_line)
                    .err()
                    .map(|first_line| DiagnosticKind::DuplicateId {
                        id: value.to_string(),
                        first_line,
                        start_line,
                    })
            }
            Field::Name => {
                record.name = Some(value.to_string());
                // Addresses seen before the name were registered unnamed
                for address in &record.claimed_addresses {
                    self.registry.name_address_owner(address, value);
                }
                pending = std::mem::take(&mut record.pending_shared);
                self.registry
                    .claim_name(value, start_line)
                    .err()
                    .map(|first_line| DiagnosticKind::DuplicateName {
                        name: value.to_string(),
                        first_line,
                        start_line,
                    })
            }
            Field::Address => {
                record.address = Some(value.to_string());
                let owner = AddressOwner {
                    name: record.name.clone(),
                    start_line,
                };
                match self.registry.claim_address(value, owner) {
                    Ok(()) => {
                        record.claimed_addresses.push(value.to_string());
                        None
                    }
                    Err(other) => {
                        let kind = DiagnosticKind::SharedAddress {
                            address: value.to_string(),
                            name: record.name.clone(),
                            start_line,
                            other_name: other.name,
                            other_line: other.start_line,
                        };
                        if record.name.is_some() {
                            Some(kind)
                        } else {
                            // Wait for the name line, if there is one
                            record.pending_shared.push(Diagnostic::new(line_number, kind));
                            None
                        }
                    }
                }
            }
        };

        if !pending.is_empty() {
            self.flush_shared(pending, Some(value));
        }
        if let Some(kind) = collision {
            self.emit(line_number, kind);
        }
    }

    /// Emit held-back shared-address warnings under the node's final name
    fn flush_shared(&mut self, pending: Vec<Diagnostic>, node_name: Option<&str>) {
        for diagnostic in pending {
            let mut kind = diagnostic.kind;
            if let DiagnosticKind::SharedAddress { name, .. } = &mut kind {
                *name = node_name.map(str::to_string);
            }
            self.emit(diagnostic.line, kind);
        }
    }

    fn emit(&mut self, line_number: usize, kind: DiagnosticKind) {
        match kind.severity() {
            Severity::Info if !self.verbose => return,
            Severity::Info => {}
            Severity::Warning => self.summary.warning_count += 1,
            Severity::Error => self.summary.error_count += 1,
        }
        self.diagnostics.push(Diagnostic::new(line_number, kind));
    }
}

/// Check every line of `reader`, naming it `source` in the report
pub fn check_reader<R: BufRead>(reader: R, source: &Path, verbose: bool) -> Result<Report, CheckError> {
    let mut validator = Validator::new(verbose);

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source_err| CheckError::Read {
            path: source.to_path_buf(),
            line: line_number,
            source: source_err,
        })?;
        validator.process_line(line_number, &line);
    }

    Ok(validator.finish(source))
}

/// Check in-memory node file content
pub fn check_str(content: &str, source: &Path, verbose: bool) -> Report {
    // A byte slice taken from a str never fails to read or decode
    check_reader(content.as_bytes(), source, verbose)
        .expect("in-memory node file content is always readable")
}

/// Open and check the node file named by `config`
pub fn check_file(config: &CheckConfig) -> Result<Report, CheckError> {
    let path = config.file_path.as_path();
    info!("Checking node file {}", path.display());

    let file = File::open(path).map_err(|source| CheckError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    check_reader(BufReader::new(file), path, config.verbose)
}
