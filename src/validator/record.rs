//! Record scope tracking for the validator.

use super::types::Diagnostic;

/// Fields collected for the node currently being read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRecord {
    pub start_line: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    /// Addresses this node registered first, in file order
    pub claimed_addresses: Vec<String>,
    /// Shared-address warnings raised before this node's `name` line
    pub pending_shared: Vec<Diagnostic>,
}

impl ActiveRecord {
    pub fn new(start_line: usize) -> Self {
        Self {
            start_line,
            id: None,
            name: None,
            address: None,
            claimed_addresses: Vec::new(),
            pending_shared: Vec::new(),
        }
    }
}

/// Whether the scan is between `begin node` and `end node`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordState {
    #[default]
    Outside,
    Inside(ActiveRecord),
}

impl RecordState {
    /// Open a new record, returning the one still open, if any
    pub fn begin(&mut self, start_line: usize) -> Option<ActiveRecord> {
        match std::mem::replace(self, RecordState::Inside(ActiveRecord::new(start_line))) {
            RecordState::Inside(previous) => Some(previous),
            RecordState::Outside => None,
        }
    }

    /// Close the open record, if any
    pub fn end(&mut self) -> Option<ActiveRecord> {
        match std::mem::take(self) {
            RecordState::Inside(record) => Some(record),
            RecordState::Outside => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveRecord> {
        match self {
            RecordState::Inside(record) => Some(record),
            RecordState::Outside => None,
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, RecordState::Inside(_))
    }
}
