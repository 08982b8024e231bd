//! # Duplicate-detection registries
//!
//! Three first-writer-wins tables are kept while a node file is scanned:
//!
//! - **Identifier registry**: node id → start line of the first node with it.
//!   Node files written before NerveCenter v8 carry no ids at all, so this
//!   table staying empty also means "this file does not use ids".
//! - **Name registry**: node name → start line of the first node with it.
//! - **Address registry**: IP address → the first node that claimed it.
//!
//! Once a key is stored it is never removed or reassigned. A later claim on
//! the same key is refused and handed the stored value, which the validator
//! turns into a diagnostic. The one refinement allowed is naming an address
//! owner whose `name` line came after its `address` line.

pub mod first_seen;

pub use first_seen::FirstSeen;

/// The node that first claimed an IP address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOwner {
    pub name: Option<String>,
    pub start_line: usize,
}

/// All registries for one check run
#[derive(Debug, Default)]
pub struct NodeRegistry {
    ids: FirstSeen<usize>,
    names: FirstSeen<usize>,
    addresses: FirstSeen<AddressOwner>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any node in the file so far has declared an id
    pub fn uses_ids(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Register a node id; on collision returns the first node's start line
    pub fn claim_id(&mut self, id: &str, start_line: usize) -> Result<(), usize> {
        self.ids.claim(id, start_line).map_err(|first| *first)
    }

    /// Register a node name; on collision returns the first node's start line
    pub fn claim_name(&mut self, name: &str, start_line: usize) -> Result<(), usize> {
        self.names.claim(name, start_line).map_err(|first| *first)
    }

    /// Register an IP address; on collision returns the node that holds it
    pub fn claim_address(&mut self, address: &str, owner: AddressOwner) -> Result<(), AddressOwner> {
        self.addresses.claim(address, owner).map_err(|first| first.clone())
    }

    /// Give a name to the owner of `address` if it was registered without one
    pub fn name_address_owner(&mut self, address: &str, name: &str) {
        if let Some(owner) = self.addresses.get_mut(address) {
            if owner.name.is_none() {
                owner.name = Some(name.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_in_use_after_first_claim() {
        let mut registry = NodeRegistry::new();
        assert!(!registry.uses_ids());

        assert_eq!(registry.claim_id("10", 1), Ok(()));
        assert!(registry.uses_ids());
        assert_eq!(registry.claim_id("10", 7), Err(1));
        assert_eq!(registry.claim_id("10", 12), Err(1));
    }

    #[test]
    fn test_name_first_writer_wins() {
        let mut registry = NodeRegistry::new();
        assert_eq!(registry.claim_name("moose", 3), Ok(()));
        assert_eq!(registry.claim_name("moose", 9), Err(3));
        assert_eq!(registry.claim_name("moose", 15), Err(3));
        assert_eq!(registry.claim_name("elk", 20), Ok(()));
    }

    #[test]
    fn test_address_owner_kept() {
        let mut registry = NodeRegistry::new();
        let moose = AddressOwner { name: Some("moose".to_string()), start_line: 1 };
        let elk = AddressOwner { name: Some("elk".to_string()), start_line: 6 };

        assert_eq!(registry.claim_address("10.0.0.1", moose.clone()), Ok(()));
        assert_eq!(registry.claim_address("10.0.0.1", elk.clone()), Err(moose.clone()));
        assert_eq!(registry.claim_address("10.0.0.1", elk), Err(moose));
    }

    #[test]
    fn test_late_name_fills_unnamed_owner_only() {
        let mut registry = NodeRegistry::new();
        let unnamed = AddressOwner { name: None, start_line: 1 };
        let elk = AddressOwner { name: Some("elk".to_string()), start_line: 6 };
        assert_eq!(registry.claim_address("10.0.0.1", unnamed), Ok(()));
        assert_eq!(registry.claim_address("10.0.0.2", elk.clone()), Ok(()));

        registry.name_address_owner("10.0.0.1", "moose");
        registry.name_address_owner("10.0.0.1", "deer");
        registry.name_address_owner("10.0.0.2", "deer");
        registry.name_address_owner("10.0.0.3", "deer");

        let later = AddressOwner { name: None, start_line: 9 };
        assert_eq!(
            registry.claim_address("10.0.0.1", later.clone()),
            Err(AddressOwner { name: Some("moose".to_string()), start_line: 1 })
        );
        assert_eq!(registry.claim_address("10.0.0.2", later), Err(elk));
    }
}
