//! # Port lookup seam.
//!
//! Ports live in an external store (a database in production deployments).
//! The scheduler only needs one narrow operation — resolve an id to a
//! [`Port`] record — so that is all the trait asks for. [`MemoryStore`]
//! is the in-process implementation used by tests and demos.

use std::collections::HashMap;

use super::port::Port;

/// Resolves a port identifier to its configuration record.
///
/// Absence is reported as `None`; the worker bootstrap turns that into the
/// fatal [`ConfigError::PortNotFound`](crate::error::ConfigError) diagnostic.
pub trait PortStore: Send + Sync {
    /// Returns the port with the given id, if it exists.
    fn port(&self, id: u64) -> Option<Port>;
}

/// In-memory [`PortStore`] backed by a `HashMap`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    ports: HashMap<u64, Port>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a port, replacing any previous record with the same id.
    pub fn insert(&mut self, port: Port) {
        self.ports.insert(port.id, port);
    }
}

impl PortStore for MemoryStore {
    fn port(&self, id: u64) -> Option<Port> {
        self.ports.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let mut store = MemoryStore::new();
        store.insert(Port {
            id: 9,
            protocol: "modbus_tcp".into(),
            address: "10.0.0.5:502".into(),
            params: String::new(),
            sources: vec![],
        });

        assert!(store.port(9).is_some());
        assert!(store.port(10).is_none());
    }
}
