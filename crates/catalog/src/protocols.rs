use crate::CatalogError;
use parley_core::Protocol;
use rustc_hash::FxHashMap;

/// Maps the protocol identifiers written in a catalogue to the protocols
/// the application knows about. Identifiers are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ProtocolTable {
    protocols: FxHashMap<String, Protocol>,
}

impl ProtocolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the built-in protocols under their own names.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for protocol in Protocol::DEFAULTS {
            table.register(protocol);
        }
        table
    }

    /// Makes `protocol` resolvable under its own name.
    pub fn register(&mut self, protocol: Protocol) {
        self.insert(protocol.name(), protocol);
    }

    /// Makes `protocol` resolvable under an additional identifier.
    pub fn insert(&mut self, identifier: &str, protocol: Protocol) {
        self.protocols
            .insert(identifier.trim().to_ascii_lowercase(), protocol);
    }

    pub fn resolve(&self, identifier: &str) -> Result<Protocol, CatalogError> {
        self.protocols
            .get(&identifier.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| CatalogError::UnknownProtocol(identifier.to_string()))
    }
}
