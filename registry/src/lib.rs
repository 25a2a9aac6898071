//! Live protocol version directory for the recut mapping core.
//!
//! This crate manages the set of currently loaded protocol versions under
//! concurrent access:
//! - `ProtocolRegistry` - load/unload configuration documents, look up
//!   versions by protocol number or game version string
//! - Copy-on-write snapshots - readers are lock-free and always see a
//!   complete, consistent generation of the directory
//!
//! # Design Principles
//!
//! - **Readers never block** - Lookups run against an atomically loaded
//!   immutable snapshot; writers cannot tear a read.
//! - **Writers serialize** - Load and unload exclude each other through a
//!   single mutex scoped to the registry.
//! - **Failed loads are invisible** - A rejected document publishes
//!   nothing; previously loaded versions stay untouched.

mod error;
mod registry;
mod snapshot;

pub use error::{RegistryError, RegistryResult};
pub use registry::ProtocolRegistry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let registry = ProtocolRegistry::new();
        let _ = registry.supported_protocol_versions();
        let _: RegistryResult<()> = Ok(());
    }

    #[test]
    fn default_registry_is_empty() {
        let registry = ProtocolRegistry::default();
        assert!(registry.supported_protocol_versions().is_empty());
        assert!(registry.supported_game_versions().is_empty());
    }
}
