//! The live directory of loaded protocol versions.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use protocol::{ProtocolNumber, ProtocolVersion};
use serde_json::Value;
use tracing::info;

use crate::error::RegistryResult;
use crate::snapshot::RegistrySnapshot;

/// The set of currently loaded protocol versions.
///
/// Readers never block: every read operates on the immutable snapshot
/// current at the start of the call, so a concurrent load or unload can
/// never produce a torn view. Writers serialize against each other
/// through one mutex and publish a complete new snapshot atomically; a
/// failed load publishes nothing.
#[derive(Debug)]
pub struct ProtocolRegistry {
    current: ArcSwap<RegistrySnapshot>,
    write_lock: Mutex<()>,
}

impl ProtocolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(RegistrySnapshot::empty()),
            write_lock: Mutex::new(()),
        }
    }

    /// Builds a protocol version from `document` and publishes it.
    ///
    /// The document is upgraded and built outside the critical section;
    /// only the snapshot swap runs under the write lock. Fails when the
    /// document is invalid or when the loaded set would claim one game
    /// version string twice, leaving the previous state visible.
    pub fn load(&self, document: Value) -> RegistryResult<Arc<ProtocolVersion>> {
        let version = Arc::new(ProtocolVersion::from_document(document)?);

        let _guard = self.write_lock.lock();
        let next = self.current.load().with_version(Arc::clone(&version))?;
        self.current.store(Arc::new(next));

        info!(number = %version.number(), "loaded protocol version");
        Ok(version)
    }

    /// Removes a protocol version; returns whether anything was removed.
    ///
    /// Readers that already hold the version keep a consistent view of
    /// it; the instance drops once the last holder releases it.
    pub fn unload(&self, number: ProtocolNumber) -> bool {
        let _guard = self.write_lock.lock();
        let Some(next) = self.current.load().without_version(number) else {
            return false;
        };
        self.current.store(Arc::new(next));

        info!(%number, "unloaded protocol version");
        true
    }

    /// Returns the loaded version with this protocol number.
    #[must_use]
    pub fn get(&self, number: ProtocolNumber) -> Option<Arc<ProtocolVersion>> {
        self.current.load().get(number).cloned()
    }

    /// Returns the loaded version claiming this game version string.
    #[must_use]
    pub fn get_by_game_version(&self, game_version: &str) -> Option<Arc<ProtocolVersion>> {
        self.current.load().get_by_game_version(game_version).cloned()
    }

    /// Protocol numbers of all loaded versions, ascending.
    #[must_use]
    pub fn supported_protocol_versions(&self) -> Vec<ProtocolNumber> {
        self.current.load().protocol_numbers()
    }

    /// Game versions of all loaded versions, sorted.
    #[must_use]
    pub fn supported_game_versions(&self) -> Vec<String> {
        self.current.load().game_versions()
    }
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
