//! Immutable registry snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use protocol::{ProtocolNumber, ProtocolVersion};

use crate::error::{RegistryError, RegistryResult};

/// One immutable generation of the registry's state.
///
/// Loaded versions live in a dense array addressed by protocol number
/// minus `base`, so the array covers exactly the loaded range without
/// starting at zero. The game-version index is derived from the array and
/// rebuilt from scratch whenever a snapshot is produced. Snapshots are
/// never mutated: every load/unload produces a new one.
#[derive(Debug, Default)]
pub(crate) struct RegistrySnapshot {
    base: i32,
    versions: Vec<Option<Arc<ProtocolVersion>>>,
    by_game_version: HashMap<String, ProtocolNumber>,
}

impl RegistrySnapshot {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Looks up a version by protocol number.
    pub(crate) fn get(&self, number: ProtocolNumber) -> Option<&Arc<ProtocolVersion>> {
        let offset = number.raw().checked_sub(self.base)?;
        let index = usize::try_from(offset).ok()?;
        self.versions.get(index)?.as_ref()
    }

    /// Looks up a version by game version string.
    pub(crate) fn get_by_game_version(
        &self,
        game_version: &str,
    ) -> Option<&Arc<ProtocolVersion>> {
        self.get(*self.by_game_version.get(game_version)?)
    }

    /// Protocol numbers of all loaded versions, ascending.
    pub(crate) fn protocol_numbers(&self) -> Vec<ProtocolNumber> {
        self.versions
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref()
                    .map(|_| ProtocolNumber::new(self.base + index as i32))
            })
            .collect()
    }

    /// Game versions of all loaded versions, sorted.
    pub(crate) fn game_versions(&self) -> Vec<String> {
        let mut game_versions: Vec<String> = self.by_game_version.keys().cloned().collect();
        game_versions.sort();
        game_versions
    }

    /// Produces the snapshot that additionally holds `version`.
    ///
    /// The backing range grows (shifting `base` if needed) when the new
    /// version's number falls outside the current bounds. Loading a
    /// number that is already present replaces it. Fails when the result
    /// would have two versions claiming one game version string.
    pub(crate) fn with_version(
        &self,
        version: Arc<ProtocolVersion>,
    ) -> RegistryResult<Self> {
        let number = version.number().raw();

        let (base, mut versions) = if self.versions.is_empty() {
            (number, vec![None])
        } else {
            let new_base = self.base.min(number);
            let old_end = self.base + self.versions.len() as i32;
            let new_end = old_end.max(number + 1);
            let mut slots = vec![None; (new_end - new_base) as usize];
            let shift = (self.base - new_base) as usize;
            slots[shift..shift + self.versions.len()].clone_from_slice(&self.versions);
            (new_base, slots)
        };

        versions[(number - base) as usize] = Some(version);
        Self::from_parts(base, versions)
    }

    /// Produces the snapshot without the given version, or `None` when it
    /// is not loaded.
    ///
    /// Removing an entry at an extremity shrinks the backing range.
    pub(crate) fn without_version(&self, number: ProtocolNumber) -> Option<Self> {
        self.get(number)?;

        let mut base = self.base;
        let mut versions = self.versions.clone();
        versions[(number.raw() - base) as usize] = None;

        let leading = versions.iter().take_while(|slot| slot.is_none()).count();
        if leading > 0 {
            versions.drain(..leading);
            base += leading as i32;
        }
        while matches!(versions.last(), Some(None)) {
            versions.pop();
        }
        if versions.is_empty() {
            base = 0;
        }

        // Removal cannot introduce a game-version conflict.
        Self::from_parts(base, versions).ok()
    }

    /// Assembles a snapshot, rebuilding the game-version index from
    /// scratch over the version array.
    fn from_parts(
        base: i32,
        versions: Vec<Option<Arc<ProtocolVersion>>>,
    ) -> RegistryResult<Self> {
        let mut by_game_version = HashMap::new();
        for version in versions.iter().flatten() {
            for game_version in version.game_versions() {
                let previous = by_game_version.insert(game_version.clone(), version.number());
                if let Some(first) = previous {
                    if first != version.number() {
                        return Err(RegistryError::DuplicateGameVersion {
                            game_version: game_version.clone(),
                            first,
                            second: version.number(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            base,
            versions,
            by_game_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demo_data::{document_767, document_768};

    fn version(document: serde_json::Value) -> Arc<ProtocolVersion> {
        Arc::new(ProtocolVersion::from_document(document).unwrap())
    }

    #[test]
    fn empty_snapshot_answers_nothing() {
        let snapshot = RegistrySnapshot::empty();
        assert!(snapshot.get(ProtocolNumber::new(767)).is_none());
        assert!(snapshot.get_by_game_version("1.21").is_none());
        assert!(snapshot.protocol_numbers().is_empty());
        assert!(snapshot.game_versions().is_empty());
    }

    #[test]
    fn with_version_starts_the_range_at_the_first_number() {
        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap();

        assert!(snapshot.get(ProtocolNumber::new(767)).is_some());
        assert!(snapshot.get(ProtocolNumber::new(766)).is_none());
        assert!(snapshot.get(ProtocolNumber::new(768)).is_none());
        assert_eq!(snapshot.versions.len(), 1);
    }

    #[test]
    fn with_version_grows_the_range_upward_and_downward() {
        let mut document_766 = document_767();
        document_766["meta"]["protocol_version"] = serde_json::json!(766);
        document_766["meta"]["game_versions"] = serde_json::json!(["1.20.6"]);

        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap()
            .with_version(version(document_768()))
            .unwrap()
            .with_version(version(document_766))
            .unwrap();

        assert_eq!(snapshot.base, 766);
        assert_eq!(snapshot.versions.len(), 3);
        assert_eq!(
            snapshot.protocol_numbers(),
            vec![
                ProtocolNumber::new(766),
                ProtocolNumber::new(767),
                ProtocolNumber::new(768),
            ]
        );
    }

    #[test]
    fn reloading_a_number_replaces_it() {
        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap();

        let mut changed = document_767();
        changed["meta"]["game_versions"] = serde_json::json!(["1.21-pre1"]);
        let snapshot = snapshot.with_version(version(changed)).unwrap();

        assert!(snapshot.get_by_game_version("1.21").is_none());
        assert!(snapshot.get_by_game_version("1.21-pre1").is_some());
        assert_eq!(snapshot.versions.len(), 1);
    }

    #[test]
    fn duplicate_game_version_claim_is_rejected() {
        let mut rival = document_768();
        rival["meta"]["game_versions"] = serde_json::json!(["1.21"]);

        let err = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap()
            .with_version(version(rival))
            .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::DuplicateGameVersion { .. }
        ));
    }

    #[test]
    fn without_version_shrinks_the_extremities() {
        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap()
            .with_version(version(document_768()))
            .unwrap();

        let shrunk = snapshot.without_version(ProtocolNumber::new(767)).unwrap();
        assert_eq!(shrunk.base, 768);
        assert_eq!(shrunk.versions.len(), 1);
        assert!(shrunk.get(ProtocolNumber::new(768)).is_some());
        assert!(shrunk.get_by_game_version("1.21").is_none());
    }

    #[test]
    fn without_missing_version_is_none() {
        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap();

        assert!(snapshot.without_version(ProtocolNumber::new(500)).is_none());
    }

    #[test]
    fn removing_the_last_version_resets_the_range() {
        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap()
            .without_version(ProtocolNumber::new(767))
            .unwrap();

        assert_eq!(snapshot.base, 0);
        assert!(snapshot.versions.is_empty());
        assert!(snapshot.game_versions().is_empty());
    }

    #[test]
    fn removing_an_interior_version_keeps_the_range() {
        let mut document_769 = document_767();
        document_769["meta"]["protocol_version"] = serde_json::json!(769);
        document_769["meta"]["game_versions"] = serde_json::json!(["1.21.4"]);

        let snapshot = RegistrySnapshot::empty()
            .with_version(version(document_767()))
            .unwrap()
            .with_version(version(document_768()))
            .unwrap()
            .with_version(version(document_769))
            .unwrap()
            .without_version(ProtocolNumber::new(768))
            .unwrap();

        assert_eq!(snapshot.base, 767);
        assert_eq!(snapshot.versions.len(), 3);
        assert!(snapshot.get(ProtocolNumber::new(768)).is_none());
        assert!(snapshot.get(ProtocolNumber::new(769)).is_some());
    }
}
