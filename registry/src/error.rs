//! Error types for registry operations.

use std::fmt;

use protocol::{ProtocolError, ProtocolNumber};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while loading a protocol version.
///
/// A failed load publishes nothing; the registry's previous state stays
/// visible to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two loaded protocol versions claim the same game version string.
    DuplicateGameVersion {
        game_version: String,
        first: ProtocolNumber,
        second: ProtocolNumber,
    },

    /// The configuration document could not be built into a version.
    Protocol(ProtocolError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGameVersion {
                game_version,
                first,
                second,
            } => {
                write!(
                    f,
                    "game version {game_version:?} claimed by both protocol version {first} and {second}"
                )
            }
            Self::Protocol(err) => write!(f, "protocol error: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Protocol(err) => Some(err),
            Self::DuplicateGameVersion { .. } => None,
        }
    }
}

impl From<ProtocolError> for RegistryError {
    fn from(err: ProtocolError) -> Self {
        Self::Protocol(err)
    }
}
