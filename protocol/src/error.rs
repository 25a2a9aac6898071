//! Error types for protocol version construction.

use std::fmt;

use mapping::MappingError;

/// Result type for protocol version construction.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while upgrading and building a configuration
/// document into a protocol version.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The document declares a format newer than this build understands.
    UnsupportedFormatVersion { found: u32, supported: u32 },

    /// The document is structurally invalid (missing or ill-typed
    /// metadata or sections).
    InvalidDocument { reason: String },

    /// A mapping table could not be built from the document.
    Mapping(MappingError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormatVersion { found, supported } => {
                write!(
                    f,
                    "unsupported configuration format version {found}, this build supports up to {supported}"
                )
            }
            Self::InvalidDocument { reason } => {
                write!(f, "invalid configuration document: {reason}")
            }
            Self::Mapping(err) => write!(f, "mapping error: {err}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mapping(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MappingError> for ProtocolError {
    fn from(err: MappingError) -> Self {
        Self::Mapping(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_format_version() {
        let err = ProtocolError::UnsupportedFormatVersion {
            found: 9,
            supported: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn error_from_mapping_error() {
        let mapping_err = MappingError::DuplicateWireId {
            category: "item",
            id: 3,
            existing: "stick",
            duplicate: "apple",
        };
        let err: ProtocolError = mapping_err.into();
        assert!(matches!(err, ProtocolError::Mapping(_)));
    }

    #[test]
    fn error_source_mapping() {
        let err = ProtocolError::Mapping(MappingError::DuplicateWireId {
            category: "item",
            id: 3,
            existing: "stick",
            duplicate: "apple",
        });
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_source_none_for_others() {
        let err = ProtocolError::InvalidDocument {
            reason: "missing meta".to_string(),
        };
        assert!(std::error::Error::source(&err).is_none());
    }
}
