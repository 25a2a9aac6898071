//! Configuration errors raised while building mapping tables.

use std::fmt;

/// Result type for mapping construction.
pub type MappingResult<T> = Result<T, MappingError>;

/// Fatal configuration errors detected while building a mapper.
///
/// These indicate a corrupt or conflicting configuration document and
/// always abort the load of that document. Lookup misses are not errors;
/// they answer with the category's sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// The same wire id is assigned to two identifiers.
    DuplicateWireId {
        category: &'static str,
        id: i32,
        existing: &'static str,
        duplicate: &'static str,
    },

    /// The same identifier is assigned two wire ids.
    DuplicateIdentifier {
        category: &'static str,
        key: &'static str,
        first_id: i32,
        second_id: i32,
    },

    /// The same resource name is claimed by two identifiers.
    DuplicateResourceName {
        category: &'static str,
        resource: String,
        existing: &'static str,
        duplicate: &'static str,
    },

    /// An entry resolved but one of its fields is missing or ill-typed.
    InvalidEntry {
        category: &'static str,
        key: &'static str,
        field: &'static str,
        found: String,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateWireId {
                category,
                id,
                existing,
                duplicate,
            } => {
                write!(
                    f,
                    "duplicate {category} id {id}: assigned to both {existing:?} and {duplicate:?}"
                )
            }
            Self::DuplicateIdentifier {
                category,
                key,
                first_id,
                second_id,
            } => {
                write!(
                    f,
                    "{category} {key:?} assigned twice: ids {first_id} and {second_id}"
                )
            }
            Self::DuplicateResourceName {
                category,
                resource,
                existing,
                duplicate,
            } => {
                write!(
                    f,
                    "duplicate {category} resource name {resource:?}: claimed by both {existing:?} and {duplicate:?}"
                )
            }
            Self::InvalidEntry {
                category,
                key,
                field,
                found,
            } => {
                write!(
                    f,
                    "invalid {field:?} field for {category} {key:?}: found {found}"
                )
            }
        }
    }
}

impl std::error::Error for MappingError {}
