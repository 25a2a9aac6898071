//! Configuration document layout and metadata.
//!
//! A configuration document is a JSON tree with a fixed set of top-level
//! sections: `meta` (format marker, protocol number, supported game
//! versions, version constants), `packets` subdivided by connection phase,
//! and `registries` subdivided by identifier category. Everything below
//! the section level is walked through `ident::TypeDescriptor` paths.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ProtocolError, ProtocolResult};

/// Top-level section names.
pub mod section {
    /// Document metadata.
    pub const META: &str = "meta";

    /// Per-phase packet tables.
    pub const PACKETS: &str = "packets";

    /// Per-category registry tables.
    pub const REGISTRIES: &str = "registries";
}

/// Field name of the format marker within the metadata section.
pub const FORMAT_VERSION_FIELD: &str = "format_version";

/// The metadata section of a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    /// Declared document format version.
    pub format_version: u32,
    /// Protocol version this document describes.
    pub protocol_version: i32,
    /// Human-readable game versions served by this protocol version.
    pub game_versions: Vec<String>,
    /// Wire id of the packet that switches the connection into the play
    /// phase. Intrinsic to the protocol revision.
    pub play_transition_id: i32,
}

/// Deserializes the metadata section of a document.
pub fn metadata(document: &Value) -> ProtocolResult<Metadata> {
    let meta = document
        .get(section::META)
        .ok_or_else(|| missing("meta section"))?;
    serde_json::from_value(meta.clone()).map_err(|err| ProtocolError::InvalidDocument {
        reason: format!("malformed meta section: {err}"),
    })
}

/// Reads the declared format version of a document.
pub(crate) fn format_version(document: &Value) -> ProtocolResult<u32> {
    let found = document
        .get(section::META)
        .and_then(|meta| meta.get(FORMAT_VERSION_FIELD))
        .ok_or_else(|| missing("format version marker"))?;
    found
        .as_u64()
        .and_then(|version| u32::try_from(version).ok())
        .ok_or_else(|| ProtocolError::InvalidDocument {
            reason: format!("format version marker is not a u32: {found}"),
        })
}

/// Replaces the format marker after a migration step.
pub(crate) fn set_format_version(document: &mut Value, version: u32) -> ProtocolResult<()> {
    let object = document
        .get_mut(section::META)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| missing("meta section"))?;
    object.insert(FORMAT_VERSION_FIELD.to_string(), Value::from(version));
    Ok(())
}

fn missing(what: &str) -> ProtocolError {
    ProtocolError::InvalidDocument {
        reason: format!("missing {what}"),
    }
}
