//! Forward migration of older configuration document formats.

use serde_json::Value;
use tracing::debug;

use crate::document::{self, section};
use crate::error::{ProtocolError, ProtocolResult};

/// Format version this build reads natively.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Upgrades a document in place to [`CURRENT_FORMAT_VERSION`].
///
/// The marker is re-read after every step until it matches. A document
/// declaring a newer format than this build understands is rejected; a
/// current-format document passes through untouched.
pub fn upgrade(document: &mut Value) -> ProtocolResult<()> {
    loop {
        let found = document::format_version(document)?;
        if found == CURRENT_FORMAT_VERSION {
            return Ok(());
        }
        if found > CURRENT_FORMAT_VERSION {
            return Err(ProtocolError::UnsupportedFormatVersion {
                found,
                supported: CURRENT_FORMAT_VERSION,
            });
        }
        apply_step(document, found)?;
    }
}

/// Applies the single forward step for `from`, then bumps the marker.
fn apply_step(document: &mut Value, from: u32) -> ProtocolResult<()> {
    match from {
        0 => chain_to_iron_chain(document),
        _ => {
            return Err(ProtocolError::InvalidDocument {
                reason: format!("no migration step from format version {from}"),
            })
        }
    }
    document::set_format_version(document, from + 1)?;
    debug!(from, to = from + 1, "upgraded configuration document format");
    Ok(())
}

/// Format 0 predates the `"chain"` → `"iron_chain"` resource rename.
fn chain_to_iron_chain(document: &mut Value) {
    rename_key(document, &[section::REGISTRIES, "block"], "chain", "iron_chain");
    rename_key(document, &[section::REGISTRIES, "item"], "chain", "iron_chain");
}

/// Renames one key inside the object at `path`, keeping its value.
///
/// Documents without the path or the key pass through unchanged; a
/// version that never mapped the renamed entry has nothing to migrate.
fn rename_key(document: &mut Value, path: &[&str], from: &str, to: &str) {
    let mut node = document;
    for part in path {
        let Some(next) = node.get_mut(part) else {
            return;
        };
        node = next;
    }
    let Some(object) = node.as_object_mut() else {
        return;
    };
    if let Some(entry) = object.remove(from) {
        object.insert(to.to_string(), entry);
    }
}
