//! Per-version mapping bundles for the recut mapping core.
//!
//! This crate turns one versioned configuration document into one
//! [`ProtocolVersion`]: a bundle of translation tables (one per identifier
//! category, plus the blockstate table) together with the version's
//! metadata and intrinsic constants.
//!
//! # Design Principles
//!
//! - **Data over dispatch** - Version-specific facts are rows in a
//!   document processed by one shared algorithm, never per-version code.
//! - **Upgrade in place** - Older document formats are migrated forward
//!   step by step before building; newer formats are rejected.
//! - **All or nothing** - A document that fails validation builds
//!   nothing; there is no partially constructed version.

mod document;
mod error;
mod migrate;
mod version;

pub use document::{metadata, section, Metadata, FORMAT_VERSION_FIELD};
pub use error::{ProtocolError, ProtocolResult};
pub use migrate::{upgrade, CURRENT_FORMAT_VERSION};
pub use version::{ProtocolNumber, ProtocolVersion};
