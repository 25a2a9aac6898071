//! Version-scoped identifier translation tables for the recut mapping core.
//!
//! This crate builds, per protocol version and per identifier category, the
//! bidirectional table between logical identifiers and their wire
//! representation:
//! - `VersionMapper` - wire id ↔ identifier ↔ optional resource name
//! - `BlockStateMapper` - blockstate id → block type (many-to-one)
//! - `DenseTable` - the growable dense array both mappers index ids into
//!
//! # Design Principles
//!
//! - **Total queries** - Lookups never fail; misses return the category's
//!   `Undefined`/`-1`/empty-string sentinel.
//! - **Fail-fast construction** - Duplicate assignments in a configuration
//!   document are fatal configuration errors, detected while building.
//! - **Growth at build time only** - Tables grow while a document is being
//!   walked, never during a query.

mod blockstate;
mod error;
mod mapper;
mod table;

pub use blockstate::BlockStateMapper;
pub use error::{MappingError, MappingResult};
pub use mapper::VersionMapper;
pub use table::DenseTable;

/// Wire id sentinel for "this identifier has no mapping in this version".
pub const UNSUPPORTED_ID: i32 = -1;

/// Per-entry field names within a configuration document.
pub mod field {
    /// Integer wire id of the entry.
    pub const ID: &str = "id";

    /// Optional string resource name of the entry.
    pub const RESOURCE: &str = "resource";

    /// Block entries only: every blockstate id resolving to the block.
    pub const BLOCKSTATES: &str = "blockstates";
}
