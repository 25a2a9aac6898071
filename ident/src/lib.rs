//! Logical protocol identifiers for the recut mapping core.
//!
//! This crate defines the version-independent vocabulary of the protocol:
//! - The five closed identifier categories (packets, entity types, blocks,
//!   block entities, items)
//! - The `LogicalId` contract shared by every category
//! - `TypeDescriptor`, the configuration key path that locates an
//!   identifier's entry in a version's mapping document
//!
//! # Design Principles
//!
//! - **Explicit tables** - Every category is a compile-time-known ordered
//!   list; no reflection, no registration at runtime.
//! - **Stable ordinals** - Each member has a fixed dense-array index that
//!   version tables key on.
//! - **Sentinel members** - Every category ends in `Undefined`, the total
//!   "no mapping" answer.

mod block;
mod category;
mod descriptor;
mod entity;
mod item;
mod packet;

pub use block::{BlockEntityType, BlockType};
pub use category::LogicalId;
pub use descriptor::TypeDescriptor;
pub use entity::EntityType;
pub use item::ItemType;
pub use packet::{ConnectionPhase, PacketType};
