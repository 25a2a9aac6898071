//! The per-version bundle of mapping tables.

use std::fmt;

use ident::{
    BlockEntityType, BlockType, ConnectionPhase, EntityType, ItemType, LogicalId, PacketType,
};
use mapping::{BlockStateMapper, VersionMapper};
use serde_json::Value;
use tracing::debug;

use crate::document;
use crate::error::ProtocolResult;
use crate::migrate;

/// A protocol version number.
///
/// Identifies one revision of the wire protocol (for example 767 for game
/// version 1.21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProtocolNumber(i32);

impl ProtocolNumber {
    /// Creates a new protocol number.
    #[must_use]
    pub const fn new(number: i32) -> Self {
        Self(number)
    }

    /// Returns the raw protocol number.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProtocolNumber {
    fn from(number: i32) -> Self {
        Self(number)
    }
}

impl From<ProtocolNumber> for i32 {
    fn from(number: ProtocolNumber) -> Self {
        number.0
    }
}

impl fmt::Display for ProtocolNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All mapping tables for one protocol version.
///
/// Built once from an upgraded configuration document; immutable
/// afterwards. Every lookup delegates to the owned per-category mapper
/// and is total: misses answer with the category's sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolVersion {
    number: ProtocolNumber,
    game_versions: Vec<String>,
    play_transition_id: i32,
    login_packets: VersionMapper<PacketType>,
    configuration_packets: VersionMapper<PacketType>,
    play_packets: VersionMapper<PacketType>,
    entity_types: VersionMapper<EntityType>,
    blocks: VersionMapper<BlockType>,
    block_entities: VersionMapper<BlockEntityType>,
    items: VersionMapper<ItemType>,
    blockstates: BlockStateMapper,
}

impl ProtocolVersion {
    /// Builds a protocol version from a configuration document.
    ///
    /// Older document formats are upgraded in place first (see
    /// [`crate::upgrade`]); a document declaring a newer format than this
    /// build understands is rejected.
    pub fn from_document(mut document: Value) -> ProtocolResult<Self> {
        migrate::upgrade(&mut document)?;
        let meta = document::metadata(&document)?;

        let version = Self {
            number: ProtocolNumber::new(meta.protocol_version),
            play_transition_id: meta.play_transition_id,
            login_packets: VersionMapper::build(
                PacketType::members_in(ConnectionPhase::Login),
                &document,
            )?,
            configuration_packets: VersionMapper::build(
                PacketType::members_in(ConnectionPhase::Configuration),
                &document,
            )?,
            play_packets: VersionMapper::build(
                PacketType::members_in(ConnectionPhase::Play),
                &document,
            )?,
            entity_types: VersionMapper::build(EntityType::MEMBERS, &document)?,
            blocks: VersionMapper::build(BlockType::MEMBERS, &document)?,
            block_entities: VersionMapper::build(BlockEntityType::MEMBERS, &document)?,
            items: VersionMapper::build(ItemType::MEMBERS, &document)?,
            blockstates: BlockStateMapper::build(&document)?,
            game_versions: meta.game_versions,
        };

        debug!(
            number = %version.number,
            game_versions = version.game_versions.len(),
            "built protocol version"
        );
        Ok(version)
    }

    /// Protocol version number of this bundle.
    #[must_use]
    pub fn number(&self) -> ProtocolNumber {
        self.number
    }

    /// Game versions served by this protocol version.
    #[must_use]
    pub fn game_versions(&self) -> &[String] {
        &self.game_versions
    }

    /// Wire id of the packet that switches the connection into the play
    /// phase.
    #[must_use]
    pub fn play_transition_id(&self) -> i32 {
        self.play_transition_id
    }

    /// The packet table of one connection phase.
    #[must_use]
    pub fn packets(&self, phase: ConnectionPhase) -> &VersionMapper<PacketType> {
        match phase {
            ConnectionPhase::Login => &self.login_packets,
            ConnectionPhase::Configuration => &self.configuration_packets,
            ConnectionPhase::Play => &self.play_packets,
        }
    }

    /// Packet type of a wire id within a phase.
    #[must_use]
    pub fn packet_type(&self, phase: ConnectionPhase, id: i32) -> PacketType {
        self.packets(phase).identifier_of(id)
    }

    /// Wire id of a packet within a phase, or `-1` when unmapped.
    #[must_use]
    pub fn packet_id(&self, phase: ConnectionPhase, packet: PacketType) -> i32 {
        self.packets(phase).id_of(packet)
    }

    /// Entity type of a wire id.
    #[must_use]
    pub fn entity_type(&self, id: i32) -> EntityType {
        self.entity_types.identifier_of(id)
    }

    /// Wire id of an entity type, or `-1` when unmapped.
    #[must_use]
    pub fn entity_id(&self, entity: EntityType) -> i32 {
        self.entity_types.id_of(entity)
    }

    /// Resource name of an entity type, or `""` when none.
    #[must_use]
    pub fn entity_resource(&self, entity: EntityType) -> &str {
        self.entity_types.resource_name_of(entity)
    }

    /// Entity type claiming a resource name.
    #[must_use]
    pub fn entity_for_resource(&self, resource: &str) -> EntityType {
        self.entity_types.identifier_of_resource(resource)
    }

    /// Block type of a wire id.
    #[must_use]
    pub fn block_type(&self, id: i32) -> BlockType {
        self.blocks.identifier_of(id)
    }

    /// Wire id of a block type, or `-1` when unmapped.
    #[must_use]
    pub fn block_id(&self, block: BlockType) -> i32 {
        self.blocks.id_of(block)
    }

    /// Resource name of a block type, or `""` when none.
    #[must_use]
    pub fn block_resource(&self, block: BlockType) -> &str {
        self.blocks.resource_name_of(block)
    }

    /// Block type claiming a resource name.
    #[must_use]
    pub fn block_for_resource(&self, resource: &str) -> BlockType {
        self.blocks.identifier_of_resource(resource)
    }

    /// Block type of a blockstate id.
    #[must_use]
    pub fn block_of(&self, blockstate_id: i32) -> BlockType {
        self.blockstates.block_of(blockstate_id)
    }

    /// Block-entity type of a wire id.
    #[must_use]
    pub fn block_entity_type(&self, id: i32) -> BlockEntityType {
        self.block_entities.identifier_of(id)
    }

    /// Wire id of a block-entity type, or `-1` when unmapped.
    #[must_use]
    pub fn block_entity_id(&self, block_entity: BlockEntityType) -> i32 {
        self.block_entities.id_of(block_entity)
    }

    /// Resource name of a block-entity type, or `""` when none.
    #[must_use]
    pub fn block_entity_resource(&self, block_entity: BlockEntityType) -> &str {
        self.block_entities.resource_name_of(block_entity)
    }

    /// Block-entity type claiming a resource name.
    #[must_use]
    pub fn block_entity_for_resource(&self, resource: &str) -> BlockEntityType {
        self.block_entities.identifier_of_resource(resource)
    }

    /// Item type of a wire id.
    #[must_use]
    pub fn item_type(&self, id: i32) -> ItemType {
        self.items.identifier_of(id)
    }

    /// Wire id of an item type, or `-1` when unmapped.
    #[must_use]
    pub fn item_id(&self, item: ItemType) -> i32 {
        self.items.id_of(item)
    }

    /// Resource name of an item type, or `""` when none.
    #[must_use]
    pub fn item_resource(&self, item: ItemType) -> &str {
        self.items.resource_name_of(item)
    }

    /// Item type claiming a resource name.
    #[must_use]
    pub fn item_for_resource(&self, resource: &str) -> ItemType {
        self.items.identifier_of_resource(resource)
    }
}
