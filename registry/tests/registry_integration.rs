use std::sync::Arc;

use demo_data::{document_767, document_768};
use ident::{BlockEntityType, BlockType, ConnectionPhase, EntityType, ItemType, PacketType};
use protocol::ProtocolNumber;
use registry::ProtocolRegistry;
use serde_json::json;

fn block_action_document() -> serde_json::Value {
    json!({
        "meta": {
            "format_version": 1,
            "protocol_version": 767,
            "game_versions": ["1.21", "1.21.1"],
            "play_transition_id": 2
        },
        "packets": {
            "play": { "block_action": { "id": 8 } }
        }
    })
}

#[test]
fn translates_a_play_packet_end_to_end() {
    let registry = ProtocolRegistry::new();
    registry.load(block_action_document()).unwrap();

    let version = registry.get(ProtocolNumber::new(767)).unwrap();
    let same = registry.get_by_game_version("1.21.1").unwrap();
    assert!(Arc::ptr_eq(&version, &same));

    assert_eq!(
        version.packet_id(ConnectionPhase::Play, PacketType::BlockAction),
        0x08
    );
    assert_eq!(
        version.packet_type(ConnectionPhase::Play, 8),
        PacketType::BlockAction
    );
    assert_eq!(
        version.packet_type(ConnectionPhase::Play, 9),
        PacketType::Undefined
    );
}

#[test]
fn a_full_document_serves_every_category() {
    let registry = ProtocolRegistry::new();
    registry.load(document_767()).unwrap();

    let version = registry.get_by_game_version("1.21").unwrap();
    assert_eq!(version.play_transition_id(), 2);
    assert_eq!(version.entity_id(EntityType::Creeper), 20);
    assert_eq!(version.entity_resource(EntityType::Creeper), "minecraft:creeper");
    assert_eq!(version.entity_for_resource("minecraft:zombie"), EntityType::Zombie);
    assert_eq!(version.block_of(112), BlockType::Chest);
    assert_eq!(version.block_id(BlockType::IronChain), 151);
    assert_eq!(version.block_entity_id(BlockEntityType::Sign), 7);
    assert_eq!(version.item_for_resource("minecraft:bucket"), ItemType::Bucket);
}

#[test]
fn two_loaded_versions_translate_independently() {
    let registry = ProtocolRegistry::new();
    registry.load(document_767()).unwrap();
    registry.load(document_768()).unwrap();

    let v767 = registry.get(ProtocolNumber::new(767)).unwrap();
    let v768 = registry.get_by_game_version("1.21.2").unwrap();

    assert_eq!(v767.packet_id(ConnectionPhase::Play, PacketType::BlockAction), 8);
    assert_eq!(v768.packet_id(ConnectionPhase::Play, PacketType::BlockAction), 10);
    assert_eq!(v767.packet_type(ConnectionPhase::Play, 8), PacketType::BlockAction);
    assert_eq!(v768.packet_type(ConnectionPhase::Play, 8), PacketType::BlockUpdate);
}

#[test]
fn format0_documents_load_through_migration() {
    let registry = ProtocolRegistry::new();
    registry.load(demo_data::document_767_format0()).unwrap();

    let version = registry.get(ProtocolNumber::new(767)).unwrap();
    assert_eq!(version.block_id(BlockType::IronChain), 151);
    assert_eq!(version.item_id(ItemType::IronChain), 23);
}
