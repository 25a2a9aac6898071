//! Sample configuration documents for recut tests and demos.
//!
//! One complete current-format document for protocol 767, the equivalent
//! document spelled in format 0 (before the `"chain"` → `"iron_chain"`
//! rename), and a sibling document for protocol 768.

use serde_json::{json, Value};

/// Protocol number of [`document_767`].
pub const PROTOCOL_767: i32 = 767;

/// Protocol number of [`document_768`].
pub const PROTOCOL_768: i32 = 768;

/// A complete current-format document for protocol 767 (game versions
/// 1.21 and 1.21.1).
pub fn document_767() -> Value {
    json!({
        "meta": {
            "format_version": 1,
            "protocol_version": PROTOCOL_767,
            "game_versions": ["1.21", "1.21.1"],
            "play_transition_id": 2
        },
        "packets": {
            "login": {
                "login_disconnect": { "id": 0 },
                "hello": { "id": 1 },
                "login_success": { "id": 2 },
                "set_compression": { "id": 3 }
            },
            "configuration": {
                "registry_data": { "id": 5 },
                "update_tags": { "id": 9 },
                "finish_configuration": { "id": 3 }
            },
            "play": {
                "spawn_entity": { "id": 1 },
                "block_entity_data": { "id": 7 },
                "block_action": { "id": 8 },
                "block_update": { "id": 9 },
                "keep_alive": { "id": 38 },
                "chunk_data": { "id": 39 },
                "player_chat": { "id": 57 },
                "remove_entities": { "id": 66 },
                "respawn": { "id": 71 },
                "set_entity_data": { "id": 88 },
                "set_time": { "id": 100 },
                "sound": { "id": 104 }
            }
        },
        "registries": {
            "entity_type": {
                "arrow": { "id": 14, "resource": "minecraft:arrow" },
                "creeper": { "id": 20, "resource": "minecraft:creeper" },
                "skeleton": { "id": 51, "resource": "minecraft:skeleton" },
                "zombie": { "id": 54, "resource": "minecraft:zombie" },
                "item": { "id": 55, "resource": "minecraft:item" },
                "enderman": { "id": 58, "resource": "minecraft:enderman" },
                "pig": { "id": 90, "resource": "minecraft:pig" },
                "sheep": { "id": 91, "resource": "minecraft:sheep" },
                "cow": { "id": 92, "resource": "minecraft:cow" },
                "chicken": { "id": 93, "resource": "minecraft:chicken" },
                "villager": { "id": 120, "resource": "minecraft:villager" }
            },
            "block": {
                "air": { "id": 0, "resource": "minecraft:air", "blockstates": [0] },
                "stone": { "id": 1, "resource": "minecraft:stone", "blockstates": [1] },
                "grass_block": { "id": 2, "resource": "minecraft:grass_block", "blockstates": [8, 9] },
                "dirt": { "id": 3, "resource": "minecraft:dirt", "blockstates": [10, 11] },
                "oak_planks": { "id": 5, "resource": "minecraft:oak_planks", "blockstates": [40, 41] },
                "sand": { "id": 12, "resource": "minecraft:sand", "blockstates": [66] },
                "glass": { "id": 20, "resource": "minecraft:glass", "blockstates": [102] },
                "water": { "id": 30, "resource": "minecraft:water", "blockstates": [210, 211, 212] },
                "torch": { "id": 50, "resource": "minecraft:torch", "blockstates": [140, 141] },
                "chest": { "id": 54, "resource": "minecraft:chest", "blockstates": [110, 111, 112, 113] },
                "crafting_table": { "id": 58, "resource": "minecraft:crafting_table", "blockstates": [130] },
                "furnace": { "id": 61, "resource": "minecraft:furnace", "blockstates": [120, 121] },
                "lantern": { "id": 150, "resource": "minecraft:lantern", "blockstates": [150, 151] },
                "iron_chain": { "id": 151, "resource": "minecraft:iron_chain", "blockstates": [160, 161, 162] }
            },
            "block_entity": {
                "furnace": { "id": 0, "resource": "minecraft:furnace" },
                "chest": { "id": 1, "resource": "minecraft:chest" },
                "sign": { "id": 7, "resource": "minecraft:sign" },
                "beacon": { "id": 14, "resource": "minecraft:beacon" },
                "skull": { "id": 15, "resource": "minecraft:skull" },
                "hopper": { "id": 17, "resource": "minecraft:hopper" },
                "banner": { "id": 20, "resource": "minecraft:banner" },
                "bed": { "id": 24, "resource": "minecraft:bed" }
            },
            "item": {
                "stick": { "id": 10, "resource": "minecraft:stick" },
                "apple": { "id": 11, "resource": "minecraft:apple" },
                "bread": { "id": 12, "resource": "minecraft:bread" },
                "diamond": { "id": 20, "resource": "minecraft:diamond" },
                "iron_ingot": { "id": 21, "resource": "minecraft:iron_ingot" },
                "iron_sword": { "id": 22, "resource": "minecraft:iron_sword" },
                "iron_chain": { "id": 23, "resource": "minecraft:iron_chain" },
                "oak_planks": { "id": 24, "resource": "minecraft:oak_planks" },
                "torch": { "id": 25, "resource": "minecraft:torch" },
                "bucket": { "id": 26, "resource": "minecraft:bucket" }
            }
        }
    })
}

/// The 767 document as written before the format-1 rename: format marker
/// 0 and the iron chain still keyed `"chain"` in blocks and items.
///
/// Upgrading this document must yield exactly [`document_767`].
pub fn document_767_format0() -> Value {
    let mut document = document_767();
    document["meta"]["format_version"] = json!(0);
    rename(&mut document, "block", "iron_chain", "chain");
    rename(&mut document, "item", "iron_chain", "chain");
    document
}

/// A sibling document for protocol 768 (game version 1.21.2) with a few
/// reassigned ids.
pub fn document_768() -> Value {
    let mut document = document_767();
    document["meta"]["protocol_version"] = json!(PROTOCOL_768);
    document["meta"]["game_versions"] = json!(["1.21.2"]);
    // 768 shuffled two play ids.
    document["packets"]["play"]["block_action"]["id"] = json!(10);
    document["packets"]["play"]["block_update"]["id"] = json!(8);
    document
}

fn rename(document: &mut Value, registry: &str, from: &str, to: &str) {
    let Some(object) = document["registries"][registry].as_object_mut() else {
        return;
    };
    if let Some(entry) = object.remove(from) {
        object.insert(to.to_string(), entry);
    }
}
