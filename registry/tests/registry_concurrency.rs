use std::thread;

use demo_data::{document_767, document_768};
use ident::{ConnectionPhase, PacketType};
use protocol::ProtocolNumber;
use registry::ProtocolRegistry;

#[test]
fn a_held_version_stays_consistent_across_unload() {
    let registry = ProtocolRegistry::new();
    registry.load(document_767()).unwrap();

    let held = registry.get(ProtocolNumber::new(767)).unwrap();
    assert!(registry.unload(ProtocolNumber::new(767)));

    // The unloaded instance keeps answering, stale but consistent.
    assert_eq!(
        held.packet_id(ConnectionPhase::Play, PacketType::BlockAction),
        8
    );
    assert_eq!(held.game_versions(), ["1.21", "1.21.1"]);

    // New lookups no longer find it.
    assert!(registry.get(ProtocolNumber::new(767)).is_none());
    assert!(registry.get_by_game_version("1.21").is_none());
}

#[test]
fn readers_never_see_a_torn_registry_during_load_unload_cycles() {
    let registry = ProtocolRegistry::new();
    registry.load(document_767()).unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    // 768 flickers in and out; whenever it is visible it
                    // must be complete.
                    if let Some(version) = registry.get_by_game_version("1.21.2") {
                        assert_eq!(version.number(), ProtocolNumber::new(768));
                        assert_eq!(
                            version.packet_id(ConnectionPhase::Play, PacketType::BlockAction),
                            10
                        );
                    }

                    // 767 is never touched by the writer.
                    let v767 = registry.get(ProtocolNumber::new(767)).unwrap();
                    assert_eq!(
                        v767.packet_type(ConnectionPhase::Play, 8),
                        PacketType::BlockAction
                    );
                }
            });
        }

        scope.spawn(|| {
            for _ in 0..200 {
                registry.load(document_768()).unwrap();
                assert!(registry.unload(ProtocolNumber::new(768)));
            }
        });
    });

    assert_eq!(
        registry.supported_protocol_versions(),
        vec![ProtocolNumber::new(767)]
    );
    assert!(registry.get_by_game_version("1.21.2").is_none());
}

#[test]
fn concurrent_loads_serialize_without_losing_versions() {
    let registry = ProtocolRegistry::new();

    thread::scope(|scope| {
        scope.spawn(|| {
            registry.load(document_767()).unwrap();
        });
        scope.spawn(|| {
            registry.load(document_768()).unwrap();
        });
    });

    assert_eq!(
        registry.supported_protocol_versions(),
        vec![ProtocolNumber::new(767), ProtocolNumber::new(768)]
    );
    assert_eq!(
        registry.supported_game_versions(),
        vec!["1.21", "1.21.1", "1.21.2"]
    );
}
