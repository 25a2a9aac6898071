//! Packet types and connection phases.

use std::fmt;

use crate::category::LogicalId;
use crate::descriptor::TypeDescriptor;

/// The connection phase a packet belongs to.
///
/// Wire ids are assigned per phase, so the same integer means different
/// packets in different phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionPhase {
    Login,
    Configuration,
    Play,
}

impl ConnectionPhase {
    /// All phases, in handshake order.
    pub const ALL: &'static [Self] = &[Self::Login, Self::Configuration, Self::Play];

    /// Section path of this phase's packet table in a mapping document.
    #[must_use]
    pub const fn section(self) -> &'static [&'static str] {
        match self {
            Self::Login => &["packets", "login"],
            Self::Configuration => &["packets", "configuration"],
            Self::Play => &["packets", "play"],
        }
    }

    /// Lowercase phase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Configuration => "configuration",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for ConnectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A logical packet type.
///
/// Each member belongs to exactly one [`ConnectionPhase`]; a version's
/// per-phase table is built from that phase's members only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketType {
    // Login
    LoginDisconnect,
    Hello,
    LoginSuccess,
    SetCompression,
    // Configuration
    RegistryData,
    UpdateTags,
    FinishConfiguration,
    // Play
    KeepAlive,
    ChunkData,
    BlockAction,
    BlockUpdate,
    BlockEntityData,
    SpawnEntity,
    RemoveEntities,
    SetEntityData,
    SetTime,
    PlayerChat,
    Sound,
    Respawn,
    Undefined,
}

impl PacketType {
    /// Login-phase members, in ordinal order.
    pub const LOGIN_MEMBERS: &'static [Self] = &[
        Self::LoginDisconnect,
        Self::Hello,
        Self::LoginSuccess,
        Self::SetCompression,
    ];

    /// Configuration-phase members, in ordinal order.
    pub const CONFIGURATION_MEMBERS: &'static [Self] = &[
        Self::RegistryData,
        Self::UpdateTags,
        Self::FinishConfiguration,
    ];

    /// Play-phase members, in ordinal order.
    pub const PLAY_MEMBERS: &'static [Self] = &[
        Self::KeepAlive,
        Self::ChunkData,
        Self::BlockAction,
        Self::BlockUpdate,
        Self::BlockEntityData,
        Self::SpawnEntity,
        Self::RemoveEntities,
        Self::SetEntityData,
        Self::SetTime,
        Self::PlayerChat,
        Self::Sound,
        Self::Respawn,
    ];

    /// Members of one phase.
    #[must_use]
    pub const fn members_in(phase: ConnectionPhase) -> &'static [Self] {
        match phase {
            ConnectionPhase::Login => Self::LOGIN_MEMBERS,
            ConnectionPhase::Configuration => Self::CONFIGURATION_MEMBERS,
            ConnectionPhase::Play => Self::PLAY_MEMBERS,
        }
    }

    /// The phase this packet belongs to.
    ///
    /// `Undefined` is never built into a phase table.
    #[must_use]
    pub const fn phase(self) -> ConnectionPhase {
        match self {
            Self::LoginDisconnect | Self::Hello | Self::LoginSuccess | Self::SetCompression => {
                ConnectionPhase::Login
            }
            Self::RegistryData | Self::UpdateTags | Self::FinishConfiguration => {
                ConnectionPhase::Configuration
            }
            _ => ConnectionPhase::Play,
        }
    }

    /// Configuration key of this packet within its phase section.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LoginDisconnect => "login_disconnect",
            Self::Hello => "hello",
            Self::LoginSuccess => "login_success",
            Self::SetCompression => "set_compression",
            Self::RegistryData => "registry_data",
            Self::UpdateTags => "update_tags",
            Self::FinishConfiguration => "finish_configuration",
            Self::KeepAlive => "keep_alive",
            Self::ChunkData => "chunk_data",
            Self::BlockAction => "block_action",
            Self::BlockUpdate => "block_update",
            Self::BlockEntityData => "block_entity_data",
            Self::SpawnEntity => "spawn_entity",
            Self::RemoveEntities => "remove_entities",
            Self::SetEntityData => "set_entity_data",
            Self::SetTime => "set_time",
            Self::PlayerChat => "player_chat",
            Self::Sound => "sound",
            Self::Respawn => "respawn",
            Self::Undefined => "undefined",
        }
    }
}

impl LogicalId for PacketType {
    const CATEGORY: &'static str = "packet";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::LoginDisconnect,
        Self::Hello,
        Self::LoginSuccess,
        Self::SetCompression,
        Self::RegistryData,
        Self::UpdateTags,
        Self::FinishConfiguration,
        Self::KeepAlive,
        Self::ChunkData,
        Self::BlockAction,
        Self::BlockUpdate,
        Self::BlockEntityData,
        Self::SpawnEntity,
        Self::RemoveEntities,
        Self::SetEntityData,
        Self::SetTime,
        Self::PlayerChat,
        Self::Sound,
        Self::Respawn,
    ];
    const COUNT: usize = Self::MEMBERS.len() + 1;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn descriptor(self) -> TypeDescriptor {
        TypeDescriptor::new(self.phase().section(), self.key())
    }
}
