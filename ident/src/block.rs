//! Block and block-entity type catalogs.

use crate::category::LogicalId;
use crate::descriptor::TypeDescriptor;

const BLOCK_SECTION: &[&str] = &["registries", "block"];
const BLOCK_ENTITY_SECTION: &[&str] = &["registries", "block_entity"];

/// A logical block type.
///
/// Blocks additionally participate in the blockstate id space: many
/// blockstates resolve to one block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Air,
    Stone,
    Dirt,
    GrassBlock,
    Sand,
    Glass,
    OakPlanks,
    Chest,
    Furnace,
    CraftingTable,
    Torch,
    Lantern,
    IronChain,
    Water,
    Undefined,
}

impl BlockType {
    /// Configuration key of this block type.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Stone => "stone",
            Self::Dirt => "dirt",
            Self::GrassBlock => "grass_block",
            Self::Sand => "sand",
            Self::Glass => "glass",
            Self::OakPlanks => "oak_planks",
            Self::Chest => "chest",
            Self::Furnace => "furnace",
            Self::CraftingTable => "crafting_table",
            Self::Torch => "torch",
            Self::Lantern => "lantern",
            Self::IronChain => "iron_chain",
            Self::Water => "water",
            Self::Undefined => "undefined",
        }
    }
}

impl LogicalId for BlockType {
    const CATEGORY: &'static str = "block";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::Air,
        Self::Stone,
        Self::Dirt,
        Self::GrassBlock,
        Self::Sand,
        Self::Glass,
        Self::OakPlanks,
        Self::Chest,
        Self::Furnace,
        Self::CraftingTable,
        Self::Torch,
        Self::Lantern,
        Self::IronChain,
        Self::Water,
    ];
    const COUNT: usize = Self::MEMBERS.len() + 1;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn descriptor(self) -> TypeDescriptor {
        TypeDescriptor::new(BLOCK_SECTION, self.key())
    }
}

/// A logical block-entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockEntityType {
    Chest,
    Furnace,
    Sign,
    Banner,
    Beacon,
    Hopper,
    Skull,
    Bed,
    Undefined,
}

impl BlockEntityType {
    /// Configuration key of this block-entity type.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Furnace => "furnace",
            Self::Sign => "sign",
            Self::Banner => "banner",
            Self::Beacon => "beacon",
            Self::Hopper => "hopper",
            Self::Skull => "skull",
            Self::Bed => "bed",
            Self::Undefined => "undefined",
        }
    }
}

impl LogicalId for BlockEntityType {
    const CATEGORY: &'static str = "block_entity";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::Chest,
        Self::Furnace,
        Self::Sign,
        Self::Banner,
        Self::Beacon,
        Self::Hopper,
        Self::Skull,
        Self::Bed,
    ];
    const COUNT: usize = Self::MEMBERS.len() + 1;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn descriptor(self) -> TypeDescriptor {
        TypeDescriptor::new(BLOCK_ENTITY_SECTION, self.key())
    }
}
