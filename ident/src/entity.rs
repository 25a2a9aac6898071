//! Entity type catalog.

use crate::category::LogicalId;
use crate::descriptor::TypeDescriptor;

const SECTION: &[&str] = &["registries", "entity_type"];

/// A logical entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Creeper,
    Zombie,
    Skeleton,
    Spider,
    Pig,
    Cow,
    Sheep,
    Chicken,
    Villager,
    Enderman,
    Bat,
    Horse,
    Arrow,
    ItemEntity,
    Undefined,
}

impl EntityType {
    /// Configuration key of this entity type.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Creeper => "creeper",
            Self::Zombie => "zombie",
            Self::Skeleton => "skeleton",
            Self::Spider => "spider",
            Self::Pig => "pig",
            Self::Cow => "cow",
            Self::Sheep => "sheep",
            Self::Chicken => "chicken",
            Self::Villager => "villager",
            Self::Enderman => "enderman",
            Self::Bat => "bat",
            Self::Horse => "horse",
            Self::Arrow => "arrow",
            Self::ItemEntity => "item",
            Self::Undefined => "undefined",
        }
    }
}

impl LogicalId for EntityType {
    const CATEGORY: &'static str = "entity_type";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::Creeper,
        Self::Zombie,
        Self::Skeleton,
        Self::Spider,
        Self::Pig,
        Self::Cow,
        Self::Sheep,
        Self::Chicken,
        Self::Villager,
        Self::Enderman,
        Self::Bat,
        Self::Horse,
        Self::Arrow,
        Self::ItemEntity,
    ];
    const COUNT: usize = Self::MEMBERS.len() + 1;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn descriptor(self) -> TypeDescriptor {
        TypeDescriptor::new(SECTION, self.key())
    }
}
