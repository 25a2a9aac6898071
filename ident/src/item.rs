//! Item type catalog.

use crate::category::LogicalId;
use crate::descriptor::TypeDescriptor;

const SECTION: &[&str] = &["registries", "item"];

/// A logical item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Stick,
    Apple,
    Bread,
    Diamond,
    IronIngot,
    IronSword,
    IronChain,
    OakPlanks,
    Torch,
    Bucket,
    Undefined,
}

impl ItemType {
    /// Configuration key of this item type.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Stick => "stick",
            Self::Apple => "apple",
            Self::Bread => "bread",
            Self::Diamond => "diamond",
            Self::IronIngot => "iron_ingot",
            Self::IronSword => "iron_sword",
            Self::IronChain => "iron_chain",
            Self::OakPlanks => "oak_planks",
            Self::Torch => "torch",
            Self::Bucket => "bucket",
            Self::Undefined => "undefined",
        }
    }
}

impl LogicalId for ItemType {
    const CATEGORY: &'static str = "item";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::Stick,
        Self::Apple,
        Self::Bread,
        Self::Diamond,
        Self::IronIngot,
        Self::IronSword,
        Self::IronChain,
        Self::OakPlanks,
        Self::Torch,
        Self::Bucket,
    ];
    const COUNT: usize = Self::MEMBERS.len() + 1;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn descriptor(self) -> TypeDescriptor {
        TypeDescriptor::new(SECTION, self.key())
    }
}
