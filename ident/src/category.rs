//! The closed-category contract shared by every identifier kind.

use std::fmt;
use std::hash::Hash;

use crate::descriptor::TypeDescriptor;

/// A logical identifier category.
///
/// Implementors are small copyable enums whose members are fixed at build
/// time. Each category carries an explicit ordered member table and an
/// `Undefined` sentinel so that version tables can be dense arrays and
/// every lookup can be total.
pub trait LogicalId: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Category name as used in error reports.
    const CATEGORY: &'static str;

    /// The "no mapping" sentinel member.
    const UNDEFINED: Self;

    /// Every member except [`Self::UNDEFINED`], in ordinal order.
    const MEMBERS: &'static [Self];

    /// Total member count including [`Self::UNDEFINED`].
    ///
    /// Usable directly as the length of an ordinal-indexed dense array.
    const COUNT: usize;

    /// Stable dense-array index of this member.
    fn ordinal(self) -> usize;

    /// The configuration key path locating this member's entry.
    fn descriptor(self) -> TypeDescriptor;
}
