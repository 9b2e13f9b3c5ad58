//! The [`CellFlags`] bitset carried by cells and behavior tables.

use std::ops::{BitOr, BitOrAssign};

/// Capability flags attached to a cell or a registered behavior.
///
/// A plain bitset. The core only interprets [`CellFlags::PLACEABLE`];
/// all other bits pass through untouched for outer layers to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellFlags(u32);

impl CellFlags {
    /// Marks tiles the player may modify in puzzles and vaults.
    pub const PLACEABLE: CellFlags = CellFlags(1);

    /// The empty flag set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Reconstruct a flag set from raw bits.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bit representation.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is set in `self`.
    pub fn contains(self, other: CellFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set every flag in `other`.
    pub fn insert(&mut self, other: CellFlags) {
        self.0 |= other.0;
    }

    /// Clear every flag in `other`.
    pub fn remove(&mut self, other: CellFlags) {
        self.0 &= !other.0;
    }
}

impl BitOr for CellFlags {
    type Output = CellFlags;

    fn bitor(self, rhs: CellFlags) -> CellFlags {
        CellFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellFlags {
    fn bitor_assign(&mut self, rhs: CellFlags) {
        self.0 |= rhs.0;
    }
}
