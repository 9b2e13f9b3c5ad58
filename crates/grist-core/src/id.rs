//! Strongly-typed handles for interned strings and cell types.

use std::fmt;

/// Handle for an interned string.
///
/// Produced only by an [`Interner`](crate::Interner). Interning the same
/// text twice yields the same symbol, so symbol equality substitutes for
/// content equality everywhere a key is compared. The compare is a plain
/// integer compare regardless of string length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle identifying a registered cell type.
///
/// Produced only by [`TypeRegistry::register`](crate::TypeRegistry::register),
/// which is idempotent per machine name: the same name always yields the
/// same id. Equality is handle equality; the dispatch layer relies on this
/// being O(1) when it checks cells against the builtin pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellTypeId(u32);

impl CellTypeId {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
