//! The per-tile cell value: identity, rotation, and lazy attributes.

use crate::attr::AttrMap;
use crate::registry::TableSlot;
use grist_core::{CellFlags, CellTypeId, Symbol};
use std::cell::Cell;

/// One tile occupant.
///
/// A `CellState` is a small value: cloning one is cheap unless it carries
/// attributes, in which case the attribute values are deep-copied while
/// the interned keys stay shared. The type identity is fixed at
/// construction, which is what makes the per-cell behavior-table cache
/// safe without any invalidation protocol.
///
/// The `prev_x`/`prev_y` hints, the `updated` marker, and the `flags`
/// bits belong to the stepper and renderer; this crate only initializes
/// them.
#[derive(Clone, Debug)]
pub struct CellState {
    type_id: CellTypeId,
    rotation: u8,
    added_rotation: i32,
    /// Previous x position for render interpolation; `None` disables it.
    pub prev_x: Option<i32>,
    /// Previous y position for render interpolation; `None` disables it.
    pub prev_y: Option<i32>,
    /// Tick-scoped marker managed by the stepper; `false` at construction.
    pub updated: bool,
    /// Pass-through flag bits; the core never interprets these.
    pub flags: CellFlags,
    attrs: Option<Box<AttrMap>>,
    table: Cell<TableSlot>,
}

impl CellState {
    /// Create a cell of the given type, normalizing `rotation` into `[0, 4)`.
    pub fn new(type_id: CellTypeId, rotation: u8) -> Self {
        Self {
            type_id,
            rotation: rotation % 4,
            added_rotation: 0,
            prev_x: None,
            prev_y: None,
            updated: false,
            flags: CellFlags::empty(),
            attrs: None,
            table: Cell::new(TableSlot::Unresolved),
        }
    }

    /// The immutable type identity.
    pub fn type_id(&self) -> CellTypeId {
        self.type_id
    }

    /// Current facing in `[0, 4)`, in the same encoding as
    /// [`Direction`](grist_core::Direction) indices.
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Net rotation applied over the cell's lifetime, never wrapped into
    /// the facing range.
    ///
    /// Consumed by render interpolation; logic reads
    /// [`rotation`](Self::rotation) instead.
    pub fn added_rotation(&self) -> i32 {
        self.added_rotation
    }

    /// Rotate by `amount` quarter turns; negative is counter-clockwise.
    ///
    /// The facing stays normalized in `[0, 4)` whatever the sign or
    /// magnitude of `amount`; the raw amount accumulates into
    /// [`added_rotation`](Self::added_rotation).
    pub fn rotate(&mut self, amount: i32) {
        self.rotation = (i32::from(self.rotation) + amount.rem_euclid(4)).rem_euclid(4) as u8;
        self.added_rotation = self.added_rotation.wrapping_add(amount);
    }

    /// Exchange the full contents of two cells, attributes included.
    ///
    /// Ownership of any attached attribute map moves with the value; no
    /// duplication happens.
    pub fn swap_with(&mut self, other: &mut CellState) {
        std::mem::swap(self, other);
    }

    /// Look up an attribute value.
    pub fn attr(&self, key: Symbol) -> Option<&str> {
        self.attrs.as_ref().and_then(|map| map.get(key))
    }

    /// Set or remove an attribute.
    ///
    /// `Some(value)` stores an owned copy of `value`, replacing in place
    /// when the key exists and allocating the map on first use otherwise.
    /// `None` removes the key; removing an absent key is a no-op, and
    /// removing the last entry releases the map storage.
    pub fn set_attr(&mut self, key: Symbol, value: Option<&str>) {
        match value {
            Some(value) => self.attrs.get_or_insert_with(Box::default).set(key, value),
            None => {
                if let Some(map) = self.attrs.as_mut() {
                    map.remove(key);
                    if map.is_empty() {
                        self.attrs = None;
                    }
                }
            }
        }
    }

    /// The attribute key at position `idx` in insertion order, or `None`
    /// when no map is attached or `idx` is out of range.
    pub fn nth_attr_key(&self, idx: usize) -> Option<Symbol> {
        self.attrs.as_ref().and_then(|map| map.nth_key(idx))
    }

    /// Number of attributes currently attached.
    pub fn attr_count(&self) -> usize {
        self.attrs.as_ref().map_or(0, |map| map.len())
    }

    pub(crate) fn table_slot(&self) -> TableSlot {
        self.table.get()
    }

    pub(crate) fn set_table_slot(&self, slot: TableSlot) {
        self.table.set(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grist_core::{Interner, TypeRegistry};
    use proptest::prelude::*;

    fn test_type() -> CellTypeId {
        let mut types = TypeRegistry::new();
        types.register("crate", "Crate", "test type")
    }

    #[test]
    fn new_normalizes_rotation() {
        let cell = CellState::new(test_type(), 7);
        assert_eq!(cell.rotation(), 3);
        assert_eq!(cell.added_rotation(), 0);
        assert!(!cell.updated);
        assert_eq!(cell.prev_x, None);
        assert_eq!(cell.prev_y, None);
        assert_eq!(cell.attr_count(), 0);
    }

    #[test]
    fn rotate_wraps_and_accumulates() {
        let mut cell = CellState::new(test_type(), 0);
        cell.rotate(-1);
        assert_eq!(cell.rotation(), 3);
        assert_eq!(cell.added_rotation(), -1);
        cell.rotate(6);
        assert_eq!(cell.rotation(), 1);
        assert_eq!(cell.added_rotation(), 5);
    }

    proptest! {
        #[test]
        fn rotation_stays_normalized(
            start in 0u8..4,
            amounts in prop::collection::vec(-100i32..100, 0..32),
        ) {
            let mut cell = CellState::new(test_type(), start);
            let mut expected = i32::from(start);
            for amount in amounts {
                cell.rotate(amount);
                expected += amount;
                prop_assert!(cell.rotation() < 4);
                prop_assert_eq!(i32::from(cell.rotation()), expected.rem_euclid(4));
            }
        }
    }

    #[test]
    fn clone_isolates_attribute_values() {
        let mut strings = Interner::new();
        let key = strings.intern("color");
        let mut original = CellState::new(test_type(), 0);
        original.set_attr(key, Some("red"));

        let mut copy = original.clone();
        copy.set_attr(key, Some("blue"));

        assert_eq!(original.attr(key), Some("red"));
        assert_eq!(copy.attr(key), Some("blue"));
    }

    #[test]
    fn set_replaces_in_place_without_reordering() {
        let mut strings = Interner::new();
        let a = strings.intern("a");
        let b = strings.intern("b");
        let mut cell = CellState::new(test_type(), 0);
        cell.set_attr(a, Some("1"));
        cell.set_attr(b, Some("2"));
        cell.set_attr(a, Some("3"));
        assert_eq!(cell.attr(a), Some("3"));
        assert_eq!(cell.nth_attr_key(0), Some(a));
        assert_eq!(cell.nth_attr_key(1), Some(b));
        assert_eq!(cell.attr_count(), 2);
    }

    #[test]
    fn remove_absent_key_is_a_noop() {
        let mut strings = Interner::new();
        let a = strings.intern("a");
        let ghost = strings.intern("ghost");
        let mut cell = CellState::new(test_type(), 0);
        cell.set_attr(a, Some("1"));
        cell.set_attr(ghost, None);
        assert_eq!(cell.attr_count(), 1);
        assert_eq!(cell.attr(a), Some("1"));

        // Removing from a cell with no map at all is fine too.
        let mut bare = CellState::new(test_type(), 0);
        bare.set_attr(ghost, None);
        assert_eq!(bare.attr_count(), 0);
    }

    #[test]
    fn set_then_remove_round_trips_to_absent() {
        let mut strings = Interner::new();
        let a = strings.intern("a");
        let mut cell = CellState::new(test_type(), 0);
        cell.set_attr(a, Some("1"));
        cell.set_attr(a, None);
        assert_eq!(cell.attr(a), None);
        assert_eq!(cell.attr_count(), 0);
        assert_eq!(cell.nth_attr_key(0), None);
    }

    #[test]
    fn nth_key_out_of_range_is_absent() {
        let mut strings = Interner::new();
        let a = strings.intern("a");
        let mut cell = CellState::new(test_type(), 0);
        assert_eq!(cell.nth_attr_key(0), None);
        cell.set_attr(a, Some("1"));
        assert_eq!(cell.nth_attr_key(1), None);
    }

    #[test]
    fn swap_moves_attributes_with_the_value() {
        let mut strings = Interner::new();
        let key = strings.intern("payload");
        let mut types = TypeRegistry::new();
        let left_type = types.register("left", "Left", "test");
        let right_type = types.register("right", "Right", "test");

        let mut left = CellState::new(left_type, 1);
        left.set_attr(key, Some("cargo"));
        let mut right = CellState::new(right_type, 2);

        left.swap_with(&mut right);

        assert_eq!(left.type_id(), right_type);
        assert_eq!(left.attr(key), None);
        assert_eq!(right.type_id(), left_type);
        assert_eq!(right.rotation(), 1);
        assert_eq!(right.attr(key), Some("cargo"));
    }
}
