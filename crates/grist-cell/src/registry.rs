//! Two-phase behavior registry: append during setup, freeze for dispatch.

use crate::behavior::CellBehavior;
use crate::cell::CellState;
use grist_core::{BuiltinIds, CellFlags, CellTypeId, RegistryError};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`RegistryInstanceId`] allocation.
static REGISTRY_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identity of one frozen registry.
///
/// Stored alongside cached lookup results so a cell dispatched against a
/// different registry (rare, but legal) re-resolves instead of trusting
/// an index minted elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RegistryInstanceId(u64);

impl RegistryInstanceId {
    fn next() -> Self {
        Self(REGISTRY_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Cached outcome of resolving a cell's behavior, kept on the cell.
///
/// Keeping "resolved, absent" distinct from "never resolved" is what
/// lets unregistered types skip the registry scan after their first
/// dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TableSlot {
    /// No resolution attempted yet.
    Unresolved,
    /// Resolved against the given registry: no behavior registered.
    Absent(RegistryInstanceId),
    /// Resolved against the given registry: behavior at this index.
    Found(RegistryInstanceId, usize),
}

/// Marker behavior for the builtin `place` type: placeable, all defaults.
struct PlaceMarker;

impl CellBehavior for PlaceMarker {
    fn flags(&self) -> CellFlags {
        CellFlags::PLACEABLE
    }
}

/// Setup-phase registry accepting behavior registrations.
///
/// Append-only. Registering twice for one identity is rejected outright
/// rather than shadowing, so resolution never depends on registration
/// order. [`freeze`](Self::freeze) ends the setup phase.
pub struct BehaviorRegistryBuilder {
    builtins: BuiltinIds,
    tables: IndexMap<CellTypeId, Box<dyn CellBehavior>>,
}

impl BehaviorRegistryBuilder {
    /// Start a registry over the given builtin pool.
    ///
    /// The builtin `place` marker behavior is pre-registered, so its
    /// placeable flag is visible through [`BehaviorRegistry::flags_for`]
    /// without any caller setup.
    pub fn new(builtins: BuiltinIds) -> Self {
        let mut tables: IndexMap<CellTypeId, Box<dyn CellBehavior>> = IndexMap::new();
        tables.insert(builtins.place, Box::new(PlaceMarker));
        Self { builtins, tables }
    }

    /// Register `behavior` for `type_id`.
    pub fn register(
        &mut self,
        type_id: CellTypeId,
        behavior: Box<dyn CellBehavior>,
    ) -> Result<(), RegistryError> {
        if self.tables.contains_key(&type_id) {
            return Err(RegistryError::DuplicateBehavior { type_id });
        }
        self.tables.insert(type_id, behavior);
        Ok(())
    }

    /// End the setup phase, producing the immutable dispatch registry.
    pub fn freeze(self) -> BehaviorRegistry {
        BehaviorRegistry {
            instance: RegistryInstanceId::next(),
            builtins: self.builtins,
            tables: self.tables,
            lookup_misses: AtomicU64::new(0),
        }
    }
}

/// Frozen, shareable behavior registry: the dispatch-phase view.
///
/// Entries are never added, removed, or reassigned after
/// [`BehaviorRegistryBuilder::freeze`], so concurrent reads need no
/// locking. Each lookup caches its outcome on the cell itself; the
/// per-type scan is paid once per cell instance and every later dispatch
/// is O(1).
pub struct BehaviorRegistry {
    instance: RegistryInstanceId,
    builtins: BuiltinIds,
    tables: IndexMap<CellTypeId, Box<dyn CellBehavior>>,
    lookup_misses: AtomicU64,
}

impl BehaviorRegistry {
    /// The builtin identity pool this registry dispatches against.
    pub fn builtins(&self) -> &BuiltinIds {
        &self.builtins
    }

    /// Resolve the behavior registered for `cell`'s type, if any.
    ///
    /// The first call per cell consults the registry and stores the
    /// outcome (found or absent) on the cell; later calls hit that
    /// cache. Caching is sound because a cell's type identity never
    /// changes and frozen registries never reassign entries.
    pub fn table_for(&self, cell: &CellState) -> Option<&dyn CellBehavior> {
        match cell.table_slot() {
            TableSlot::Found(instance, index) if instance == self.instance => {
                self.tables.get_index(index).map(|(_, b)| b.as_ref())
            }
            TableSlot::Absent(instance) if instance == self.instance => None,
            _ => {
                self.lookup_misses.fetch_add(1, Ordering::Relaxed);
                match self.tables.get_index_of(&cell.type_id()) {
                    Some(index) => {
                        cell.set_table_slot(TableSlot::Found(self.instance, index));
                        self.tables.get_index(index).map(|(_, b)| b.as_ref())
                    }
                    None => {
                        cell.set_table_slot(TableSlot::Absent(self.instance));
                        None
                    }
                }
            }
        }
    }

    /// The registered flags for `cell`'s type; empty when none.
    pub fn flags_for(&self, cell: &CellState) -> CellFlags {
        self.table_for(cell).map_or(CellFlags::empty(), |b| b.flags())
    }

    /// How many lookups missed the per-cell cache and scanned the
    /// registry. Instrumentation for tests and profiling.
    pub fn lookup_misses(&self) -> u64 {
        self.lookup_misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grist_core::{Interner, TypeRegistry};

    struct Inert;
    impl CellBehavior for Inert {}

    fn setup() -> (TypeRegistry, BuiltinIds) {
        let mut types = TypeRegistry::new();
        let mut strings = Interner::new();
        let builtins = BuiltinIds::register(&mut types, &mut strings);
        (types, builtins)
    }

    #[test]
    fn place_marker_is_preregistered() {
        let (_, builtins) = setup();
        let registry = BehaviorRegistryBuilder::new(builtins).freeze();
        let cell = CellState::new(builtins.place, 0);
        assert!(registry.flags_for(&cell).contains(CellFlags::PLACEABLE));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (mut types, builtins) = setup();
        let ghost = types.register("ghost", "Ghost", "test type");
        let mut builder = BehaviorRegistryBuilder::new(builtins);
        builder.register(ghost, Box::new(Inert)).unwrap();
        assert_eq!(
            builder.register(ghost, Box::new(Inert)),
            Err(RegistryError::DuplicateBehavior { type_id: ghost })
        );
        // The pre-registered place marker counts too.
        assert!(builder.register(builtins.place, Box::new(Inert)).is_err());
    }

    #[test]
    fn absent_resolution_is_cached() {
        let (mut types, builtins) = setup();
        let ghost = types.register("ghost", "Ghost", "test type");
        let registry = BehaviorRegistryBuilder::new(builtins).freeze();
        let cell = CellState::new(ghost, 0);

        assert!(registry.table_for(&cell).is_none());
        assert!(registry.table_for(&cell).is_none());
        assert_eq!(registry.lookup_misses(), 1);
        assert_eq!(registry.flags_for(&cell), CellFlags::empty());
    }

    #[test]
    fn found_resolution_is_cached_per_cell() {
        let (mut types, builtins) = setup();
        let ghost = types.register("ghost", "Ghost", "test type");
        let mut builder = BehaviorRegistryBuilder::new(builtins);
        builder.register(ghost, Box::new(Inert)).unwrap();
        let registry = builder.freeze();

        let first = CellState::new(ghost, 0);
        assert!(registry.table_for(&first).is_some());
        assert!(registry.table_for(&first).is_some());
        assert_eq!(registry.lookup_misses(), 1);

        let second = CellState::new(ghost, 0);
        assert!(registry.table_for(&second).is_some());
        assert_eq!(registry.lookup_misses(), 2);

        // Clones carry the resolved slot with them.
        let clone = first.clone();
        assert!(registry.table_for(&clone).is_some());
        assert_eq!(registry.lookup_misses(), 2);
    }

    #[test]
    fn stale_cache_from_another_registry_re_resolves() {
        let (mut types, builtins) = setup();
        let ghost = types.register("ghost", "Ghost", "test type");

        let mut builder = BehaviorRegistryBuilder::new(builtins);
        builder.register(ghost, Box::new(Inert)).unwrap();
        let first = builder.freeze();
        let second = BehaviorRegistryBuilder::new(builtins).freeze();

        let cell = CellState::new(ghost, 0);
        assert!(first.table_for(&cell).is_some());
        // The second registry has no ghost behavior; the cached index
        // from `first` must not leak through.
        assert!(second.table_for(&cell).is_none());
        assert!(first.table_for(&cell).is_some());
    }
}
