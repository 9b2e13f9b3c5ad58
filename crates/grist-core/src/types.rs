//! The cell-type registry and the privileged builtin identity pool.

use crate::id::{CellTypeId, Symbol};
use crate::intern::Interner;
use indexmap::IndexMap;

/// Metadata describing one registered cell type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellTypeDef {
    /// Stable machine name, unique across the registry (e.g. `"mover"`).
    pub machine_name: String,
    /// Human-readable name for UI and debugging.
    pub display_name: String,
    /// Longer description shown in pickers and tooltips.
    pub description: String,
}

/// Registry of cell types, the single authority for [`CellTypeId`] handles.
///
/// Registration is idempotent per machine name: registering a name twice
/// returns the id minted the first time, with the original metadata kept.
/// Ids index into registration order and stay valid for the registry's
/// lifetime.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    defs: IndexMap<String, CellTypeDef>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cell type, returning its stable identity.
    pub fn register(
        &mut self,
        machine_name: &str,
        display_name: &str,
        description: &str,
    ) -> CellTypeId {
        if let Some(index) = self.defs.get_index_of(machine_name) {
            return CellTypeId::new(index as u32);
        }
        let def = CellTypeDef {
            machine_name: machine_name.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
        };
        let (index, _) = self.defs.insert_full(machine_name.to_string(), def);
        CellTypeId::new(index as u32)
    }

    /// The definition behind `id`, or `None` for an id this registry did
    /// not mint.
    pub fn get(&self, id: CellTypeId) -> Option<&CellTypeDef> {
        self.defs.get_index(id.index()).map(|(_, def)| def)
    }

    /// Look up an already-registered machine name.
    pub fn lookup(&self, machine_name: &str) -> Option<CellTypeId> {
        self.defs
            .get_index_of(machine_name)
            .map(|index| CellTypeId::new(index as u32))
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if no type has been registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Interned audio tags consumed by the dispatch layer and the stepper.
#[derive(Clone, Copy, Debug)]
pub struct AudioTags {
    /// Played when a trash cell eats something.
    pub destroy: Symbol,
    /// Played when an enemy dies.
    pub explosion: Symbol,
    /// Interned `"move"` tag; the stepper plays it when a cell moves.
    pub movement: Symbol,
}

/// The privileged cell type identities with hand-coded dispatch behavior.
///
/// Registered once during setup. The dispatch layer checks these before
/// consulting any registered behavior, so a builtin identity cannot be
/// behaviorally overridden.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinIds {
    /// Pushable from all directions.
    pub push: CellTypeId,
    /// Movable only along its axis.
    pub slide: CellTypeId,
    /// Moves forward one tile per tick.
    pub mover: CellTypeId,
    /// Deletes anything that moves into it.
    pub trash: CellTypeId,
    /// Deletes whatever moves into it and dies in the process.
    pub enemy: CellTypeId,
    /// Duplicates the cell behind it.
    pub generator: CellTypeId,
    /// Marks tiles the player may modify in puzzles.
    pub place: CellTypeId,
    /// Rotates its neighbours a quarter turn clockwise each tick.
    pub rotator_cw: CellTypeId,
    /// Rotates its neighbours a quarter turn counter-clockwise each tick.
    pub rotator_ccw: CellTypeId,
    /// Pure nothingness.
    pub empty: CellTypeId,
    /// Immobile.
    pub wall: CellTypeId,
    /// Audio tags for the builtin side effects.
    pub audio: AudioTags,
}

impl BuiltinIds {
    /// Register the builtin pool and intern its audio tags.
    ///
    /// Idempotent alongside [`TypeRegistry::register`]: calling this twice
    /// against the same registry and interner yields identical handles.
    pub fn register(types: &mut TypeRegistry, strings: &mut Interner) -> Self {
        Self {
            push: types.register("push", "Push", "Can be pushed from all directions"),
            slide: types.register("slide", "Slide", "Can be pushed along its axis"),
            mover: types.register("mover", "Mover", "Moves forward one tile per tick"),
            trash: types.register("trash", "Trash", "Deletes anything that moves into it"),
            enemy: types.register(
                "enemy",
                "Enemy",
                "Deletes whatever moves into it and dies in the process",
            ),
            generator: types.register("generator", "Generator", "Duplicates the cell behind it"),
            place: types.register("place", "Placeable", "Marks tiles the player may modify"),
            rotator_cw: types.register(
                "rotator_cw",
                "Rotator CW",
                "Rotates its neighbours a quarter turn clockwise each tick",
            ),
            rotator_ccw: types.register(
                "rotator_ccw",
                "Rotator CCW",
                "Rotates its neighbours a quarter turn counter-clockwise each tick",
            ),
            empty: types.register("empty", "Empty", "Pure nothingness"),
            wall: types.register("wall", "Wall", "Immobile"),
            audio: AudioTags {
                destroy: strings.intern("destroy"),
                explosion: strings.intern("explosion"),
                movement: strings.intern("move"),
            },
        }
    }
}
