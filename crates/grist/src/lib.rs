//! Grist: cell abstraction and behavior dispatch for grid-based puzzle
//! simulations.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Grist sub-crates. For most users, adding `grist` as a single dependency
//! is sufficient.
//!
//! Grist models each tile of a puzzle grid as a typed cell. A fixed pool
//! of builtin types (wall, slide, mover, trash, enemy, ...) carries
//! hand-coded behavior; every other registered type dispatches through an
//! optional [`CellBehavior`](cell::CellBehavior) table, falling back to
//! permissive defaults. The grid stepper that drives ticks lives outside
//! this workspace and talks to the core through the
//! [`Grid`](cell::Grid) and [`SoundSink`](cell::SoundSink) seams.
//!
//! # Quick start
//!
//! ```rust
//! use grist::prelude::*;
//!
//! // A custom cell type that refuses to move under weak forces.
//! struct Anchor;
//! impl CellBehavior for Anchor {
//!     fn can_move(
//!         &self,
//!         _grid: &dyn Grid,
//!         _cell: &CellState,
//!         _x: i32,
//!         _y: i32,
//!         _dir: Direction,
//!         _force_kind: &str,
//!         force: f64,
//!     ) -> bool {
//!         force >= 2.0
//!     }
//! }
//!
//! // Setup phase: mint identities, register behaviors, freeze.
//! let mut types = TypeRegistry::new();
//! let mut strings = Interner::new();
//! let builtins = BuiltinIds::register(&mut types, &mut strings);
//! let anchor = types.register("anchor", "Anchor", "Holds fast unless forced");
//!
//! let mut builder = BehaviorRegistryBuilder::new(builtins);
//! builder.register(anchor, Box::new(Anchor)).unwrap();
//! let registry = builder.freeze();
//!
//! // Dispatch phase: the stepper asks per-cell questions.
//! struct NoGrid;
//! impl Grid for NoGrid {
//!     fn get(&self, _x: i32, _y: i32) -> Option<&CellState> { None }
//!     fn set(&mut self, _x: i32, _y: i32, _cell: CellState) {}
//! }
//!
//! let cell = CellState::new(anchor, 0);
//! assert!(!registry.can_move(&NoGrid, &cell, 0, 0, Direction::Right, "push", 1.0));
//! assert!(registry.can_move(&NoGrid, &cell, 0, 0, Direction::Right, "push", 3.0));
//!
//! // Builtins win over anything registered for the same identity.
//! let wall = CellState::new(builtins.wall, 0);
//! assert!(!registry.can_move(&NoGrid, &wall, 0, 0, Direction::Right, "push", 9.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grist-core` | Identity handles, interner, type registry, direction, flags |
//! | [`cell`] | `grist-cell` | Cell values, behavior trait, registry, dispatch operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identity, direction, and flag types (`grist-core`).
///
/// Contains the interning authority ([`types::Interner`],
/// [`types::Symbol`]), the cell-type registry ([`types::TypeRegistry`],
/// [`types::BuiltinIds`]), and the shared value types.
pub use grist_core as types;

/// Cell values and behavior dispatch (`grist-cell`).
///
/// The [`cell::CellBehavior`] trait is the main extension point for
/// user-defined cell types; [`cell::BehaviorRegistry`] carries the eight
/// per-tick dispatch operations.
pub use grist_cell as cell;

/// Common imports for typical Grist usage.
///
/// ```rust
/// use grist::prelude::*;
/// ```
///
/// This imports the setup types (interner, type registry, builder), the
/// dispatch registry, the behavior trait, and the collaborator seams.
pub mod prelude {
    // Identity and setup
    pub use grist_core::{
        AudioTags, BuiltinIds, CellFlags, CellTypeDef, CellTypeId, Direction, Interner, Symbol,
        TypeRegistry,
    };

    // Errors
    pub use grist_core::RegistryError;

    // Cells and dispatch
    pub use grist_cell::{
        BehaviorRegistry, BehaviorRegistryBuilder, CellBehavior, CellState, Grid, SoundSink,
    };
}
