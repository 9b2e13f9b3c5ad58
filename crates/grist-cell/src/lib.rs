//! Cell values and behavior dispatch for the Grist puzzle simulation.
//!
//! Every tile on the grid holds a [`CellState`]: a typed value carrying a
//! rotation, optional attributes, and a cached link to its type's
//! registered behavior. The [`BehaviorRegistry`] answers the per-tick
//! questions a grid stepper asks about each cell (can it move, does it
//! steer a push, is it trash) in a fixed two-tier order: built-in
//! identities get hand-coded answers first, then the type's registered
//! [`CellBehavior`] runs, then a permissive default applies.
//!
//! Registration happens through [`BehaviorRegistryBuilder`] during setup.
//! [`BehaviorRegistryBuilder::freeze`] ends the setup phase and produces
//! the immutable registry used for dispatch, so no synchronization is
//! needed once stepping begins.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod attr;
mod behavior;
mod cell;
mod dispatch;
mod grid;
mod registry;

pub use behavior::CellBehavior;
pub use cell::CellState;
pub use grid::{Grid, SoundSink};
pub use registry::{BehaviorRegistry, BehaviorRegistryBuilder};
