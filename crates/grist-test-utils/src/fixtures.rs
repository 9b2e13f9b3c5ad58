//! Reusable cell-behavior fixtures.
//!
//! Two standard behaviors for dispatch testing:
//!
//! - [`StaticBehavior`] — answers every question from its public fields.
//! - [`CountingBehavior`] — counts invocations per operation through a
//!   shared [`CallCounts`] handle.

use grist_cell::{CellBehavior, CellState, Grid, SoundSink};
use grist_core::{CellFlags, Direction};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Answers every dispatch question from stored fields.
///
/// The `Default` answers match the registry's own fallbacks, so
/// construct with struct-update syntax and set only the fields the test
/// cares about.
#[derive(Debug)]
pub struct StaticBehavior {
    pub flags: CellFlags,
    pub movable: bool,
    pub bias: f32,
    pub generable: bool,
    pub trash: bool,
    pub acid: bool,
    /// Returned verbatim from `signal`, whatever the protocol.
    pub reply: Option<String>,
}

impl Default for StaticBehavior {
    fn default() -> Self {
        Self {
            flags: CellFlags::empty(),
            movable: true,
            bias: 0.0,
            generable: true,
            trash: false,
            acid: false,
            reply: None,
        }
    }
}

impl CellBehavior for StaticBehavior {
    fn flags(&self) -> CellFlags {
        self.flags
    }

    fn can_move(
        &self,
        _grid: &dyn Grid,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
    ) -> bool {
        self.movable
    }

    fn bias(
        &self,
        _grid: &dyn Grid,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
    ) -> f32 {
        self.bias
    }

    fn can_generate(
        &self,
        _grid: &dyn Grid,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _generator: &CellState,
        _gx: i32,
        _gy: i32,
        _dir: Direction,
    ) -> bool {
        self.generable
    }

    fn is_trash(
        &self,
        _grid: &dyn Grid,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
        _eating: &CellState,
    ) -> bool {
        self.trash
    }

    fn is_acid(
        &self,
        _grid: &dyn Grid,
        _cell: &CellState,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
        _dissolving: &CellState,
        _dx: i32,
        _dy: i32,
    ) -> bool {
        self.acid
    }

    fn signal(
        &self,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _protocol: &str,
        _data: &str,
        _sender: &CellState,
        _sx: i32,
        _sy: i32,
    ) -> Option<String> {
        self.reply.clone()
    }
}

/// Shared view of a [`CountingBehavior`]'s invocation counters.
///
/// Clone one out before boxing the behavior into a registry; the handle
/// keeps reading live counts afterwards.
#[derive(Clone, Debug, Default)]
pub struct CallCounts {
    can_move: Arc<AtomicUsize>,
    on_trash: Arc<AtomicUsize>,
    on_acid: Arc<AtomicUsize>,
}

impl CallCounts {
    pub fn can_move(&self) -> usize {
        self.can_move.load(Ordering::Relaxed)
    }

    pub fn on_trash(&self) -> usize {
        self.on_trash.load(Ordering::Relaxed)
    }

    pub fn on_acid(&self) -> usize {
        self.on_acid.load(Ordering::Relaxed)
    }
}

/// Counts how many times each dispatch hook runs.
///
/// Uses atomics so the counters stay readable through [`CallCounts`]
/// after the behavior is boxed behind the `Send + Sync` registry.
#[derive(Debug, Default)]
pub struct CountingBehavior {
    pub movable: bool,
    counts: CallCounts,
}

impl CountingBehavior {
    pub fn new(movable: bool) -> Self {
        Self {
            movable,
            counts: CallCounts::default(),
        }
    }

    /// A live handle onto this behavior's counters.
    pub fn counts(&self) -> CallCounts {
        self.counts.clone()
    }
}

impl CellBehavior for CountingBehavior {
    fn can_move(
        &self,
        _grid: &dyn Grid,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
    ) -> bool {
        self.counts.can_move.fetch_add(1, Ordering::Relaxed);
        self.movable
    }

    fn on_trash(
        &self,
        _grid: &mut dyn Grid,
        _sounds: &mut dyn SoundSink,
        _cell: &CellState,
        _x: i32,
        _y: i32,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
        _eating: &CellState,
    ) {
        self.counts.on_trash.fetch_add(1, Ordering::Relaxed);
    }

    fn on_acid(
        &self,
        _grid: &mut dyn Grid,
        _cell: &CellState,
        _dir: Direction,
        _force_kind: &str,
        _force: f64,
        _dissolving: &CellState,
        _dx: i32,
        _dy: i32,
    ) {
        self.counts.on_acid.fetch_add(1, Ordering::Relaxed);
    }
}
