//! Seam traits for the collaborators the dispatch layer calls into.

use crate::cell::CellState;
use grist_core::Symbol;

/// Tile-map access, opaque to this crate beyond these two operations.
///
/// The stepper owns the real grid. Dispatch reads neighbours through
/// [`get`](Grid::get) and replaces a single tile through
/// [`set`](Grid::set) (the enemy death effect). Implementations decide
/// their own bounds policy: `get` returns `None` outside the grid and
/// `set` may ignore out-of-bounds writes.
pub trait Grid {
    /// The cell at `(x, y)`, or `None` outside the grid.
    fn get(&self, x: i32, y: i32) -> Option<&CellState>;

    /// Replace the cell at `(x, y)`.
    fn set(&mut self, x: i32, y: i32, cell: CellState);
}

/// Fire-and-forget sound playback.
///
/// Tags are interned audio names (see [`AudioTags`](grist_core::AudioTags)).
/// Dispatch never observes playback failures.
pub trait SoundSink {
    /// Queue the sound registered under `tag`.
    fn play(&mut self, tag: Symbol);
}
