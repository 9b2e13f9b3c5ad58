//! Test utilities and mock types for Grist development.
//!
//! Provides a mock [`Grid`], a recording [`SoundSink`], and reusable
//! [`CellBehavior`](grist_cell::CellBehavior) fixtures for dispatch
//! testing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{CallCounts, CountingBehavior, StaticBehavior};

use grist_cell::{CellState, Grid, SoundSink};
use grist_core::Symbol;

/// Mock implementation of [`Grid`].
///
/// A row-major `width x height` board of optional cells. Pre-populate
/// tiles with [`place`](MockGrid::place) before passing to code under
/// test, inspect results with [`cell`](MockGrid::cell). Out-of-bounds
/// reads return `None`; out-of-bounds writes are ignored.
pub struct MockGrid {
    width: i32,
    height: i32,
    cells: Vec<Option<CellState>>,
}

impl MockGrid {
    /// Create an empty `width x height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Place a cell for test setup.
    pub fn place(&mut self, x: i32, y: i32, cell: CellState) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(cell);
        }
    }

    /// The cell at `(x, y)` for test assertions.
    pub fn cell(&self, x: i32, y: i32) -> Option<&CellState> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }
}

impl Grid for MockGrid {
    fn get(&self, x: i32, y: i32) -> Option<&CellState> {
        self.cell(x, y)
    }

    fn set(&mut self, x: i32, y: i32, cell: CellState) {
        self.place(x, y, cell);
    }
}

/// Mock implementation of [`SoundSink`] recording every tag played,
/// in order.
#[derive(Debug, Default)]
pub struct RecordingSounds {
    pub played: Vec<Symbol>,
}

impl RecordingSounds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SoundSink for RecordingSounds {
    fn play(&mut self, tag: Symbol) {
        self.played.push(tag);
    }
}
