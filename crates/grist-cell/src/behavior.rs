//! The [`CellBehavior`] trait: per-type dispatch callbacks.

use crate::cell::CellState;
use crate::grid::{Grid, SoundSink};
use grist_core::{CellFlags, Direction};

/// Dynamic behavior for one registered cell type.
///
/// Every method has a default encoding the documented fallback, so an
/// implementor overrides only the hooks its type cares about; a type with
/// no registered behavior at all gets the same answers. State the
/// callbacks need lives on the implementing struct itself.
///
/// Built-in identities are special-cased ahead of this trait in the
/// dispatch layer; registering a behavior for one does not override the
/// built-in answer.
///
/// # Contract
///
/// Methods take `&self`: the registry is frozen before dispatch begins
/// and may be shared between workers, so mutable callback state goes
/// through interior mutability.
///
/// # Examples
///
/// A type that only moves when pushed hard enough:
///
/// ```
/// use grist_cell::{CellBehavior, CellState, Grid};
/// use grist_core::Direction;
///
/// struct Anchor {
///     threshold: f64,
/// }
///
/// impl CellBehavior for Anchor {
///     fn can_move(
///         &self,
///         _grid: &dyn Grid,
///         _cell: &CellState,
///         _x: i32,
///         _y: i32,
///         _dir: Direction,
///         _force_kind: &str,
///         force: f64,
///     ) -> bool {
///         force >= self.threshold
///     }
/// }
/// ```
pub trait CellBehavior: Send + Sync {
    /// Capability flags for this type, e.g. [`CellFlags::PLACEABLE`].
    fn flags(&self) -> CellFlags {
        CellFlags::empty()
    }

    /// Whether the cell at `(x, y)` may be moved in `dir`.
    ///
    /// `force_kind` names the force being applied (`"push"` for plain
    /// pushes) and `force` its magnitude. Default: movable.
    #[allow(unused_variables)]
    fn can_move(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        x: i32,
        y: i32,
        dir: Direction,
        force_kind: &str,
        force: f64,
    ) -> bool {
        true
    }

    /// Signed steering value for force-chain resolution in `dir`.
    ///
    /// Positive pushes the chain along `dir`, negative resists it.
    /// Default: 0.
    #[allow(unused_variables)]
    fn bias(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        x: i32,
        y: i32,
        dir: Direction,
        force_kind: &str,
        force: f64,
    ) -> f32 {
        0.0
    }

    /// Whether `generator` at `(gx, gy)` may duplicate this cell.
    ///
    /// Default: yes.
    #[allow(unused_variables)]
    fn can_generate(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        x: i32,
        y: i32,
        generator: &CellState,
        gx: i32,
        gy: i32,
        dir: Direction,
    ) -> bool {
        true
    }

    /// Whether this cell destroys `eating` when it is moved into.
    ///
    /// Default: no.
    #[allow(unused_variables)]
    fn is_trash(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        x: i32,
        y: i32,
        dir: Direction,
        force_kind: &str,
        force: f64,
        eating: &CellState,
    ) -> bool {
        false
    }

    /// Destruction effects after this cell at `(x, y)` ate `eating`.
    ///
    /// Default: nothing.
    #[allow(unused_variables)]
    fn on_trash(
        &self,
        grid: &mut dyn Grid,
        sounds: &mut dyn SoundSink,
        cell: &CellState,
        x: i32,
        y: i32,
        dir: Direction,
        force_kind: &str,
        force: f64,
        eating: &CellState,
    ) {
    }

    /// Whether this cell dissolves `dissolving` on contact.
    ///
    /// Default: no.
    #[allow(unused_variables)]
    fn is_acid(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        dir: Direction,
        force_kind: &str,
        force: f64,
        dissolving: &CellState,
        dx: i32,
        dy: i32,
    ) -> bool {
        false
    }

    /// Dissolution effects after this cell dissolved `dissolving` at
    /// `(dx, dy)`.
    ///
    /// Default: nothing.
    #[allow(unused_variables)]
    fn on_acid(
        &self,
        grid: &mut dyn Grid,
        cell: &CellState,
        dir: Direction,
        force_kind: &str,
        force: f64,
        dissolving: &CellState,
        dx: i32,
        dy: i32,
    ) {
    }

    /// Answer a message sent over `protocol`.
    ///
    /// The receiving cell sits at `(x, y)`, `sender` at `(sx, sy)`.
    /// Default: `None`; the type understands no protocol.
    #[allow(unused_variables)]
    fn signal(
        &self,
        cell: &CellState,
        x: i32,
        y: i32,
        protocol: &str,
        data: &str,
        sender: &CellState,
        sx: i32,
        sy: i32,
    ) -> Option<String> {
        None
    }
}
