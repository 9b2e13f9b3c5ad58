//! The per-tick dispatch operations.
//!
//! Every operation follows the same two-tier policy: built-in identities
//! are checked first with hand-coded answers, then the type's registered
//! behavior runs, then a documented default applies. Built-ins win over
//! any registered behavior for the same identity; the one exception is
//! [`on_trash`](BehaviorRegistry::on_trash), where the builtin side
//! effects run first and a registered behavior still fires afterwards.

use crate::cell::CellState;
use crate::grid::{Grid, SoundSink};
use crate::registry::BehaviorRegistry;
use grist_core::Direction;

impl BehaviorRegistry {
    /// Whether `cell` at `(x, y)` may be moved in `dir`.
    ///
    /// Walls never move. Slide cells move only along their axis: `dir`
    /// parity must match rotation parity. Everything else is movable
    /// unless its registered behavior objects.
    pub fn can_move(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        x: i32,
        y: i32,
        dir: Direction,
        force_kind: &str,
        force: f64,
    ) -> bool {
        let builtins = self.builtins();
        if cell.type_id() == builtins.wall {
            return false;
        }
        if cell.type_id() == builtins.slide {
            return dir.index() % 2 == cell.rotation() % 2;
        }
        match self.table_for(cell) {
            Some(behavior) => behavior.can_move(grid, cell, x, y, dir, force_kind, force),
            None => true,
        }
    }

    /// Signed steering value consulted by force-chain resolution.
    ///
    /// A mover biases a `"push"` along its facing by +1 and a push
    /// directly against it by −1; that branch answers for all four
    /// directions without consulting any registered behavior. Every
    /// other case falls through to the behavior, defaulting to 0.
    pub fn bias(
        &self,
        grid: &dyn Grid,
        cell: &CellState,
        x: i32,
        y: i32,
        dir: Direction,
        force_kind: &str,
        force: f64,
    ) -> f32 {
        let builtins = self.builtins();
        if cell.type_id() == builtins.mover && force_kind == "push" {
            if cell.rotation() == dir.index() {
                return 1.0;
            }
            if (cell.rotation() + 2) % 4 == dir.index() {
                return -1.0;
            }
            return 0.0;
        }
        match self.table_for(cell) {
            Some(behavior) => behavior.bias(grid, cell, x, y, dir, force_kind, force),
            None => 0.0,
        }
    }

    /// Whether `generator` at `(gx, gy)` may duplicate `cell`.
    ///
    /// Empty cannot be generated: duplicating nothingness is the one
    /// hard veto. Everything else defaults to yes.
    pub fn can_generate(
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
        if cell.type_id() == self.builtins().empty {
            return false;
        }
        match self.table_for(cell) {
            Some(behavior) => behavior.can_generate(grid, cell, x, y, generator, gx, gy, dir),
            None => true,
        }
    }

    /// Whether `cell` destroys `eating` when moved into.
    ///
    /// Trash and enemies always do; other types only if their behavior
    /// says so.
    pub fn is_trash(
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
        let builtins = self.builtins();
        if cell.type_id() == builtins.trash || cell.type_id() == builtins.enemy {
            return true;
        }
        match self.table_for(cell) {
            Some(behavior) => behavior.is_trash(grid, cell, x, y, dir, force_kind, force, eating),
            None => false,
        }
    }

    /// Destruction effects after `cell` at `(x, y)` ate `eating`.
    ///
    /// An enemy dies with its meal: the tile is replaced by a fresh empty
    /// cell and the explosion sound fires. Trash plays the destroy sound.
    /// Both builtin branches fall through, so a behavior registered for
    /// `trash` or `enemy` still runs after the builtin side effects.
    pub fn on_trash(
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
        let builtins = *self.builtins();
        if cell.type_id() == builtins.enemy {
            grid.set(x, y, CellState::new(builtins.empty, 0));
            sounds.play(builtins.audio.explosion);
        }
        if cell.type_id() == builtins.trash {
            sounds.play(builtins.audio.destroy);
        }
        if let Some(behavior) = self.table_for(cell) {
            behavior.on_trash(grid, sounds, cell, x, y, dir, force_kind, force, eating);
        }
    }

    /// Whether `cell` dissolves `dissolving` on contact.
    ///
    /// No builtin is acid. An overridden
    /// [`is_acid`](crate::CellBehavior::is_acid) is honored on its own,
    /// whether or not the behavior also overrides `on_acid`.
    pub fn is_acid(
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
        match self.table_for(cell) {
            Some(behavior) => {
                behavior.is_acid(grid, cell, dir, force_kind, force, dissolving, dx, dy)
            }
            None => false,
        }
    }

    /// Dissolution effects after `cell` dissolved `dissolving` at
    /// `(dx, dy)`.
    pub fn on_acid(
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
        if let Some(behavior) = self.table_for(cell) {
            behavior.on_acid(grid, cell, dir, force_kind, force, dissolving, dx, dy);
        }
    }

    /// Deliver a message to `cell` over `protocol`.
    ///
    /// Returns the response, or `None` when the type exposes no
    /// responder or does not understand the protocol.
    pub fn signal(
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
        self.table_for(cell)
            .and_then(|behavior| behavior.signal(cell, x, y, protocol, data, sender, sx, sy))
    }
}
