//! Board interaction handling

use egui::{Context, PointerButton, Pos2};
use tictactoe_core::{Coord, Game, Placement, Player};
use tracing::trace;

/// Pointer state for one frame, read once from egui's input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Where the pointer is, `None` when it has left the window
    pub hover_pos: Option<Pos2>,
    /// Where the last press happened
    pub press_pos: Option<Pos2>,
    /// Left button went down this frame
    pub primary_pressed: bool,
    /// Right button went down this frame
    pub secondary_pressed: bool,
}

impl PointerSnapshot {
    pub fn read(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            hover_pos: i.pointer.hover_pos(),
            press_pos: i.pointer.interact_pos(),
            primary_pressed: i.pointer.button_pressed(PointerButton::Primary),
            secondary_pressed: i.pointer.button_pressed(PointerButton::Secondary),
        })
    }

    /// Player requested by the buttons pressed this frame; left wins ties
    pub fn requested_player(&self) -> Option<Player> {
        if self.primary_pressed {
            Some(Player::One)
        } else if self.secondary_pressed {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Board interaction handler
#[derive(Debug, Default)]
pub struct BoardInteraction {
    /// Current hover cell
    hover: Option<Coord>,
}

impl BoardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the hover cell and apply a click to the game.
    ///
    /// Returns the placement when a mark was written this frame.
    pub fn handle(
        &mut self,
        pointer: &PointerSnapshot,
        game: &mut Game,
        side: f32,
    ) -> Option<Placement> {
        self.hover = pointer.hover_pos.and_then(|pos| super::cell_at(pos, side));

        let requested = pointer.requested_player()?;
        let coord = pointer
            .press_pos
            .or(pointer.hover_pos)
            .and_then(|pos| super::cell_at(pos, side))?;

        if !game.board().is_empty(coord) {
            trace!(x = coord.x, y = coord.y, "Click on occupied cell ignored");
            return None;
        }

        match game.play(coord, requested) {
            Ok(player) => Some(Placement { coord, player }),
            Err(e) => {
                trace!(x = coord.x, y = coord.y, error = %e, "Placement rejected");
                None
            }
        }
    }

    /// Get current hover cell
    pub fn hover(&self) -> Option<Coord> {
        self.hover
    }
}
