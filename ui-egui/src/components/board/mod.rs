//! Board rendering components

mod interaction;
mod renderer;

pub use interaction::{BoardInteraction, PointerSnapshot};
pub use renderer::BoardRenderer;

use egui::{Pos2, Rect, Vec2};
use tictactoe_core::{Coord, BOARD_COLUMNS, BOARD_ROWS};

/// Side of one cell for a square window of side `side`
pub fn cell_size(side: f32) -> f32 {
    side / BOARD_COLUMNS as f32
}

/// Convert screen position to board coordinate
pub fn cell_at(pos: Pos2, side: f32) -> Option<Coord> {
    if !(0.0..side).contains(&pos.x) || !(0.0..side).contains(&pos.y) {
        return None;
    }

    let x = (BOARD_COLUMNS as f32 * pos.x / side) as u8;
    let y = (BOARD_ROWS as f32 * pos.y / side) as u8;

    // Float rounding can land exactly on 3 just below the edge
    let coord = Coord::new(x.min(BOARD_COLUMNS - 1), y.min(BOARD_ROWS - 1));
    Some(coord)
}

/// Screen rectangle covered by a cell
pub fn cell_rect(coord: Coord, side: f32) -> Rect {
    let cell = cell_size(side);
    Rect::from_min_size(
        Pos2::new(coord.x as f32 * cell, coord.y as f32 * cell),
        Vec2::splat(cell),
    )
}

/// Start of the third of the window that contains `point`
pub fn cell_third(point: f32, side: f32) -> f32 {
    let second = side / 3.0;
    let third = 2.0 * second;

    if point < second {
        return 0.0;
    }

    if point < third {
        return second;
    }

    third
}
