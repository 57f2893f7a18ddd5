//! Board rendering logic

use crate::ui_config::BoardConfig;
use egui::{Color32, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};
use tictactoe_core::{rules::Line, Board, Coord, Player};

/// Board renderer component
///
/// Turns a board into draw calls. Holds only the style, never game state.
pub struct BoardRenderer {
    /// Window side in points
    side: f32,
    grid: Stroke,
    x_stroke: Stroke,
    o_color: Color32,
    hover: Stroke,
    hover_roundness: f32,
    win: Stroke,
    offset: f32,
}

impl BoardRenderer {
    pub fn new(config: &BoardConfig, side: f32) -> Self {
        Self {
            side,
            grid: Stroke::new(config.grid_line_width, Color32::from(config.grid_color)),
            x_stroke: Stroke::new(config.mark_line_width, Color32::from(config.x_color)),
            o_color: config.o_color.into(),
            hover: Stroke::new(config.hover_line_width, Color32::from(config.hover_color)),
            hover_roundness: config.hover_roundness,
            win: Stroke::new(config.offset / 2.0, Color32::from(config.win_line_color)),
            offset: config.offset,
        }
    }

    /// Render the board
    pub fn render(
        &self,
        painter: &Painter,
        board: &Board,
        hover: Option<Coord>,
        winning_line: Option<Line>,
    ) {
        painter.extend(self.shapes(board, hover, winning_line));
    }

    /// Shapes for one frame: hover, then grid, then marks, then the win stroke
    pub fn shapes(
        &self,
        board: &Board,
        hover: Option<Coord>,
        winning_line: Option<Line>,
    ) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(16);

        if let Some(coord) = hover {
            shapes.push(self.hover_shape(coord));
        }

        self.push_grid(&mut shapes);

        for (coord, cell) in board.cells() {
            match cell {
                Some(Player::One) => self.push_cross(&mut shapes, coord),
                Some(Player::Two) => shapes.push(self.ring(coord)),
                None => {}
            }
        }

        if let Some(line) = winning_line {
            let start = super::cell_rect(line[0], self.side).center();
            let end = super::cell_rect(line[2], self.side).center();
            shapes.push(Shape::line_segment([start, end], self.win));
        }

        shapes
    }

    /// Two horizontal and two vertical lines at the thirds
    fn push_grid(&self, shapes: &mut Vec<Shape>) {
        let second = self.side / 3.0;
        let third = 2.0 * second;

        for offset in [second, third] {
            // Horizontal lines
            shapes.push(Shape::line_segment(
                [Pos2::new(0.0, offset), Pos2::new(self.side, offset)],
                self.grid,
            ));
            // Vertical lines
            shapes.push(Shape::line_segment(
                [Pos2::new(offset, 0.0), Pos2::new(offset, self.side)],
                self.grid,
            ));
        }
    }

    /// Cross from corner to corner of the cell
    fn push_cross(&self, shapes: &mut Vec<Shape>, coord: Coord) {
        let rect = super::cell_rect(coord, self.side);
        shapes.push(Shape::line_segment([rect.left_top(), rect.right_bottom()], self.x_stroke));
        shapes.push(Shape::line_segment([rect.right_top(), rect.left_bottom()], self.x_stroke));
    }

    /// Ring centred in the cell, as thick as the offset
    fn ring(&self, coord: Coord) -> Shape {
        let rect = super::cell_rect(coord, self.side);
        let radius = rect.width() / 2.0 - self.offset;
        Shape::circle_stroke(rect.center(), radius, Stroke::new(self.offset, self.o_color))
    }

    /// Rounded outline inset by half the offset
    fn hover_shape(&self, coord: Coord) -> Shape {
        let corner = super::cell_rect(coord, self.side).min;
        let left = super::cell_third(corner.x, self.side);
        let top = super::cell_third(corner.y, self.side);
        let size = super::cell_size(self.side) - self.offset;
        let rect = Rect::from_min_size(
            Pos2::new(left + self.offset / 2.0, top + self.offset / 2.0),
            Vec2::splat(size),
        );
        let rounding = Rounding::same(self.hover_roundness * size / 2.0);
        Shape::rect_stroke(rect, rounding, self.hover)
    }
}
