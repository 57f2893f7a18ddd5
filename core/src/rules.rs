// SPDX-License-Identifier: MIT OR Apache-2.0

//! Win and draw evaluation

use crate::{board::Board, Coord, GameStatus, Player};

/// Three cells that win the game when one player holds all of them
pub type Line = [Coord; 3];

/// Every winning line: rows, then columns, then both diagonals
pub const WIN_LINES: [Line; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Primary diagonal
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    // Secondary diagonal
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// True iff all three cells of `line` hold `player`
pub fn line_owned_by(board: &Board, line: &Line, player: Player) -> bool {
    line.iter().all(|coord| board.get(*coord) == Some(player))
}

/// Whether `player` holds any full line
pub fn has_won(board: &Board, player: Player) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line_owned_by(board, line, player))
}

/// First completed line, checking Player One before Player Two
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    [Player::One, Player::Two].into_iter().find_map(|player| {
        WIN_LINES
            .iter()
            .find(|line| line_owned_by(board, line, player))
            .map(|line| (player, *line))
    })
}

/// Decide the status of a board.
///
/// A win by Player One takes precedence over a win by Player Two; a full
/// board with no line is a draw.
pub fn evaluate(board: &Board) -> GameStatus {
    if has_won(board, Player::One) {
        return GameStatus::Won(Player::One);
    }

    if has_won(board, Player::Two) {
        return GameStatus::Won(Player::Two);
    }

    if board.is_full() {
        return GameStatus::Draw;
    }

    GameStatus::Unfinished
}
