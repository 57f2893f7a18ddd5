// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tic-tac-toe Core - Board State and Win Detection
//!
//! This crate provides the graphics-free part of the game:
//! - 3x3 cell buffer with 2D/1D index mapping
//! - Win/draw evaluation over the 8 winning lines
//! - A small game driver that applies placements and tracks status

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod game;
pub mod rules;

pub use board::Board;
pub use game::{Game, Placement, PlacementPolicy};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rows on the board
pub const BOARD_ROWS: u8 = 3;
/// Number of columns on the board
pub const BOARD_COLUMNS: u8 = 3;
/// Total number of cells
pub const BOARD_CELLS: usize = (BOARD_ROWS as usize) * (BOARD_COLUMNS as usize);

/// Symbol used for a cell nobody has marked yet
pub const BLANK_SYMBOL: char = '_';

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Plays crosses
    One,
    /// Plays noughts
    Two,
}

impl Player {
    /// Returns the other player
    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Symbol written into the cell buffer
    pub fn symbol(&self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column
    pub x: u8,
    /// Row
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on the board
    pub fn is_valid(&self) -> bool {
        self.x < BOARD_COLUMNS && self.y < BOARD_ROWS
    }

    /// Row-major index into the cell buffer
    pub fn index(&self) -> usize {
        (BOARD_ROWS as usize) * (self.y as usize) + (self.x as usize)
    }

    /// Inverse of [`Coord::index`]. Returns `None` past the last cell.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_CELLS {
            return None;
        }

        Some(Self {
            x: (index % BOARD_ROWS as usize) as u8,
            y: (index / BOARD_COLUMNS as usize) as u8,
        })
    }
}

/// Where the game stands after the last placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player owns a full line
    Won(Player),
    /// Every cell is marked and nobody won
    Draw,
    /// Moves remain
    Unfinished,
}

impl GameStatus {
    /// Whether play has ended
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Unfinished)
    }

    /// The winner, if there is one
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Unfinished => write!(f, "In progress"),
        }
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Invalid coordinate")]
    InvalidCoordinate,

    /// The cell already holds a mark
    #[error("Cell already occupied")]
    OccupiedCell,

    /// No placements are accepted once the game is won or drawn
    #[error("Game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping_is_row_major() {
        assert_eq!(Coord::new(0, 0).index(), 0);
        assert_eq!(Coord::new(2, 0).index(), 2);
        assert_eq!(Coord::new(0, 1).index(), 3);
        assert_eq!(Coord::new(1, 1).index(), 4);
        assert_eq!(Coord::new(2, 2).index(), 8);
    }

    #[test]
    fn test_index_mapping_inverts() {
        for index in 0..BOARD_CELLS {
            let coord = Coord::from_index(index).unwrap();
            assert!(coord.is_valid());
            assert_eq!(coord.index(), index);
        }
        assert_eq!(Coord::from_index(BOARD_CELLS), None);
    }

    #[test]
    fn test_player_symbols() {
        assert_eq!(Player::One.symbol(), 'X');
        assert_eq!(Player::Two.symbol(), 'O');
        assert_eq!(Player::One.opposite(), Player::Two);
        assert_eq!(Player::Two.opposite(), Player::One);
    }

    #[test]
    fn test_status_terminal() {
        assert!(GameStatus::Won(Player::One).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::Unfinished.is_terminal());
        assert_eq!(GameStatus::Won(Player::Two).winner(), Some(Player::Two));
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
