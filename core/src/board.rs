// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{Coord, GameError, Player, BLANK_SYMBOL, BOARD_CELLS, BOARD_COLUMNS, BOARD_ROWS};
use serde::{Deserialize, Serialize};

/// The 3x3 cell buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new board with every cell blank
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Get the mark at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<Player> {
        if !coord.is_valid() {
            return None;
        }

        self.cells[coord.index()]
    }

    /// Write a mark into a blank cell
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), GameError> {
        if !coord.is_valid() {
            return Err(GameError::InvalidCoordinate);
        }

        let cell = &mut self.cells[coord.index()];
        if cell.is_some() {
            return Err(GameError::OccupiedCell);
        }

        *cell = Some(player);
        Ok(())
    }

    /// Whether the cell is on the board and blank
    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.is_valid() && self.cells[coord.index()].is_none()
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count marks belonging to a player
    pub fn count_for(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// Iterate cells in index order together with their coordinate
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Player>)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            Coord::from_index(index).map(|coord| (coord, *cell))
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_ROWS {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..BOARD_COLUMNS {
                let symbol = self
                    .get(Coord::new(x, y))
                    .map(|player| player.symbol())
                    .unwrap_or(BLANK_SYMBOL);
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
