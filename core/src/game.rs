// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game driver: applies placements and keeps the status current

use crate::{board::Board, rules, Coord, GameError, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How the mark for a placement is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// Whoever is requested gets the mark; there are no turns
    #[default]
    ButtonPerPlayer,
    /// Player One starts and the players take turns; the request is ignored
    Alternating,
}

/// A mark that was written to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Where the mark went
    pub coord: Coord,
    /// Who made it
    pub player: Player,
}

/// A single game of tic-tac-toe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    policy: PlacementPolicy,
    history: Vec<Placement>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(PlacementPolicy::default())
    }
}

impl Game {
    /// Start a game on a blank board
    pub fn new(policy: PlacementPolicy) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Unfinished,
            policy,
            history: Vec::new(),
        }
    }

    /// Place a mark and refresh the status.
    ///
    /// Returns the player whose mark was written, which differs from
    /// `requested` under [`PlacementPolicy::Alternating`].
    pub fn play(&mut self, coord: Coord, requested: Player) -> Result<Player, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = match self.policy {
            PlacementPolicy::ButtonPerPlayer => requested,
            PlacementPolicy::Alternating => self.to_move(),
        };

        self.board.place(coord, player)?;
        self.history.push(Placement { coord, player });
        debug!(x = coord.x, y = coord.y, %player, "Placed mark");

        self.update();
        Ok(player)
    }

    /// Recompute the status from the board
    pub fn update(&mut self) -> GameStatus {
        let previous = self.status;
        self.status = rules::evaluate(&self.board);

        if self.status.is_terminal() && !previous.is_terminal() {
            info!(
                status = %self.status,
                moves = self.history.len(),
                "Game finished\n{}",
                self.board
            );
        }

        self.status
    }

    /// True while nobody has won and cells remain
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Unfinished
    }

    /// Clear the board and history for a fresh game with the same policy
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.status = GameStatus::Unfinished;
        debug!("Game reset");
    }

    /// Player whose turn it is under [`PlacementPolicy::Alternating`]
    pub fn to_move(&self) -> Player {
        self.history
            .last()
            .map(|placement| placement.player.opposite())
            .unwrap_or(Player::One)
    }

    /// Completed line, if the game was won
    pub fn winning_line(&self) -> Option<rules::Line> {
        match self.status {
            GameStatus::Won(_) => rules::winning_line(&self.board).map(|(_, line)| line),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn history(&self) -> &[Placement] {
        &self.history
    }
}
