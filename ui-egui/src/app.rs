// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and frame loop.

use eframe::egui;
use std::time::Duration;
use tictactoe_core::{rules::Line, Coord, Game, GameStatus, PlacementPolicy};
use tracing::{debug, info};

use crate::components::board::{BoardInteraction, BoardRenderer, PointerSnapshot};
use crate::ui_config::UiConfig;

/// Main application state
pub struct TicTacToeApp {
    /// Board and status
    game: Game,
    /// Hover tracking and click handling
    interaction: BoardInteraction,
    /// Draws the board
    renderer: BoardRenderer,
    /// UI configuration
    config: UiConfig,
    /// The end of the current game has been handled
    finish_handled: bool,
    /// A close command was sent to the viewport
    close_requested: bool,
}

impl TicTacToeApp {
    pub fn new(config: UiConfig, policy: PlacementPolicy) -> Self {
        let renderer = BoardRenderer::new(&config.board, config.window.size);
        Self {
            game: Game::new(policy),
            interaction: BoardInteraction::new(),
            renderer,
            config,
            finish_handled: false,
            close_requested: false,
        }
    }

    /// One frame: input, update, render, termination check
    pub fn show(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            info!("Quit requested");
            self.request_close(ctx);
        }

        self.handle_input(ctx);

        let status = self.game.update();

        self.render(ctx, status);

        if !self.game.is_running() && !self.finish_handled {
            self.finish_handled = true;
            info!(%status, winner = ?status.winner(), "Game over");
            if !self.config.window.keep_open {
                self.request_close(ctx);
            }
        }

        let fps = self.config.window.target_fps.max(1);
        ctx.request_repaint_after(Duration::from_secs_f64(1.0 / fps as f64));
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let pointer = PointerSnapshot::read(ctx);
        let side = self.config.window.size;

        if self.game.is_running() {
            if let Some(placement) = self.interaction.handle(&pointer, &mut self.game, side) {
                debug!(
                    x = placement.coord.x,
                    y = placement.coord.y,
                    player = %placement.player,
                    "Mouse placement"
                );
            }
            return;
        }

        if self.config.window.keep_open && ctx.input(|i| i.key_pressed(egui::Key::R)) {
            info!("Starting a new game");
            self.game.reset();
            self.finish_handled = false;
        }
    }

    fn render(&self, ctx: &egui::Context, status: GameStatus) {
        let background: egui::Color32 = self.config.window.background_color.into();
        let hover = if self.game.is_running() {
            self.interaction.hover()
        } else {
            None
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| {
                let painter = ui.painter();
                self.renderer.render(painter, self.game.board(), hover, self.win_stroke());

                if status.is_terminal() && self.config.window.keep_open {
                    self.render_result(painter, status);
                }
            });
    }

    /// Line to stroke through; only drawn when the window outlives the game
    fn win_stroke(&self) -> Option<Line> {
        if self.config.window.keep_open {
            self.game.winning_line()
        } else {
            None
        }
    }

    /// Result banner shown when the window stays open after the game
    fn render_result(&self, painter: &egui::Painter, status: GameStatus) {
        let side = self.config.window.size;
        let centre = egui::pos2(side / 2.0, side / 2.0);
        let banner = egui::Rect::from_center_size(centre, egui::vec2(side * 0.8, side / 5.0));

        painter.rect_filled(
            banner,
            egui::Rounding::same(8.0),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230),
        );
        painter.text(
            centre - egui::vec2(0.0, side / 40.0),
            egui::Align2::CENTER_CENTER,
            status.to_string(),
            egui::FontId::proportional(side / 14.0),
            egui::Color32::from(self.config.board.grid_color),
        );
        painter.text(
            centre + egui::vec2(0.0, side / 18.0),
            egui::Align2::CENTER_CENTER,
            "R - new game    Q - quit",
            egui::FontId::proportional(side / 40.0),
            egui::Color32::from(self.config.board.grid_color),
        );
    }

    fn request_close(&mut self, ctx: &egui::Context) {
        if !self.close_requested {
            self.close_requested = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn hover(&self) -> Option<Coord> {
        self.interaction.hover()
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
