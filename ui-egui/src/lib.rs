// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Tic-tac-toe egui frontend

pub mod app;
pub mod components;
pub mod logging;
pub mod ui_config;

pub use app::TicTacToeApp;
pub use ui_config::UiConfig;
