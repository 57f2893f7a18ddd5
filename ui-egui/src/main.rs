// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::PlacementPolicy;
use tictactoe_ui_egui::{logging, TicTacToeApp, UiConfig};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "tictactoe",
    about = "Tic-tac-toe: left click places X, right click places O",
    version
)]
struct Args {
    /// JSON file with window and board settings
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Take turns instead of choosing the mark with the mouse button
    #[clap(long)]
    alternate: bool,

    /// Show the result when the game ends instead of closing the window
    #[clap(long)]
    keep_open: bool,

    /// Frames per second
    #[clap(long)]
    fps: Option<u32>,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn ui_config(&self) -> Result<UiConfig> {
        let mut config = match &self.config {
            Some(path) => UiConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => UiConfig::default(),
        };

        if self.keep_open {
            config.window.keep_open = true;
        }
        if let Some(fps) = self.fps {
            config.window.target_fps = fps;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn policy(&self) -> PlacementPolicy {
        if self.alternate {
            PlacementPolicy::Alternating
        } else {
            PlacementPolicy::ButtonPerPlayer
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging as the first action in main
    logging::init_logging(&args.log_level)?;

    let config = args.ui_config()?;
    let policy = args.policy();
    tracing::info!(
        size = config.window.size,
        fps = config.window.target_fps,
        ?policy,
        "Starting tic-tac-toe"
    );

    let side = config.window.size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([side, side])
            .with_resizable(false),
        centered: true,
        vsync: true,
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(TicTacToeApp::new(config, policy))),
    )
    .map_err(|e| anyhow!("Window loop failed: {}", e))?;

    tracing::info!("Window closed");
    Ok(())
}
