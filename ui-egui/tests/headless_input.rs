// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives the app through egui frames with synthetic pointer and key events

use egui::{Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect};
use tictactoe_core::{Coord, GameStatus, PlacementPolicy, Player};
use tictactoe_ui_egui::{TicTacToeApp, UiConfig};

const SIDE: f32 = 640.0;

struct Harness {
    ctx: egui::Context,
    app: TicTacToeApp,
}

impl Harness {
    fn new(config: UiConfig, policy: PlacementPolicy) -> Self {
        Self {
            ctx: egui::Context::default(),
            app: TicTacToeApp::new(config, policy),
        }
    }

    fn frame(&mut self, events: Vec<Event>) {
        let raw = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(SIDE, SIDE))),
            events,
            ..Default::default()
        };
        let app = &mut self.app;
        let _ = self.ctx.run(raw, |ctx| app.show(ctx));
    }

    fn click(&mut self, pos: Pos2, button: PointerButton) {
        self.frame(vec![
            Event::PointerMoved(pos),
            Event::PointerButton {
                pos,
                button,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
        ]);
        self.frame(vec![Event::PointerButton {
            pos,
            button,
            pressed: false,
            modifiers: Modifiers::NONE,
        }]);
    }

    fn key(&mut self, key: Key) {
        self.frame(vec![Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }]);
    }

    /// Centre of a cell in screen space
    fn centre(x: u8, y: u8) -> Pos2 {
        let cell = SIDE / 3.0;
        Pos2::new((x as f32 + 0.5) * cell, (y as f32 + 0.5) * cell)
    }
}

#[test]
fn left_and_right_clicks_place_x_and_o() {
    let mut h = Harness::new(UiConfig::default(), PlacementPolicy::ButtonPerPlayer);

    h.click(Harness::centre(0, 0), PointerButton::Primary);
    h.click(Harness::centre(2, 2), PointerButton::Secondary);

    let board = h.app.game().board();
    assert_eq!(board.get(Coord::new(0, 0)), Some(Player::One));
    assert_eq!(board.get(Coord::new(2, 2)), Some(Player::Two));
    assert_eq!(h.app.game().history().len(), 2);
    assert!(!h.app.close_requested());
}

#[test]
fn hover_follows_pointer() {
    let mut h = Harness::new(UiConfig::default(), PlacementPolicy::ButtonPerPlayer);

    h.frame(vec![Event::PointerMoved(Harness::centre(1, 2))]);
    assert_eq!(h.app.hover(), Some(Coord::new(1, 2)));

    h.frame(vec![Event::PointerGone]);
    assert_eq!(h.app.hover(), None);
    assert!(h.app.game().history().is_empty());
}

#[test]
fn occupied_cell_click_is_ignored() {
    let mut h = Harness::new(UiConfig::default(), PlacementPolicy::ButtonPerPlayer);

    h.click(Harness::centre(1, 1), PointerButton::Secondary);
    h.click(Harness::centre(1, 1), PointerButton::Primary);

    assert_eq!(h.app.game().board().get(Coord::new(1, 1)), Some(Player::Two));
    assert_eq!(h.app.game().history().len(), 1);
}

#[test]
fn win_closes_window_by_default() {
    let mut h = Harness::new(UiConfig::default(), PlacementPolicy::ButtonPerPlayer);

    for x in 0..3 {
        h.click(Harness::centre(x, 1), PointerButton::Primary);
    }

    assert_eq!(h.app.game().status(), GameStatus::Won(Player::One));
    assert!(h.app.close_requested());
}

#[test]
fn keep_open_freezes_board_after_win() {
    let mut config = UiConfig::default();
    config.window.keep_open = true;
    let mut h = Harness::new(config, PlacementPolicy::Alternating);

    // X: column 0, O: column 2
    let clicks = [(0, 0), (2, 0), (0, 1), (2, 1), (0, 2)];
    for (x, y) in clicks {
        h.click(Harness::centre(x, y), PointerButton::Primary);
    }

    assert_eq!(h.app.game().status(), GameStatus::Won(Player::One));
    assert!(!h.app.close_requested());

    h.click(Harness::centre(1, 1), PointerButton::Primary);
    assert_eq!(h.app.game().board().get(Coord::new(1, 1)), None);
    assert_eq!(h.app.game().history().len(), 5);

    h.key(Key::R);
    assert_eq!(h.app.game().status(), GameStatus::Unfinished);
    assert!(h.app.game().history().is_empty());
    assert_eq!(h.app.game().board().get(Coord::new(0, 0)), None);

    h.click(Harness::centre(1, 1), PointerButton::Primary);
    assert_eq!(h.app.game().board().get(Coord::new(1, 1)), Some(Player::One));
    assert!(!h.app.close_requested());
}

#[test]
fn restart_key_ignored_while_running() {
    let mut config = UiConfig::default();
    config.window.keep_open = true;
    let mut h = Harness::new(config, PlacementPolicy::Alternating);

    h.click(Harness::centre(0, 0), PointerButton::Primary);
    h.key(Key::R);

    assert_eq!(h.app.game().history().len(), 1);
    assert_eq!(h.app.game().board().get(Coord::new(0, 0)), Some(Player::One));
}

#[test]
fn quit_key_closes_mid_game() {
    let mut h = Harness::new(UiConfig::default(), PlacementPolicy::ButtonPerPlayer);

    h.click(Harness::centre(1, 1), PointerButton::Primary);
    assert!(!h.app.close_requested());

    h.key(Key::Q);
    assert!(h.app.close_requested());
    assert_eq!(h.app.game().status(), GameStatus::Unfinished);
}

#[test]
fn draw_closes_window_by_default() {
    let mut h = Harness::new(UiConfig::default(), PlacementPolicy::Alternating);

    // X O X / X O O / O X X
    let clicks = [
        (0, 0),
        (1, 0),
        (2, 0),
        (1, 1),
        (0, 1),
        (2, 1),
        (1, 2),
        (0, 2),
        (2, 2),
    ];
    for (x, y) in clicks {
        assert!(!h.app.close_requested());
        h.click(Harness::centre(x, y), PointerButton::Primary);
    }

    assert_eq!(h.app.game().status(), GameStatus::Draw);
    assert!(h.app.game().board().is_full());
    assert!(h.app.close_requested());
}
