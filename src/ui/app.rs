//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{cell_symbol, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::config::{AppConfig, GameMode};
use crate::{Cell, Side};

/// Levels offered in the selector
const LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Solo Game").clicked() {
                        self.state.new_game(GameMode::Solo);
                        ui.close_menu();
                    }
                    if ui.button("New Two-Player Game").clicked() {
                        self.state.new_game(GameMode::TwoPlayer);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("End Game").clicked() {
                        self.state.end_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::Solo => format!("Solo - You: {}", self.state.human_side.name()),
                        GameMode::TwoPlayer => "Two Players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.game.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let logo = format!("{}{}", cell_symbol(Cell::Black), cell_symbol(Cell::White));
            ui.label(RichText::new(logo).size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let Some(side) = self.state.game.side_to_move() else {
                ui.label(RichText::new("Game Over").size(18.0).strong().color(WIN_HIGHLIGHT));
                return;
            };

            let (fill, glyph_color) = match side {
                Side::Black => (BLACK_DISC, TEXT_PRIMARY),
                Side::White => (WHITE_DISC, BLACK_DISC),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    cell_symbol(side.cell()),
                    egui::FontId::proportional(24.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{}'s Turn", side.name()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("Engine thinking...", STATUS_THINKING)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_READY)
                    } else {
                        ("Waiting", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Disc counts for both sides
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let score = self.state.game.score();
            for side in [Side::White, Side::Black] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(cell_symbol(side.cell())).size(18.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(side.name()).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(score.of(side).to_string())
                                .size(16.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }

            ui.label(
                RichText::new(format!("Move #{}", self.state.game.moves_played()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// New game buttons, level selector and End Game
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Solo").clicked() {
                    self.state.new_game(GameMode::Solo);
                }
                if ui.button("Two Players").clicked() {
                    self.state.new_game(GameMode::TwoPlayer);
                }
                if ui
                    .add_enabled(!self.state.game.is_over(), egui::Button::new("End Game"))
                    .clicked()
                {
                    self.state.end_game();
                }
            });

            ui.add_space(8.0);

            let mut depth = self.state.depth();
            egui::ComboBox::from_label("Level")
                .selected_text(depth.to_string())
                .show_ui(ui, |ui| {
                    for level in LEVELS {
                        ui.selectable_value(&mut depth, level, level.to_string());
                    }
                });
            if depth != self.state.depth() {
                self.state.set_depth(depth);
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                    ui.label(
                        RichText::new(format!("Searching {:.2}s", elapsed.as_secs_f32()))
                            .size(11.0)
                            .color(STATUS_THINKING),
                    );
                }

                match &self.state.last_ai_result {
                    Some(result) => {
                        let played = result
                            .best_move
                            .as_ref()
                            .map_or("pass".to_string(), |mv| mv.pos.to_string());
                        ui.label(
                            RichText::new(format!("{:?} depth {} -> {}", result.strategy, result.depth, played))
                                .size(11.0)
                                .strong()
                                .color(STATUS_READY),
                        );
                        ui.label(
                            RichText::new(format!(
                                "Score: {}  Nodes: {}  {}ms",
                                result.score, result.nodes, result.time_ms
                            ))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                        );
                    }
                    None => {
                        ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                    }
                }
            });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 60, 40))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let headline = match self.state.game.result() {
                        Some(result) => result.to_string(),
                        None => "Game Over.".to_string(),
                    };
                    ui.label(RichText::new(headline).size(20.0).strong().color(WIN_HIGHLIGHT));

                    let score = self.state.game.score();
                    ui.label(
                        RichText::new(format!("White {}  -  Black {}", score.white, score.black))
                            .size(12.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new("Press N for a new game").size(10.0).color(TEXT_MUTED));
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal = self.state.clickable_moves();
            let accept_input = !legal.is_empty();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.game.side_to_move(),
                &legal,
                self.state.game.last_move(),
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_disc(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::N) {
                let mode = self.state.mode;
                self.state.new_game(mode);
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.tick();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the engine or an automatic pass is pending
        if self.state.is_ai_thinking() || self.state.game.must_pass() {
            ctx.request_repaint();
        }
    }
}
