//! Main application window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::session::{GameMode, Session, WinType};
use super::theme::*;
use crate::rules::CAPTURE_WIN_PAIRS;
use crate::{AiConfig, Stone};

/// Side panel actions collected during rendering and applied afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    NewGame,
    Undo,
    SwitchMode,
    CycleDifficulty,
    SwitchColor,
    Hint,
}

pub struct PenteApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl PenteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, ai_config: AiConfig) -> Self {
        Self {
            session: Session::new(mode, ai_config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::NewGame => self.session.reset(),
            Action::Undo => {
                // Failures already leave a message on the session
                let _ = self.session.undo();
            }
            Action::SwitchMode => self.session.switch_mode(),
            Action::CycleDifficulty => self.session.cycle_difficulty(),
            Action::SwitchColor => self.session.switch_human_color(),
            Action::Hint => self.session.request_suggestion(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) -> Option<Action> {
        let mut action = None;
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for (label, choice) in [
                        ("New Game (N)", Action::NewGame),
                        ("Undo (U)", Action::Undo),
                        ("Switch Game Mode (M)", Action::SwitchMode),
                    ] {
                        if ui.button(label).clicked() {
                            action = Some(choice);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode() {
                        GameMode::PvE { human_color } => format!("Player vs AI - You: {}", human_color),
                        GameMode::PvP => "Player vs Player".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
        action
    }

    fn render_side_panel(&mut self, ctx: &Context) -> Option<Action> {
        let mut action = None;
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("PENTE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_captures_card(ui);
                ui.add_space(10.0);
                action = self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_ai_card(ui);
                }

                if self.session.state().is_game_over() {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui) {
                        action = Some(Action::NewGame);
                    }
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
        action
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let state = self.session.state();
        Self::card_frame().show(ui, |ui| {
            let turn = state.current_player();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(40.0), egui::Sense::hover());
                let fill = if turn == Stone::Black { BLACK_STONE } else { WHITE_STONE };
                ui.painter().circle_filled(rect.center(), 16.0, fill);
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{}'s turn", turn)).size(16.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if state.is_game_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), CAPTURE_CLOSE)
                    } else if self.session.is_human_turn() {
                        (
                            format!("Your move ({:.0}s)", self.session.move_timer.elapsed().as_secs_f32()),
                            CAPTURE_SAFE,
                        )
                    } else {
                        ("Waiting for AI".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_captures_card(&self, ui: &mut egui::Ui) {
        let state = self.session.state();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURED PAIRS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for stone in [Stone::Black, Stone::White] {
                let pairs = state.captures(stone);
                let color = if pairs >= CAPTURE_WIN_PAIRS {
                    WIN_HIGHLIGHT
                } else if pairs + 1 == CAPTURE_WIN_PAIRS {
                    CAPTURE_CRITICAL
                } else if pairs + 2 == CAPTURE_WIN_PAIRS {
                    CAPTURE_CLOSE
                } else {
                    TEXT_SECONDARY
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(stone.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}/{}", pairs, CAPTURE_WIN_PAIRS))
                                .size(14.0)
                                .strong()
                                .color(color),
                        );
                    });
                });
            }
        });
    }

    fn render_actions_card(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        let pve = matches!(self.session.mode(), GameMode::PvE { .. });
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let mut button = |ui: &mut egui::Ui, label: &str, choice: Action| {
                if ui.add_sized([210.0, 26.0], egui::Button::new(label)).clicked() {
                    action = Some(choice);
                }
            };
            button(ui, "New Game", Action::NewGame);
            button(ui, "Undo Move", Action::Undo);
            button(ui, "Switch Game Mode", Action::SwitchMode);
            if pve {
                let label = format!("Change Difficulty ({})", self.session.difficulty().level());
                button(ui, &label, Action::CycleDifficulty);
                button(ui, "Switch Color", Action::SwitchColor);
            } else {
                button(ui, "Hint (H)", Action::Hint);
            }
        });
        action
    }

    fn render_ai_card(&self, ui: &mut egui::Ui) {
        let config = self.session.ai_config();
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
                ui.label(
                    RichText::new(format!(
                        "Depth {}  Time {:.1}s",
                        config.max_depth,
                        config.time_limit.as_secs_f64()
                    ))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
                );
                ui.add_space(6.0);

                match &self.session.last_ai_result {
                    Some(result) => {
                        ui.label(
                            RichText::new(format!("AI Think Time: {:.2}s", result.elapsed.as_secs_f64()))
                                .size(11.0)
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new(format!("Nodes Evaluated: {}", result.nodes))
                                .size(11.0)
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new(format!("{:?}  score {:.1}", result.search_type, result.score))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                        if result.timed_out {
                            ui.label(RichText::new("stopped at time limit").size(10.0).color(CAPTURE_CLOSE));
                        }
                        if let Some(pos) = result.best_move {
                            ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                        }
                    }
                    None => {
                        ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                    }
                }
            });
    }

    /// Returns true when "New Game" was clicked
    fn render_game_over_card(&self, ui: &mut egui::Ui) -> bool {
        let state = self.session.state();
        let headline = match state.winner() {
            Some(Stone::Black) => "Black Wins!",
            Some(_) => "White Wins!",
            None => "Game Draw!",
        };
        let reason = match self.session.win_type() {
            Some(WinType::FiveInRow) => "five in a row",
            Some(WinType::Capture) => "five captured pairs",
            Some(WinType::BoardFull) | None => "board full",
        };

        let mut clicked = false;
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(headline).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("by {}", reason)).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(10.0);
                    clicked = ui.button("New Game").clicked();
                });
            });
        clicked
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_ALERT));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let winning_line = self.session.winning_line();
            let overlay = Overlay {
                suggested_move: self.session.suggested_move,
                winning_line: winning_line.as_deref(),
                interactive: self.session.is_human_turn() && !self.session.is_ai_thinking(),
            };
            let clicked = self.board_view.show(ui, self.session.state(), overlay);

            if let Some(pos) = clicked {
                if let Err(err) = self.session.try_place_stone(pos) {
                    log::debug!("rejected click at {}: {}", pos, err);
                    self.session.message = Some(err.to_string());
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) -> Option<Action> {
        let mut action = None;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) && self.session.mode() == GameMode::PvP {
                action = Some(Action::Hint);
            }
            if i.key_pressed(egui::Key::U) {
                action = Some(Action::Undo);
            }
            if i.key_pressed(egui::Key::N) {
                action = Some(Action::NewGame);
            }
            if i.key_pressed(egui::Key::M) {
                action = Some(Action::SwitchMode);
            }
        });
        action
    }
}

impl eframe::App for PenteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Some(action) = self.handle_input(ctx) {
            self.apply(action);
        }

        self.session.check_ai_result();
        self.session.start_ai_thinking();

        let menu_action = self.render_menu_bar(ctx);
        let panel_action = self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(action) = menu_action.or(panel_action) {
            self.apply(action);
        }

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        } else if !self.session.state().is_game_over() {
            // Keeps the move timer ticking
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
