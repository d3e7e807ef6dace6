//! Board rendering and click handling

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{GameState, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// What the board should draw on top of the stones
#[derive(Default)]
pub struct Overlay<'a> {
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Clicks and hover previews are accepted
    pub interactive: bool,
}

/// Paints the grid and stones and maps pointer positions to cells
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board; returns the clicked cell if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, overlay: Overlay<'_>) -> Option<Pos> {
        let available = ui.available_size();
        let side = available.x.min(available.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, state);

        if let Some(pos) = state.last_move() {
            painter.circle_stroke(
                self.board_to_screen(pos),
                LAST_MOVE_MARKER_RADIUS,
                Stroke::new(2.0, LAST_MOVE_MARKER),
            );
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }
        let turn = state.current_player();
        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, turn);
        }

        if !overlay.interactive || state.is_game_over() {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = state.is_valid_move(i32::from(board_pos.row), i32::from(board_pos.col));
        let color = if is_valid {
            ghost_stone(turn, 80)
        } else {
            hover_invalid()
        };
        painter.circle_filled(
            self.board_to_screen(board_pos),
            self.cell_size * STONE_RADIUS_RATIO,
            color,
        );

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let far = BOARD_MARGIN + (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let min = self.board_rect.min;
            painter.line_segment(
                [min + Vec2::new(offset, BOARD_MARGIN), min + Vec2::new(offset, far)],
                stroke,
            );
            painter.line_segment(
                [min + Vec2::new(BOARD_MARGIN, offset), min + Vec2::new(far, offset)],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            painter.circle_filled(self.board_to_screen(Pos::new(row, col)), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Row and column indices, matching the (row, col) coordinates in messages
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..BOARD_SIZE {
            let along = BOARD_MARGIN + i as f32 * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + 14.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, state: &GameState) {
        let board = state.board();
        for stone in [Stone::Black, Stone::White] {
            let Some(bits) = board.stones(stone) else {
                continue;
            };
            for pos in bits.iter_ones() {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow = egui::Color32::from_rgba_unmultiplied(0, 0, 0, 50);
        painter.circle_filled(center + Vec2::splat(2.0), radius, shadow);

        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::splat(-radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_RIM));
            }
            Stone::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * STONE_RADIUS_RATIO, ghost_stone(turn, 100));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            if turn == Stone::Black { WHITE_STONE } else { BLACK_STONE },
        );
    }

    /// Nearest intersection under a screen position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        Pos::checked(row, col)
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
