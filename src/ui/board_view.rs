//! Board rendering for the Othello GUI

use crate::{Board, Cell, Pos, Side, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Whole drawing area including the coordinate margin
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square, if any.
    ///
    /// `legal` lists the squares the side to move may play; an empty slice
    /// disables hints (engine turn or game over).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        turn: Option<Side>,
        legal: &[Pos],
        last_move: Option<Pos>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BORDER);
        painter.rect_filled(self.play_rect(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        for &pos in legal {
            painter.circle_filled(
                self.board_to_screen(pos),
                self.cell_size * HINT_RADIUS_RATIO,
                legal_hint(),
            );
        }

        let mut clicked_pos = None;

        if accept_input {
            if let (Some(pointer_pos), Some(side)) = (response.hover_pos(), turn) {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let is_legal = legal.contains(&pos);
                    self.draw_hover_preview(&painter, pos, side, is_legal);

                    if response.clicked() {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Area covered by the 8x8 squares
    fn play_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.play_rect();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(rect.min.x + offset, rect.min.y), Pos2::new(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(rect.min.x, rect.min.y + offset), Pos2::new(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }
    }

    /// File numbers along the top, rank numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let rect = self.play_rect();

        for i in 0..BOARD_SIZE {
            let center = rect.min.x + (i as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(center, self.board_rect.min.y + BOARD_MARGIN * 0.5),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                COORD_TEXT,
            );

            let center = rect.min.y + (i as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, center),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                COORD_TEXT,
            );
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            if let Some(side) = board.get(pos).side() {
                self.draw_disc(painter, pos, side);
            }
        }
    }

    /// Draw a single disc with a drop shadow
    fn draw_disc(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match side {
            Side::Black => {
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Side::White => {
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_DISC_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, side: Side, is_legal: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = if !is_legal {
            hover_invalid()
        } else {
            match side {
                Side::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
                Side::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
            }
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_rect().min;
        let x = (relative.x / self.cell_size).floor() as i32;
        let y = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(x, y)
    }

    /// Center of a square in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let rect = self.play_rect();
        Pos2::new(
            rect.min.x + (pos.x as f32 + 0.5) * self.cell_size,
            rect.min.y + (pos.y as f32 + 0.5) * self.cell_size,
        )
    }
}

/// Cell glyph for text panels
pub fn cell_symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Black => "●",
        Cell::White => "○",
        Cell::Empty => "·",
    }
}
