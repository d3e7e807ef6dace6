//! Colors and sizes for the Pente GUI

use egui::Color32;

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(219, 178, 94);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const STAR_POINT: Color32 = Color32::from_rgb(40, 30, 15);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(20, 20, 24);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(75, 75, 85);
pub const WHITE_STONE: Color32 = Color32::from_rgb(248, 248, 250);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(185, 185, 190);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 0, 0);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(60, 210, 80);

pub fn ghost_stone(stone: crate::Stone, alpha: u8) -> Color32 {
    match stone {
        crate::Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, alpha),
        _ => Color32::from_rgba_unmultiplied(240, 240, 240, alpha),
    }
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Side panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const TEXT_ALERT: Color32 = Color32::from_rgb(255, 120, 90);

// Capture progress toward the five-pair win
pub const CAPTURE_SAFE: Color32 = Color32::from_rgb(80, 200, 120);
pub const CAPTURE_CLOSE: Color32 = Color32::from_rgb(255, 180, 50);
pub const CAPTURE_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Hoshi positions (row, col)
pub const STAR_POINTS: [(u8, u8); 9] = [
    (3, 3), (3, 9), (3, 15),
    (9, 3), (9, 9), (9, 15),
    (15, 3), (15, 9), (15, 15),
];
