//! Painting helpers for the selection overlay.

use eframe::egui;

/// Backdrop alpha: semi-transparent black over the whole surface.
const BACKDROP_ALPHA: u8 = 128;

/// Selection outline width in points.
const STROKE_WIDTH: f32 = 2.0;

/// Alpha of the translucent fill inside the live selection.
const FILL_ALPHA: u8 = 50;

/// Paints the full-surface backdrop.
///
/// Painting it first on every frame also erases the previous frame's
/// rectangle, so the outline never smears while the drag moves.
pub fn draw_backdrop(painter: &egui::Painter, screen_rect: egui::Rect) {
    painter.rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(BACKDROP_ALPHA));
}

/// Paints the live selection: a translucent green fill with a solid green
/// outline.
pub fn draw_selection(painter: &egui::Painter, selection: egui::Rect) {
    let green = egui::Color32::from_rgb(50, 205, 50);

    painter.rect_filled(
        selection,
        0.0,
        egui::Color32::from_rgba_unmultiplied(50, 205, 50, FILL_ALPHA),
    );
    painter.rect_stroke(
        selection,
        0.0,
        egui::Stroke::new(STROKE_WIDTH, green),
        egui::StrokeKind::Middle,
    );
}
