//! The modal fullscreen selection overlay.
//!
//! This module contains the `SelectionOverlay` struct which implements the
//! `eframe::App` trait for the fullscreen drag surface. One instance exists
//! per capture attempt; [`run`] blocks the caller until it closes.

use super::rendering::{draw_backdrop, draw_selection};
use super::selection::DragTracker;
use crate::capture::CaptureEngine;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::geometry::{Point, Rect};
use crate::notification::Notifier;
use eframe::egui;
use std::time::{Duration, Instant};

/// What the overlay is doing once the drag has ended.
#[derive(Clone, Copy)]
enum Outcome {
    /// Window hidden; waiting for the hide to visually take effect before
    /// reading the screen.
    Settling { rect: Rect, deadline: Instant },
    /// Capture attempt done (or skipped); the viewport close is in flight.
    Done,
}

/// The fullscreen selection surface.
///
/// Semi-transparent black over the whole screen; a drag paints a live green
/// rectangle, and mouse-up commits the region to the capture engine.
pub struct SelectionOverlay {
    tracker: DragTracker,
    outcome: Option<Outcome>,
    engine: CaptureEngine,
    notifier: Notifier,
    settle_delay: Duration,
}

impl SelectionOverlay {
    /// Creates an overlay for one capture attempt.
    pub fn new(engine: CaptureEngine, notifier: Notifier, settle_delay: Duration) -> Self {
        Self {
            tracker: DragTracker::default(),
            outcome: None,
            engine,
            notifier,
            settle_delay,
        }
    }

    /// Feeds pointer input into the drag tracker and reacts to the drag
    /// ending.
    fn handle_drag(&mut self, ctx: &egui::Context, response: &egui::Response) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.tracker.press(to_point(pos));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.tracker.drag(to_point(pos));
            }
        } else if response.drag_stopped() {
            let end = response.interact_pointer_pos().map(to_point);
            match self.tracker.release(end) {
                Some(rect) => {
                    // Hide before reading the screen so the overlay tint is
                    // not in the shot.
                    ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
                    self.outcome = Some(Outcome::Settling {
                        rect,
                        deadline: Instant::now() + self.settle_delay,
                    });
                    ctx.request_repaint_after(self.settle_delay);
                }
                None => {
                    // Zero-area click: the deliberate no-op cancel.
                    self.outcome = Some(Outcome::Done);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    /// Drives the post-drag continuation. Returns true once the drag has
    /// ended and the frame should not process selection input anymore.
    fn advance_outcome(&mut self, ctx: &egui::Context) -> bool {
        match self.outcome {
            None => false,
            Some(Outcome::Done) => true,
            Some(Outcome::Settling { rect, deadline }) => {
                let now = Instant::now();
                if now < deadline {
                    ctx.request_repaint_after(deadline - now);
                } else {
                    self.capture(rect);
                    self.outcome = Some(Outcome::Done);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                true
            }
        }
    }

    /// The one capture invocation of this attempt. Failures are surfaced as
    /// a toast and logged; the overlay still closes and the app returns to
    /// tray-idle.
    fn capture(&mut self, rect: Rect) {
        match self.engine.copy_region_to_clipboard(rect) {
            Ok(()) => {
                log::info!(
                    "captured {}x{} at ({}, {})",
                    rect.width,
                    rect.height,
                    rect.x,
                    rect.y
                );
                self.notifier.notify(
                    "Screenshot Saved",
                    "Your screenshot has been saved to your clipboard.",
                );
            }
            Err(e) => {
                log::error!("capture failed: {}", e);
                self.notifier.notify(
                    "Screenshot Failed",
                    "Could not copy the selection to the clipboard.",
                );
            }
        }
    }
}

impl eframe::App for SelectionOverlay {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent window background; the backdrop tint is painted
        // per frame so the desktop stays visible underneath.
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.advance_outcome(ctx) {
            return;
        }

        // Fullscreen panel with no margins
        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .outer_margin(egui::Margin::same(0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let screen_rect = ui.max_rect();
                draw_backdrop(ui.painter(), screen_rect);

                let response = ui.interact(screen_rect, ui.id(), egui::Sense::drag());
                self.handle_drag(ctx, &response);

                if let Some(live) = self.tracker.live_rect() {
                    draw_selection(ui.painter(), to_egui_rect(live));
                }
            });
    }
}

/// Launches the overlay modally and returns when it closes.
///
/// The overlay covers the primary screen from its origin, so egui points are
/// virtual-screen logical coordinates and the selection passes to the
/// capture engine unchanged.
pub fn run(engine: CaptureEngine, notifier: Notifier, config: &Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_transparent(true),
        ..Default::default()
    };

    let overlay = SelectionOverlay::new(engine, notifier, config.settle_delay);

    eframe::run_native(
        "SnipClip Selection",
        options,
        Box::new(move |_cc| Ok(Box::new(overlay) as Box<dyn eframe::App>)),
    )
    .map_err(|e| AppError::ui(format!("Failed to run overlay: {}", e)))
}

fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x.round() as i32, pos.y.round() as i32)
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}
