//! Screen capture and clipboard placement.
//!
//! This module grabs a rectangular region of the virtual screen into an
//! in-memory image and hands it to the system clipboard. It supports X11,
//! Wayland, Windows and macOS through the `screenshots` crate.

use crate::error::{AppError, Result};
use crate::geometry::Rect;
use arboard::{Clipboard, ImageData};
use image::RgbaImage;
use screenshots::Screen;

/// Screen capturer that reads rectangular regions of the virtual screen.
///
/// This struct wraps the `screenshots` crate and resolves virtual-screen
/// coordinates to the screen that contains them.
pub struct ScreenCapturer {
    screens: Vec<Screen>,
}

impl ScreenCapturer {
    /// Initializes the screen capturer by detecting available screens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ScreenCapture`] if:
    /// - Screen enumeration fails (e.g., no display server available)
    /// - No screens are detected
    pub fn new() -> Result<Self> {
        let screens = Screen::all()
            .map_err(|e| AppError::capture(format!("Failed to enumerate screens: {}", e)))?;

        if screens.is_empty() {
            return Err(AppError::capture("No screens detected"));
        }

        Ok(Self { screens })
    }

    /// Captures the pixels under `rect` (virtual-screen coordinates) into an
    /// RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`AppError::EmptySelection`] if the rectangle has zero area
    /// - [`AppError::ScreenCapture`] if the copy itself fails
    pub fn capture_region(&self, rect: Rect) -> Result<RgbaImage> {
        if !rect.has_area() {
            return Err(AppError::EmptySelection);
        }

        let screen = self.screen_at(rect.x, rect.y);
        // capture_area takes coordinates relative to the screen's own origin.
        let x = rect.x - screen.display_info.x;
        let y = rect.y - screen.display_info.y;

        let captured = screen
            .capture_area(x, y, rect.width, rect.height)
            .map_err(|e| AppError::capture(format!("Failed to capture region: {}", e)))?;

        // Convert the captured image into our image crate's buffer type
        let width = captured.width();
        let height = captured.height();
        let rgba_data = captured.into_raw();

        RgbaImage::from_raw(width, height, rgba_data)
            .ok_or_else(|| AppError::capture("Failed to create image buffer"))
    }

    /// The screen whose bounds contain the given point, or the first screen
    /// when no bounds match (a point dragged past the visible edge).
    fn screen_at(&self, x: i32, y: i32) -> &Screen {
        self.screens
            .iter()
            .find(|s| {
                let d = &s.display_info;
                x >= d.x
                    && x < d.x + d.width as i32
                    && y >= d.y
                    && y < d.y + d.height as i32
            })
            .unwrap_or(&self.screens[0])
    }
}

/// Capture engine: grabs a screen region and places it on the clipboard.
///
/// One engine is created per capture attempt so the screen list is fresh
/// even when displays were plugged or unplugged while the app sat in the
/// tray.
pub struct CaptureEngine {
    capturer: ScreenCapturer,
}

impl CaptureEngine {
    /// Creates an engine backed by the currently attached screens.
    pub fn new() -> Result<Self> {
        Ok(Self {
            capturer: ScreenCapturer::new()?,
        })
    }

    /// Copies the pixels under `rect` onto the system clipboard, replacing
    /// any prior clipboard image content.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ScreenCapture`] or [`AppError::Clipboard`]; the
    /// caller decides how to surface the failure.
    pub fn copy_region_to_clipboard(&self, rect: Rect) -> Result<()> {
        let image = self.capturer.capture_region(rect)?;

        let mut clipboard = Clipboard::new()
            .map_err(|e| AppError::clipboard(format!("Failed to open clipboard: {}", e)))?;
        clipboard
            .set_image(clipboard_payload(&image))
            .map_err(|e| AppError::clipboard(format!("Failed to place image: {}", e)))?;

        Ok(())
    }
}

/// Converts an RGBA buffer into the clipboard's image representation.
fn clipboard_payload(image: &RgbaImage) -> ImageData<'_> {
    ImageData {
        width: image.width() as usize,
        height: image.height() as usize,
        bytes: image.as_raw().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_payload_preserves_dimensions() {
        let image = RgbaImage::new(50, 200);
        let payload = clipboard_payload(&image);
        assert_eq!(payload.width, 50);
        assert_eq!(payload.height, 200);
        assert_eq!(payload.bytes.len(), 50 * 200 * 4);
    }
}
