//! The selection overlay user interface.
//!
//! The UI is split into focused submodules:
//! - [`selection`]: the drag state machine behind a capture attempt
//! - `rendering`: painting helpers for the backdrop and live rectangle
//! - `overlay`: the modal fullscreen eframe surface
//!
//! # Usage
//!
//! ```ignore
//! use snipclip_core::{capture::CaptureEngine, notification::Notifier, ui};
//!
//! let engine = CaptureEngine::new()?;
//! // Blocks until the user releases the drag and the overlay closes.
//! ui::run_selection_overlay(engine, notifier, &config)?;
//! ```

mod overlay;
mod rendering;
pub mod selection;

pub use overlay::SelectionOverlay;

use crate::capture::CaptureEngine;
use crate::config::Config;
use crate::error::Result;
use crate::notification::Notifier;

/// Opens the selection overlay modally.
///
/// Blocks the calling thread until the overlay closes; the only output is
/// the side effect of a capture (or none, for a zero-area click). Capture
/// and clipboard failures are surfaced as toasts inside the overlay, so an
/// `Err` here means the overlay itself could not be shown.
pub fn run_selection_overlay(
    engine: CaptureEngine,
    notifier: Notifier,
    config: &Config,
) -> Result<()> {
    overlay::run(engine, notifier, config)
}
