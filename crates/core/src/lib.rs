//! SnipClip Core Library
//!
//! This library provides the core functionality for the SnipClip screenshot
//! tool: a tray-resident application where a global hotkey opens a region
//! selection overlay and the selected pixels land on the system clipboard.
//!
//! # Overview
//!
//! SnipClip sits in the notification area until F11 is pressed, then lets
//! the user drag a rectangle over the screen. The library handles:
//!
//! - **Tray & Hotkey**: the resident icon and the F11 binding via [`tray`]
//!   and [`hotkey`]
//! - **Region Selection**: the fullscreen drag overlay via [`ui`]
//! - **Capture**: screen-to-clipboard copies via [`capture`]
//! - **Feedback**: toast notifications via [`notification`]
//!
//! # Quick Start
//!
//! The simplest way to use the library is through the [`SnipClip`] facade:
//!
//! ```ignore
//! use snipclip_core::SnipClip;
//!
//! // Construct the tray context and register the hotkey.
//! let app = SnipClip::new()?;
//!
//! // Blocks until Exit is chosen from the tray menu.
//! app.run()?;
//! ```
//!
//! # Module Structure
//!
//! - [`app`]: the tray controller and event pump
//! - [`capture`]: screen capture and clipboard placement
//! - [`config`]: the fixed workflow tunables
//! - [`error`]: error types and result aliases
//! - [`geometry`]: selection rectangle math
//! - [`hotkey`]: the global F11 binding
//! - [`notification`]: toast presenter
//! - [`tray`]: tray icon and menu
//! - [`ui`]: the selection overlay

pub mod app;
pub mod capture;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hotkey;
pub mod notification;
pub mod tray;
pub mod ui;

// Re-export primary types for convenience
pub use app::App;
pub use config::Config;
pub use error::{AppError, Result};

/// Main entry point for the SnipClip application.
///
/// This struct provides a facade over the subsystems, handling
/// initialization and the blocking run loop. It's the recommended way to
/// use the library.
pub struct SnipClip {
    app: App,
}

impl SnipClip {
    /// Creates a new SnipClip instance with the default fixed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the tray icon cannot be created; a failed hotkey
    /// registration is surfaced to the user but is not fatal.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates an instance with a custom configuration.
    ///
    /// Use this when embedding the capture flow with different timings.
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            app: App::new(config)?,
        })
    }

    /// Runs the tray event loop; blocks until Exit is chosen.
    pub fn run(mut self) -> Result<()> {
        self.app.run()
    }
}
