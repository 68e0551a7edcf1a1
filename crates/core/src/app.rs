//! The tray controller.
//!
//! Owns the long-lived tray state and the hotkey binding, and runs the
//! cooperative event pump that wires a hotkey press to one modal selection
//! overlay. Everything happens on the single UI thread; the pump simply
//! pauses while an overlay is open and resumes when it closes.

use std::thread;

use crate::capture::CaptureEngine;
use crate::config::Config;
use crate::error::Result;
use crate::hotkey::CaptureHotkey;
use crate::notification::Notifier;
use crate::tray::Tray;
use crate::ui;

/// The application context: tray icon, hotkey binding, and the event pump.
pub struct App {
    config: Config,
    tray: Tray,
    hotkey: Option<CaptureHotkey>,
    notifier: Notifier,
}

impl App {
    /// Builds the tray icon, registers the global hotkey, and shows the
    /// welcome toast.
    ///
    /// A failed hotkey registration (the key is taken by another process)
    /// leaves the app running tray-only: the failure is logged and surfaced
    /// to the user instead of silently producing a hotkey that never fires.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Tray`] when the tray icon itself cannot be
    /// created — without it there is no way to exit, so that one is fatal.
    pub fn new(config: Config) -> Result<Self> {
        let tray = Tray::new()?;
        let notifier = Notifier::new(config.notification_timeout);

        let hotkey = match CaptureHotkey::register() {
            Ok(hotkey) => {
                notifier.notify("SnipClip", "Press F11 to capture a screenshot.");
                Some(hotkey)
            }
            Err(e) => {
                log::warn!("running without a capture hotkey: {}", e);
                notifier.notify(
                    "SnipClip",
                    "F11 could not be registered; capture is unavailable this session.",
                );
                None
            }
        };

        Ok(Self {
            config,
            tray,
            hotkey,
            notifier,
        })
    }

    /// Runs the event pump until Exit is chosen from the tray menu.
    ///
    /// The pump reacts to exactly two things — its own hotkey id and the
    /// Exit menu entry — and ignores everything else it observes on the
    /// event channels.
    pub fn run(&mut self) -> Result<()> {
        log::info!("entering tray event loop");

        loop {
            if self.tray.exit_selected() {
                break;
            }
            if self.hotkey.as_ref().is_some_and(|hotkey| hotkey.fired()) {
                self.open_overlay();
            }
            thread::sleep(self.config.poll_interval);
        }

        self.shutdown();
        Ok(())
    }

    /// One capture attempt: a fresh engine, the modal overlay, then a drain
    /// of any hotkey presses that queued while the overlay was open so a
    /// buffered repeat doesn't immediately reopen it.
    fn open_overlay(&self) {
        let engine = match CaptureEngine::new() {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("capture unavailable: {}", e);
                self.notifier
                    .notify("Screenshot Failed", "No capturable screen was found.");
                return;
            }
        };

        if let Err(e) = ui::run_selection_overlay(engine, self.notifier.clone(), &self.config) {
            log::error!("selection overlay failed: {}", e);
            self.notifier.notify(
                "Screenshot Failed",
                "The selection overlay could not be shown.",
            );
        }

        if let Some(hotkey) = &self.hotkey {
            hotkey.drain();
        }
    }

    /// Exit path: hide the tray icon and remove the hotkey registration, in
    /// that order, then let the pump loop unwind.
    fn shutdown(&self) {
        log::info!("exit selected; shutting down");
        self.tray.hide();
        if let Some(hotkey) = &self.hotkey {
            hotkey.unregister();
        }
    }
}
