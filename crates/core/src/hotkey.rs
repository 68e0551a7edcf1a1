//! Global hotkey registration and event polling.

use crate::error::{AppError, Result};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey},
};

/// The one process-wide capture binding: F11, no modifiers.
///
/// The registration lives as long as this value; [`unregister`](Self::unregister)
/// removes it explicitly at shutdown.
pub struct CaptureHotkey {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl CaptureHotkey {
    /// Registers F11 with the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Hotkey`] when the key is already bound by another
    /// process or the platform refuses the registration. The caller surfaces
    /// this as a degraded mode instead of ignoring it.
    pub fn register() -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| AppError::hotkey(format!("Failed to create hotkey manager: {}", e)))?;

        let hotkey = HotKey::new(None, Code::F11);
        manager
            .register(hotkey)
            .map_err(|e| AppError::hotkey(format!("Failed to register F11: {}", e)))?;

        Ok(Self { manager, hotkey })
    }

    /// Non-blocking poll: true when this binding was pressed since the last
    /// call. Only press events carrying the registered id count; releases
    /// and foreign ids are discarded.
    pub fn fired(&self) -> bool {
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if event.id() == self.hotkey.id() && event.state() == HotKeyState::Pressed {
                return true;
            }
        }
        false
    }

    /// Discards every queued event.
    ///
    /// Called after the selection overlay closes so presses buffered while
    /// it was open don't immediately reopen it.
    pub fn drain(&self) {
        while GlobalHotKeyEvent::receiver().try_recv().is_ok() {}
    }

    /// Removes the OS registration. Failures are logged; there is nothing
    /// more to do with them at shutdown.
    pub fn unregister(&self) {
        if let Err(e) = self.manager.unregister(self.hotkey) {
            log::warn!("failed to unregister hotkey: {}", e);
        }
    }
}
