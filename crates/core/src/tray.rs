//! System tray icon and menu.
//!
//! The tray icon is the long-lived face of the application: it exists from
//! startup to exit and carries the one-entry context menu ("Exit").

use crate::error::{AppError, Result};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder, TrayIconEvent,
    menu::{Menu, MenuEvent, MenuId, MenuItem},
};

/// The tray icon, its menu, and the id of the Exit entry.
pub struct Tray {
    icon: TrayIcon,
    exit_id: MenuId,
    // The menu keeps its items alive for the lifetime of the tray.
    _menu_items: Vec<MenuItem>,
}

impl Tray {
    /// Creates the visible tray icon with its context menu.
    pub fn new() -> Result<Self> {
        let exit_item = MenuItem::new("Exit", true, None);
        let exit_id = exit_item.id().clone();

        let menu = Menu::new();
        menu.append(&exit_item)
            .map_err(|e| AppError::tray(format!("Failed to build tray menu: {}", e)))?;

        let icon = TrayIconBuilder::new()
            .with_tooltip("SnipClip — press F11 to capture")
            .with_icon(default_icon()?)
            .with_menu(Box::new(menu))
            .build()
            .map_err(|e| AppError::tray(format!("Failed to create tray icon: {}", e)))?;

        Ok(Self {
            icon,
            exit_id,
            _menu_items: vec![exit_item],
        })
    }

    /// Non-blocking poll: true when the Exit entry was chosen since the last
    /// call. Plain icon clicks and foreign menu ids are drained and ignored.
    pub fn exit_selected(&self) -> bool {
        while TrayIconEvent::receiver().try_recv().is_ok() {}

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if event.id == self.exit_id {
                return true;
            }
        }
        false
    }

    /// Hides the icon ahead of process exit.
    pub fn hide(&self) {
        if let Err(e) = self.icon.set_visible(false) {
            log::warn!("failed to hide tray icon: {}", e);
        }
    }
}

/// A 32x32 glyph generated in memory, echoing the green selection frame.
/// The binary ships no asset files.
fn default_icon() -> Result<Icon> {
    const SIZE: u32 = 32;
    const BORDER: u32 = 4;

    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let on_frame =
                x < BORDER || y < BORDER || x >= SIZE - BORDER || y >= SIZE - BORDER;
            if on_frame {
                rgba.extend_from_slice(&[50, 205, 50, 255]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 90]);
            }
        }
    }

    Icon::from_rgba(rgba, SIZE, SIZE)
        .map_err(|e| AppError::tray(format!("Failed to build tray icon image: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_has_valid_dimensions() {
        // Icon::from_rgba validates the buffer length against the declared size.
        assert!(default_icon().is_ok());
    }
}
