#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::{Context, Result};
use snipclip_core::SnipClip;

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    SnipClip::new()
        .context("Failed to start SnipClip")?
        .run()
        .context("SnipClip exited with an error")
}
