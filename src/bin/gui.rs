// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use votewatch::config::{consts::SETTINGS_FILE, settings::Settings, state::GuiState};
use votewatch::gui;

/// 32×32 bar-chart glyph; three rising green bars on transparent.
fn app_icon() -> IconData {
    const SIZE: u32 = 32;
    let bars = [(4u32, 12u32, 14u32), (13, 21, 8), (22, 30, 3)]; // (x0, x1, top)
    let rgba = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let inside = bars.iter().any(|&(x0, x1, top)| x >= x0 && x < x1 && y >= top && y < SIZE - 2);
        if inside { Rgba([0x4C, 0xAF, 0x50, 0xFF]) } else { Rgba([0, 0, 0, 0]) }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let settings = match Settings::load(Path::new(SETTINGS_FILE)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Settings: {e}; using defaults");
            Settings::default()
        }
    };
    if let Err(e) = votewatch::log::init(&settings.logging) {
        eprintln!("Logging disabled: {e}");
    }

    let state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.window_w as f32, state.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, settings) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
