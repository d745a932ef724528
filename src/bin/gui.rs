// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use tribute_wall::{
    config::{consts::CONFIG_FILE, file, state::AppState},
    gui, loge,
};
use eframe::egui::ViewportBuilder;

fn main() {
    let options = match file::load(Path::new(CONFIG_FILE)) {
        Ok(o) => o,
        Err(e) => {
            loge!("Config: {}", e);
            Default::default()
        }
    };
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Tribute Wall")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
