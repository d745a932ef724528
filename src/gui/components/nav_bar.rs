// src/gui/components/nav_bar.rs
//
// Fixed alphabet row. Each button scrolls to its section banner; letters with
// no section are drawn disabled and clicking them does nothing.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<(String, Option<usize>)> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for b in &app.bindings {
            let btn = egui::Button::new(RichText::new(&b.link.letter).strong()).frame(false);
            let resp = ui.add_enabled(b.is_bound(), btn);
            if resp.clicked() {
                clicked = Some((b.link.letter.clone(), b.activate()));
            }
        }
    });

    if let Some((letter, target)) = clicked {
        match target {
            Some(line) => {
                logd!("UI: Jump to {} (line {})", letter, line);
                app.state.gui.pending_scroll = Some(line);
            }
            None => logd!("UI: No section for {}", letter),
        }
    }
}
