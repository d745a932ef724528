// src/gui/components/top_bar.rs
//
// Source field, Reload / Save settings buttons and the status line.

use std::path::Path;

use eframe::egui;

use crate::config::{consts::CONFIG_FILE, file};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Source:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .desired_width(360.0)
                .hint_text("Tribute.csv or http://…"),
        );
        let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let reload = ui.add_enabled(!app.loading, egui::Button::new("Reload")).clicked();
        if reload || enter {
            let src = app.state.gui.source_text.trim().to_string();
            if src != app.state.options.source {
                logf!("UI: Source → {}", src);
                app.state.options.source = src;
            }
            app.start_load();
        }

        if ui.button("Save settings").clicked() {
            match file::save(Path::new(CONFIG_FILE), &app.state.options) {
                Ok(()) => {
                    logf!("Config: saved {}", CONFIG_FILE);
                    app.status(format!("Saved {CONFIG_FILE}"));
                }
                Err(e) => {
                    loge!("Config: save failed: {}", e);
                    app.status(format!("Error: {e}"));
                }
            }
        }

        ui.separator();
        if app.loading {
            ui.spinner();
        }
        ui.label(app.status_text());
    });
}
