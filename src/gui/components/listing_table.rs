// src/gui/components/listing_table.rs
//
// Draws the listing tree: header row, navy section banners, one row per entry.
// A view over App::shown; rows are laid out by egui_extras and only the visible
// ones are drawn, so off-screen photos are never requested.

use std::collections::HashSet;

use eframe::egui::{self, load::TexturePoll, Align, Color32, Label, Layout, RichText, Vec2};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::{BANNER_BG, BANNER_FG, COLUMNS, IMAGE_MARGIN, IMAGE_MAX_WIDTH},
    gui::app::App,
    view::{Anchor, Line, Listing},
};

const HEADER_H: f32 = 24.0;
const BANNER_H: f32 = 40.0;
const TEXT_ROW_H: f32 = 36.0;
const PHOTO_ROW_H: f32 = IMAGE_MAX_WIDTH + 2.0 * IMAGE_MARGIN;

fn rgb((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Banners are fixed, entries grow when they carry photos.
fn line_height(line: &Line, photos: &[String]) -> f32 {
    match line {
        Line::Banner(_) => BANNER_H,
        Line::Entry(_) if photos.is_empty() => TEXT_ROW_H,
        Line::Entry(_) => PHOTO_ROW_H,
    }
}

/// Header labels as the page shows them: the source's text headers, then a blank
/// over the images.
fn header_cells(listing: &Listing) -> Vec<&str> {
    let mut cells: Vec<&str> =
        listing.header.iter().take(listing.header_len).map(String::as_str).collect();
    cells.push("");
    cells
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let App { shown, state, failed_images, .. } = app;
    let listing = &shown.listing;
    let photos = &shown.photos;

    let text_w = ((ui.available_width() - PHOTO_ROW_H) / 3.0).max(120.0);
    let mut table = TableBuilder::new(ui)
        .id_salt("listing_table")
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for _ in 0..COLUMNS - 1 {
        table = table.column(Column::initial(text_w).resizable(true).clip(true).at_least(60.0));
    }
    table = table.column(Column::remainder().at_least(PHOTO_ROW_H));

    if let Some(ix) = state.gui.pending_scroll.take() {
        table = table.scroll_to_row(ix, Some(Align::TOP));
    }

    table
        .header(HEADER_H, |mut header| {
            for text in header_cells(listing) {
                header.col(|ui| {
                    ui.add(Label::new(RichText::new(text).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            let heights = listing
                .lines
                .iter()
                .zip(photos.iter())
                .map(|(line, p)| line_height(line, p));
            body.heterogeneous_rows(heights, |mut row| {
                let ix = row.index();
                match &listing.lines[ix] {
                    Line::Banner(anchor) => {
                        for col in 0..COLUMNS {
                            row.col(|ui| banner_cell(ui, anchor, col == 0));
                        }
                    }
                    Line::Entry(entry) => {
                        for text in entry.text_cells() {
                            row.col(|ui| {
                                ui.add(Label::new(text).wrap());
                            });
                        }
                        row.col(|ui| photo_cell(ui, &photos[ix], failed_images));
                    }
                }
            });
        });
}

fn banner_cell(ui: &mut egui::Ui, anchor: &Anchor, with_letter: bool) {
    ui.painter().rect_filled(ui.max_rect(), 0.0, rgb(BANNER_BG));
    if with_letter {
        ui.add_space(10.0);
        ui.label(RichText::new(&anchor.letter).strong().size(18.0).color(rgb(BANNER_FG)));
    }
}

fn photo_cell(ui: &mut egui::Ui, uris: &[String], failed: &mut HashSet<String>) {
    for uri in uris {
        photo(ui, uri, failed);
    }
}

/// One photo. A failed load hides just this image; pending loads draw nothing yet.
fn photo(ui: &mut egui::Ui, uri: &str, failed: &mut HashSet<String>) {
    if failed.contains(uri) {
        return;
    }
    let image = egui::Image::new(s!(uri))
        .max_width(IMAGE_MAX_WIDTH)
        .max_height(IMAGE_MAX_WIDTH);
    match image.load_for_size(ui.ctx(), Vec2::splat(IMAGE_MAX_WIDTH)) {
        Ok(TexturePoll::Ready { .. }) => {
            ui.add_space(IMAGE_MARGIN);
            ui.add(image);
        }
        Ok(TexturePoll::Pending { .. }) => {}
        Err(e) => {
            logd!("Image: hiding {} ({})", uri, e);
            failed.insert(s!(uri));
        }
    }
}
