// src/render/mod.rs
//
// Translators from `view::Listing` to an output surface.
// The egui surface lives in `gui::components::listing_table`.

pub mod html;

pub use html::{render_page, render_table, PageOptions};
