// src/gui/app.rs
use std::{
    collections::HashSet,
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    nav::{self, Binding},
    pipeline, source,
    view::{Line, Listing},
};

use super::progress::GuiProgress;

type LoadSlot = Arc<Mutex<Option<Result<Loaded, String>>>>;

/// Photo URIs per listing line, resolved against the CSV location.
/// Banners and blank image cells contribute nothing.
pub fn resolve_photos(listing: &Listing, source_url: &str) -> Vec<Vec<String>> {
    listing
        .lines
        .iter()
        .map(|line| match line {
            Line::Banner(_) => Vec::new(),
            Line::Entry(row) => row
                .image_urls
                .iter()
                .map(|raw| source::resolve_image_url(source_url, raw))
                .filter(|uri| !uri.is_empty())
                .collect(),
        })
        .collect()
}

/// What the table shows: one successful load and the source it came from.
#[derive(Clone, Debug, Default)]
pub struct Loaded {
    pub listing: Listing,
    pub source: String,
    /// Indexed like `listing.lines`.
    pub photos: Vec<Vec<String>>,
}

impl Loaded {
    pub fn new(listing: Listing, source: String) -> Self {
        let photos = resolve_photos(&listing, &source);
        Self { listing, source, photos }
    }
}

pub fn run(native: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Tribute Wall",
        native,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut app = App::new(cc.egui_ctx.clone(), state);
            app.start_load();
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last good load + its alphabet bindings
    pub shown: Loaded,
    pub bindings: Vec<Binding>,

    // image URIs that failed once; they stay hidden
    pub failed_images: HashSet<String>,

    // status line (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub loading: bool,
    load_slot: LoadSlot,
    ctx: egui::Context,
}

impl App {
    pub fn new(ctx: egui::Context, state: AppState) -> Self {
        let shown = Loaded::default();
        let bindings = nav::bind(&nav::alphabet_links(), &shown.listing);
        Self {
            state,
            shown,
            bindings,
            failed_images: HashSet::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: false,
            load_slot: Arc::new(Mutex::new(None)),
            ctx,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Kick off one fetch + pipeline run on a worker. Ignored while a load is running.
    pub fn start_load(&mut self) {
        if self.loading {
            logd!("Load: already running, ignoring request");
            return;
        }
        self.loading = true;

        let opts = self.state.options.clone();
        let slot = self.load_slot.clone();
        let status = self.status.clone();
        let ctx = self.ctx.clone();

        logf!("UI: Load requested source={}", opts.source);
        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let res = pipeline::run(&opts, Some(&mut prog))
                .map(|listing| Loaded::new(listing, opts.source.clone()))
                .map_err(|e| e.to_string());
            if let Ok(mut s) = slot.lock() {
                *s = Some(res);
            }
            ctx.request_repaint();
        });
    }

    /// Take a finished load, if any, and swap it in wholesale.
    fn poll_load(&mut self) {
        let done = match self.load_slot.lock() {
            Ok(mut s) => s.take(),
            Err(_) => None,
        };
        let Some(res) = done else { return };
        self.loading = false;

        match res {
            Ok(loaded) => {
                self.bindings = nav::bind(&nav::alphabet_links(), &loaded.listing);
                self.shown = loaded;
                self.failed_images.clear();
                self.state.gui.pending_scroll = None;
                self.status(format!(
                    "Ready: {} entries, {} sections",
                    self.shown.listing.entry_count(),
                    self.shown.listing.banners().count()
                ));
            }
            Err(e) => {
                // Already logged by the pipeline; table and image base stay as they were.
                self.status(format!("Error fetching the CSV file: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            crate::gui::components::top_bar::draw(ui, self);
        });

        egui::TopBottomPanel::top("alphabet").show(ctx, |ui| {
            crate::gui::components::nav_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::listing_table::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{listing::TextColumn, sort::Collation};

    const CSV: &str = "Donor Name,In Honor,Tribute,Image URL\nD,Ada,T,img/a.png; ;img/b.png\nE,Bo,U,";

    fn loaded_from(src: &str) -> Loaded {
        let c = Collation::new("en").unwrap();
        let listing = pipeline::build_listing(CSV, TextColumn::default(), &c);
        Loaded::new(listing, s!(src))
    }

    fn deliver(app: &mut App, res: Result<Loaded, String>) {
        app.loading = true;
        *app.load_slot.lock().unwrap() = Some(res);
        app.poll_load();
    }

    #[test]
    fn photos_follow_lines() {
        let l = loaded_from("http://example.org/wall/Tribute.csv");
        assert_eq!(l.photos.len(), l.listing.lines.len());
        // A banner, Ada, B banner, Bo
        assert!(l.photos[0].is_empty());
        assert_eq!(
            l.photos[1],
            vec![s!("http://example.org/wall/img/a.png"), s!("http://example.org/wall/img/b.png")]
        );
        assert!(l.photos[2].is_empty());
        assert!(l.photos[3].is_empty());
    }

    #[test]
    fn failed_reload_keeps_table_and_image_base() {
        let mut app = App::new(egui::Context::default(), AppState::default());
        deliver(&mut app, Ok(loaded_from("http://example.org/wall/Tribute.csv")));
        let before = app.shown.listing.clone();
        assert!(app.bindings.iter().any(|b| b.link.letter == "A" && b.is_bound()));

        app.state.options.source = s!("http://bad.invalid/x.csv");
        deliver(&mut app, Err(s!("connection refused")));

        assert!(!app.loading);
        assert_eq!(app.shown.listing, before);
        assert_eq!(app.shown.source, "http://example.org/wall/Tribute.csv");
        assert_eq!(app.shown.photos[1][0], "http://example.org/wall/img/a.png");
        assert!(app.bindings.iter().any(|b| b.link.letter == "A" && b.is_bound()));
        assert!(app.status_text().starts_with("Error"));
    }

    #[test]
    fn good_reload_moves_image_base() {
        let mut app = App::new(egui::Context::default(), AppState::default());
        deliver(&mut app, Ok(loaded_from("http://example.org/wall/Tribute.csv")));
        app.failed_images.insert(s!("http://example.org/wall/img/a.png"));

        deliver(&mut app, Ok(loaded_from("http://mirror.org/Tribute.csv")));

        assert_eq!(app.shown.photos[1][0], "http://mirror.org/img/a.png");
        assert!(app.failed_images.is_empty());
    }
}
