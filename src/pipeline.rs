// src/pipeline.rs
//
// One load: fetch → parse → group → sort → build.
// The fetch is the only fallible step that depends on the outside world; when it
// fails nothing downstream runs and the caller keeps an empty table.

use std::error::Error;

use crate::{
    config::options::AppOptions,
    csv, listing,
    listing::TextColumn,
    progress::{Progress, Stage},
    sort::{self, Collation},
    source,
    view::{self, Listing},
};

/// Pure part of the pipeline: text in, render tree out.
/// `column` keys both the sort and the section letters.
pub fn build_listing(text: &str, column: TextColumn, collation: &Collation) -> Listing {
    let rows = csv::parse_rows(text);
    let table = listing::group_entries(rows);
    let table = sort::sort_by_first_name(table, column, collation);
    view::build(table, column)
}

/// Full run against `opts.source`.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Listing, Box<dyn Error + Send + Sync>> {
    let column = opts.key_column;
    let collation = Collation::new(&opts.locale)?;

    logf!("Load: Begin source={} key={} locale={}", opts.source, column, collation.locale());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", opts.source));
    }

    let text = match source::fetch(&opts.source) {
        Ok(t) => t,
        Err(e) => {
            loge!("Error fetching the CSV file: {}", e);
            if let Some(p) = progress.as_deref_mut() { p.finish(false); }
            return Err(e);
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Fetch, &format!("{} bytes", text.len()));
    }

    let rows = csv::parse_rows(&text);
    logd!("Load: parsed {} line(s)", rows.len());
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Parse, &format!("{} line(s)", rows.len()));
    }

    let table = listing::group_entries(rows);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Group, &format!("{} entr(ies)", table.row_count()));
    }

    let table = sort::sort_by_first_name(table, column, &collation);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Sort, column.name());
    }

    let listing = view::build(table, column);
    logf!(
        "Load: OK entries={} sections={}",
        listing.entry_count(),
        listing.banners().count()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Build, &format!("{} section(s)", listing.banners().count()));
        p.finish(true);
    }

    Ok(listing)
}
