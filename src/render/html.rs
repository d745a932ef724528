// src/render/html.rs
//
// HTML output. `render_table` produces the rows that go inside
// `<table id="tribute-table">`; `render_page` wraps them in a standalone document
// with the alphabet bar and the script that binds it.

use std::fmt::Write;

use crate::config::consts::{
    BANNER_BG, BANNER_FG, COLUMNS, DEFAULT_TITLE, IMAGE_MARGIN, IMAGE_MAX_WIDTH, NAV_ID, TABLE_ID,
};
use crate::core::text::escape_html;
use crate::listing::Row;
use crate::nav::{self, NavLink};
use crate::view::{Anchor, Line, Listing};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { title: s!(DEFAULT_TITLE) }
    }
}

fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn banner_style() -> String {
    format!(
        "text-align: center; font-weight: bold; background-color: {}; color: {}; font-size: 1.2em; padding: 10px;",
        hex(BANNER_BG),
        hex(BANNER_FG),
    )
}

/// Rows for the table element. Always starts from scratch; nothing carries over
/// between calls.
pub fn render_table(listing: &Listing) -> String {
    let mut out = String::new();

    out.push_str("<tr>");
    for cell in listing.header.iter().take(listing.header_len) {
        let _ = write!(out, "<th>{}</th>", escape_html(cell));
    }
    // Image column header is always blank.
    out.push_str("<th></th></tr>\n");

    let style = banner_style();
    for line in &listing.lines {
        match line {
            Line::Banner(anchor) => render_banner(&mut out, anchor, &style),
            Line::Entry(row) => render_entry(&mut out, row),
        }
    }
    out
}

fn render_banner(out: &mut String, anchor: &Anchor, style: &str) {
    let id = escape_html(&anchor.id());
    let letter = escape_html(&anchor.letter);
    let _ = writeln!(
        out,
        r##"<tr><th colspan="{COLUMNS}" style="{style}"><a id="{id}" href="#{id}" style="color: white; text-decoration: none;">{letter}</a></th></tr>"##,
    );
}

fn render_entry(out: &mut String, row: &Row) {
    out.push_str("<tr>");
    for cell in row.text_cells() {
        let _ = write!(out, "<td>{}</td>", escape_html(cell));
    }
    out.push_str("<td>");
    // Each image hides itself on error; siblings are unaffected.
    for url in row.image_urls.iter().filter(|u| !u.is_empty()) {
        let _ = write!(
            out,
            r#"<img src="{}" class="honoree-image" alt="Honoree Image" style="max-width: {IMAGE_MAX_WIDTH}px; margin: {IMAGE_MARGIN}px;" onerror="this.style.display='none';">"#,
            escape_html(url),
        );
    }
    out.push_str("</td></tr>\n");
}

fn render_nav(links: &[NavLink]) -> String {
    let mut out = format!(r#"<nav id="{NAV_ID}">"#);
    for link in links {
        let letter = escape_html(&link.letter);
        let _ = write!(out, r##"<a href="#" data-letter="{letter}">{letter}</a>"##);
    }
    out.push_str("</nav>");
    out
}

/// Standalone document: title, alphabet bar, table, binder script.
pub fn render_page(listing: &Listing, opts: &PageOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    {nav}
    <table id="{TABLE_ID}">
{rows}    </table>
    <script>{js}</script>
</body>
</html>
"#,
        title = escape_html(&opts.title),
        css = inline_css(),
        nav = render_nav(&nav::alphabet_links()),
        rows = render_table(listing),
        js = inline_javascript(),
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; }
h1 { text-align: center; }
#alphabet-nav { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.4rem; margin-bottom: 1rem; }
#alphabet-nav a { color: #003366; font-weight: 600; text-decoration: none; }
#tribute-table { width: 100%; border-collapse: collapse; }
#tribute-table th, #tribute-table td { padding: 0.5rem; border-bottom: 1px solid #e5e7eb; text-align: left; vertical-align: top; }
"#
}

/// Click on `#alphabet-nav a[data-letter]` scrolls the matching banner to the top.
/// Letters without a banner do nothing.
fn inline_javascript() -> &'static str {
    r##"
document.querySelectorAll("#alphabet-nav a").forEach(function (link) {
    link.addEventListener("click", function (event) {
        event.preventDefault();
        var target = document.getElementById("letter-" + link.dataset.letter);
        if (target) {
            target.scrollIntoView({ behavior: "smooth", block: "start" });
        }
    });
});
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{Table, TextColumn};
    use crate::view;

    fn one_row(row: Row) -> Listing {
        view::build(
            Table { header: vec![s!("Donor"), s!("Memory"), s!("Tribute"), s!("Image URL")], rows: vec![row] },
            TextColumn::InHonorMemoryOf,
        )
    }

    #[test]
    fn header_has_three_labels_and_blank_image_cell() {
        let html = render_table(&Listing { header_len: 3, header: [s!("D"), s!("M"), s!("T"), s!()], lines: Vec::new() });
        assert_eq!(html, "<tr><th>D</th><th>M</th><th>T</th><th></th></tr>\n");
    }

    #[test]
    fn banner_carries_anchor() {
        let html = render_table(&one_row(Row { in_honor_memory_of: s!("zoe q"), ..Row::default() }));
        assert!(html.contains(r#"colspan="4""#));
        assert!(html.contains(r##"<a id="letter-Z" href="#letter-Z""##));
        assert!(html.contains("background-color: #003366;"));
    }

    #[test]
    fn empty_urls_are_skipped() {
        let row = Row { image_urls: vec![s!("a.png"), s!(""), s!("b.png")], ..Row::default() };
        let html = render_table(&one_row(row));
        assert_eq!(html.matches("<img ").count(), 2);
        assert_eq!(html.matches("onerror=").count(), 2);
    }

    #[test]
    fn cell_text_is_escaped() {
        let row = Row { donor_name: s!("<script>x</script>"), ..Row::default() };
        let html = render_table(&one_row(row));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn page_wraps_table_and_nav() {
        let page = render_page(&Listing::default(), &PageOptions { title: s!("Wall & Friends") });
        assert!(page.contains("<title>Wall &amp; Friends</title>"));
        assert!(page.contains(r#"<table id="tribute-table">"#));
        assert!(page.contains(r##"<a href="#" data-letter="#">#</a>"##));
        assert!(page.contains("scrollIntoView"));
    }
}
