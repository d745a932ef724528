// src/view.rs
//
// Immutable render tree for a sorted table:
//   header cells + a flat list of `Banner | Entry` lines.
// Renderers (HTML page, egui window) only translate this tree; none of them
// decide where sections start.

use std::collections::HashSet;

use crate::config::consts::{ANCHOR_PREFIX, COLUMNS, IMAGE_HEADER};
use crate::core::text::section_letter;
use crate::listing::{Row, Table, TextColumn};

/// Scroll target for one alphabet section.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub letter: String,
}

impl Anchor {
    pub fn new(letter: impl Into<String>) -> Self {
        Self { letter: letter.into() }
    }

    /// Element id, also the fragment link target: `letter-<LETTER>`.
    pub fn id(&self) -> String {
        join!(ANCHOR_PREFIX, &self.letter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Banner(Anchor),
    Entry(Row),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Display header: columns 0..=2 of the source header, then an empty image label.
    pub header: [String; COLUMNS],
    /// How many of the first three header cells exist in the source.
    pub header_len: usize,
    pub lines: Vec<Line>,
}

impl Listing {
    pub fn banners(&self) -> impl Iterator<Item = (usize, &Anchor)> {
        self.lines.iter().enumerate().filter_map(|(i, l)| match l {
            Line::Banner(a) => Some((i, a)),
            Line::Entry(_) => None,
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &Row> {
        self.lines.iter().filter_map(|l| match l {
            Line::Entry(r) => Some(r),
            Line::Banner(_) => None,
        })
    }

    /// Line index of the banner for `letter`, if that section exists.
    pub fn anchor_line(&self, letter: &str) -> Option<usize> {
        self.banners().find(|(_, a)| a.letter == letter).map(|(i, _)| i)
    }

    pub fn entry_count(&self) -> usize { self.entries().count() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

fn header_label(cell: &str) -> String {
    if cell == IMAGE_HEADER { s!() } else { s!(cell) }
}

/// Build the tree. `column` keys the section letters and must be the same column
/// the rows were sorted by. A banner goes in front of the first row of each letter.
pub fn build(table: Table, column: TextColumn) -> Listing {
    let mut header: [String; COLUMNS] = Default::default();
    let header_len = table.header.len().min(COLUMNS - 1);
    for (slot, cell) in header.iter_mut().zip(table.header.iter().take(COLUMNS - 1)) {
        *slot = header_label(cell);
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut lines = Vec::with_capacity(table.rows.len() * 2);

    for row in table.rows {
        let letter = section_letter(row.text(column));
        if !seen.contains(&letter) {
            seen.insert(letter.clone());
            lines.push(Line::Banner(Anchor::new(letter)));
        }
        lines.push(Line::Entry(row));
    }

    Listing { header, header_len, lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(donor: &str, honoree: &str) -> Row {
        Row { donor_name: s!(donor), in_honor_memory_of: s!(honoree), ..Row::default() }
    }

    fn letters(l: &Listing) -> Vec<&str> {
        l.banners().map(|(_, a)| a.letter.as_str()).collect()
    }

    #[test]
    fn banner_before_each_new_letter() {
        let t = Table {
            header: vec![s!("Donor"), s!("Memory"), s!("Tribute"), s!("Image URL")],
            rows: vec![row("d1", "Alice"), row("d2", "Amy"), row("d3", "Bob"), row("d4", "")],
        };
        let l = build(t, TextColumn::InHonorMemoryOf);
        assert_eq!(letters(&l), vec!["A", "B", "#"]);
        assert!(matches!(l.lines[0], Line::Banner(_)));
        assert!(matches!(l.lines[3], Line::Banner(_)));
        assert_eq!(l.lines.len(), 7);
        assert_eq!(l.entry_count(), 4);
        assert_eq!(l.header, [s!("Donor"), s!("Memory"), s!("Tribute"), s!()]);
    }

    #[test]
    fn letters_are_not_repeated_when_unsorted() {
        let t = Table { header: Vec::new(), rows: vec![row("", "ann"), row("", "Bea"), row("", "Al")] };
        let l = build(t, TextColumn::InHonorMemoryOf);
        assert_eq!(letters(&l), vec!["A", "B"]);
        assert_eq!(l.lines.len(), 5);
    }

    #[test]
    fn image_url_header_cell_is_blanked() {
        let t = Table { header: vec![s!("Image URL"), s!("Memory")], rows: Vec::new() };
        let l = build(t, TextColumn::InHonorMemoryOf);
        assert_eq!(l.header, [s!(), s!("Memory"), s!(), s!()]);
        assert_eq!(l.header_len, 2);
        assert!(l.is_empty());
    }

    #[test]
    fn anchors_resolve_to_banner_lines() {
        let t = Table { header: Vec::new(), rows: vec![row("", "Cy"), row("", "Dee")] };
        let l = build(t, TextColumn::InHonorMemoryOf);
        assert_eq!(l.anchor_line("C"), Some(0));
        assert_eq!(l.anchor_line("D"), Some(2));
        assert_eq!(l.anchor_line("Q"), None);
        assert_eq!(Anchor::new("C").id(), "letter-C");
    }

    #[test]
    fn section_column_is_configurable() {
        let t = Table { header: Vec::new(), rows: vec![row("Zed", "Amy")] };
        let l = build(t, TextColumn::Donor);
        assert_eq!(letters(&l), vec!["Z"]);
    }
}
