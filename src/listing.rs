// src/listing.rs
//
// Grouped tribute rows.
//
// The raw CSV columns are positional:
//   0 = donor name(s), `;`-separated
//   1 = in honor / memory of
//   2 = tribute name(s), `;`-separated
//   3 = image URL(s), `;`-separated
//
// Display columns (0 and 2) are joined with ", "; the image column is split
// into a list. Both use the same delimiter and are never interchanged.

use std::fmt;
use std::str::FromStr;

const SUB_SEP: char = ';';
const DISPLAY_SEP: &str = ", ";

/// One grouped data row. Field order is fixed and mirrors the CSV layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub donor_name: String,
    pub in_honor_memory_of: String,
    pub tribute_name: String,
    /// Raw (untrimmed) URLs. Empty strings are kept; renderers skip them.
    pub image_urls: Vec<String>,
}

impl Row {
    /// Text of one of the three display columns.
    pub fn text(&self, col: TextColumn) -> &str {
        match col {
            TextColumn::Donor => &self.donor_name,
            TextColumn::InHonorMemoryOf => &self.in_honor_memory_of,
            TextColumn::Tribute => &self.tribute_name,
        }
    }

    /// The three display cells in column order.
    pub fn text_cells(&self) -> [&str; 3] {
        [&self.donor_name, &self.in_honor_memory_of, &self.tribute_name]
    }
}

/// Header row (raw, ungrouped) plus grouped data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Columns that hold text and can therefore key the sort and the sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextColumn {
    Donor,
    #[default]
    InHonorMemoryOf,
    Tribute,
}

impl TextColumn {
    pub fn index(self) -> usize {
        match self {
            TextColumn::Donor => 0,
            TextColumn::InHonorMemoryOf => 1,
            TextColumn::Tribute => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextColumn::Donor => "donor",
            TextColumn::InHonorMemoryOf => "honoree",
            TextColumn::Tribute => "tribute",
        }
    }
}

impl fmt::Display for TextColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "donor" => Ok(TextColumn::Donor),
            "1" | "honoree" | "memory" | "honor" => Ok(TextColumn::InHonorMemoryOf),
            "2" | "tribute" => Ok(TextColumn::Tribute),
            other => Err(format!("Unknown column: {other} (expected donor|honoree|tribute)")),
        }
    }
}

fn cell(row: &[String], ix: usize) -> Option<&str> {
    row.get(ix).map(String::as_str).filter(|c| !c.is_empty())
}

fn join_sub_values(field: Option<&str>) -> String {
    match field {
        Some(f) => f.split(SUB_SEP).collect::<Vec<_>>().join(DISPLAY_SEP),
        None => s!(),
    }
}

fn split_sub_values(field: Option<&str>) -> Vec<String> {
    match field {
        Some(f) => f.split(SUB_SEP).map(String::from).collect(),
        None => Vec::new(),
    }
}

/// Group one parsed data row. Cells past index 3 are dropped; missing cells
/// count as absent.
pub fn group_row(row: &[String]) -> Row {
    Row {
        donor_name: join_sub_values(cell(row, 0)),
        in_honor_memory_of: cell(row, 1).map(String::from).unwrap_or_default(),
        tribute_name: join_sub_values(cell(row, 2)),
        image_urls: split_sub_values(cell(row, 3)),
    }
}

/// First row becomes the header untouched; every other row is grouped.
pub fn group_entries(rows: Vec<Vec<String>>) -> Table {
    let mut it = rows.into_iter();
    let header = it.next().unwrap_or_default();
    let rows = it.map(|r| group_row(&r)).collect();
    Table { header, rows }
}
