// src/sort.rs
//
// Alphabetical ordering of data rows by the first word of one text column.
// Comparison goes through a locale collator so accented names sit next to
// their base letters instead of after `z`.

use std::cmp::Ordering;
use std::error::Error;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::core::text::first_word;
use crate::listing::{Table, TextColumn};

/// Locale-aware string comparison.
pub struct Collation {
    locale: String,
    collator: Collator,
}

impl Collation {
    /// Build a collator for a BCP-47 tag such as `en`, `sv` or `de-u-co-phonebk`.
    pub fn new(locale: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let tag = locale.trim();
        let parsed: Locale = tag
            .parse()
            .map_err(|e| format!("Invalid locale '{tag}': {e:?}"))?;
        let collator = Collator::try_new(&parsed.into(), CollatorOptions::new())
            .map_err(|e| format!("No collation data for '{tag}': {e:?}"))?;
        Ok(Self { locale: s!(tag), collator })
    }

    pub fn locale(&self) -> &str { &self.locale }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collation").field("locale", &self.locale).finish()
    }
}

/// Sort key of a row: the first word of the chosen column.
pub fn sort_key(row: &crate::listing::Row, column: TextColumn) -> &str {
    first_word(row.text(column))
}

/// Header stays put; data rows are ordered by `sort_key` under `collation`.
/// Equal keys keep their input order.
pub fn sort_by_first_name(mut table: Table, column: TextColumn, collation: &Collation) -> Table {
    table.rows.sort_by(|a, b| collation.compare(sort_key(a, column), sort_key(b, column)));
    table
}
