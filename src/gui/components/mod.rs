// src/gui/components/mod.rs
pub mod listing_table;
pub mod nav_bar;
pub mod top_bar;
