// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod gui;
pub mod listing;
pub mod nav;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod sort;
pub mod source;
pub mod view;
