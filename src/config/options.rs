// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::listing::TextColumn;
use crate::render::PageOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// CSV location: local path or `http://` URL.
    pub source: String,
    /// Column whose first word drives both the sort and the section letters.
    pub key_column: TextColumn,
    /// BCP-47 tag for name collation.
    pub locale: String,
    pub output: OutputOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: s!(DEFAULT_SOURCE),
            key_column: TextColumn::InHonorMemoryOf,
            locale: s!(DEFAULT_LOCALE),
            output: OutputOptions::default(),
        }
    }
}

impl AppOptions {
    pub fn page(&self) -> PageOptions {
        PageOptions { title: self.output.title.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    out_path: OutputPath,
    /// Write only the `<tr>` rows instead of a whole document.
    pub fragment_only: bool,
    pub title: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            out_path: OutputPath::default(),
            fragment_only: false,
            title: s!(DEFAULT_TITLE),
        }
    }
}

impl OutputOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(&self.out_path.file_name)
    }

    /// Split user text into dir + file name. A trailing separator or an
    /// existing directory keeps the current file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() { return; }

        let p = Path::new(s);
        if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            self.out_path.dir = p.to_path_buf();
            return;
        }
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(name) = p.file_name() {
            self.out_path.file_name = name.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_name: OsString,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: OsString::from(DEFAULT_OUT_FILE),
        }
    }
}
