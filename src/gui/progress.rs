// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::{Progress, Stage};

/// Mirrors pipeline stages into the status line shown by the top bar.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    stages: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, stages: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: Stage, detail: &str) {
        self.stages += 1;
        self.set_status(format!("Loading: {} done ({})", stage.label(), detail));
    }
    fn finish(&mut self, ok: bool) {
        if ok {
            self.set_status(format!("Ready ({} stages)", self.stages));
        }
    }
}
