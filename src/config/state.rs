// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Line index of the banner to bring to the top on the next frame.
    pub pending_scroll: Option<usize>,

    /// Source text field in the top bar (applied on reload).
    pub source_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            pending_scroll: None,
            source_text: s!(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState { source_text: options.source.clone(), ..GuiState::default() };
        Self { options, gui }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}
