// src/config/state.rs
use crate::filter::FilterSelection;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active facet selection, the single source of truth the share
    /// field and the chip rows both reflect.
    pub selection: FilterSelection,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selection: FilterSelection::default(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
