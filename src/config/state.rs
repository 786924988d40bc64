// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Character name as typed (may be a nickname)
    pub character_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            character_text: s!(),
        }
    }
}
