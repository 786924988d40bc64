// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    data::DataSet,
    progress,
};

pub mod character;
pub mod roster;

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Column headers shown before anything has been fetched.
    fn default_headers(&self) -> &'static [&'static str];

    /// Draw page-specific controls next to the profile field.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) {}

    /// Whether `fetch` has what it needs beyond the profile id.
    fn ready(&self, _state: &AppState) -> bool { true }

    /// Fetch and extract this page for the current profile.
    fn fetch(
        &self,
        state: &AppState,
        progress: Option<&mut dyn progress::Progress>,
    ) -> Result<DataSet, Box<dyn std::error::Error>>;
}
