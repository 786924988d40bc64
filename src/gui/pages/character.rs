// src/gui/pages/character.rs
use eframe::egui;

use crate::{
    client::Client,
    core::sanitize::split_names,
    config::{options::PageKind, state::AppState},
    data::{DataSet, STATS_HEADERS},
    progress::Progress,
};

use super::Page;

pub struct CharacterPage;
pub static PAGE: CharacterPage = CharacterPage;

impl Page for CharacterPage {
    fn label(&self) -> &'static str { "Character" }
    fn kind(&self) -> PageKind { PageKind::Character }

    fn default_headers(&self) -> &'static [&'static str] { STATS_HEADERS }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Characters:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut state.gui.character_text)
                .hint_text("Name or nickname, comma separated")
                .desired_width(260.0),
        );
        if resp.changed() {
            state.options.fetch.characters = split_names(&state.gui.character_text);
        }
    }

    fn ready(&self, state: &AppState) -> bool {
        !state.options.fetch.characters.is_empty()
    }

    fn fetch(
        &self,
        state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn std::error::Error>> {
        let client = Client::new(state.options.fetch.profile.as_str())?;
        let stats = client.fetch_many_stats(&state.options.fetch.characters, progress)?;
        Ok(DataSet::from_stats(&stats))
    }
}
