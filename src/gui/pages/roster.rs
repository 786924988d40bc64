// src/gui/pages/roster.rs
use eframe::egui;

use crate::{
    client::Client,
    config::{options::PageKind, state::AppState},
    data::{DataSet, ROSTER_HEADERS},
    progress::Progress,
};

use super::Page;

pub struct RosterPage;
pub static PAGE: RosterPage = RosterPage;

impl Page for RosterPage {
    fn label(&self) -> &'static str { "Roster" }
    fn kind(&self) -> PageKind { PageKind::Roster }

    fn default_headers(&self) -> &'static [&'static str] { ROSTER_HEADERS }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Min stars:");
        let before = state.options.fetch.min_stars;
        ui.add(egui::DragValue::new(&mut state.options.fetch.min_stars).range(0..=7));
        if state.options.fetch.min_stars != before {
            logf!("UI: min_stars → {}", state.options.fetch.min_stars);
        }
    }

    fn fetch(
        &self,
        state: &AppState,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn std::error::Error>> {
        let profile = &state.options.fetch.profile;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching roster for {profile}…"));
        }
        let roster = Client::new(profile.as_str())?.fetch_roster()?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Roster: {} characters", roster.len()));
        }
        Ok(DataSet::from_roster_filtered(&roster, state.options.fetch.min_stars))
    }
}
