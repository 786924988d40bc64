// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::PageKind,
        state::AppState,
    },
    data::DataSet,
};

use super::{
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "SWGOH Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last fetched table per page; memory only
    pub data: HashMap<PageKind, DataSet>,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: pages={}", router::all_pages().len());
        Self {
            state,
            data: HashMap::new(),
            status: Arc::new(Mutex::new(s!("Enter a profile id and press Fetch"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    /// Data for the current tab, if it has been fetched.
    pub fn current_data(&self) -> Option<&DataSet> {
        self.data.get(&self.current_page_kind())
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("profile_bar").show(ctx, |ui| {
            crate::gui::components::profile_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
