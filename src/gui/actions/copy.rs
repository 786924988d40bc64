// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(ds) = app.current_data().filter(|ds| !ds.is_empty()) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let txt = file::render(&app.state.options.export, ds);
    logf!("Copy: page={:?}, rows={}", app.current_page_kind(), ds.row_count());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
