// src/gui/components/profile_bar.rs
//
// Top bar: profile id, page controls, fetch/copy/export and export format.

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    ui.horizontal(|ui| {
        ui.label("Profile:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.fetch.profile)
                .hint_text("swgoh.gg profile id")
                .desired_width(140.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.separator();
        page.draw_controls(ui, &mut app.state);
        ui.separator();

        if ui.button("Fetch").clicked() || enter {
            actions::fetch(app);
        }
        let has_data = app.current_data().is_some_and(|ds| !ds.is_empty());
        if ui.add_enabled(has_data, egui::Button::new("Copy")).clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let before = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Text, "Text");
        if export.format != before {
            logf!("UI: Export format → {:?}", export.format);
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        let target = export.out_path_for(page.kind());
        ui.weak(format!("→ {}", target.display()));
    });
}
