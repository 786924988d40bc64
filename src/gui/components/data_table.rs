// src/gui/components/data_table.rs
//
// Draws the current page's table. Falls back to the page's headers with no rows.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let page = app.current_page();
    let kind = page.kind();

    let headers: Vec<String> = app
        .current_data()
        .and_then(|ds| ds.headers.clone())
        .unwrap_or_else(|| page.default_headers().iter().map(|h| s!(*h)).collect());
    let rows: &[Vec<String>] = app.current_data().map(|ds| ds.rows.as_slice()).unwrap_or(&[]);
    let cols = headers.len();
    if cols == 0 {
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt(("table_hscroll", kind))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(("table_state", kind))
                .striped(true)
                .resizable(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .min_scrolled_height(0.0);
            for ci in 0..cols {
                // Name column wide, the rest compact; Skills (last on Character) gets the rest
                let col = if ci == 0 {
                    Column::initial(200.0).at_least(80.0).clip(true)
                } else if ci + 1 == cols && cols > 4 {
                    Column::remainder().at_least(120.0).clip(true)
                } else {
                    Column::initial(70.0).at_least(30.0).clip(true)
                };
                table = table.column(col);
            }

            table
                .header(24.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(data) = rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.label(data.get(ci).map(String::as_str).unwrap_or(""));
                            });
                        }
                    });
                });
        });
}
