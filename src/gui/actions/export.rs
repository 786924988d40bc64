// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    let kind = app.current_page_kind();

    let status_msg = match app.current_data().filter(|ds| !ds.is_empty()) {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(ds) => match file::export_dataset(&app.state.options.export, kind, ds) {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },
    };

    app.status(status_msg);
}
