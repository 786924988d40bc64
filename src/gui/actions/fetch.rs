// src/gui/actions/fetch.rs
use crate::gui::{app::App, progress::GuiProgress};

pub fn fetch(app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();

    if app.state.options.fetch.profile.trim().is_empty() {
        app.status("Enter a profile id first");
        return;
    }
    if !page.ready(&app.state) {
        app.status(format!("{}: nothing to fetch yet", page.label()));
        return;
    }

    logf!("Fetch: Begin page={:?} profile={}", kind, app.state.options.fetch.profile);

    let mut prog = GuiProgress::new(app.status.clone());

    // Blocking; the UI waits for the page(s).
    match page.fetch(&app.state, Some(&mut prog)) {
        Ok(ds) => {
            logf!(
                "Fetch: OK page={:?}, rows={} headers={}",
                kind,
                ds.row_count(),
                ds.header_count()
            );
            app.status(format!("{}: {} row(s)", page.label(), ds.row_count()));
            app.data.insert(kind, ds);
        }
        Err(e) => {
            loge!("Fetch: Error page={:?}: {}", kind, e);
            app.status(format!("Error: {e}"));
        }
    }
}
