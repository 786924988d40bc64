// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::roster::PAGE,
    &pages::character::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Page at a tab index; out-of-range falls back to the first tab.
pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(&pages::roster::PAGE)
}
