// src/core/doc.rs
//
// The handful of document queries the extractors need, on top of `scraper`.
// A selector that fails to parse matches nothing; a missing element reads as "".

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Doc: bad selector {css:?}: {e:?}");
            None
        }
    }
}

/// Read-only queries over one fragment of a parsed page.
pub trait Query<'a> {
    /// Every descendant fragment matching `css`, in document order.
    fn select_all(&self, css: &str) -> Vec<ElementRef<'a>>;

    /// First descendant matching `css`.
    fn select_first(&self, css: &str) -> Option<ElementRef<'a>> {
        self.select_all(css).into_iter().next()
    }

    /// Text of all matches joined, whitespace-collapsed and trimmed.
    fn text_of(&self, css: &str) -> String {
        let joined: String = self.select_all(css).iter().map(|el| el.own_text()).collect();
        normalize_ws(&joined)
    }

    /// Text of the first match only.
    fn first_text(&self, css: &str) -> String {
        self.select_first(css).map(|el| el.own_text()).map(|t| normalize_ws(&t)).unwrap_or_default()
    }

    fn has_class(&self, class: &str) -> bool;

    fn attr_or(&self, name: &str, default: &'a str) -> &'a str;
}

/// Full text content of a fragment (all descendant text nodes).
pub trait OwnText {
    fn own_text(&self) -> String;
}

impl OwnText for ElementRef<'_> {
    fn own_text(&self) -> String {
        self.text().collect()
    }
}

impl<'a> Query<'a> for ElementRef<'a> {
    fn select_all(&self, css: &str) -> Vec<ElementRef<'a>> {
        match selector(css) {
            Some(sel) => self.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn attr_or(&self, name: &str, default: &'a str) -> &'a str {
        self.value().attr(name).unwrap_or(default)
    }
}

/// Parse a whole page.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
