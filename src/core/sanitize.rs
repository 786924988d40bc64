// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "Rey, Finn ,,BB-8" → ["Rey", "Finn", "BB-8"]
pub fn split_names(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from).collect()
}

/// Nicknames players use for characters, mapped to the site's display names.
static ALIASES: &[(&str, &str)] = &[
    ("gk", "General Kenobi"),
    ("cls", "Commander Luke Skywalker"),
    ("jkr", "Jedi Knight Revan"),
    ("dr", "Darth Revan"),
    ("gas", "General Skywalker"),
    ("qgj", "Qui-Gon Jinn"),
    ("rex", "CT-7567 \"Rex\""),
    ("hyoda", "Hermit Yoda"),
    ("gmy", "Grand Master Yoda"),
    ("ep", "Emperor Palpatine"),
];

pub fn aliases() -> &'static [(&'static str, &'static str)] {
    ALIASES
}

/// Resolve a nickname (case-insensitive) to a display name; anything else comes back trimmed.
pub fn char_name(input: &str) -> String {
    let t = input.trim();
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(t))
        .map(|&(_, name)| s!(name))
        .unwrap_or_else(|| s!(t))
}

fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        c => c,
    }
}

/// URL slug for a character page: "Chirrut Îmwe" → "chirrut-imwe".
/// Letters and digits kept, separators collapse to one '-', other punctuation dropped.
pub fn char_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars().flat_map(char::to_lowercase).map(fold_accent) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() { out.push('-'); }
            pending_dash = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }
    out
}
