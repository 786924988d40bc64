// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Roster,
    Character,
}

impl PageKind {
    pub fn default_file_stem(&self) -> &'static str {
        match self {
            PageKind::Roster => DEFAULT_ROSTER_FILE,
            PageKind::Character => DEFAULT_STATS_FILE,
        }
    }
}

/// What to fetch: one profile, and for the Character page the characters to look up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub profile: String,
    pub characters: Vec<String>,
    /// Roster output filter; entries below this star count are not shown.
    pub min_stars: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Text,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "text" | "txt" => Some(ExportFormat::Text),
            _ => None,
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Text => "txt",
        }
    }

    /// Field separator; `None` for the human-readable text format.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Text => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Explicit output file. `None` means stdout for the CLI and the
    /// page's default file under `out/` for the GUI.
    pub out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: false,
            out_path: None,
        }
    }
}

impl ExportOptions {
    pub fn out_path_for(&self, page: PageKind) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(format!("{}.{}", page.default_file_stem(), self.format.ext())),
        }
    }
}
