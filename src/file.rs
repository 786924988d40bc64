// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, PageKind};
use crate::csv::to_export_string;
use crate::data::DataSet;

/// Render a table in the export format: CSV/TSV, or space-aligned text columns.
pub fn render(export: &ExportOptions, ds: &DataSet) -> String {
    match export.format.delimiter() {
        Some(sep) => to_export_string(&ds.headers, &ds.rows, export.include_headers, sep),
        None => render_text(&ds.headers, &ds.rows, export.include_headers),
    }
}

/// Columns padded to their widest cell, two spaces apart. Last column unpadded.
pub fn render_text(headers: &Option<Vec<String>>, rows: &[Vec<String>], include_headers: bool) -> String {
    let head = headers.as_ref().filter(|_| include_headers);
    let all: Vec<&Vec<String>> = head.into_iter().chain(rows.iter()).collect();

    let cols = all.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for r in &all {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for r in all {
        let mut line = String::new();
        for (i, cell) in r.iter().enumerate() {
            if i + 1 < r.len() {
                line.push_str(&format!("{:<w$}  ", cell, w = widths[i]));
            } else {
                line.push_str(cell);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Write `ds` to the export path for `page`. Returns the path written.
pub fn export_dataset(
    export: &ExportOptions,
    page: PageKind,
    ds: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path_for(page);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, render(export, ds))?;
    logf!("Export: {:?} rows={} → {}", page, ds.row_count(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
