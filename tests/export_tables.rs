// tests/export_tables.rs
use std::fs;
use std::path::PathBuf;

use swgoh_scrape::config::options::{ExportFormat, ExportOptions, PageKind};
use swgoh_scrape::data::DataSet;
use swgoh_scrape::file::{export_dataset, render};
use swgoh_scrape::{CharacterStats, Roster, RosterEntry, Skill};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("swgoh_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn roster() -> Roster {
    Roster::aggregate(vec![
        RosterEntry { name: "Jawa".into(), stars: 4, level: 70, gear: 8 },
        RosterEntry { name: "CT-7567 \"Rex\"".into(), stars: 7, level: 85, gear: 12 },
    ])
}

#[test]
fn roster_csv_with_headers() {
    let export = ExportOptions { include_headers: true, ..ExportOptions::default() };
    let out = render(&export, &DataSet::from_roster(&roster()));
    assert_eq!(out, "Name,Stars,Gear,Level\n\"CT-7567 \"\"Rex\"\"\",7,12,85\nJawa,4,8,70\n");
}

#[test]
fn roster_text_filtered() {
    let export = ExportOptions { format: ExportFormat::Text, ..ExportOptions::default() };
    let out = render(&export, &DataSet::from_roster_filtered(&roster(), 5));
    assert_eq!(out, "CT-7567 \"Rex\"  7  12  85\n");
}

#[test]
fn stats_tsv_written_to_nested_dir() {
    let dir = tmp_dir("stats_tsv");
    let path = dir.join("deep").join("gk.tsv");
    let export = ExportOptions {
        format: ExportFormat::Tsv,
        include_headers: false,
        out_path: Some(path.clone()),
    };
    let stats = CharacterStats {
        name: "General Kenobi".into(),
        level: 85,
        stars: 7,
        tenacity: 85.0,
        skills: vec![Skill { name: "Soresu".into(), level: -1 }],
        ..CharacterStats::default()
    };

    let written = export_dataset(&export, PageKind::Character, &DataSet::from_stats(&[stats])).unwrap();
    assert_eq!(written, path);

    let content = fs::read_to_string(&written).unwrap();
    let cells: Vec<&str> = content.trim_end().split('\t').collect();
    assert_eq!(cells[0], "General Kenobi");
    assert_eq!(cells[15], "85.00");
    assert_eq!(cells.last(), Some(&"Soresu (-1)"));

    let _ = fs::remove_dir_all(&dir);
}
