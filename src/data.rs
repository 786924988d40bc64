// src/data.rs
//
// Records flattened into a headers + rows table for display, copy and export.

use crate::model::CharacterStats;
use crate::roster::Roster;

pub const ROSTER_HEADERS: &[&str] = &["Name", "Stars", "Gear", "Level"];

pub const STATS_HEADERS: &[&str] = &[
    "Name", "Level", "Stars", "GP",
    "STR", "AGI", "INT", "STR Growth", "AGI Growth", "INT Growth",
    "Health", "Protection", "Speed", "Crit Dmg", "Potency", "Tenacity", "Health Steal",
    "Skills",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn from_roster(roster: &Roster) -> Self {
        Self::from_roster_filtered(roster, 0)
    }

    /// Roster rows with at least `min_stars` stars.
    pub fn from_roster_filtered(roster: &Roster, min_stars: u32) -> Self {
        let rows = roster
            .at_least(min_stars)
            .map(|e| vec![e.name.clone(), e.stars.to_string(), e.gear.to_string(), e.level.to_string()])
            .collect();
        Self { headers: Some(headers(ROSTER_HEADERS)), rows }
    }

    pub fn from_stats(stats: &[CharacterStats]) -> Self {
        Self { headers: Some(headers(STATS_HEADERS)), rows: stats.iter().map(stats_row).collect() }
    }
}

fn headers(hs: &[&str]) -> Vec<String> {
    hs.iter().map(|h| s!(*h)).collect()
}

fn stats_row(c: &CharacterStats) -> Vec<String> {
    let skills = c
        .skills
        .iter()
        .map(|s| format!("{} ({})", s.name, s.level))
        .collect::<Vec<_>>()
        .join("; ");
    vec![
        c.name.clone(),
        c.level.to_string(),
        c.stars.to_string(),
        c.galactic_power.to_string(),
        c.strength.to_string(),
        c.agility.to_string(),
        c.intelligence.to_string(),
        format!("{:.1}", c.strength_growth),
        format!("{:.1}", c.agility_growth),
        format!("{:.1}", c.intelligence_growth),
        c.health.to_string(),
        c.protection.to_string(),
        c.speed.to_string(),
        c.critical_damage.to_string(),
        format!("{:.2}", c.potency),
        format!("{:.2}", c.tenacity),
        c.health_steal.to_string(),
        skills,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RosterEntry, Skill};

    #[test]
    fn roster_rows_follow_roster_order() {
        let roster = Roster::aggregate(vec![
            RosterEntry { name: s!("Jawa"), stars: 3, level: 50, gear: 4 },
            RosterEntry { name: s!("Rey"), stars: 7, level: 85, gear: 12 },
        ]);
        let ds = DataSet::from_roster(&roster);
        assert_eq!(ds.header_count(), 4);
        assert_eq!(ds.rows[0], vec!["Rey", "7", "12", "85"]);
        assert_eq!(ds.rows[1], vec!["Jawa", "3", "4", "50"]);
        assert_eq!(DataSet::from_roster_filtered(&roster, 5).row_count(), 1);
    }

    #[test]
    fn stats_row_shape() {
        let stats = CharacterStats {
            name: s!("Rey"),
            potency: 85.0,
            strength_growth: 4.5,
            skills: vec![
                Skill { name: s!("A"), level: 8 },
                Skill { name: s!("B"), level: -1 },
            ],
            ..CharacterStats::default()
        };
        let ds = DataSet::from_stats(&[stats]);
        let row = &ds.rows[0];
        assert_eq!(row.len(), STATS_HEADERS.len());
        assert_eq!(row[7], "4.5");
        assert_eq!(row[14], "85.00");
        assert_eq!(row[17], "A (8); B (-1)");
    }
}
