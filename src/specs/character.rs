// src/specs/character.rs
//
// Character page: header (name/level/stars/GP), a skills list and a stats panel.
//   .pc-char-overview-name                        name
//   .char-portrait-full-level                     level
//   .player-char-portrait .star                   star row
//   .unit-gp-stat-amount-current                  galactic power (first one)
//   .pc-skills-list .pc-skill                     skills (first list only)
//     .pc-skill-name                              skill name
//     .pc-skill-levels[data-title]                "Level X of Y"
//   .media-body .pc-stat                          one labelled stat row
//     .pc-stat-label / .pc-stat-value

use scraper::{ElementRef, Html};

use crate::core::doc::{OwnText, Query};
use crate::core::normalize::{normalize_int, per_hundred, per_ten, skill_level};
use crate::model::{CharacterStats, Skill};

use super::collection::stars_in;

const NAME: &str = ".pc-char-overview-name";
const LEVEL: &str = ".char-portrait-full-level";
const PORTRAIT: &str = ".player-char-portrait";
const GALACTIC_POWER: &str = ".unit-gp-stat-amount-current";
const SKILLS_LIST: &str = ".pc-skills-list";
const SKILL: &str = ".pc-skill";
const SKILL_NAME: &str = ".pc-skill-name";
const SKILL_LEVELS: &str = ".pc-skill-levels";
const SKILL_LEVEL_ATTR: &str = "data-title";
const MISSING_SKILL_LEVEL: &str = "Level -1";
const STAT_ROW: &str = ".media-body .pc-stat";
const STAT_LABEL: &str = ".pc-stat-label";
const STAT_VALUE: &str = ".pc-stat-value";

type Setter = fn(&mut CharacterStats, i64);

/// Stat labels the site prints, and where each value goes.
/// Growth is shown with one implied decimal, Potency/Tenacity with two.
static ATTRIBUTES: &[(&str, Setter)] = &[
    ("Strength (STR)", |c, v| c.strength = v),
    ("Agility (AGI)", |c, v| c.agility = v),
    ("Intelligence (INT)", |c, v| c.intelligence = v),
    ("Strength Growth", |c, v| c.strength_growth = per_ten(v)),
    ("Agility Growth", |c, v| c.agility_growth = per_ten(v)),
    ("Intelligence Growth", |c, v| c.intelligence_growth = per_ten(v)),
    ("Health", |c, v| c.health = v),
    ("Protection", |c, v| c.protection = v),
    ("Speed", |c, v| c.speed = v),
    ("Critical Damage", |c, v| c.critical_damage = v),
    ("Potency", |c, v| c.potency = per_hundred(v)),
    ("Tenacity", |c, v| c.tenacity = per_hundred(v)),
    ("Health Steal", |c, v| c.health_steal = v),
];

/// Labels `apply_stat` understands.
pub fn recognized_labels() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES.iter().map(|(label, _)| *label)
}

/// Store one labelled value. Returns false (and changes nothing) for unknown labels.
pub fn apply_stat(stats: &mut CharacterStats, label: &str, value: &str) -> bool {
    match ATTRIBUTES.iter().find(|(known, _)| *known == label.trim()) {
        Some((_, set)) => {
            set(stats, normalize_int(value));
            true
        }
        None => false,
    }
}

pub fn parse_skill(el: ElementRef<'_>) -> Skill {
    let descriptor = el
        .select_first(SKILL_LEVELS)
        .map(|lv| lv.attr_or(SKILL_LEVEL_ATTR, MISSING_SKILL_LEVEL))
        .unwrap_or(MISSING_SKILL_LEVEL);
    Skill {
        name: el.first_text(SKILL_NAME),
        level: skill_level(descriptor),
    }
}

/// Whole stat sheet. Never fails; absent markup leaves fields at their defaults.
pub fn parse_character(doc: &Html) -> CharacterStats {
    let root = doc.root_element();

    let mut stats = CharacterStats {
        name: root.text_of(NAME),
        level: normalize_int(&root.text_of(LEVEL)),
        stars: root.select_all(PORTRAIT).iter().map(|p| stars_in(p)).sum(),
        galactic_power: normalize_int(&root.first_text(GALACTIC_POWER)),
        ..CharacterStats::default()
    };

    if let Some(list) = root.select_first(SKILLS_LIST) {
        stats.skills = list.select_all(SKILL).into_iter().map(parse_skill).collect();
    }

    for row in root.select_all(STAT_ROW) {
        // Trimmed only; inner whitespace must match the table exactly.
        let label = row.select_first(STAT_LABEL).map(|el| el.own_text()).unwrap_or_default();
        if !apply_stat(&mut stats, &label, &row.text_of(STAT_VALUE)) {
            logd!("Character: ignoring stat label {:?}", label.trim());
        }
    }

    stats
}
