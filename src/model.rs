// src/model.rs
//
// Records produced by the extractors. Zero/empty means "not on the page" as much
// as it means zero; the site gives no way to tell them apart.

use std::fmt;

/// One character as listed on a player's collection page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub stars: u32,
    pub level: i64,
    pub gear: u32,
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}* G{} Lvl{}", self.name, self.stars, self.gear, self.level)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// -1 when the level descriptor was missing or unreadable.
    pub level: i64,
}

/// Full stat sheet from a character's detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterStats {
    pub name: String,
    pub level: i64,
    pub stars: u32,

    /// Current galactic power
    pub galactic_power: i64,

    pub skills: Vec<Skill>,

    // Primary attributes
    pub strength: i64,
    pub agility: i64,
    pub intelligence: i64,
    pub strength_growth: f64,
    pub agility_growth: f64,
    pub intelligence_growth: f64,

    // General
    pub health: i64,
    pub protection: i64,
    pub speed: i64,
    pub critical_damage: i64,
    pub potency: f64,
    pub tenacity: f64,
    pub health_steal: i64,
}

impl fmt::Display for CharacterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}* Lvl{} GP {}", self.name, self.stars, self.level, self.galactic_power)?;
        writeln!(
            f,
            "  STR {} ({:.1}) AGI {} ({:.1}) INT {} ({:.1})",
            self.strength, self.strength_growth,
            self.agility, self.agility_growth,
            self.intelligence, self.intelligence_growth,
        )?;
        writeln!(
            f,
            "  Health {} Protection {} Speed {} Crit Dmg {}% Potency {:.2}% Tenacity {:.2}% Health Steal {}%",
            self.health, self.protection, self.speed, self.critical_damage,
            self.potency, self.tenacity, self.health_steal,
        )?;
        for skill in &self.skills {
            writeln!(f, "  - {} (level {})", skill.name, skill.level)?;
        }
        Ok(())
    }
}
