// src/roster.rs
//
// A player's roster: one entry per character name, most stars first.

use std::collections::HashSet;

use crate::model::RosterEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster from entries in page order.
    ///
    /// The first entry seen for a name wins; later listings of the same character
    /// (the site repeats some under alternate unlock states) are dropped.
    /// The result is stable-sorted by descending stars, so equal-star entries keep
    /// their page order.
    pub fn aggregate<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept: Vec<RosterEntry> = Vec::new();
        for entry in entries {
            if seen.insert(entry.name.clone()) {
                kept.push(entry);
            }
        }
        kept.sort_by(|a, b| b.stars.cmp(&a.stars));
        Self { entries: kept }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn contains_all<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.missing(names).is_empty()
    }

    /// Names from `names` that aren't on the roster, in the order asked.
    pub fn missing<'n, S: AsRef<str>>(&self, names: &'n [S]) -> Vec<&'n str> {
        names.iter().map(|n| n.as_ref()).filter(|n: &&str| !self.contains(n)).collect()
    }

    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries with at least `stars` stars, roster order kept.
    pub fn at_least(&self, stars: u32) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().filter(move |e| e.stars >= stars)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn as_slice(&self) -> &[RosterEntry] { &self.entries }
}

impl IntoIterator for Roster {
    type Item = RosterEntry;
    type IntoIter = std::vec::IntoIter<RosterEntry>;
    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

impl<'r> IntoIterator for &'r Roster {
    type Item = &'r RosterEntry;
    type IntoIter = std::slice::Iter<'r, RosterEntry>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<I: IntoIterator<Item = RosterEntry>>(iter: I) -> Self {
        Roster::aggregate(iter)
    }
}
