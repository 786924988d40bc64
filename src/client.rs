// src/client.rs
//
// Profile-scoped entry points: build the page URL, fetch, extract.

use crate::config::consts::BASE_URL;
use crate::core::net::{Fetch, HttpFetcher};
use crate::core::sanitize::{char_name, char_slug};
use crate::error::FetchError;
use crate::model::CharacterStats;
use crate::progress::Progress;
use crate::roster::Roster;
use crate::specs::{character, collection};

pub fn collection_url(profile: &str) -> String {
    format!("{BASE_URL}/u/{}/collection/", profile.trim())
}

/// `character` may be a display name or a known nickname.
pub fn character_url(profile: &str, character: &str) -> String {
    format!("{}{}/", collection_url(profile), char_slug(&char_name(character)))
}

/// A player profile on swgoh.gg, plus the means to fetch its pages.
pub struct Client<F: Fetch = HttpFetcher> {
    profile: String,
    fetcher: F,
}

impl Client<HttpFetcher> {
    pub fn new(profile: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(profile, HttpFetcher::new()?))
    }
}

impl<F: Fetch> Client<F> {
    pub fn with_fetcher(profile: impl Into<String>, fetcher: F) -> Self {
        Self { profile: profile.into(), fetcher }
    }

    /// Roster from the collection page.
    pub fn fetch_roster(&self) -> Result<Roster, FetchError> {
        let url = collection_url(&self.profile);
        let doc = self.fetcher.fetch(&url).inspect_err(|e| loge!("Roster: {url}: {e}"))?;
        let roster = collection::parse_roster(&doc);
        logf!("Roster: profile={} characters={}", self.profile, roster.len());
        Ok(roster)
    }

    /// Stat sheet for one character.
    pub fn fetch_character_stats(&self, character: &str) -> Result<CharacterStats, FetchError> {
        let url = character_url(&self.profile, character);
        let doc = self.fetcher.fetch(&url).inspect_err(|e| loge!("Character: {url}: {e}"))?;
        let stats = character::parse_character(&doc);
        logf!(
            "Character: profile={} name={:?} skills={}",
            self.profile, stats.name, stats.skills.len()
        );
        Ok(stats)
    }

    /// Stat sheets for several characters, one after the other.
    /// Stops at the first failed fetch.
    pub fn fetch_many_stats<S: AsRef<str>>(
        &self,
        characters: &[S],
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<CharacterStats>, FetchError> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(characters.len());
        }
        let mut out = Vec::with_capacity(characters.len());
        for name in characters {
            let name = name.as_ref();
            match self.fetch_character_stats(name) {
                Ok(stats) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(name);
                    }
                    out.push(stats);
                }
                Err(e) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(name);
                        p.finish();
                    }
                    return Err(e);
                }
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(out)
    }
}

/// Fetch `profile`'s roster over HTTP.
pub fn fetch_roster(profile: &str) -> Result<Roster, FetchError> {
    Client::new(profile)?.fetch_roster()
}

/// Fetch one character's stat sheet for `profile` over HTTP.
pub fn fetch_character_stats(profile: &str, character: &str) -> Result<CharacterStats, FetchError> {
    Client::new(profile)?.fetch_character_stats(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        assert_eq!(collection_url("abc123"), "https://swgoh.gg/u/abc123/collection/");
        assert_eq!(collection_url(" abc123 "), "https://swgoh.gg/u/abc123/collection/");
        assert_eq!(
            character_url("abc123", "Chirrut Îmwe"),
            "https://swgoh.gg/u/abc123/collection/chirrut-imwe/"
        );
        assert_eq!(
            character_url("abc123", "gk"),
            "https://swgoh.gg/u/abc123/collection/general-kenobi/"
        );
    }
}
