// src/specs/collection.rs
//
// Collection page: a grid of character portraits.
//   .collection-char-list .collection-char     one per character
//     .collection-char-name-link                name
//     .char-portrait-full-level                 level
//     .char-portrait-full-gear-level            gear, roman numeral
//     .star / .star.star-inactive               star row

use scraper::{ElementRef, Html};

use crate::core::decode::{StarIcon, gear_tier, star_rating};
use crate::core::doc::Query;
use crate::core::normalize::normalize_int;
use crate::model::RosterEntry;
use crate::roster::Roster;

pub const CHAR_CARD: &str = ".collection-char-list .collection-char";
const NAME: &str = ".collection-char-name-link";
const LEVEL: &str = ".char-portrait-full-level";
const GEAR: &str = ".char-portrait-full-gear-level";
const STAR: &str = ".star";
const STAR_INACTIVE: &str = "star-inactive";

/// Star rating of whatever fragment holds a star row.
pub fn stars_in<'a>(fragment: &impl Query<'a>) -> u32 {
    star_rating(
        fragment
            .select_all(STAR)
            .iter()
            .map(|star| StarIcon::from_inactive_flag(star.has_class(STAR_INACTIVE))),
    )
}

/// One portrait card → one entry. Missing parts read as zero/empty.
pub fn parse_entry(card: ElementRef<'_>) -> RosterEntry {
    RosterEntry {
        name: card.text_of(NAME),
        stars: stars_in(&card),
        level: normalize_int(&card.text_of(LEVEL)),
        gear: gear_tier(&card.text_of(GEAR)),
    }
}

/// Every card on the page, in page order, duplicates included.
pub fn parse_entries(doc: &Html) -> Vec<RosterEntry> {
    doc.root_element().select_all(CHAR_CARD).into_iter().map(parse_entry).collect()
}

/// The page's roster: deduplicated by name, most stars first.
pub fn parse_roster(doc: &Html) -> Roster {
    Roster::aggregate(parse_entries(doc))
}
