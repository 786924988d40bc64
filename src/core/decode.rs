// src/core/decode.rs
//
// Fixed vocabularies shown as symbols on the site.

/// Gear tiers as printed on character portraits.
static GEAR_TIERS: [(&str, u32); 12] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
    ("XI", 11),
    ("XII", 12),
];

/// Roman numeral label → gear tier. Exact, case-sensitive match; anything else is 0.
pub fn gear_tier(label: &str) -> u32 {
    GEAR_TIERS
        .iter()
        .find(|(numeral, _)| *numeral == label)
        .map(|&(_, tier)| tier)
        .unwrap_or(0)
}

/// One star icon in a portrait's star row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarIcon {
    Active,
    Inactive,
}

impl StarIcon {
    /// Icons are active unless explicitly marked inactive.
    pub fn from_inactive_flag(inactive: bool) -> Self {
        if inactive { StarIcon::Inactive } else { StarIcon::Active }
    }
}

/// Star rating = number of active icons. Order doesn't matter.
pub fn star_rating<I>(icons: I) -> u32
where
    I: IntoIterator<Item = StarIcon>,
{
    icons.into_iter().filter(|icon| *icon == StarIcon::Active).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use StarIcon::*;

    #[test]
    fn gear_tier_vocabulary() {
        assert_eq!(gear_tier("XII"), 12);
        assert_eq!(gear_tier("I"), 1);
        assert_eq!(gear_tier("VIII"), 8);
        assert_eq!(gear_tier("IX"), 9);
        assert_eq!(gear_tier(""), 0);
        assert_eq!(gear_tier("xii"), 0);
        assert_eq!(gear_tier("XIII"), 0);
        assert_eq!(gear_tier(" XII"), 0);
    }

    #[test]
    fn every_numeral_maps_to_its_position() {
        for (i, (numeral, _)) in GEAR_TIERS.iter().enumerate() {
            assert_eq!(gear_tier(numeral), i as u32 + 1);
        }
    }

    #[test]
    fn stars_count_active_icons_in_any_order() {
        let row = [Active, Inactive, Active, Active, Inactive, Active, Inactive];
        assert_eq!(star_rating(row), 4);

        let mut sorted = row;
        sorted.sort_by_key(|i| *i == Inactive);
        assert_eq!(star_rating(sorted), 4);

        assert_eq!(star_rating([Inactive; 7]), 0);
        assert_eq!(star_rating(Vec::new()), 0);
    }

    #[test]
    fn unflagged_icon_is_active() {
        assert_eq!(StarIcon::from_inactive_flag(false), Active);
        assert_eq!(StarIcon::from_inactive_flag(true), Inactive);
    }
}
