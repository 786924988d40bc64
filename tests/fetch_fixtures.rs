// tests/fetch_fixtures.rs
//
// Client driven end to end from saved pages; no network.

use std::cell::RefCell;
use std::collections::HashMap;

use scraper::Html;
use swgoh_scrape::core::net::Fetch;
use swgoh_scrape::progress::Progress;
use swgoh_scrape::{Client, FetchError, RosterEntry, Skill};

const PROFILE: &str = "123456789";

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

/// Serves saved pages by URL and remembers what was asked for.
struct FixtureFetcher {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            format!("https://swgoh.gg/u/{PROFILE}/collection/"),
            fixture("collection.html"),
        );
        pages.insert(
            format!("https://swgoh.gg/u/{PROFILE}/collection/general-kenobi/"),
            fixture("character.html"),
        );
        Self { pages, requested: RefCell::new(Vec::new()) }
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(body) => Ok(Html::parse_document(body)),
            None => Err(FetchError::Status { status: 404, url: url.to_string() }),
        }
    }
}

fn entry(name: &str, stars: u32, level: i64, gear: u32) -> RosterEntry {
    RosterEntry { name: name.to_string(), stars, level, gear }
}

#[test]
fn roster_from_collection_page() {
    let fetcher = FixtureFetcher::new();
    let client = Client::with_fetcher(PROFILE, &fetcher);
    let roster = client.fetch_roster().unwrap();

    assert_eq!(
        roster.as_slice(),
        &[
            entry("General Kenobi", 7, 85, 12),
            entry("Chirrut Îmwe", 7, 85, 11),
            entry("Jawa", 4, 70, 8),
            entry("Rey", 0, 0, 0),
        ]
    );
    assert!(roster.contains_all(&["Jawa", "Rey"]));
    assert_eq!(
        fetcher.requested.borrow().as_slice(),
        &[format!("https://swgoh.gg/u/{PROFILE}/collection/")]
    );
}

#[test]
fn character_stats_from_detail_page() {
    let fetcher = FixtureFetcher::new();
    let client = Client::with_fetcher(PROFILE, &fetcher);
    let stats = client.fetch_character_stats("gk").unwrap();

    assert_eq!(stats.name, "General Kenobi");
    assert_eq!(stats.level, 85);
    assert_eq!(stats.stars, 7);
    assert_eq!(stats.galactic_power, 24158);
    assert_eq!(
        stats.skills,
        vec![
            Skill { name: "Saber Flurry".into(), level: 8 },
            Skill { name: "Stir Up".into(), level: 7 },
            Skill { name: "Soresu".into(), level: -1 },
            Skill { name: "Elegant Steps".into(), level: -1 },
        ]
    );
    assert_eq!((stats.strength, stats.agility, stats.intelligence), (2015, 1468, 1386));
    assert_eq!(stats.strength_growth, 45.0);
    assert_eq!(stats.agility_growth, 21.6);
    assert_eq!(stats.intelligence_growth, 20.4);
    assert_eq!((stats.health, stats.protection, stats.speed), (65117, 88262, 186));
    assert_eq!(stats.critical_damage, 150);
    assert_eq!(stats.potency, 47.41);
    assert_eq!(stats.tenacity, 85.0);
    assert_eq!(stats.health_steal, 5);
}

#[test]
fn extraction_is_repeatable() {
    let fetcher = FixtureFetcher::new();
    let client = Client::with_fetcher(PROFILE, &fetcher);
    assert_eq!(client.fetch_roster().unwrap(), client.fetch_roster().unwrap());
    assert_eq!(
        client.fetch_character_stats("General Kenobi").unwrap(),
        client.fetch_character_stats("gk").unwrap()
    );
}

#[test]
fn fetch_errors_pass_through() {
    let fetcher = FixtureFetcher::new();
    let client = Client::with_fetcher("someone-else", &fetcher);
    let err = client.fetch_roster().unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("someone-else"));

    let client = Client::with_fetcher(PROFILE, &fetcher);
    let err = client.fetch_character_stats("Darth Vader").unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().ends_with("/collection/darth-vader/"));
}

#[derive(Default)]
struct Recorder(Vec<String>);

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.0.push(format!("begin {total}")); }
    fn item_done(&mut self, name: &str) { self.0.push(format!("done {name}")); }
    fn item_failed(&mut self, name: &str) { self.0.push(format!("failed {name}")); }
    fn finish(&mut self) { self.0.push("finish".into()); }
}

#[test]
fn many_stats_stops_at_first_failure() {
    let fetcher = FixtureFetcher::new();
    let client = Client::with_fetcher(PROFILE, &fetcher);

    let mut rec = Recorder::default();
    let all = client.fetch_many_stats(&["gk", "General Kenobi"], Some(&mut rec)).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(rec.0, vec!["begin 2", "done gk", "done General Kenobi", "finish"]);

    let mut rec = Recorder::default();
    let err = client.fetch_many_stats(&["gk", "Darth Vader", "gk"], Some(&mut rec));
    assert!(err.is_err());
    assert_eq!(rec.0, vec!["begin 3", "done gk", "failed Darth Vader", "finish"]);
    assert_eq!(fetcher.requested.borrow().len(), 4);
}
