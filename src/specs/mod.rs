// src/specs/mod.rs
//! # Page specs
//!
//! One module per swgoh.gg page. Each spec knows *where the data lives in the
//! markup* and how to turn it into records; nothing here fetches or caches.
//!
//! ## Conventions
//! - Input is an already-parsed page (`scraper::Html`), queried through
//!   [`core::doc::Query`](crate::core::doc::Query).
//! - Extraction never fails. A missing name is `""`, a missing number is `0`,
//!   an unreadable skill level is `-1`. Upstream markup is not ours to control
//!   and a partly filled record beats no record.
//! - Pure functions of the document: same page in, same records out.
//!
//! ## Pages
//! - `collection` – `/u/<profile>/collection/`: the roster grid.
//! - `character` – `/u/<profile>/collection/<slug>/`: one character's stat sheet.
//!
//! ```text
//! Client::fetch_* → Fetch::fetch(url) → specs::<page>::parse_*(&Html)
//! ```
pub mod character;
pub mod collection;
