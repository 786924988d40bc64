// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod progress;
pub mod roster;
pub mod specs;

pub use client::{Client, fetch_character_stats, fetch_roster};
pub use error::FetchError;
pub use model::{CharacterStats, RosterEntry, Skill};
pub use roster::Roster;
