// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://swgoh.gg";
pub const USER_AGENT: &str = concat!("swgoh_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Logging
pub const LOG_ENV: &str = "SWGOH_SCRAPE_LOG";
pub const DEFAULT_LOG_FILE: &str = "logs/swgoh_scrape.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_ROSTER_FILE: &str = "roster";
pub const DEFAULT_STATS_FILE: &str = "stats";

// GUI
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
