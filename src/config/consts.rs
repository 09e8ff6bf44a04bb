// src/config/consts.rs

// Raw log (written by the collector, read by the dashboard)
pub const DEFAULT_LOG_FILE: &str = "votes_data.csv";
pub const LOG_HEADER: [&str; 3] = ["title", "votes", "timestamp"];
pub const LOG_SEP: char = ',';
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

// Local state
pub const DEBUG_LOG_FILE: &str = ".store/debug.log";
pub const SETTINGS_FILE: &str = "votewatch.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Filter input (date pickers / CLI flags)
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y";
