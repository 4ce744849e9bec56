// src/config/consts.rs

// Placeholder for unknown data, both on the wire and on screen
pub const NA: &str = "N/A";

// Local store
pub const STORE_DIR: &str = ".store";
pub const SAVED_KEY: &str = "savedCollegeSearches";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_SUFFIX: &str = "_data.csv";

// Generative source
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const API_KEY_ENVS: [&str; 2] = ["COLLEGE_SCOUT_API_KEY", "API_KEY"];
pub const REQUEST_TIMEOUT_SECS: u64 = 90;

// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "college_scout.toml";

// Comparison
pub const MAX_COMPARE: usize = 2;
pub const TOP_RECRUITERS_SHOWN: usize = 3;

// User-facing messages
pub const MSG_EMPTY_NAME: &str = "Please enter a college name.";
pub const MSG_FETCH_FAILED: &str =
    "Failed to fetch college information. The AI might be busy, or the college name is invalid. Please try again.";
