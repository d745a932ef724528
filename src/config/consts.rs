// src/config/consts.rs

// Input
pub const DEFAULT_SOURCE: &str = "Tribute.csv";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const CONFIG_FILE: &str = "tribute.cfg";

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_OUT_FILE: &str = "tribute.html";
pub const DEFAULT_TITLE: &str = "Tribute Wall";

// Page markup ids
pub const TABLE_ID: &str = "tribute-table";
pub const NAV_ID: &str = "alphabet-nav";
pub const ANCHOR_PREFIX: &str = "letter-";

// Listing
pub const IMAGE_HEADER: &str = "Image URL";
pub const NO_LETTER: &str = "#";
pub const COLUMNS: usize = 4;

// Banner look (HTML + GUI share the palette)
pub const BANNER_BG: (u8, u8, u8) = (0x00, 0x33, 0x66);
pub const BANNER_FG: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);
pub const IMAGE_MAX_WIDTH: f32 = 100.0;
pub const IMAGE_MARGIN: f32 = 5.0;

// Collation
pub const DEFAULT_LOCALE: &str = "en";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "tribute_wall/0.2";
