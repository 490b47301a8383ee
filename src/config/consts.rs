// src/config/consts.rs

// Net config
pub const SYMBOLS_URL: &str = "https://en.wikipedia.org/wiki/List_of_Unicode_characters";
pub const EMOJI_URL: &str = "https://en.wikipedia.org/wiki/Emoji";
pub const USER_AGENT: &str = concat!(
    "unicode_scrape/",
    env!("CARGO_PKG_VERSION"),
    " (symbol catalog build)"
);

// Extraction
/// Title value marking an unassigned code point.
pub const RESERVED: &str = "Reserved";
/// `td > span > span > span > span`: glyphs wrapped for font-fallback styling.
pub const NESTED_SPAN_DEPTH: usize = 4;
