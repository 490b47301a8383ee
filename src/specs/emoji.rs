// src/specs/emoji.rs
// *Emoji* page: the Unicode-blocks chart, marked by its © cell.

use crate::config::consts::EMOJI_URL;
use crate::engine::{CategorySpec, GlyphSource, Landmark, PageSpec, Placement, Strategy};

pub const CATEGORIES: &[CategorySpec] = &[CategorySpec {
    name: "Emojis",
    landmark: Landmark::SentinelCell("U+00A9: COPYRIGHT SIGN"),
    placement: Placement::EnclosingTable,
    strategy: Strategy::CellTitle { glyph: GlyphSource::Fallback },
    split: None,
}];

pub const PAGE: PageSpec = PageSpec { url: EMOJI_URL, categories: CATEGORIES };
