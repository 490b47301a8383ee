// src/specs/symbols.rs
//! *List of Unicode characters* page.
//!
//! Most blocks are rendered as a code chart: a caption row whose bold link is
//! titled with the block name, then one `td[title="U+XXXX: NAME"]` per code
//! point. The exceptions:
//! - the summary table of symbols carries an `id` and is read row by row;
//! - General Punctuation only counts cells that link their glyph;
//! - Superscripts and Subscripts is one chart split into two categories;
//! - Dingbats is a list table right after its heading;
//! - Chess Symbols has no block caption, so a known cell marks it.

use crate::config::consts::SYMBOLS_URL;
use crate::engine::{CategorySpec, GlyphSource, Landmark, PageSpec, Placement, Strategy};

const fn block(name: &'static str, title: &'static str) -> CategorySpec {
    CategorySpec::block(name, title)
}

pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Unicode Symbols",
        landmark: Landmark::ElementId("Table_Unicode_symbols"),
        placement: Placement::EnclosingTable,
        strategy: Strategy::RowColumn { name_col: 2, glyph_col: 1, skip_head: 1, skip_tail: 1 },
        split: None,
    },
    CategorySpec {
        name: "General Punctuation",
        landmark: Landmark::TitleAnchor("General Punctuation"),
        placement: Placement::EnclosingTable,
        strategy: Strategy::CellTitle { glyph: GlyphSource::AnchorOnly },
        split: None,
    },
    block("Subscript Symbols", "Superscripts and Subscripts").split("SUBSCRIPT", "SUPERSCRIPT"),
    block("Superscript Symbols", "Superscripts and Subscripts").split("SUPERSCRIPT", "SUBSCRIPT"),
    block("Currency Symbols", "Currency Symbols (Unicode block)"),
    block("Letterlike Symbols", "Letterlike Symbols"),
    block("Number Forms", "Number Forms"),
    block("Arrow Symbols", "Arrows (Unicode block)"),
    block("Math Symbols", "Mathematical Operators (Unicode block)"),
    block("Misc Technical Symbols", "Miscellaneous Technical"),
    block("Enclosed Alphanumeric Symbols", "Enclosed Alphanumerics"),
    block("Box Drawing Symbols", "Box Drawing"),
    block("Block Element Symbols", "Block Elements"),
    block("Geometric Shape Symbols", "Geometric Shapes"),
    block("Legacy Computing Symbols", "Symbols for Legacy Computing"),
    block("Misc Symbols", "Miscellaneous Symbols"),
    CategorySpec {
        name: "Dingbats",
        landmark: Landmark::TitleAnchor("Dingbats (Unicode block)"),
        placement: Placement::ParentNextSibling,
        strategy: Strategy::RowColumn { name_col: 2, glyph_col: 1, skip_head: 1, skip_tail: 0 },
        split: None,
    },
    block("Alchemical Symbols", "Alchemical Symbols (Unicode block)"),
    block("Mahjong Tiles", "Mahjong Tiles (Unicode block)"),
    block("Domino Tiles", "Domino Tiles"),
    block("Playing Cards", "Playing Cards (Unicode block)"),
    CategorySpec {
        name: "Chess Symbols",
        landmark: Landmark::Sentinel("U+2654: WHITE CHESS KING"),
        placement: Placement::EnclosingTable,
        strategy: Strategy::TextOnly,
        split: None,
    },
];

pub const PAGE: PageSpec = PageSpec { url: SYMBOLS_URL, categories: CATEGORIES };
