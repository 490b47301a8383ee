// src/serialize.rs
//! Catalog → Rust slice literal, ready to paste into a `const`:
//!
//! ```text
//! &[
//!     ("Currency Symbols", &[
//!         ("Euro Sign", "€"),
//!     ]),
//! ]
//! ```
use std::io::{self, Write};

use crate::engine::{Catalog, Entry};

const INDENT: &str = "    ";

/* ---------------- Escaping ---------------- */

/// Code points that reorder the visible text. rustc denies them inside
/// literals (`text_direction_codepoint_in_literal`).
fn is_bidi_control(ch: char) -> bool {
    matches!(
        ch,
        '\u{061C}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}

fn needs_escape(ch: char) -> bool {
    ch == '"' || ch == '\\' || ch.is_control() || is_bidi_control(ch)
}

/// Append `text` to `out` with Rust string-literal escapes. Non-ASCII glyphs
/// stay literal; quotes, backslashes, control chars and bidi controls are
/// escaped.
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        if !needs_escape(ch) {
            out.push(ch);
            continue;
        }
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.extend(c.escape_unicode()),
        }
    }
}

/* ---------------- Writing ---------------- */

/// `("Name", "Glyph")`
pub fn entry_literal(entry: &Entry) -> String {
    format!("({}, {})", quoted!(&entry.name), quoted!(&entry.glyph))
}

/// The whole catalog as one literal expression, groups in catalog order.
pub fn render(catalog: &Catalog) -> String {
    let mut out = s!("&[\n");
    for group in catalog.groups() {
        out.push_str(&format!("{INDENT}({}, &[\n", quoted!(&group.category)));
        for entry in &group.entries {
            out.push_str(&format!("{INDENT}{INDENT}{},\n", entry_literal(entry)));
        }
        out.push_str(&format!("{INDENT}]),\n"));
    }
    out.push_str("]\n");
    out
}

/// [`render`] into `w`.
pub fn write_catalog<W: Write>(mut w: W, catalog: &Catalog) -> io::Result<()> {
    w.write_all(render(catalog).as_bytes())?;
    w.flush()
}
