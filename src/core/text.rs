// src/core/text.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// `"U+0041: LATIN CAPITAL LETTER A"` → `Some("LATIN CAPITAL LETTER A")`.
/// Everything after the first colon, trimmed. `None` when there is no colon.
pub fn name_from_title(title: &str) -> Option<&str> {
    title.split_once(':').map(|(_, rest)| rest.trim())
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Single-char case mapping; multi-char expansions (e.g. `ß` → `SS`) leave
/// the char untouched so the result stays stable under re-application.
fn map_single(c: char, upper: bool) -> char {
    fn only<I: ExactSizeIterator<Item = char>>(mut it: I, c: char) -> char {
        if it.len() == 1 { it.next().unwrap_or(c) } else { c }
    }
    if upper { only(c.to_uppercase(), c) } else { only(c.to_lowercase(), c) }
}

/// Word-initial letters upper, the rest lower. A word is a run of cased
/// letters, so `BLACK-LETTER` → `Black-Letter` and `1ST` → `1St`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for ch in s.chars() {
        let mapped = map_single(ch, !prev_cased);
        prev_cased = is_cased(mapped);
        out.push(mapped);
    }
    out
}
