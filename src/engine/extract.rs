// src/engine/extract.rs
//! Cell extractor.
//!
//! Turns a resolved `<table>` into a lazy stream of [`Entry`] values. Cells
//! encode glyphs four different ways across the source tables (bare text, a
//! link, a link inside a span, a glyph buried in font-fallback spans), so the
//! glyph comes from an ordered fallback chain. Reserved or empty cells are
//! skipped without complaint.

use std::iter::Skip;
use std::sync::LazyLock;
use std::vec::IntoIter;

use scraper::element_ref::Select;
use scraper::{ElementRef, Selector};

use crate::config::consts::{NESTED_SPAN_DEPTH, RESERVED};
use crate::core::dom;
use crate::core::text::{name_from_title, normalize_ws, title_case};
use crate::engine::types::{Entry, GlyphSource, Strategy};

static TD_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td[title]").expect("static selector must parse"));
static TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("static selector must parse"));

const NESTED_SPANS: [&str; NESTED_SPAN_DEPTH] = ["span"; NESTED_SPAN_DEPTH];

#[derive(Clone, Copy, Debug)]
enum CellGlyph {
    Fallback,
    AnchorOnly,
    TextOnly,
}

enum Walk<'a> {
    Cells {
        cells: Select<'a, 'static>,
        glyph: CellGlyph,
    },
    Rows {
        rows: Skip<IntoIter<ElementRef<'a>>>,
        name_col: usize,
        glyph_col: usize,
    },
}

/// Single-pass entry stream over one table. Call [`extract`] again to re-walk.
pub struct Entries<'a> {
    walk: Walk<'a>,
}

/// Entries of `table`, read with `strategy`.
pub fn extract<'a>(table: ElementRef<'a>, strategy: &Strategy) -> Entries<'a> {
    let walk = match *strategy {
        Strategy::CellTitle { glyph } => Walk::Cells {
            cells: table.select(&TD_TITLE),
            glyph: match glyph {
                GlyphSource::Fallback => CellGlyph::Fallback,
                GlyphSource::AnchorOnly => CellGlyph::AnchorOnly,
            },
        },
        Strategy::TextOnly => Walk::Cells {
            cells: table.select(&TD_TITLE),
            glyph: CellGlyph::TextOnly,
        },
        Strategy::RowColumn { name_col, glyph_col, skip_head, skip_tail } => {
            let mut rows: Vec<ElementRef<'a>> = table.select(&TR).collect();
            rows.truncate(rows.len().saturating_sub(skip_tail));
            Walk::Rows { rows: rows.into_iter().skip(skip_head), name_col, glyph_col }
        }
    };
    Entries { walk }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        match &mut self.walk {
            Walk::Cells { cells, glyph } => {
                let glyph = *glyph;
                cells.find_map(|td| cell_entry(td, glyph))
            }
            Walk::Rows { rows, name_col, glyph_col } => {
                let (name_col, glyph_col) = (*name_col, *glyph_col);
                rows.find_map(|tr| row_entry(tr, name_col, glyph_col))
            }
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    let t = text.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// Leading text → `a` → `span > a` → `span > span > span > span`.
pub fn fallback_glyph(td: ElementRef<'_>) -> Option<String> {
    non_empty(dom::leading_text(td))
        .or_else(|| dom::child(td, "a").map(dom::all_text).and_then(non_empty))
        .or_else(|| dom::child_path(td, &["span", "a"]).map(dom::all_text).and_then(non_empty))
        .or_else(|| dom::child_path(td, &NESTED_SPANS).map(dom::all_text).and_then(non_empty))
}

fn cell_entry(td: ElementRef<'_>, glyph: CellGlyph) -> Option<Entry> {
    let title = td.value().attr("title")?;
    if title == RESERVED {
        return None;
    }
    let Some(name) = name_from_title(title).filter(|n| !n.is_empty()) else {
        logd!("Extract: skip cell, no name in title={:?}", title);
        return None;
    };

    let glyph = match glyph {
        CellGlyph::Fallback => fallback_glyph(td),
        CellGlyph::AnchorOnly => dom::child(td, "a").map(dom::all_text).and_then(non_empty),
        CellGlyph::TextOnly => non_empty(dom::leading_text(td)),
    };
    let Some(glyph) = glyph else {
        logd!("Extract: skip {:?}, no glyph", name);
        return None;
    };

    Some(Entry::new(title_case(&normalize_ws(name)), glyph))
}

/// Cell text, or its link's text when the cell has none of its own.
fn column_text(td: ElementRef<'_>) -> Option<String> {
    non_empty(dom::leading_text(td))
        .or_else(|| dom::child(td, "a").map(dom::all_text).and_then(non_empty))
}

fn row_entry(tr: ElementRef<'_>, name_col: usize, glyph_col: usize) -> Option<Entry> {
    let tds = dom::children_named(tr, "td");
    let (Some(&name_td), Some(&glyph_td)) = (tds.get(name_col), tds.get(glyph_col)) else {
        logd!("Extract: skip row with {} cells", tds.len());
        return None;
    };
    let name = column_text(name_td)?;
    let glyph = column_text(glyph_td)?;
    Some(Entry::new(title_case(&normalize_ws(&name)), glyph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Document;
    use crate::engine::types::GlyphSource::*;

    fn table_of(doc: &Document) -> ElementRef<'_> {
        doc.select_last("table").unwrap().unwrap()
    }

    fn run(html: &str, strategy: Strategy) -> Vec<(String, String)> {
        let doc = Document::parse(html);
        extract(table_of(&doc), &strategy).map(|e| (e.name, e.glyph)).collect()
    }

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter().map(|(a, b)| (s!(*a), s!(*b))).collect()
    }

    const CELLS: Strategy = Strategy::CellTitle { glyph: Fallback };

    #[test]
    fn reserved_and_untitled_cells_are_skipped() {
        let got = run(
            r#"<table><tr>
                <td>U+205x</td>
                <td title="Reserved">x</td>
                <td title="U+2030: PER   MILLE
                    SIGN">‰</td>
                <td title="no colon here">y</td>
            </tr></table>"#,
            CELLS,
        );
        assert_eq!(got, pairs(&[("Per Mille Sign", "‰")]));
    }

    #[test]
    fn leading_text_beats_anchor() {
        let got = run(
            r#"<table><tr><td title="U+0041: LATIN CAPITAL LETTER A">A<a>Z</a></td></tr></table>"#,
            CELLS,
        );
        assert_eq!(got, pairs(&[("Latin Capital Letter A", "A")]));
    }

    #[test]
    fn trailing_text_does_not_beat_anchor() {
        let got = run(
            r#"<table><tr>
                <td title="U+0301: COMBINING ACUTE ACCENT"><a>◌́</a> (x)</td>
                <td title="U+2654: WHITE CHESS KING"><span></span>♔</td>
            </tr></table>"#,
            CELLS,
        );
        assert_eq!(got, pairs(&[("Combining Acute Accent", "◌́")]));
    }

    #[test]
    fn fallback_chain_steps() {
        let got = run(
            r#"<table><tr>
                <td title="U+00BD: VULGAR FRACTION ONE HALF"> <a>½</a> </td>
                <td title="U+2070: SUPERSCRIPT ZERO"><span><a>⁰</a></span></td>
                <td title="U+1FB00: BLOCK SEXTANT-1"><span><span><span><span>🬀</span></span></span></span></td>
                <td title="U+2065: INVISIBLE"><span></span></td>
            </tr></table>"#,
            CELLS,
        );
        assert_eq!(
            got,
            pairs(&[
                ("Vulgar Fraction One Half", "½"),
                ("Superscript Zero", "⁰"),
                ("Block Sextant-1", "🬀"),
            ])
        );
    }

    #[test]
    fn anchor_only_ignores_bare_text() {
        let got = run(
            r#"<table><tr>
                <td title="U+2020: DAGGER"><a>†</a></td>
                <td title="U+2002: EN SPACE">x</td>
            </tr></table>"#,
            Strategy::CellTitle { glyph: AnchorOnly },
        );
        assert_eq!(got, pairs(&[("Dagger", "†")]));
    }

    #[test]
    fn text_only_ignores_anchor() {
        let got = run(
            r#"<table><tr>
                <td title="U+2654: WHITE CHESS KING">♔</td>
                <td title="U+2655: WHITE CHESS QUEEN"><a>♕</a></td>
            </tr></table>"#,
            Strategy::TextOnly,
        );
        assert_eq!(got, pairs(&[("White Chess King", "♔")]));
    }

    #[test]
    fn row_columns_skip_head_and_tail() {
        let html = r#"<table>
            <tr><th>Code</th><th>Glyph</th><th>Name</th></tr>
            <tr><td>U+2701</td><td>✁</td><td>UPPER BLADE SCISSORS</td></tr>
            <tr><td>U+2702</td><td><a>✂</a></td><td><a>BLACK SCISSORS</a></td></tr>
            <tr><td>short</td></tr>
            <tr><td>U+2703</td><td>✃</td><td>footer</td></tr>
        </table>"#;
        let rows = |skip_tail| Strategy::RowColumn {
            name_col: 2,
            glyph_col: 1,
            skip_head: 1,
            skip_tail,
        };
        let got = run(html, rows(1));
        assert_eq!(got, pairs(&[("Upper Blade Scissors", "✁"), ("Black Scissors", "✂")]));

        let all = run(html, rows(0));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn entries_are_lazy_and_rewalkable() {
        let doc = Document::parse(
            r#"<table><tr><td title="U+0031: DIGIT ONE">1</td><td title="U+0032: DIGIT TWO">2</td></tr></table>"#,
        );
        let table = table_of(&doc);
        let mut first = extract(table, &CELLS);
        assert_eq!(first.next().map(|e| e.glyph), Some(s!("1")));
        assert_eq!(extract(table, &CELLS).count(), 2);
    }
}
