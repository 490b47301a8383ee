// src/engine/types.rs
use std::fmt;

use crate::core::dom::quote_css;

/// One named glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub glyph: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self { name: name.into(), glyph: glyph.into() }
    }
}

/// A category and its entries, in table order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub category: String,
    pub entries: Vec<Entry>,
}

/// Groups in declared order. Built once, then handed to the serializer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<Group>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `other`'s groups after ours, keeping both orders.
    pub fn extend(&mut self, other: Catalog) {
        self.groups.extend(other.groups);
    }

    pub fn get(&self, category: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.category == category)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

impl FromIterator<Group> for Catalog {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Self { groups: iter.into_iter().collect() }
    }
}

/* Landmarks: how a table is found when the table itself has no stable id */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    /// `a[title="…"]`
    TitleAnchor(&'static str),
    /// `b [title="…"]`: a titled element under bold emphasis
    BoldTitle(&'static str),
    /// `[title="…"]` on any element: an exact code-point description
    Sentinel(&'static str),
    /// `td[title="…"]`
    SentinelCell(&'static str),
    /// `[id="…"]`
    ElementId(&'static str),
}

impl Landmark {
    pub fn selector(&self) -> String {
        match self {
            Landmark::TitleAnchor(t) => format!("a[title={}]", quote_css(t)),
            Landmark::BoldTitle(t) => format!("b [title={}]", quote_css(t)),
            Landmark::Sentinel(t) => format!("[title={}]", quote_css(t)),
            Landmark::SentinelCell(t) => format!("td[title={}]", quote_css(t)),
            Landmark::ElementId(id) => format!("[id={}]", quote_css(id)),
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// Where the table sits relative to its landmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Landmark itself, or its nearest `<table>` ancestor.
    EnclosingTable,
    /// The element right after the landmark's parent (heading, then table).
    ParentNextSibling,
}

/// Where a cell's glyph may come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphSource {
    /// Leading text → child `a` → `span > a` → nested spans.
    Fallback,
    /// Only a direct child `a`; cells without one are skipped.
    AnchorOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One entry per `td[title]`, name taken from the title.
    CellTitle { glyph: GlyphSource },
    /// Like `CellTitle`, glyph strictly the cell's own text.
    TextOnly,
    /// One entry per row, name and glyph from fixed columns.
    RowColumn {
        name_col: usize,
        glyph_col: usize,
        skip_head: usize,
        skip_tail: usize,
    },
}

/// One table shared by two categories, partitioned by a word in each name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    /// Names containing this word belong here.
    pub word: &'static str,
    /// Names containing this word belong to the sibling category.
    pub other: &'static str,
}

/// Everything needed to turn a page into one catalog group.
#[derive(Clone, Copy, Debug)]
pub struct CategorySpec {
    pub name: &'static str,
    pub landmark: Landmark,
    pub placement: Placement,
    pub strategy: Strategy,
    /// Case-insensitive partition of a table shared with another category.
    pub split: Option<Split>,
}

impl CategorySpec {
    /// Title-block category: `b [title]` landmark, full glyph fallback.
    pub const fn block(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            landmark: Landmark::BoldTitle(title),
            placement: Placement::EnclosingTable,
            strategy: Strategy::CellTitle { glyph: GlyphSource::Fallback },
            split: None,
        }
    }

    pub const fn split(self, word: &'static str, other: &'static str) -> Self {
        Self { split: Some(Split { word, other }), ..self }
    }
}

/// A source page and the categories read from it, in output order.
#[derive(Clone, Copy, Debug)]
pub struct PageSpec {
    pub url: &'static str,
    pub categories: &'static [CategorySpec],
}
