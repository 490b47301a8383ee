// src/core/dom.rs
//! Read-only document tree and the handful of navigation steps the resolver
//! and extractor need: last-match selection, parent, next element sibling,
//! enclosing ancestor by tag, direct children and leading text.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// Parsed page. Never mutated after parsing.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    /// Last element matching `css`, in document order.
    pub fn select_last(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = parse_selector(css)?;
        Ok(self.html.select(&selector).last())
    }
}

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: s!(css),
        reason: format!("{e:?}"),
    })
}

/// `value` as a double-quoted CSS string.
pub fn quote_css(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[inline]
pub fn tag<'a>(el: &ElementRef<'a>) -> &'a str {
    el.value().name()
}

pub fn parent_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Next sibling that is an element (text and comments are skipped).
pub fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// `el` itself or its nearest ancestor with tag `name`.
pub fn enclosing<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .find(|e| tag(e) == name)
}

/// First direct child element with tag `name`.
pub fn child<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .find(|c| tag(c) == name)
}

/// Follow `path` through first-matching direct children.
pub fn child_path<'a>(el: ElementRef<'a>, path: &[&str]) -> Option<ElementRef<'a>> {
    path.iter().try_fold(el, |cur, name| child(cur, name))
}

/// All direct child elements with tag `name`, in order.
pub fn children_named<'a>(el: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| tag(c) == name)
        .collect()
}

/// Text of `el` up to its first non-text child. Text after a nested element
/// belongs to that element's tail, not to `el`.
pub fn leading_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    for text in el.children().map_while(|node| node.value().as_text()) {
        out.push_str(text);
    }
    out
}

/// Full text content of `el`, nested elements included.
pub fn all_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}
