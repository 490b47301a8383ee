// src/engine/resolve.rs
//! Landmark resolver.
//!
//! Data tables on the source pages carry no stable identifier, so each one is
//! found through a landmark: an anchor titled with the block name, a bold
//! caption link, or a cell holding one exact code-point description. The
//! canonical landmark is the *last* match; earlier matches are mentions in
//! prose or navigation.
//!
//! The resolver never searches: one landmark kind, one placement, and the
//! result must be a `<table>`. Anything else means the page changed, which is
//! fatal.

use scraper::ElementRef;

use crate::core::dom::{self, Document};
use crate::engine::types::{Landmark, Placement};
use crate::error::{Result, ScrapeError};

/// Locate the data table a landmark belongs to.
pub fn resolve<'a>(
    doc: &'a Document,
    landmark: &Landmark,
    placement: Placement,
) -> Result<ElementRef<'a>> {
    let selector = landmark.selector();
    let mark = doc
        .select_last(&selector)?
        .ok_or_else(|| ScrapeError::MissingLandmark { selector: selector.clone() })?;

    let target = match placement {
        Placement::EnclosingTable => dom::enclosing(mark, "table"),
        Placement::ParentNextSibling => {
            dom::parent_element(mark).and_then(dom::next_element_sibling)
        }
    };

    match target {
        Some(table) if dom::tag(&table) == "table" => {
            logd!("Resolve: {} → <table> via {:?}", selector, placement);
            Ok(table)
        }
        Some(other) => Err(ScrapeError::NotATable { selector, found: s!(dom::tag(&other)) }),
        None => Err(ScrapeError::NotATable { selector, found: s!("nothing") }),
    }
}
