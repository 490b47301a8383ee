// src/specs/mod.rs
//! # Category specs
//!
//! One module per source page. Each lists, in output order, the categories read
//! from that page and *where the ground truth lives in its HTML*: which landmark
//! identifies the table, how the table sits relative to it, and which
//! extraction strategy its cells need.
//!
//! ## What lives here
//! - The hand-enumerated category tables (`&'static [CategorySpec]`).
//! - Page URLs, via [`PAGES`].
//!
//! ## What does **not** live here
//! - Fetching, parsing, resolving, extracting: see `core` and `engine`.
//! - Output formatting: see `serialize`.
//!
//! ## Conventions & invariants
//! - Landmark titles are exact attribute values from the page; the last match
//!   in the document is the canonical one.
//! - Every category resolves its own landmark. Two categories may share a
//!   landmark only when they split one table with a mutual `split`.
//! - Category names are unique across all pages.
//!
//! In short: **`specs` knows where the tables are.** The engine knows how to
//! read them.
pub mod emoji;
pub mod symbols;

use crate::engine::PageSpec;

/// All source pages, in output order.
pub static PAGES: &[PageSpec] = &[symbols::PAGE, emoji::PAGE];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_names_are_unique() {
        let mut seen = HashSet::new();
        for page in PAGES {
            for spec in page.categories {
                assert!(seen.insert(spec.name), "duplicate category {}", spec.name);
            }
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn shared_landmarks_are_mutual_splits() {
        for page in PAGES {
            for (i, a) in page.categories.iter().enumerate() {
                for b in &page.categories[i + 1..] {
                    if a.landmark == b.landmark {
                        let (Some(sa), Some(sb)) = (a.split, b.split) else {
                            panic!(
                                "{} and {} share {} without a split",
                                a.name, b.name, a.landmark
                            );
                        };
                        assert_eq!((sa.word, sa.other), (sb.other, sb.word));
                    }
                }
            }
        }
    }

    #[test]
    fn every_landmark_selector_parses() {
        for page in PAGES {
            for spec in page.categories {
                crate::core::dom::parse_selector(&spec.landmark.selector()).unwrap();
            }
        }
    }
}
