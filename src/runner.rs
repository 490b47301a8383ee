// src/runner.rs
// Fetch → parse → assemble, page by page, merged in declared page order.

use std::io::Write;

use crate::{
    core::{Document, Fetcher},
    engine::{assemble, Catalog, PageSpec},
    error::Result,
    progress::Progress,
    serialize,
};

/// Build the catalog for `pages`. Any fetch or structure failure aborts the
/// run; a partial catalog is never returned.
pub fn run(
    fetcher: &dyn Fetcher,
    pages: &[PageSpec],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Catalog> {
    let total = pages.iter().map(|p| p.categories.len()).sum();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut catalog = Catalog::new();
    for page in pages {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}", page.url));
        }
        let markup = fetcher.fetch(page.url)?;
        let doc = Document::parse(&markup);

        let part = assemble(&doc, page.categories)
            .inspect_err(|e| loge!("Scrape: {}: {}", page.url, e))?;
        if let Some(p) = progress.as_deref_mut() {
            for group in part.groups() {
                p.group_done(&group.category, group.entries.len());
            }
        }
        catalog.extend(part);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(catalog)
}

/// [`run`], then write the literal to `out`.
pub fn run_to<W: Write>(
    fetcher: &dyn Fetcher,
    pages: &[PageSpec],
    progress: Option<&mut dyn Progress>,
    out: W,
) -> Result<Catalog> {
    let catalog = run(fetcher, pages, progress)?;
    serialize::write_catalog(out, &catalog)?;
    Ok(catalog)
}
