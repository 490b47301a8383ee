// src/engine/assemble.rs
// Document + ordered category specs → ordered Catalog. No shared state: each
// group depends only on the document and its own spec.

use crate::core::Document;
use crate::engine::{extract, resolve, CategorySpec, Catalog, Entry, Group, Split};
use crate::error::{Result, ScrapeError};

/// Resolve, extract and partition one category.
pub fn assemble_group(doc: &Document, spec: &CategorySpec) -> Result<Group> {
    let table = resolve(doc, &spec.landmark, spec.placement)?;
    let entries = extract(table, &spec.strategy);

    let entries = match spec.split {
        Some(split) => partition(spec.name, split, entries)?,
        None => entries.collect(),
    };

    Ok(Group { category: s!(spec.name), entries })
}

/// Keep the entries `split.word` claims. An entry neither word claims means
/// the shared table changed shape.
fn partition(
    category: &str,
    split: Split,
    entries: impl Iterator<Item = Entry>,
) -> Result<Vec<Entry>> {
    let word = split.word.to_lowercase();
    let other = split.other.to_lowercase();

    let mut kept = Vec::new();
    for entry in entries {
        let name = entry.name.to_lowercase();
        if name.contains(&word) {
            kept.push(entry);
        } else if !name.contains(&other) {
            return Err(ScrapeError::Unpartitioned {
                category: s!(category),
                name: entry.name,
            });
        }
    }
    Ok(kept)
}

/// Every category of `specs`, in order. The first failure aborts the lot.
pub fn assemble(doc: &Document, specs: &[CategorySpec]) -> Result<Catalog> {
    specs.iter().map(|spec| assemble_group(doc, spec)).collect()
}
