// src/cli.rs
use std::io::{self, BufWriter};

use crate::config::consts::USER_AGENT;
use crate::core::HttpFetcher;
use crate::error::{Result, ScrapeError};
use crate::progress::LogProgress;
use crate::{runner, specs};

/// The binary takes no arguments: every run re-fetches and re-derives the
/// whole catalog and prints it to stdout.
pub fn check_args<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    match args.into_iter().next() {
        None => Ok(()),
        Some(a) => Err(ScrapeError::Usage(format!(
            "Unknown arg: {a}\nUsage: unicode_scrape > symbols.rs  (no arguments; writes the catalog literal to stdout)"
        ))),
    }
}

pub fn run() -> Result<()> {
    check_args(std::env::args().skip(1))?;

    let fetcher = HttpFetcher::new(USER_AGENT)?;
    let mut progress = LogProgress::default();
    let out = BufWriter::new(io::stdout().lock());

    let catalog = runner::run_to(&fetcher, specs::PAGES, Some(&mut progress), out)?;
    logf!("Wrote {} categories, {} entries", catalog.len(), catalog.entry_count());
    Ok(())
}
