// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status; the runner never prints.
pub trait Progress {
    /// Called at the start with the total number of categories.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one category has been assembled.
    fn group_done(&mut self, _category: &str, _entries: usize) {}

    /// Called once the catalog is complete.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress as `INFO` log lines on stderr.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Scrape: Begin categories={}", total);
    }
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
    fn group_done(&mut self, category: &str, entries: usize) {
        self.done += 1;
        logf!("Scrape: {} → {} entries ({}/{})", category, entries, self.done, self.total);
    }
    fn finish(&mut self) {
        logf!("Scrape: Complete ({}/{})", self.done, self.total);
    }
}
