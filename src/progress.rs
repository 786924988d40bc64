// src/progress.rs
/// Lightweight progress reporting for multi-page fetches.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One character fetched.
    fn item_done(&mut self, _name: &str) {}

    /// One character failed; the run stops after this.
    fn item_failed(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Progress lines on stderr, for the CLI.
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("Fetched {} ({}/{})", name, self.done, self.total);
    }
    fn item_failed(&mut self, name: &str) {
        eprintln!("Failed {} ({}/{})", name, self.done + 1, self.total);
    }
}
