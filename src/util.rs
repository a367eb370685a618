//! Logging helpers shared with the CLI.

use std::time::Instant;

/// RAII timer that logs elapsed wall time on drop.
///
/// # Example
/// ```ignore
/// let _t = ScopedTimer::info("kernel generation");
/// // ... generate ...
/// // logs "kernel generation: 412µs" when _t is dropped
/// ```
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
    level: log::Level,
}

impl ScopedTimer {
    /// Time a phase, logging at INFO level.
    pub fn info(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            level: log::Level::Info,
        }
    }

    /// Time a phase, logging at DEBUG level.
    pub fn debug(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            level: log::Level::Debug,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::log!(self.level, "{}: {:.3?}", self.label, self.start.elapsed());
    }
}
