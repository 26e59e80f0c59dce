use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonic progress indicator for one processing phase.
///
/// One writer bumps it, any number of readers poll it.
#[derive(Debug, Default)]
pub struct Progress {
    total: AtomicU32,
    done: AtomicU32,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, total: u32) {
        self.total.store(total, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub fn advance(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn done(&self) -> u32 {
        self.done.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn fraction(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        self.done() as f32 / total as f32
    }
}
