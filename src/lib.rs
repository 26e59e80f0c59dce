pub mod classify;
pub mod counter;
pub mod detection;
pub mod error;
pub mod frame;
pub mod math;
pub mod progress;
pub mod store;
pub mod track;
pub mod tripline;

pub use classify::TrackAnalysis;
pub use counter::{Counter, Crossing};
pub use detection::Detection;
pub use frame::Frame;
pub use store::TrackStore;
pub use track::Track;
pub use tripline::CountConfig;

use std::sync::Arc;

use error::Error;
use progress::Progress;

/// Tracker-assigned object identifier, stable for the object's lifetime.
pub type TrackId = u32;

/// One counting run: the track store filled during ingestion plus the
/// crossing engine that scans it.
///
/// A run owns its state exclusively; a new run starts from empty state and
/// nothing is shared across concurrent runs.
pub struct Run {
    store: TrackStore,
    counter: Counter,
}

impl Run {
    pub fn new(config: CountConfig) -> Result<Self, Error> {
        Ok(Self {
            store: TrackStore::new(),
            counter: Counter::new(config)?,
        })
    }

    /// Ingests one frame batch from the tracker integration.
    pub fn record_frame(&mut self, frame: &Frame) -> Result<(), Error> {
        self.store.record_frame(frame)
    }

    /// Runs the crossing scan. Call once ingestion is complete.
    pub fn count(&mut self) {
        self.counter.count(&self.store);
    }

    #[inline]
    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    #[inline]
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Handle for polling the counting phase from another thread.
    pub fn progress(&self) -> Arc<Progress> {
        self.counter.progress()
    }
}
