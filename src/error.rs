use thiserror::Error;

use crate::TrackId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no triplines configured")]
    NoTriplines,

    #[error("{got} direction labels configured, {expected} required")]
    MissingDirections { expected: usize, got: usize },

    #[error("track {track}: frame {frame} does not advance past frame {last}")]
    FrameOrder { track: TrackId, frame: u64, last: u64 },
}
