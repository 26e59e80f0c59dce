use crate::detection::Detection;
use crate::TrackId;

/// One ingestion batch: everything the tracker reported on a single video frame.
pub struct Frame {
    pub index: u64,
    pub detections: Vec<(TrackId, Detection)>,
}

impl Frame {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            detections: Vec::new(),
        }
    }

    /// Adds an observation, stamping this frame's index into it.
    pub fn push(&mut self, track_id: TrackId, mut det: Detection) {
        det.frame = self.index;
        self.detections.push((track_id, det));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(TrackId, Detection)> {
        self.detections.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}
