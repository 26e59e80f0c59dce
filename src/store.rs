use std::collections::BTreeMap;

use crate::detection::Detection;
use crate::error::Error;
use crate::frame::Frame;
use crate::track::Track;
use crate::TrackId;

/// Owns every track of one run plus the per-frame visibility index.
///
/// Tracks are append-only and live until the run is dropped; memory is
/// bounded by the total number of detections in the batch.
#[derive(Debug, Default)]
pub struct TrackStore {
    tracks: BTreeMap<TrackId, Track>,
    frame_info: Vec<Vec<(TrackId, u32)>>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one detection to its track, creating the track on first
    /// sight, and records the sighting in the frame index.
    pub fn append(&mut self, track_id: TrackId, det: Detection) -> Result<(), Error> {
        let frame = det.frame as usize;

        let track = self
            .tracks
            .entry(track_id)
            .or_insert_with(|| Track::new(track_id));
        track.push(det)?;
        let length = track.len() as u32;

        if self.frame_info.len() <= frame {
            self.frame_info.resize_with(frame + 1, Vec::new);
        }
        self.frame_info[frame].push((track_id, length));

        Ok(())
    }

    /// Ingests a whole frame batch. Frames with no detections still get a
    /// visibility row, so rows stay aligned with frame numbers.
    pub fn record_frame(&mut self, frame: &Frame) -> Result<(), Error> {
        let idx = frame.index as usize;
        if self.frame_info.len() <= idx {
            self.frame_info.resize_with(idx + 1, Vec::new);
        }

        for (track_id, det) in frame.iter() {
            self.append(*track_id, *det)?;
        }

        Ok(())
    }

    /// Tracks visible on `frame`, each with how many detections it had
    /// accumulated up to and including that frame.
    #[inline]
    pub fn frame_index(&self, frame: u64) -> &[(TrackId, u32)] {
        self.frame_info
            .get(frame as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frame_info.len()
    }

    #[inline]
    pub fn get(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.get(&track_id)
    }

    /// Tracks in ascending id order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
