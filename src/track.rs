use crate::detection::Detection;
use crate::error::Error;
use crate::TrackId;

/// Frame-ordered detection history of one tracked object.
#[derive(Debug, Clone)]
pub struct Track {
    id: TrackId,
    detections: Vec<Detection>,
}

impl Track {
    pub fn new(id: TrackId) -> Self {
        Self {
            id,
            detections: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Appends a detection. Frame indices must strictly increase within a
    /// track; anything else is an integration fault and is rejected.
    pub fn push(&mut self, det: Detection) -> Result<(), Error> {
        if let Some(last) = self.detections.last() {
            if det.frame <= last.frame {
                return Err(Error::FrameOrder {
                    track: self.id,
                    frame: det.frame,
                    last: last.frame,
                });
            }
        }

        self.detections.push(det);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    #[inline]
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    #[inline]
    pub fn last(&self) -> Option<&Detection> {
        self.detections.last()
    }

    /// Consecutive detection pairs in frame order, the unit the crossing
    /// scan works on. Empty for tracks with fewer than two detections.
    #[inline]
    pub fn steps(&self) -> impl Iterator<Item = (&Detection, &Detection)> {
        self.detections.windows(2).map(|w| (&w[0], &w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(frame: u64) -> Detection {
        Detection {
            frame,
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
            confidence: 0.9,
            class: 1,
        }
    }

    #[test]
    fn rejects_non_increasing_frames() {
        let mut track = Track::new(7);
        track.push(det(5)).unwrap();

        assert!(matches!(
            track.push(det(5)),
            Err(Error::FrameOrder {
                track: 7,
                frame: 5,
                last: 5
            })
        ));
        assert!(matches!(track.push(det(3)), Err(Error::FrameOrder { .. })));
        assert_eq!(track.len(), 1);

        track.push(det(6)).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track.last().map(|d| d.frame), Some(6));
    }

    #[test]
    fn steps_pair_consecutive_detections() {
        let mut track = Track::new(1);
        for frame in [0, 2, 5] {
            track.push(det(frame)).unwrap();
        }

        let pairs: Vec<_> = track.steps().map(|(a, b)| (a.frame, b.frame)).collect();
        assert_eq!(pairs, vec![(0, 2), (2, 5)]);
    }

    #[test]
    fn short_track_has_no_steps() {
        let mut track = Track::new(1);
        assert!(track.is_empty());
        assert_eq!(track.steps().count(), 0);

        track.push(det(0)).unwrap();
        assert!(!track.is_empty());
        assert_eq!(track.steps().count(), 0);
    }
}
