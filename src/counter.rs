use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info};

use crate::classify::{self, ClassStats, TrackAnalysis};
use crate::error::Error;
use crate::math;
use crate::progress::Progress;
use crate::store::TrackStore;
use crate::track::Track;
use crate::tripline::{CountConfig, Tripline};
use crate::TrackId;

/// One recorded tripline crossing.
#[derive(Debug, Clone)]
pub struct Crossing {
    pub track_id: TrackId,
    /// Frame at which the crossing step completed.
    pub frame: u64,
    /// Stabilized class, not the per-frame label.
    pub class: i32,
    pub direction: String,
    /// Index of the crossed tripline in the configured list.
    pub tripline: usize,
    pub confidence: f32,
    pub stats: BTreeMap<i32, ClassStats>,
}

impl Crossing {
    /// Crossing time in seconds from the start of the video.
    #[inline]
    pub fn timestamp(&self, fps: f64) -> f64 {
        self.frame as f64 / fps
    }
}

/// Scans every track against every configured tripline and records at most
/// one crossing per (track, tripline) pair.
pub struct Counter {
    triplines: Vec<Tripline>,
    directions: Vec<String>,
    analyses: BTreeMap<TrackId, TrackAnalysis>,
    crossings: BTreeMap<TrackId, Vec<Crossing>>,
    progress: Arc<Progress>,
}

impl Counter {
    pub fn new(config: CountConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            triplines: config.triplines.iter().map(Into::into).collect(),
            directions: config.directions,
            analyses: BTreeMap::new(),
            crossings: BTreeMap::new(),
            progress: Arc::new(Progress::new()),
        })
    }

    /// Handle for polling scan progress from another thread.
    pub fn progress(&self) -> Arc<Progress> {
        self.progress.clone()
    }

    /// Runs the crossing scan over a fully populated store.
    pub fn count(&mut self, store: &TrackStore) {
        self.progress.begin(store.len() as u32);
        info!(
            "counting crossings: {} tracks against {} triplines",
            store.len(),
            self.triplines.len()
        );

        for track in store.iter() {
            self.scan_track(track);
            self.progress.advance();
        }

        info!(
            "recorded {} crossings on {} tracks",
            self.total_crossings(),
            self.crossings.len()
        );
    }

    fn scan_track(&mut self, track: &Track) {
        // one analysis per track, reused for every tripline and kept for export
        let analysis = self
            .analyses
            .entry(track.id())
            .or_insert_with(|| classify::analyze(track));

        for (idx, line) in self.triplines.iter().enumerate() {
            let hit = track.steps().find(|(a, b)| {
                math::segments_intersect(line.start, line.end, a.center(), b.center())
            });

            if let Some((a, b)) = hit {
                let direction = if self.triplines.len() == 1 {
                    if math::side(line.start, line.end, a.center(), b.center()) > 0.0 {
                        self.directions[0].clone()
                    } else {
                        self.directions[1].clone()
                    }
                } else {
                    self.directions[idx].clone()
                };

                debug!(
                    "track {} crossed tripline {} at frame {} heading {}",
                    track.id(),
                    idx,
                    b.frame,
                    direction
                );

                self.crossings
                    .entry(track.id())
                    .or_default()
                    .push(Crossing {
                        track_id: track.id(),
                        frame: b.frame,
                        class: analysis.class,
                        direction,
                        tripline: idx,
                        confidence: analysis.confidence,
                        stats: analysis.stats.clone(),
                    });
            }
        }
    }

    /// Crossings recorded for one track, in tripline order.
    pub fn crossings_for(&self, track_id: TrackId) -> &[Crossing] {
        self.crossings
            .get(&track_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every recorded crossing, grouped by track in ascending id order.
    pub fn crossings(&self) -> impl Iterator<Item = &Crossing> {
        self.crossings.values().flatten()
    }

    pub fn total_crossings(&self) -> usize {
        self.crossings.values().map(Vec::len).sum()
    }

    pub fn analysis_for(&self, track_id: TrackId) -> Option<&TrackAnalysis> {
        self.analyses.get(&track_id)
    }

    /// Stabilized analyses for every scanned track.
    pub fn analyses(&self) -> impl Iterator<Item = (TrackId, &TrackAnalysis)> {
        self.analyses.iter().map(|(id, analysis)| (*id, analysis))
    }
}
