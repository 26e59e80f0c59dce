use std::collections::BTreeMap;

use crate::track::Track;

/// Running statistics for one class over a track's history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassStats {
    pub count: u32,
    pub total_confidence: f32,
    pub max_consecutive: u32,
}

impl ClassStats {
    #[inline]
    pub fn avg_confidence(&self) -> f32 {
        self.total_confidence / self.count as f32
    }
}

/// Stabilized class decision for one track, derived from its full history.
///
/// `confidence` is the winning class's combined score, a heuristic blend in
/// [0,1], not a probability.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackAnalysis {
    pub class: i32,
    pub confidence: f32,
    pub stats: BTreeMap<i32, ClassStats>,
}

/// Reduces a track's noisy per-frame class labels to one decision.
///
/// Each observed class is scored by the mean of its average confidence, its
/// frequency and its longest consecutive run relative to the track length.
/// Highest score wins; ties go to the lowest class id.
pub fn analyze(track: &Track) -> TrackAnalysis {
    let mut stats: BTreeMap<i32, ClassStats> = BTreeMap::new();
    let mut last_class = None;
    let mut run = 0u32;

    for det in track.detections() {
        let entry = stats.entry(det.class).or_default();
        entry.count += 1;
        entry.total_confidence += det.confidence;

        // runs are over adjacent entries in the sequence, not frame numbers
        run = if last_class == Some(det.class) { run + 1 } else { 1 };
        entry.max_consecutive = entry.max_consecutive.max(run);
        last_class = Some(det.class);
    }

    let length = track.len() as f32;
    let mut best: Option<(i32, f32)> = None;

    for (&class, s) in &stats {
        let freq = s.count as f32 / length;
        let consec = s.max_consecutive as f32 / length;
        let score = (s.avg_confidence() + freq + consec) / 3.0;

        // strict `>` over ascending ids keeps the lowest class on ties
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((class, score));
        }
    }

    let (class, confidence) = best.unwrap_or((0, 0.0));

    TrackAnalysis {
        class,
        confidence,
        stats,
    }
}
