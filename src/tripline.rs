use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// A configured point in image coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PointConfig {
    pub x: f32,
    pub y: f32,
}

/// One tripline as configured by the orchestration layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct TriplineConfig {
    pub start: PointConfig,
    pub end: PointConfig,
}

/// Counting configuration: the ordered tripline list plus direction labels.
///
/// With a single tripline the first two labels name the two sides of the
/// line and the crossing side picks between them; with several triplines
/// each line carries the label at its own index.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CountConfig {
    pub triplines: Vec<TriplineConfig>,
    pub directions: Vec<String>,
}

impl CountConfig {
    /// Checks the configuration before any scan starts: at least one
    /// tripline, and enough direction labels for the mode.
    pub fn validate(&self) -> Result<(), Error> {
        if self.triplines.is_empty() {
            return Err(Error::NoTriplines);
        }

        let required = if self.triplines.len() == 1 {
            2
        } else {
            self.triplines.len()
        };

        if self.directions.len() < required {
            return Err(Error::MissingDirections {
                expected: required,
                got: self.directions.len(),
            });
        }

        Ok(())
    }
}

/// A validated tripline segment.
#[derive(Debug, Clone)]
pub struct Tripline {
    pub start: na::Point2<f32>,
    pub end: na::Point2<f32>,
}

impl From<&TriplineConfig> for Tripline {
    fn from(cfg: &TriplineConfig) -> Self {
        Self {
            start: na::Point2::new(cfg.start.x, cfg.start.y),
            end: na::Point2::new(cfg.end.x, cfg.end.y),
        }
    }
}
