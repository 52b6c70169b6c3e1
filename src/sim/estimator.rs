//! Incremental Monte Carlo estimator for π.
//!
//! Samples are drawn from the square `[a, a+r) × [b, b+r)` and classified
//! against the circle around `(a, b)`. The square covers one quarter of the
//! circle, so `hit_count / total_count` approximates π/4.

use crate::math::{
    probability::Sampler,
    region::Region,
    types::{ClassifiedSample, Point2D},
};
use bevy::prelude::*;
use std::f64::consts::PI;

/// Laufender Zustand einer Schätzung.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MonteCarloEstimator {
    region: Region,
    total_count: u64,
    hit_count: u64,
}

/// Ergebnis eines einzelnen Batches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub hits: u64,
    pub misses: u64,
    pub samples: Vec<ClassifiedSample>,
}

impl BatchOutcome {
    pub fn len(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Abgeleitete Schätzwerte, nur für `total_count > 0` vorhanden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiEstimate {
    pub pi_quarter: f64,
    pub pi: f64,
}

impl PiEstimate {
    fn from_counts(hit_count: u64, total_count: u64) -> Option<Self> {
        if total_count == 0 {
            return None;
        }
        let pi_quarter = hit_count as f64 / total_count as f64;
        Some(Self {
            pi_quarter,
            pi: 4.0 * pi_quarter,
        })
    }

    /// |π̂ - π|
    pub fn absolute_error(&self) -> f64 {
        (self.pi - PI).abs()
    }
}

impl MonteCarloEstimator {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            total_count: 0,
            hit_count: 0,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    pub fn miss_count(&self) -> u64 {
        self.total_count - self.hit_count
    }

    /// Installs `region`. The running state is reset iff the region changed.
    /// Returns whether it changed.
    pub fn set_region(&mut self, region: Region) -> bool {
        if self.region == region {
            return false;
        }
        self.region = region;
        self.reset();
        true
    }

    /// Zieht `batch_size` Stichproben aus dem Quadrat der Region und verbucht sie.
    pub fn sample_batch<S: Sampler + ?Sized>(
        &mut self,
        sampler: &mut S,
        batch_size: usize,
    ) -> BatchOutcome {
        let points = sampler.sample_square(self.region.center(), self.region.radius(), batch_size);
        self.record_batch(points)
    }

    /// Klassifiziert die gegebenen Punkte und addiert sie zu den laufenden Zählern.
    pub fn record_batch<I>(&mut self, points: I) -> BatchOutcome
    where
        I: IntoIterator<Item = Point2D>,
    {
        let samples: Vec<ClassifiedSample> = points
            .into_iter()
            .map(|p| ClassifiedSample::new(p, self.region.contains(p)))
            .collect();
        let hits = samples.iter().filter(|s| s.hit).count() as u64;
        let misses = samples.len() as u64 - hits;

        self.total_count += samples.len() as u64;
        self.hit_count += hits;

        BatchOutcome {
            hits,
            misses,
            samples,
        }
    }

    /// `None` solange noch keine Stichprobe gezogen wurde.
    pub fn current_estimate(&self) -> Option<PiEstimate> {
        PiEstimate::from_counts(self.hit_count, self.total_count)
    }

    pub fn reset(&mut self) {
        self.total_count = 0;
        self.hit_count = 0;
    }
}
