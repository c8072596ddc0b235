// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-velocity estimation from timestamped pointer positions.

use kurbo::{Point, Vec2};

/// Maximum number of retained samples.
const CAPACITY: usize = 20;

/// Samples older than this (relative to the newest sample) are ignored.
const WINDOW_MS: u64 = 100;

/// Strategy for estimating velocity from the sample window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VelocityEstimate {
    /// Ordinary least-squares slope fitted over every sample in the window.
    /// Smooths jitter well on steady drags.
    #[default]
    LeastSquares,
    /// Pairwise deltas weighted toward the newest samples. Reacts faster
    /// when the drag changes direction just before release.
    RecentWeighted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    timestamp_ms: u64,
    position: Point,
}

/// Bounded ring buffer of pointer samples with velocity estimation.
///
/// Timestamps must be non-decreasing; a sample older than the newest one
/// already recorded clears the history and starts over (the clock jumped, so
/// the old samples describe nothing useful). [`velocity`](Self::velocity)
/// estimates over the samples inside the 100 ms window ending at the newest
/// sample and reports units per millisecond.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Option<Sample>; CAPACITY],
    /// Index of the oldest sample; live samples occupy `len` slots from here.
    start: usize,
    len: usize,
    estimate: VelocityEstimate,
}

impl VelocityTracker {
    /// Creates an empty tracker using the given estimation strategy.
    #[must_use]
    pub fn new(estimate: VelocityEstimate) -> Self {
        Self {
            samples: [None; CAPACITY],
            start: 0,
            len: 0,
            estimate,
        }
    }

    /// Records a pointer position. When the buffer is full the oldest sample
    /// is evicted; a timestamp regression resets the history first.
    pub fn add_sample(&mut self, timestamp_ms: u64, position: Point) {
        if let Some(newest) = self.newest() {
            if timestamp_ms < newest.timestamp_ms {
                self.clear();
            }
        }
        let sample = Sample {
            timestamp_ms,
            position,
        };
        if self.len == CAPACITY {
            self.samples[self.start] = Some(sample);
            self.start = (self.start + 1) % CAPACITY;
        } else {
            self.samples[(self.start + self.len) % CAPACITY] = Some(sample);
            self.len += 1;
        }
    }

    /// Discards all samples. The estimation strategy is kept.
    pub fn clear(&mut self) {
        self.samples = [None; CAPACITY];
        self.start = 0;
        self.len = 0;
    }

    /// Number of retained samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.len
    }

    /// Whether no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Estimated velocity in units per millisecond.
    ///
    /// Returns [`Vec2::ZERO`] when fewer than two samples fall inside the
    /// window or when all of them share one timestamp.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        if self.len < 2 {
            return Vec2::ZERO;
        }
        let Some(newest) = self.newest() else {
            return Vec2::ZERO;
        };
        match self.estimate {
            VelocityEstimate::LeastSquares => self.least_squares(newest.timestamp_ms),
            VelocityEstimate::RecentWeighted => self.recent_weighted(newest.timestamp_ms),
        }
    }

    fn nth(&self, index: usize) -> Option<Sample> {
        if index < self.len {
            self.samples[(self.start + index) % CAPACITY]
        } else {
            None
        }
    }

    fn newest(&self) -> Option<Sample> {
        if self.len == 0 {
            None
        } else {
            self.nth(self.len - 1)
        }
    }

    /// Samples inside the estimation window, oldest first.
    fn windowed(&self, newest_ms: u64) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len)
            .filter_map(move |index| self.nth(index))
            .filter(move |sample| newest_ms - sample.timestamp_ms <= WINDOW_MS)
    }

    fn least_squares(&self, newest_ms: u64) -> Vec2 {
        let mut count = 0.0;
        let mut sum_t = 0.0;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for sample in self.windowed(newest_ms) {
            // Time relative to the newest sample, so values stay small.
            let t = -((newest_ms - sample.timestamp_ms) as f64);
            count += 1.0;
            sum_t += t;
            sum_x += sample.position.x;
            sum_y += sample.position.y;
        }
        if count < 2.0 {
            return Vec2::ZERO;
        }
        let mean_t = sum_t / count;
        let mean_x = sum_x / count;
        let mean_y = sum_y / count;

        let mut variance = 0.0;
        let mut covariance_x = 0.0;
        let mut covariance_y = 0.0;
        for sample in self.windowed(newest_ms) {
            let t = -((newest_ms - sample.timestamp_ms) as f64) - mean_t;
            variance += t * t;
            covariance_x += t * (sample.position.x - mean_x);
            covariance_y += t * (sample.position.y - mean_y);
        }
        if variance <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(covariance_x / variance, covariance_y / variance)
    }

    fn recent_weighted(&self, newest_ms: u64) -> Vec2 {
        let mut previous: Option<Sample> = None;
        let mut weight = 0.0;
        let mut total_weight = 0.0;
        let mut weighted = Vec2::ZERO;
        for sample in self.windowed(newest_ms) {
            if let Some(prev) = previous {
                weight += 1.0;
                let dt = (sample.timestamp_ms - prev.timestamp_ms) as f64;
                if dt > 0.0 {
                    weighted += (sample.position - prev.position) * (weight / dt);
                    total_weight += weight;
                }
            }
            previous = Some(sample);
        }
        if total_weight <= 0.0 {
            return Vec2::ZERO;
        }
        weighted * (1.0 / total_weight)
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(VelocityEstimate::default())
    }
}
