// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponential-friction decay for fling animations.

use crate::Animatable;

#[cfg(not(feature = "std"))]
use crate::FloatFuncs;

/// Friction and stop threshold for a [`Decay`] animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecaySpec {
    /// Friction coefficient per millisecond. Velocity follows
    /// `v(t) = v0 * e^(-friction * t)`. Must be positive; a non-positive or
    /// non-finite friction makes the decay complete immediately.
    pub friction: f64,
    /// Speed below which motion stops, in units per millisecond. Must be
    /// positive; a non-positive or non-finite stop velocity makes the decay
    /// complete immediately.
    pub stop_velocity: f64,
}

impl Default for DecaySpec {
    fn default() -> Self {
        Self {
            friction: 0.006,
            stop_velocity: 20.0,
        }
    }
}

/// An in-flight fling: a velocity decaying under exponential friction.
///
/// Each [`tick`](Self::tick) integrates the velocity curve exactly over the
/// elapsed interval and returns the resulting position delta. The stop check
/// runs before integration, so a start velocity already below the cutoff
/// completes immediately with no movement at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay<T> {
    velocity: T,
    spec: DecaySpec,
    complete: bool,
}

impl<T: Animatable> Decay<T> {
    /// Creates a decay starting at `velocity` (units per millisecond).
    pub fn new(velocity: T, spec: DecaySpec) -> Self {
        Self {
            velocity,
            spec,
            complete: false,
        }
    }

    /// Advances by `dt_ms` and returns the position delta for this tick, or
    /// `None` once motion has stopped.
    ///
    /// Negative and NaN `dt_ms` values advance by zero (yielding a zero
    /// delta while the decay stays active).
    pub fn tick(&mut self, dt_ms: f64) -> Option<T> {
        let speed = self.velocity.magnitude();
        if self.complete
            || !self.spec.friction.is_finite()
            || self.spec.friction <= 0.0
            || !self.spec.stop_velocity.is_finite()
            || self.spec.stop_velocity <= 0.0
            || !speed.is_finite()
            || speed < self.spec.stop_velocity
        {
            self.complete = true;
            return None;
        }

        let dt = dt_ms.max(0.0);
        let friction = self.spec.friction;
        // Exact integral of v0 * e^(-f * t) over the tick interval.
        let falloff = (-friction * dt).exp();
        let delta = self.velocity.scale((1.0 - falloff) / friction);
        self.velocity = self.velocity.scale(falloff);
        Some(delta)
    }

    /// The remaining velocity, in units per millisecond.
    #[must_use]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    /// Whether motion has stopped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The total remaining travel if the decay ran forever, ignoring the
    /// stop cutoff. Useful for predicting roughly where a fling will land.
    #[must_use]
    pub fn projected_travel(&self) -> Option<T> {
        if self.complete || !self.spec.friction.is_finite() || self.spec.friction <= 0.0 {
            return None;
        }
        Some(self.velocity.scale(1.0 / self.spec.friction))
    }
}
