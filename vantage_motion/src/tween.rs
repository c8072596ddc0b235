// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration eased interpolation between two values.

use crate::Animatable;

/// Overshoot coefficient for [`Easing::EaseOutBack`].
const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing curve applied to a tween's normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Cubic ease-out: fast start, smooth stop.
    #[default]
    EaseOut,
    /// Cubic ease-in-out: smooth start and stop.
    EaseInOut,
    /// Ease-out with a slight overshoot past the target before settling,
    /// for a spring-like reset feel.
    EaseOutBack,
}

impl Easing {
    /// Evaluates the curve at normalized time `t`.
    ///
    /// Inputs are clamped to `[0, 1]` (NaN reads as `0`). Every curve runs
    /// from `0` to exactly `1` at `t = 1`; `EaseOutBack` exceeds `1` along
    /// the way.
    #[must_use]
    pub fn eval(self, t: f64) -> f64 {
        let t = t.max(0.0).min(1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::EaseOutBack => {
                let u = t - 1.0;
                1.0 + u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT)
            }
        }
    }
}

/// Duration and easing for a tween animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    /// Animation duration in milliseconds.
    pub duration_ms: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            easing: Easing::default(),
        }
    }
}

/// An in-flight interpolation from a start to an end value.
///
/// Advance with [`tick`](Self::tick); once the duration has elapsed,
/// [`value`](Self::value) returns exactly the end value. A tween with a zero
/// (or negative, or non-finite) duration is complete from the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    start: T,
    end: T,
    spec: TweenSpec,
    elapsed_ms: f64,
}

impl<T: Animatable> Tween<T> {
    /// Creates a tween from `start` to `end` with no time elapsed.
    pub fn new(start: T, end: T, spec: TweenSpec) -> Self {
        Self {
            start,
            end,
            spec,
            elapsed_ms: 0.0,
        }
    }

    /// Advances elapsed time by `dt_ms` and returns the new sample.
    ///
    /// Negative and NaN `dt_ms` values advance by zero.
    pub fn tick(&mut self, dt_ms: f64) -> T {
        self.elapsed_ms += dt_ms.max(0.0);
        self.value()
    }

    /// The current sample.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_complete() {
            return self.end;
        }
        let t = self.elapsed_ms / self.spec.duration_ms;
        self.start.lerp(self.end, self.spec.easing.eval(t))
    }

    /// The value this tween finishes at.
    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        // A NaN duration fails the comparison; an infinite one needs the
        // explicit check.
        !(self.elapsed_ms < self.spec.duration_ms) || !self.spec.duration_ms.is_finite()
    }
}
