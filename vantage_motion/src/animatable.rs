// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value abstraction shared by the animation drivers.
//!
//! This trait is intentionally small and only implemented for `f64` and
//! [`Vec2`]: scalar channels (zoom, rotation) and two-axis channels (pan).

use core::fmt::Debug;

use kurbo::Vec2;

/// Value types that can be driven by [`Tween`](crate::Tween),
/// [`Decay`](crate::Decay), and [`Channel`](crate::Channel).
///
/// The trait is deliberately minimal: linear interpolation for tweens,
/// addition and scaling for decay integration, and a magnitude for stop
/// checks.
pub trait Animatable: Copy + PartialEq + Debug {
    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    fn lerp(self, other: Self, t: f64) -> Self;

    /// Component-wise addition.
    fn add(self, other: Self) -> Self;

    /// Uniform scaling by `factor`.
    fn scale(self, factor: f64) -> Self;

    /// Euclidean magnitude.
    fn magnitude(self) -> f64;
}

impl Animatable for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn magnitude(self) -> f64 {
        // |self| with core-only float ops.
        Self::max(self, -self)
    }
}

impl Animatable for Vec2 {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn magnitude(self) -> f64 {
        self.hypot()
    }
}
