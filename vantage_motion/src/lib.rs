// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_motion --heading-base-level=0

//! Vantage Motion: frame-driven animation primitives.
//!
//! This crate provides the small animation machinery behind interactive
//! transform state: eased tweens, exponential-friction decay flings, and
//! per-value animation channels, plus a velocity tracker for turning pointer
//! samples into release velocities. Everything is a plain state machine
//! advanced by `tick(dt_ms)`; the host owns the frame clock and calls `tick`
//! once per frame with the elapsed milliseconds.
//!
//! - [`Tween`] interpolates between two values over a fixed duration with an
//!   [`Easing`] curve. The final sample is exactly the end value.
//! - [`Decay`] integrates a velocity under exponential friction and reports
//!   the position delta per tick, stopping once the speed falls below the
//!   configured cutoff.
//! - [`Channel`] owns one [`Animatable`] value and runs at most one tween or
//!   decay on it at a time; starting a new animation replaces the running one.
//! - [`VelocityTracker`] keeps a bounded window of timestamped pointer
//!   positions and estimates the release velocity in units per millisecond.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_motion::{Channel, TweenSpec};
//!
//! let mut zoom = Channel::new(1.0_f64);
//! zoom.animate_to(3.0, TweenSpec::default());
//!
//! // The host drives frames; 16 ms ticks at ~60 fps.
//! while zoom.tick(16.0) {}
//! assert_eq!(zoom.value(), 3.0);
//! ```
//!
//! ## Design notes
//!
//! - Completion is reported by return value (`tick` returning `false`, or a
//!   decay yielding `None`), never by callback, so finishing an animation
//!   cannot reenter the owning state mid-update.
//! - Starting an animation on a channel that is already animating cancels the
//!   running animation; there is no queue.
//! - Time never runs backwards: negative or NaN `dt` values advance by zero.
//!
//! This crate is `no_std`, but requires either the `std` (default) or `libm`
//! feature for the decay exponential.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vantage_motion requires either the `std` or `libm` feature");

#[cfg(test)]
extern crate std;

mod animatable;
mod channel;
mod decay;
mod tween;
mod velocity;

pub use animatable::Animatable;
pub use channel::Channel;
pub use decay::{Decay, DecaySpec};
pub use tween::{Easing, Tween, TweenSpec};
pub use velocity::{VelocityEstimate, VelocityTracker};

/// Float functions not available in `core`, routed through `libm` for
/// `no_std` builds. Mirrors how Kurbo handles its own math shims.
#[cfg(not(feature = "std"))]
pub(crate) trait FloatFuncs {
    fn exp(self) -> Self;
}

#[cfg(not(feature = "std"))]
impl FloatFuncs for f64 {
    fn exp(self) -> Self {
        libm::exp(self)
    }
}
