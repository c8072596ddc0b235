// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One independently animatable value.

use crate::{Animatable, Decay, DecaySpec, Tween, TweenSpec};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Animation<T> {
    Tween(Tween<T>),
    Decay(Decay<T>),
}

/// A value that can be set instantly, tweened to a target, or flung.
///
/// A channel runs at most one animation at a time. Starting a tween or a
/// fling replaces whatever was running; [`snap_to`](Self::snap_to) and
/// [`cancel`](Self::cancel) stop it. The host advances the channel with
/// [`tick`](Self::tick) once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel<T> {
    value: T,
    animation: Option<Animation<T>>,
}

impl<T: Animatable> Channel<T> {
    /// Creates an idle channel holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            animation: None,
        }
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Sets the value immediately, cancelling any running animation.
    pub fn snap_to(&mut self, value: T) {
        self.value = value;
        self.animation = None;
    }

    /// Starts a tween from the current value to `target`, replacing any
    /// running animation.
    pub fn animate_to(&mut self, target: T, spec: TweenSpec) {
        self.animation = Some(Animation::Tween(Tween::new(self.value, target, spec)));
    }

    /// Starts a decay fling at `velocity` (units per millisecond), replacing
    /// any running animation.
    pub fn fling(&mut self, velocity: T, spec: DecaySpec) {
        self.animation = Some(Animation::Decay(Decay::new(velocity, spec)));
    }

    /// Stops any running animation, freezing the value where it is now.
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the channel is heading: the tween end value, the projected rest
    /// position of a fling (ignoring the stop cutoff), or the current value
    /// when idle.
    #[must_use]
    pub fn target(&self) -> T {
        match &self.animation {
            Some(Animation::Tween(tween)) => tween.end(),
            Some(Animation::Decay(decay)) => match decay.projected_travel() {
                Some(travel) => self.value.add(travel),
                None => self.value,
            },
            None => self.value,
        }
    }

    /// Advances any running animation by `dt_ms`.
    ///
    /// Returns `true` while an animation is still in flight after this tick.
    /// The tick on which an animation finishes applies its final value and
    /// returns `false`.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        match &mut self.animation {
            None => false,
            Some(Animation::Tween(tween)) => {
                self.value = tween.tick(dt_ms);
                if tween.is_complete() {
                    self.animation = None;
                    false
                } else {
                    true
                }
            }
            Some(Animation::Decay(decay)) => match decay.tick(dt_ms) {
                Some(delta) => {
                    self.value = self.value.add(delta);
                    true
                }
                None => {
                    self.animation = None;
                    false
                }
            },
        }
    }
}
