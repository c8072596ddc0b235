// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vantage_motion::{DecaySpec, TweenSpec, VelocityEstimate};
use vantage_transform::TransformConfig;

/// Configuration for a [`ZoomState`](crate::ZoomState).
///
/// Wraps the transform limits together with the gesture-end policies. The
/// defaults fling after a one-finger drag and settle any out-of-bounds state
/// back with a 300 ms eased tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Limits and capability flags for the underlying transform.
    pub transform: TransformConfig,
    /// Whether releasing a one-finger drag while zoomed in continues the pan
    /// under decay friction.
    pub fling_enabled: bool,
    /// Whether gesture end animates zoom and pan back into bounds.
    pub move_to_bounds_enabled: bool,
    /// Tween used for settling and for the double-tap reset.
    pub tween: TweenSpec,
    /// Friction model used for flings.
    pub decay: DecaySpec,
    /// Strategy for estimating release velocity from pointer samples.
    pub estimator: VelocityEstimate,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            transform: TransformConfig::default(),
            fling_enabled: true,
            move_to_bounds_enabled: true,
            tween: TweenSpec::default(),
            decay: DecaySpec::default(),
            estimator: VelocityEstimate::default(),
        }
    }
}
