// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use vantage_geom::coerce_in;
use vantage_motion::{Channel, DecaySpec, TweenSpec};

use crate::{TransformConfig, TransformConfigError};

/// Snapshot of the three transform channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub zoom: f64,
    /// Pan offset in pixels. Zero keeps the content centered.
    pub pan: Vec2,
    /// Rotation around the content center, in degrees.
    pub rotation: f64,
}

/// Zoom/pan/rotation state for one piece of interactive content.
///
/// The transform is expressed in the centered-origin model: content is scaled
/// and rotated around its own center, then shifted by `pan`. Gesture frames
/// arrive through [`update`](Self::update), which applies deltas instantly
/// (snap semantics) with the pinch centroid held fixed on screen. Each
/// channel can also be animated independently; the host advances animations
/// with [`tick`](Self::tick).
///
/// This type does not decide *when* to animate. Fling-on-release and
/// settle-to-bounds policies live in the gesture lifecycle layer built on
/// top of it.
#[derive(Clone, Debug)]
pub struct TransformState {
    config: TransformConfig,
    content_size: Size,
    zoom: Channel<f64>,
    pan: Channel<Vec2>,
    rotation: Channel<f64>,
}

impl TransformState {
    /// Creates a state at the configured initial zoom and rotation, with
    /// zero pan.
    ///
    /// `content_size` is the laid-out size of the content in pixels; it
    /// drives the pan bounds. Fails if the configuration is invalid.
    pub fn new(content_size: Size, config: TransformConfig) -> Result<Self, TransformConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            content_size,
            zoom: Channel::new(config.initial_zoom),
            pan: Channel::new(Vec2::ZERO),
            rotation: Channel::new(config.initial_rotation),
        })
    }

    /// The configuration this state was built with.
    #[must_use]
    pub fn config(&self) -> TransformConfig {
        self.config
    }

    /// The content size in pixels.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Updates the content size after a host re-layout.
    ///
    /// Zoom, pan, and rotation are left untouched; only the derived bounds
    /// change.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.value()
    }

    /// Current pan offset in pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan.value()
    }

    /// Current rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation.value()
    }

    /// Snapshot of all three channels.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            zoom: self.zoom.value(),
            pan: self.pan.value(),
            rotation: self.rotation.value(),
        }
    }

    /// Applies one gesture frame.
    ///
    /// `centroid` is the pinch center in container coordinates, `zoom_delta`
    /// a multiplicative zoom change, `pan_delta` an additive pan change, and
    /// `rotation_delta` an additive rotation change in degrees. Disabled
    /// channels ignore their deltas. The pan correction keeps the content
    /// point under the centroid fixed across the zoom change, so an identity
    /// frame (`zoom_delta = 1`, zero deltas) is a no-op for any centroid.
    ///
    /// All three channels are set with snap semantics, cancelling any
    /// animation running on them.
    pub fn update(
        &mut self,
        centroid: Point,
        zoom_delta: f64,
        pan_delta: Vec2,
        rotation_delta: f64,
    ) {
        let old_zoom = self.zoom.value();
        if self.config.zoom_enabled {
            let target = coerce_in(
                old_zoom * zoom_delta,
                self.config.min_zoom,
                self.config.max_zoom,
            );
            self.zoom.snap_to(target);
        }
        if self.config.rotation_enabled {
            self.rotation.snap_to(self.rotation.value() + rotation_delta);
        }
        if self.config.pan_enabled {
            let new_zoom = self.zoom.value();
            let ratio = if old_zoom > 0.0 {
                new_zoom / old_zoom
            } else {
                1.0
            };
            let center = Point::new(self.content_size.width / 2.0, self.content_size.height / 2.0);
            let anchor = centroid - center;
            let pan = anchor * (1.0 - ratio) + self.pan.value() * ratio + pan_delta;
            let pan = if self.config.limit_pan {
                self.clamp_pan(pan, new_zoom)
            } else {
                pan
            };
            self.pan.snap_to(pan);
        }
    }

    /// Pan half-extents at the current zoom.
    ///
    /// Pan is considered in bounds while it lies within `[-x, x]` and
    /// `[-y, y]` of the returned vector.
    #[must_use]
    pub fn bounds(&self) -> Vec2 {
        self.bounds_at(self.zoom.value())
    }

    /// Pan half-extents at a hypothetical zoom.
    ///
    /// At zoom 1 (or below) the content fits its container and the bounds
    /// collapse to zero; they grow linearly with zoom from there. Zero
    /// content size always yields zero bounds.
    #[must_use]
    pub fn bounds_at(&self, zoom: f64) -> Vec2 {
        Vec2::new(
            (self.content_size.width * (zoom - 1.0) / 2.0).max(0.0),
            (self.content_size.height * (zoom - 1.0) / 2.0).max(0.0),
        )
    }

    /// Sets the zoom immediately, cancelling any zoom animation.
    ///
    /// The value is taken as-is; only the gesture path enforces the
    /// configured zoom range.
    pub fn snap_zoom_to(&mut self, zoom: f64) {
        self.zoom.snap_to(zoom);
    }

    /// Starts a zoom tween from the current value, replacing any zoom
    /// animation.
    pub fn animate_zoom_to(&mut self, zoom: f64, spec: TweenSpec) {
        self.zoom.animate_to(zoom, spec);
    }

    /// Sets the pan immediately, cancelling any pan animation.
    pub fn snap_pan_to(&mut self, pan: Vec2) {
        self.pan.snap_to(pan);
    }

    /// Starts a pan tween from the current value, replacing any pan
    /// animation.
    pub fn animate_pan_to(&mut self, pan: Vec2, spec: TweenSpec) {
        self.pan.animate_to(pan, spec);
    }

    /// Starts a pan decay at `velocity` (pixels per millisecond), replacing
    /// any pan animation.
    pub fn fling_pan(&mut self, velocity: Vec2, spec: DecaySpec) {
        self.pan.fling(velocity, spec);
    }

    /// Sets the rotation immediately, cancelling any rotation animation.
    pub fn snap_rotation_to(&mut self, rotation: f64) {
        self.rotation.snap_to(rotation);
    }

    /// Starts a rotation tween from the current value, replacing any
    /// rotation animation.
    pub fn animate_rotation_to(&mut self, rotation: f64, spec: TweenSpec) {
        self.rotation.animate_to(rotation, spec);
    }

    /// Animates all three channels to the given targets concurrently.
    pub fn animate_to(&mut self, zoom: f64, pan: Vec2, rotation: f64, spec: TweenSpec) {
        self.zoom.animate_to(zoom, spec);
        self.pan.animate_to(pan, spec);
        self.rotation.animate_to(rotation, spec);
    }

    /// Animates back to the initial zoom and rotation with zero pan.
    pub fn reset(&mut self, spec: TweenSpec) {
        self.animate_to(
            self.config.initial_zoom,
            Vec2::ZERO,
            self.config.initial_rotation,
            spec,
        );
    }

    /// Advances all running animations by `dt_ms`.
    ///
    /// Returns `true` while any channel is still animating after this tick.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let zoom = self.zoom.tick(dt_ms);
        let pan = self.pan.tick(dt_ms);
        let rotation = self.rotation.tick(dt_ms);
        zoom || pan || rotation
    }

    /// Whether any channel has an animation in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_animating() || self.pan.is_animating() || self.rotation.is_animating()
    }

    /// Stops all animations, freezing every channel at its current value.
    pub fn cancel_animations(&mut self) {
        self.zoom.cancel();
        self.pan.cancel();
        self.rotation.cancel();
    }

    /// The render transform: scale and rotate around the content center,
    /// then shift by pan.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let center = Vec2::new(self.content_size.width / 2.0, self.content_size.height / 2.0);
        let radians = self.rotation.value() * (core::f64::consts::PI / 180.0);
        Affine::translate(self.pan.value() + center)
            * Affine::rotate(radians)
            * Affine::scale(self.zoom.value())
            * Affine::translate(-center)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformStateDebugInfo {
        TransformStateDebugInfo {
            zoom: self.zoom.value(),
            pan: self.pan.value(),
            rotation: self.rotation.value(),
            content_size: self.content_size,
            bounds: self.bounds(),
            is_animating: self.is_animating(),
            config: self.config,
        }
    }

    fn clamp_pan(&self, pan: Vec2, zoom: f64) -> Vec2 {
        let bounds = self.bounds_at(zoom);
        Vec2::new(
            coerce_in(pan.x, -bounds.x, bounds.x),
            coerce_in(pan.y, -bounds.y, bounds.y),
        )
    }
}

/// Debug snapshot of a [`TransformState`].
#[derive(Clone, Copy, Debug)]
pub struct TransformStateDebugInfo {
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset in pixels.
    pub pan: Vec2,
    /// Current rotation in degrees.
    pub rotation: f64,
    /// Content size in pixels.
    pub content_size: Size,
    /// Pan half-extents at the current zoom.
    pub bounds: Vec2,
    /// Whether any channel is animating.
    pub is_animating: bool,
    /// The configuration the state was built with.
    pub config: TransformConfig,
}
