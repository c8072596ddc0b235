// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use vantage_geom::{coerce_in, crop_rect};
use vantage_motion::VelocityTracker;
use vantage_transform::{TransformConfigError, TransformState, TransformStateDebugInfo};

use crate::{PointerSample, ZoomConfig, ZoomData};

/// Where the gesture lifecycle currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress and nothing animating.
    #[default]
    Idle,
    /// Pointer frames are arriving.
    Gesturing,
    /// Pan is decaying after a release.
    Flinging,
    /// A settle or double-tap tween is running.
    SettlingToBounds,
}

/// What [`ZoomState::on_gesture_end`] decided to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    /// A pan decay started with the estimated release velocity.
    Fling {
        /// Release velocity in units per millisecond.
        velocity: Vec2,
    },
    /// A settle tween started toward in-bounds targets.
    Settle {
        /// Target zoom.
        zoom: f64,
        /// Target pan.
        pan: Vec2,
    },
    /// Nothing needed animating; the gesture is complete as of this call.
    Completed,
}

/// Result of advancing the state by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// Nothing is animating.
    Idle,
    /// An animation advanced and is still running.
    Animating,
    /// The running animation finished on this tick. This edge is the
    /// completion signal for flings, settles, and double-tap resets.
    Settled,
}

/// Gesture lifecycle around a [`TransformState`].
///
/// Hosts feed recognized gesture frames into [`on_gesture`](Self::on_gesture)
/// and report release via [`on_gesture_end`](Self::on_gesture_end), which
/// picks the follow-up: a pan fling (decay friction), a settle back into
/// bounds (tween), or nothing. [`tick`](Self::tick) advances whichever
/// animation is running and reports the completion edge.
///
/// Rotation is never auto-corrected by the settle path. A gesture can leave
/// content rotated and it stays rotated until the next gesture or a
/// double-tap reset; only zoom and pan settle.
#[derive(Clone, Debug)]
pub struct ZoomState {
    config: ZoomConfig,
    container_size: Size,
    image_size: Size,
    transform: TransformState,
    tracker: VelocityTracker,
    phase: GesturePhase,
}

impl ZoomState {
    /// Creates an idle state for content laid out at `container_size`
    /// showing a source image of `image_size` pixels.
    ///
    /// Fails if the transform configuration is invalid.
    pub fn new(
        container_size: Size,
        image_size: Size,
        config: ZoomConfig,
    ) -> Result<Self, TransformConfigError> {
        let transform = TransformState::new(container_size, config.transform)?;
        Ok(Self {
            config,
            container_size,
            image_size,
            transform,
            tracker: VelocityTracker::new(config.estimator),
            phase: GesturePhase::Idle,
        })
    }

    /// The configuration this state was built with.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// The container (laid-out content) size in pixels.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// The source-image size in pixels.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The underlying transform, for reading render transforms.
    #[must_use]
    pub fn transform_state(&self) -> &TransformState {
        &self.transform
    }

    /// Updates the container size after a host re-layout. Pan bounds follow.
    pub fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
        self.transform.set_content_size(size);
    }

    /// Updates the source-image size, for example after a higher-resolution
    /// image replaces a thumbnail.
    pub fn set_image_size(&mut self, size: Size) {
        self.image_size = size;
    }

    /// Applies one recognized gesture frame.
    ///
    /// `centroid` is the pinch center in container coordinates and the
    /// deltas are per-frame changes as produced by the host's recognizer.
    /// `main_pointer` is the pointer the host tracks for release velocity
    /// and `pointers` holds every pointer involved in the frame; an empty
    /// slice is a no-op.
    ///
    /// The first frame outside [`GesturePhase::Gesturing`] interrupts any
    /// running animation and clears the velocity history. Frames with
    /// exactly one pressed pointer feed the velocity tracker (when fling is
    /// enabled); multi-pointer frames contribute nothing to it.
    pub fn on_gesture(
        &mut self,
        centroid: Point,
        pan_delta: Vec2,
        zoom_delta: f64,
        rotation_delta: f64,
        main_pointer: PointerSample,
        pointers: &[PointerSample],
    ) {
        if pointers.is_empty() {
            return;
        }
        if self.phase != GesturePhase::Gesturing {
            self.transform.cancel_animations();
            self.tracker.clear();
            self.phase = GesturePhase::Gesturing;
        }
        self.transform
            .update(centroid, zoom_delta, pan_delta, rotation_delta);
        let pressed = pointers.iter().filter(|pointer| pointer.pressed).count();
        if self.config.fling_enabled && pressed == 1 {
            self.tracker
                .add_sample(main_pointer.timestamp_ms, main_pointer.position);
        }
    }

    /// Ends the active gesture and starts the follow-up animation.
    ///
    /// - Fling enabled and zoom > 1: pan starts decaying at the velocity
    ///   estimated from the tracked samples; returns
    ///   [`GestureEnd::Fling`].
    /// - Otherwise, when move-to-bounds is enabled: zoom and pan tween to
    ///   the nearest in-bounds values, with the zoom target floored at 1 so
    ///   content never settles smaller than its original scale; returns
    ///   [`GestureEnd::Settle`] carrying the targets.
    /// - Otherwise: back to [`GesturePhase::Idle`], returns
    ///   [`GestureEnd::Completed`].
    ///
    /// Velocity history is discarded on every path. Calls outside
    /// [`GesturePhase::Gesturing`] (a stale release after a cancel, say) are
    /// no-ops reported as [`GestureEnd::Completed`]. Rotation is left
    /// untouched here.
    pub fn on_gesture_end(&mut self) -> GestureEnd {
        if self.phase != GesturePhase::Gesturing {
            return GestureEnd::Completed;
        }
        if self.config.fling_enabled && self.transform.zoom() > 1.0 {
            let velocity = self.tracker.velocity();
            self.tracker.clear();
            self.transform.fling_pan(velocity, self.config.decay);
            self.phase = GesturePhase::Flinging;
            return GestureEnd::Fling { velocity };
        }
        self.tracker.clear();
        if self.config.move_to_bounds_enabled {
            let limits = self.config.transform;
            let zoom = coerce_in(self.transform.zoom(), limits.min_zoom, limits.max_zoom).max(1.0);
            let bounds = self.transform.bounds_at(zoom);
            let current = self.transform.pan();
            let pan = Vec2::new(
                coerce_in(current.x, -bounds.x, bounds.x),
                coerce_in(current.y, -bounds.y, bounds.y),
            );
            self.transform.animate_zoom_to(zoom, self.config.tween);
            self.transform.animate_pan_to(pan, self.config.tween);
            self.phase = GesturePhase::SettlingToBounds;
            return GestureEnd::Settle { zoom, pan };
        }
        self.phase = GesturePhase::Idle;
        GestureEnd::Completed
    }

    /// Animates zoom, pan, and rotation back to their initial values.
    ///
    /// Runs through [`GesturePhase::SettlingToBounds`]; the completing
    /// [`tick`](Self::tick) reports [`TickStatus::Settled`].
    pub fn on_double_tap(&mut self) {
        if self.config.fling_enabled {
            self.tracker.clear();
        }
        self.transform.reset(self.config.tween);
        self.phase = GesturePhase::SettlingToBounds;
    }

    /// Advances any running animation by `dt_ms`.
    ///
    /// A fling under `limit_pan` is clamped into the pan bounds after every
    /// advance; the decay stops on the tick it reaches the boundary, so the
    /// content never comes to rest out of bounds.
    pub fn tick(&mut self, dt_ms: f64) -> TickStatus {
        if !self.transform.is_animating() {
            return TickStatus::Idle;
        }
        let mut animating = self.transform.tick(dt_ms);
        if self.phase == GesturePhase::Flinging && self.config.transform.limit_pan {
            let bounds = self.transform.bounds();
            let pan = self.transform.pan();
            let clamped = Vec2::new(
                coerce_in(pan.x, -bounds.x, bounds.x),
                coerce_in(pan.y, -bounds.y, bounds.y),
            );
            if clamped != pan {
                // Snapping cancels the decay; the fling ends at the boundary.
                self.transform.snap_pan_to(clamped);
                animating = self.transform.is_animating();
            }
        }
        if animating {
            TickStatus::Animating
        } else {
            self.phase = GesturePhase::Idle;
            TickStatus::Settled
        }
    }

    /// Derives the read-only view of the current state.
    ///
    /// `visible_region` maps the container viewport under the current zoom
    /// and pan onto source-image pixel coordinates; out-of-bounds pan reads
    /// as the nearest in-bounds position so the crop never leaves the
    /// source. `image_region` is the container rect at origin.
    #[must_use]
    pub fn data(&self) -> ZoomData {
        let zoom = self.transform.zoom();
        let pan = self.transform.pan();
        let bounds = self.transform.bounds();
        let offset = Vec2::new(
            axis_offset(self.container_size.width, zoom, pan.x, bounds.x),
            axis_offset(self.container_size.height, zoom, pan.y, bounds.y),
        );
        ZoomData {
            zoom,
            pan,
            rotation: self.transform.rotation(),
            image_region: self.container_size.to_rect(),
            visible_region: crop_rect(
                self.image_size,
                self.container_size,
                offset,
                zoom,
                self.container_size.to_rect(),
            ),
        }
    }

    /// Cancels everything for teardown: animations freeze where they stand,
    /// velocity samples are discarded, and the phase returns to idle.
    pub fn cancel(&mut self) {
        self.transform.cancel_animations();
        self.tracker.clear();
        self.phase = GesturePhase::Idle;
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomStateDebugInfo {
        ZoomStateDebugInfo {
            phase: self.phase,
            container_size: self.container_size,
            image_size: self.image_size,
            sample_count: self.tracker.sample_count(),
            transform: self.transform.debug_info(),
        }
    }
}

/// Effective viewport offset along one axis, in container units.
///
/// Converts the centered-origin pan into the distance from the content's
/// left/top edge to the visible window, clamping pan into bounds first so an
/// overshooting gesture still reads as an in-range crop.
fn axis_offset(dim: f64, zoom: f64, pan: f64, bound: f64) -> f64 {
    if zoom <= 0.0 {
        return 0.0;
    }
    let center_offset = dim * (zoom - 1.0) / 2.0;
    (center_offset - coerce_in(pan, -bound, bound)).max(0.0) / zoom
}

/// Debug snapshot of a [`ZoomState`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomStateDebugInfo {
    /// Current lifecycle phase.
    pub phase: GesturePhase,
    /// Container size in pixels.
    pub container_size: Size,
    /// Source-image size in pixels.
    pub image_size: Size,
    /// Number of velocity samples currently retained.
    pub sample_count: usize,
    /// Snapshot of the underlying transform.
    pub transform: TransformStateDebugInfo,
}
