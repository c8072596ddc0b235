// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_zoom --heading-base-level=0

//! Vantage Zoom: the gesture lifecycle around zoomable, pannable content.
//!
//! This crate composes a [`vantage_transform::TransformState`] with release
//! velocity tracking and gesture-end policies into [`ZoomState`], the state
//! one zoomable widget keeps for its lifetime. It covers:
//!
//! - Feeding recognized pinch/drag frames into the transform while sampling
//!   one-finger motion for release velocity.
//! - Gesture-end handling: fling the pan under decay friction when zoomed
//!   in, or tween zoom and pan back into bounds (never below the original
//!   scale), or simply stop.
//! - Double-tap reset back to the initial transform.
//! - Deriving [`ZoomData`], including the crop window in source-image pixel
//!   coordinates for "save visible crop" consumers.
//!
//! Gesture recognition itself stays with the host: frames arrive here as
//! pre-computed (centroid, pan, zoom, rotation) deltas plus the raw pointer
//! samples, and the host drives animation by calling
//! [`tick`](ZoomState::tick) with elapsed milliseconds each frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_zoom::{GestureEnd, PointerSample, TickStatus, ZoomConfig, ZoomState};
//!
//! let mut state = ZoomState::new(
//!     Size::new(500.0, 500.0),
//!     Size::new(4000.0, 3000.0),
//!     ZoomConfig::default(),
//! )
//! .unwrap();
//!
//! // One pinch frame from the recognizer: zoom in 2x about the center.
//! let finger = PointerSample {
//!     id: 1,
//!     position: Point::new(220.0, 250.0),
//!     timestamp_ms: 0,
//!     pressed: true,
//! };
//! let thumb = PointerSample {
//!     id: 2,
//!     position: Point::new(280.0, 250.0),
//!     timestamp_ms: 0,
//!     pressed: true,
//! };
//! state.on_gesture(
//!     Point::new(250.0, 250.0),
//!     Vec2::ZERO,
//!     2.0,
//!     0.0,
//!     finger,
//!     &[finger, thumb],
//! );
//!
//! // Release, then tick the follow-up animation to completion.
//! let end = state.on_gesture_end();
//! while state.tick(16.0) == TickStatus::Animating {}
//!
//! // The crop window for the visible part of the source image.
//! let visible = state.data().visible_region;
//! # let _ = (end, visible);
//! ```
//!
//! ## Design notes
//!
//! - Completion is reported by return value ([`GestureEnd`], the
//!   [`TickStatus::Settled`] edge), not by callbacks, so completion handling
//!   can never reenter the state mid-mutation.
//! - Multi-pointer frames never feed the velocity tracker; a pinch that ends
//!   abruptly should not fling.
//! - With `limit_pan` set, a fling obeys the same pan bounds as the gesture
//!   itself: the decaying pan is clamped every tick and the fling ends where
//!   it hits the boundary.
//! - The settle path corrects zoom and pan only. Rotation stays where the
//!   gesture left it until the next gesture or a double-tap reset.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod config;
mod data;
mod state;

pub use config::ZoomConfig;
pub use data::{PointerSample, ZoomData};
pub use state::{GestureEnd, GesturePhase, TickStatus, ZoomState, ZoomStateDebugInfo};
