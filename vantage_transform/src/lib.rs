// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_transform --heading-base-level=0

//! Vantage Transform: zoom, pan, and rotation state with gesture-frame input.
//!
//! This crate provides [`TransformState`], a headless model of a zoomable,
//! pannable, optionally rotatable piece of content. It focuses on:
//!
//! - Applying pinch/drag gesture frames with the pinch centroid held fixed
//!   on screen across zoom changes.
//! - Clamping zoom into a configured range and, optionally, clamping pan so
//!   no empty space shows past the content edges.
//! - Independent per-channel animation (tween or fling) driven by host ticks.
//! - Deriving the render transform as a [`kurbo::Affine`].
//!
//! It does **not** recognize gestures from raw pointer events, and it has no
//! opinion about when to fling or settle; gesture lifecycle policies live in
//! a higher layer built on top of this one.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_transform::{TransformConfig, TransformState};
//!
//! let config = TransformConfig {
//!     max_zoom: 8.0,
//!     ..TransformConfig::default()
//! };
//! let mut state = TransformState::new(Size::new(400.0, 300.0), config).unwrap();
//!
//! // One pinch frame: zoom in 20% about a point, with a small drag.
//! state.update(Point::new(250.0, 120.0), 1.2, Vec2::new(4.0, -2.0), 0.0);
//!
//! // Hand the result to the renderer.
//! let affine = state.to_affine();
//! # let _ = affine;
//! ```
//!
//! ## Design notes
//!
//! - The transform model is centered: content scales and rotates around its
//!   own center, then shifts by `pan`. Zero pan means centered content.
//! - Gesture frames snap; animations only exist between gestures. A new
//!   frame on a channel cancels whatever animation ran there.
//! - Rotation is stored in degrees and never clamped.
//! - [`update`](TransformState::update) enforces the zoom range and (when
//!   enabled) the pan bounds. The direct `snap_*`/`animate_*` accessors take
//!   targets as-is so callers can animate through or beyond the range, for
//!   example when settling back from an over-zoomed state.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod config;
mod state;

pub use config::{TransformConfig, TransformConfigError};
pub use state::{Transform, TransformState, TransformStateDebugInfo};
