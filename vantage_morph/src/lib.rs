// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_morph --heading-base-level=0

//! Vantage Morph: drag-handle state for a resizable rectangular region.
//!
//! [`MorphState`] tracks a rectangle the user reshapes by dragging its
//! handles: the four corners, or corners plus edge midpoints
//! ([`HandlePlacement`]). Corner drags resize both dimensions and midpoint
//! drags one, always anchored so the opposite side stays fixed. Dragging the
//! body translates the region instead. A minimum dimension derived from the
//! handle touch radius keeps opposing handles from ever overlapping, no
//! matter how far a drag overshoots.
//!
//! Size changes are reported to the host as return values: live on every
//! resizing move, or once at drag end for overlay-only configurations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use vantage_morph::{DragTarget, MorphConfig, MorphState};
//!
//! let mut state = MorphState::new(
//!     Rect::new(0.0, 0.0, 200.0, 150.0),
//!     MorphConfig::default(),
//! )
//! .unwrap();
//!
//! // Pointer down near the bottom-right corner, then a drag.
//! let target = state.handle_at(Point::new(198.0, 152.0)).unwrap();
//! state.on_drag_start(target);
//! if let Some(size) = state.on_drag_move(Vec2::new(40.0, 25.0)) {
//!     // Hand the new size to the host layout.
//!     assert_eq!(size, kurbo::Size::new(240.0, 175.0));
//! }
//! state.on_drag_end();
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod config;
mod handles;
mod state;

pub use config::{MorphConfig, MorphConfigError};
pub use handles::{DragTarget, Handle, HandleId, HandlePlacement};
pub use state::{MorphState, MorphStateDebugInfo};
