// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_geom --heading-base-level=0

//! Vantage Geom: clamping and crop-rectangle mapping utilities.
//!
//! This crate holds the small pieces of pure geometry shared by the Vantage
//! state crates:
//!
//! - [`coerce_in`]: a clamp that tolerates inverted and degenerate ranges
//!   instead of panicking, for use on values that may arrive mid-gesture in
//!   any order.
//! - [`crop_rect`]: maps a selection rectangle in container (view) space onto
//!   source-image pixel space under a given zoom and offset, preserving the
//!   per-axis scale ratio between source and container.
//!
//! Both functions are total: degenerate inputs (zero-sized containers, zoom at
//! or below zero, non-finite values) degrade to a zero-area result rather than
//! producing NaN that would poison later frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use vantage_geom::crop_rect;
//!
//! // A 4000x3000 photo shown in an 800x600 view, not zoomed or panned:
//! // the visible crop is the whole photo.
//! let source = Size::new(4000.0, 3000.0);
//! let container = Size::new(800.0, 600.0);
//! let selection = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let crop = crop_rect(source, container, Vec2::ZERO, 1.0, selection);
//! assert_eq!(crop, Rect::new(0.0, 0.0, 4000.0, 3000.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod clamp;
mod crop;

pub use clamp::coerce_in;
pub use crop::crop_rect;
