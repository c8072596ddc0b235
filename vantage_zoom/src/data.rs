// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// One pointer observation as delivered by the host's gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Host-assigned identifier, stable for the lifetime of the contact.
    pub id: u64,
    /// Position in container coordinates.
    pub position: Point,
    /// Host clock in milliseconds.
    pub timestamp_ms: u64,
    /// Whether the pointer is currently down.
    pub pressed: bool,
}

/// Derived, read-only view of the current zoom state.
///
/// Recomputed on demand from the live channel values; mid-animation reads see
/// the in-flight transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomData {
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset in pixels.
    pub pan: Vec2,
    /// Current rotation in degrees.
    pub rotation: f64,
    /// The full drawable area: the container rect at origin.
    pub image_region: Rect,
    /// The crop window in source-image pixel coordinates: the part of the
    /// source currently visible under the transform.
    pub visible_region: Rect,
}
