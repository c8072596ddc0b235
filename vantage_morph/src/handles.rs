// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Which handles a resizable region shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandlePlacement {
    /// Four corner handles.
    #[default]
    Corners,
    /// Corner handles plus one handle at the midpoint of each edge.
    CornersAndMidpoints,
}

impl HandlePlacement {
    /// The handles present under this placement, corners first.
    #[must_use]
    pub fn handle_ids(self) -> &'static [HandleId] {
        const CORNERS: [HandleId; 4] = [
            HandleId::TopLeft,
            HandleId::TopRight,
            HandleId::BottomRight,
            HandleId::BottomLeft,
        ];
        const ALL: [HandleId; 8] = [
            HandleId::TopLeft,
            HandleId::TopRight,
            HandleId::BottomRight,
            HandleId::BottomLeft,
            HandleId::Top,
            HandleId::Right,
            HandleId::Bottom,
            HandleId::Left,
        ];
        match self {
            Self::Corners => &CORNERS,
            Self::CornersAndMidpoints => &ALL,
        }
    }

    /// Multiplier applied to the touch radius to get the minimum region
    /// dimension. Midpoint layouts pack three touch regions along each edge
    /// instead of two, so they need the larger floor.
    #[must_use]
    pub fn min_dimension_multiplier(self) -> f64 {
        match self {
            Self::Corners => 4.0,
            Self::CornersAndMidpoints => 6.0,
        }
    }
}

/// Identifies one draggable handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleId {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Midpoint of the top edge.
    Top,
    /// Midpoint of the right edge.
    Right,
    /// Midpoint of the bottom edge.
    Bottom,
    /// Midpoint of the left edge.
    Left,
}

impl HandleId {
    /// Whether this is a corner handle (resizes both dimensions).
    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }

    /// The handle's center position on `rect`.
    #[must_use]
    pub fn position_in(self, rect: Rect) -> Point {
        let center = rect.center();
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::Top => Point::new(center.x, rect.y0),
            Self::Right => Point::new(rect.x1, center.y),
            Self::Bottom => Point::new(center.x, rect.y1),
            Self::Left => Point::new(rect.x0, center.y),
        }
    }
}

/// What a drag grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// A resize handle.
    Handle(HandleId),
    /// The region body; dragging it translates the whole region.
    Body,
}

/// One drawable, hit-testable handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handle {
    /// Which handle this is.
    pub id: HandleId,
    /// Center of the handle, in the same coordinate space as the region.
    pub position: Point,
}
