// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use smallvec::SmallVec;

use crate::{DragTarget, Handle, HandleId, MorphConfig, MorphConfigError};

/// Drag state for a resizable rectangular region.
///
/// The region is a [`Rect`] in the host's coordinate space with draggable
/// handles on its corners (and optionally edge midpoints). Handle drags
/// resize it, anchored so the opposite side stays fixed; body drags
/// translate it. Width and height never drop below
/// [`min_dimension`](Self::min_dimension), which keeps opposing handle touch
/// regions from overlapping.
///
/// 1. Hit-test the pointer-down position with [`handle_at`](Self::handle_at)
///    and pass the result to [`on_drag_start`](Self::on_drag_start).
/// 2. Feed each move's delta to [`on_drag_move`](Self::on_drag_move); a
///    returned [`Size`] means the host should re-layout now.
/// 3. Finish with [`on_drag_end`](Self::on_drag_end), which reports the
///    final size when moves did not already.
#[derive(Clone, Copy, Debug)]
pub struct MorphState {
    config: MorphConfig,
    rect: Rect,
    drag: Option<DragTarget>,
    /// Size last handed to the host, to suppress duplicate reports.
    reported_size: Size,
}

impl MorphState {
    /// Creates an idle state for the given region.
    ///
    /// The rect is normalized (swapped edges untangled) and its dimensions
    /// are coerced up to the minimum, keeping the origin in place. Fails on
    /// an invalid configuration or a non-finite rect.
    pub fn new(initial: Rect, config: MorphConfig) -> Result<Self, MorphConfigError> {
        config.validate()?;
        if !initial.is_finite() {
            return Err(MorphConfigError::NonFiniteInitialRect);
        }
        let min = config.touch_region_radius * config.placement.min_dimension_multiplier();
        let normalized = initial.abs();
        let rect = Rect::new(
            normalized.x0,
            normalized.y0,
            normalized.x0 + normalized.width().max(min),
            normalized.y0 + normalized.height().max(min),
        );
        Ok(Self {
            config,
            rect,
            drag: None,
            reported_size: rect.size(),
        })
    }

    /// The configuration this state was built with.
    #[must_use]
    pub fn config(&self) -> MorphConfig {
        self.config
    }

    /// The current region.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The current region size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// The smallest width or height a drag can reach.
    #[must_use]
    pub fn min_dimension(&self) -> f64 {
        self.config.touch_region_radius * self.config.placement.min_dimension_multiplier()
    }

    /// Whether a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// What the active drag grabbed, if any.
    #[must_use]
    pub fn drag_target(&self) -> Option<DragTarget> {
        self.drag
    }

    /// Handle positions for overlay drawing, in placement order.
    #[must_use]
    pub fn handles(&self) -> SmallVec<[Handle; 8]> {
        self.config
            .placement
            .handle_ids()
            .iter()
            .map(|&id| Handle {
                id,
                position: id.position_in(self.rect),
            })
            .collect()
    }

    /// Hit-tests a pointer position against the handles, then the body.
    ///
    /// Handles hit within `touch_region_radius` of their center; corners
    /// are checked before midpoints.
    #[must_use]
    pub fn handle_at(&self, point: Point) -> Option<DragTarget> {
        let radius = self.config.touch_region_radius;
        for &id in self.config.placement.handle_ids() {
            if (point - id.position_in(self.rect)).hypot() <= radius {
                return Some(DragTarget::Handle(id));
            }
        }
        if self.rect.contains(point) {
            return Some(DragTarget::Body);
        }
        None
    }

    /// Starts a drag on the given target, replacing any active drag.
    pub fn on_drag_start(&mut self, target: DragTarget) {
        self.drag = Some(target);
    }

    /// Applies one drag move.
    ///
    /// Handle targets resize the region: the dragged edge (corners: both
    /// edges) follows the delta while the opposite side stays fixed, and
    /// each dimension stops at the minimum instead of collapsing or
    /// inverting. [`DragTarget::Body`] translates the whole region without
    /// changing its size.
    ///
    /// Returns the new size when `update_physical_size` is set and the size
    /// actually changed. Moves without an active drag and non-finite deltas
    /// are discarded.
    pub fn on_drag_move(&mut self, delta: Vec2) -> Option<Size> {
        let target = self.drag?;
        if !delta.is_finite() {
            return None;
        }
        match target {
            DragTarget::Body => {
                self.rect = self.rect + delta;
                None
            }
            DragTarget::Handle(id) => {
                self.resize(id, delta);
                if self.config.update_physical_size {
                    self.report()
                } else {
                    None
                }
            }
        }
    }

    /// Ends the active drag.
    ///
    /// Returns the region size when it differs from the last one reported,
    /// which is how overlay-only configurations (`update_physical_size` off)
    /// deliver their single size update.
    pub fn on_drag_end(&mut self) -> Option<Size> {
        self.drag = None;
        self.report()
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MorphStateDebugInfo {
        MorphStateDebugInfo {
            rect: self.rect,
            min_dimension: self.min_dimension(),
            drag: self.drag,
            config: self.config,
        }
    }

    fn resize(&mut self, id: HandleId, delta: Vec2) {
        let min = self.min_dimension();
        let mut x0 = self.rect.x0;
        let mut y0 = self.rect.y0;
        let mut x1 = self.rect.x1;
        let mut y1 = self.rect.y1;
        match id {
            HandleId::TopLeft | HandleId::BottomLeft | HandleId::Left => {
                x0 = (x0 + delta.x).min(x1 - min);
            }
            HandleId::TopRight | HandleId::BottomRight | HandleId::Right => {
                x1 = (x1 + delta.x).max(x0 + min);
            }
            _ => {}
        }
        match id {
            HandleId::TopLeft | HandleId::TopRight | HandleId::Top => {
                y0 = (y0 + delta.y).min(y1 - min);
            }
            HandleId::BottomLeft | HandleId::BottomRight | HandleId::Bottom => {
                y1 = (y1 + delta.y).max(y0 + min);
            }
            _ => {}
        }
        self.rect = Rect::new(x0, y0, x1, y1);
    }

    fn report(&mut self) -> Option<Size> {
        let size = self.rect.size();
        if size == self.reported_size {
            None
        } else {
            self.reported_size = size;
            Some(size)
        }
    }
}

/// Debug snapshot of a [`MorphState`].
#[derive(Clone, Copy, Debug)]
pub struct MorphStateDebugInfo {
    /// Current region.
    pub rect: Rect,
    /// Smallest width or height a drag can reach.
    pub min_dimension: f64,
    /// The active drag target, if any.
    pub drag: Option<DragTarget>,
    /// The configuration the state was built with.
    pub config: MorphConfig,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{DragTarget, HandleId, MorphConfig, MorphState};
    use crate::HandlePlacement;

    fn config(radius: f64) -> MorphConfig {
        MorphConfig {
            touch_region_radius: radius,
            ..MorphConfig::default()
        }
    }

    fn state() -> MorphState {
        // Touch radius 10 with corner handles: minimum dimension 40.
        MorphState::new(Rect::new(0.0, 0.0, 200.0, 200.0), config(10.0)).unwrap()
    }

    #[test]
    fn new_coerces_small_rects_up_to_the_minimum() {
        let state = MorphState::new(Rect::new(5.0, 5.0, 25.0, 105.0), config(10.0)).unwrap();
        assert_eq!(state.rect(), Rect::new(5.0, 5.0, 45.0, 105.0));
        assert_eq!(state.min_dimension(), 40.0);
    }

    #[test]
    fn new_normalizes_inverted_rects() {
        let state = MorphState::new(Rect::new(100.0, 100.0, 0.0, 0.0), config(10.0)).unwrap();
        assert_eq!(state.rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn new_rejects_non_finite_rects() {
        assert!(MorphState::new(Rect::new(0.0, 0.0, f64::NAN, 10.0), config(10.0)).is_err());
    }

    #[test]
    fn corner_drag_resizes_both_dimensions_anchored_opposite() {
        let mut state = state();
        state.on_drag_start(DragTarget::Handle(HandleId::BottomRight));
        let size = state.on_drag_move(Vec2::new(50.0, 30.0));

        assert_eq!(state.rect(), Rect::new(0.0, 0.0, 250.0, 230.0));
        assert_eq!(size, Some(Size::new(250.0, 230.0)));
    }

    #[test]
    fn top_left_drag_keeps_the_bottom_right_corner_fixed() {
        let mut state = state();
        state.on_drag_start(DragTarget::Handle(HandleId::TopLeft));
        state.on_drag_move(Vec2::new(20.0, 60.0));
        assert_eq!(state.rect(), Rect::new(20.0, 60.0, 200.0, 200.0));
    }

    #[test]
    fn midpoint_drag_resizes_one_dimension_only() {
        let mut state = MorphState::new(
            Rect::new(0.0, 0.0, 200.0, 200.0),
            MorphConfig {
                placement: HandlePlacement::CornersAndMidpoints,
                ..config(10.0)
            },
        )
        .unwrap();
        state.on_drag_start(DragTarget::Handle(HandleId::Left));
        state.on_drag_move(Vec2::new(30.0, 999.0));
        assert_eq!(state.rect(), Rect::new(30.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn large_negative_drags_pin_at_the_minimum_dimension() {
        let mut state = state();
        state.on_drag_start(DragTarget::Handle(HandleId::Right));
        state.on_drag_move(Vec2::new(-500.0, 0.0));

        assert_eq!(state.size().width, state.min_dimension());
        assert_eq!(state.rect(), Rect::new(0.0, 0.0, 40.0, 200.0));
    }

    #[test]
    fn overshooting_corner_drags_cannot_invert_the_rect() {
        let mut state = state();
        state.on_drag_start(DragTarget::Handle(HandleId::TopLeft));
        state.on_drag_move(Vec2::new(500.0, 500.0));
        assert_eq!(state.rect(), Rect::new(160.0, 160.0, 200.0, 200.0));
    }

    #[test]
    fn body_drags_translate_without_resizing() {
        let mut state = state();
        state.on_drag_start(DragTarget::Body);
        let size = state.on_drag_move(Vec2::new(25.0, -10.0));

        assert_eq!(size, None);
        assert_eq!(state.rect(), Rect::new(25.0, -10.0, 225.0, 190.0));
        assert_eq!(state.on_drag_end(), None, "size never changed");
    }

    #[test]
    fn moves_without_an_active_drag_are_ignored() {
        let mut state = state();
        assert_eq!(state.on_drag_move(Vec2::new(50.0, 50.0)), None);
        assert_eq!(state.rect(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn non_finite_deltas_are_discarded() {
        let mut state = state();
        state.on_drag_start(DragTarget::Handle(HandleId::BottomRight));
        assert_eq!(state.on_drag_move(Vec2::new(f64::NAN, 10.0)), None);
        assert_eq!(state.rect(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn pinned_moves_report_no_size_change() {
        let mut state = state();
        state.on_drag_start(DragTarget::Handle(HandleId::Right));
        assert!(state.on_drag_move(Vec2::new(-500.0, 0.0)).is_some());
        // Already at the minimum; pushing further changes nothing.
        assert_eq!(state.on_drag_move(Vec2::new(-50.0, 0.0)), None);
    }

    #[test]
    fn overlay_only_mode_reports_once_at_drag_end() {
        let mut state = MorphState::new(
            Rect::new(0.0, 0.0, 200.0, 200.0),
            MorphConfig {
                update_physical_size: false,
                ..config(10.0)
            },
        )
        .unwrap();
        state.on_drag_start(DragTarget::Handle(HandleId::BottomRight));
        assert_eq!(state.on_drag_move(Vec2::new(10.0, 0.0)), None);
        assert_eq!(state.on_drag_move(Vec2::new(10.0, 0.0)), None);

        assert_eq!(state.on_drag_end(), Some(Size::new(220.0, 200.0)));
        assert_eq!(state.on_drag_end(), None, "already reported");
    }

    #[test]
    fn handles_follow_the_rect() {
        let mut state = state();
        let handles = state.handles();
        assert_eq!(handles.len(), 4);
        assert_eq!(handles[0].id, HandleId::TopLeft);
        assert_eq!(handles[0].position, Point::new(0.0, 0.0));

        state.on_drag_start(DragTarget::Body);
        state.on_drag_move(Vec2::new(10.0, 10.0));
        assert_eq!(state.handles()[0].position, Point::new(10.0, 10.0));
    }

    #[test]
    fn hit_testing_checks_handles_then_the_body() {
        let state = MorphState::new(
            Rect::new(0.0, 0.0, 90.0, 90.0),
            MorphConfig {
                placement: HandlePlacement::CornersAndMidpoints,
                ..config(15.0)
            },
        )
        .unwrap();

        assert_eq!(
            state.handle_at(Point::new(10.0, 10.0)),
            Some(DragTarget::Handle(HandleId::TopLeft))
        );
        assert_eq!(
            state.handle_at(Point::new(45.0, 10.0)),
            Some(DragTarget::Handle(HandleId::Top))
        );
        assert_eq!(
            state.handle_at(Point::new(45.0, 45.0)),
            Some(DragTarget::Body)
        );
        assert_eq!(state.handle_at(Point::new(300.0, 300.0)), None);
    }
}
