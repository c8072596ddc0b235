// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::coerce_in;

/// Maps a selection rectangle in container space onto source-image pixels.
///
/// `selection` is expressed in container (view) coordinates under the given
/// `zoom`; `offset` is the top-left of the visible window in container
/// units, as derived by the owning zoom state. The result is the matching
/// region of the source image, in source pixels, clamped so it always lies
/// inside the source bounds.
///
/// The mapping accounts for the per-axis scale ratio between source and
/// container, so a source image larger (or smaller) than its on-screen
/// container produces proportionally scaled crops.
///
/// Degenerate inputs (a zoom at or below zero, a zero-sized source or
/// container, or any non-finite argument) return [`Rect::ZERO`] rather than
/// propagating NaN into the caller's next frame.
///
/// ```rust
/// use kurbo::{Rect, Size, Vec2};
/// use vantage_geom::crop_rect;
///
/// // Zoomed 2x into the center of a photo twice the container's size:
/// // the visible crop is the middle half of the source.
/// let crop = crop_rect(
///     Size::new(1000.0, 1000.0),
///     Size::new(500.0, 500.0),
///     Vec2::new(125.0, 125.0),
///     2.0,
///     Rect::new(0.0, 0.0, 500.0, 500.0),
/// );
/// assert_eq!(crop, Rect::new(250.0, 250.0, 750.0, 750.0));
/// ```
#[must_use]
pub fn crop_rect(source: Size, container: Size, offset: Vec2, zoom: f64, selection: Rect) -> Rect {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Rect::ZERO;
    }
    if !source.is_finite() || source.width <= 0.0 || source.height <= 0.0 {
        return Rect::ZERO;
    }
    if !container.is_finite() || container.width <= 0.0 || container.height <= 0.0 {
        return Rect::ZERO;
    }
    if !offset.is_finite() || !selection.is_finite() {
        return Rect::ZERO;
    }

    let width_ratio = source.width / container.width;
    let height_ratio = source.height / container.height;

    let width = (width_ratio * selection.width().max(0.0) / zoom).min(source.width);
    let height = (height_ratio * selection.height().max(0.0) / zoom).min(source.height);

    let x = width_ratio * (offset.x + selection.x0 / zoom);
    let y = height_ratio * (offset.y + selection.y0 / zoom);
    let x = coerce_in(x, 0.0, source.width - width);
    let y = coerce_in(y, 0.0, source.height - height);

    Rect::new(x, y, x + width, y + height)
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::crop_rect;

    #[test]
    fn unzoomed_full_selection_covers_whole_source() {
        let crop = crop_rect(
            Size::new(4000.0, 3000.0),
            Size::new(800.0, 600.0),
            Vec2::ZERO,
            1.0,
            Rect::new(0.0, 0.0, 800.0, 600.0),
        );
        assert_eq!(crop, Rect::new(0.0, 0.0, 4000.0, 3000.0));
    }

    #[test]
    fn doubling_zoom_halves_the_crop() {
        let crop = crop_rect(
            Size::new(1000.0, 1000.0),
            Size::new(500.0, 500.0),
            Vec2::ZERO,
            2.0,
            Rect::new(0.0, 0.0, 500.0, 500.0),
        );
        assert_eq!(crop.width(), 500.0);
        assert_eq!(crop.height(), 500.0);
        assert_eq!(crop.origin(), kurbo::Point::ZERO);
    }

    #[test]
    fn offset_shifts_the_crop_window() {
        let crop = crop_rect(
            Size::new(1000.0, 1000.0),
            Size::new(500.0, 500.0),
            Vec2::new(125.0, 125.0),
            2.0,
            Rect::new(0.0, 0.0, 500.0, 500.0),
        );
        assert_eq!(crop, Rect::new(250.0, 250.0, 750.0, 750.0));
    }

    #[test]
    fn excessive_offset_clamps_to_source_edge() {
        let crop = crop_rect(
            Size::new(1000.0, 1000.0),
            Size::new(500.0, 500.0),
            Vec2::new(1e6, 1e6),
            2.0,
            Rect::new(0.0, 0.0, 500.0, 500.0),
        );
        assert_eq!(crop, Rect::new(500.0, 500.0, 1000.0, 1000.0));
    }

    #[test]
    fn selection_sub_rect_maps_proportionally() {
        // The right half of the container maps to the right half of the source.
        let crop = crop_rect(
            Size::new(2000.0, 1000.0),
            Size::new(1000.0, 500.0),
            Vec2::ZERO,
            1.0,
            Rect::new(500.0, 0.0, 1000.0, 500.0),
        );
        assert_eq!(crop, Rect::new(1000.0, 0.0, 2000.0, 1000.0));
    }

    #[test]
    fn zero_container_degrades_to_zero_rect() {
        let crop = crop_rect(
            Size::new(1000.0, 1000.0),
            Size::ZERO,
            Vec2::ZERO,
            1.0,
            Rect::new(0.0, 0.0, 500.0, 500.0),
        );
        assert_eq!(crop, Rect::ZERO);
    }

    #[test]
    fn zero_and_negative_zoom_degrade_to_zero_rect() {
        let source = Size::new(1000.0, 1000.0);
        let container = Size::new(500.0, 500.0);
        let selection = Rect::new(0.0, 0.0, 500.0, 500.0);
        assert_eq!(
            crop_rect(source, container, Vec2::ZERO, 0.0, selection),
            Rect::ZERO
        );
        assert_eq!(
            crop_rect(source, container, Vec2::ZERO, -1.0, selection),
            Rect::ZERO
        );
    }

    #[test]
    fn non_finite_inputs_degrade_to_zero_rect() {
        let source = Size::new(1000.0, 1000.0);
        let container = Size::new(500.0, 500.0);
        let selection = Rect::new(0.0, 0.0, 500.0, 500.0);
        assert_eq!(
            crop_rect(source, container, Vec2::new(f64::NAN, 0.0), 1.0, selection),
            Rect::ZERO
        );
        assert_eq!(
            crop_rect(source, container, Vec2::ZERO, f64::INFINITY, selection),
            Rect::ZERO
        );
    }

    #[test]
    fn tiny_zoom_is_capped_at_full_source() {
        let crop = crop_rect(
            Size::new(1000.0, 800.0),
            Size::new(500.0, 400.0),
            Vec2::ZERO,
            1e-9,
            Rect::new(0.0, 0.0, 500.0, 400.0),
        );
        assert_eq!(crop, Rect::new(0.0, 0.0, 1000.0, 800.0));
    }
}
