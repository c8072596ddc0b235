// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamps `value` into `[min, max]`, tolerating inverted ranges.
///
/// Unlike [`f64::clamp`], this never panics: when `min > max` the range is
/// treated as collapsed to `min`. A NaN bound disables that side of the
/// clamp; a NaN `value` is returned unchanged.
///
/// Gesture math occasionally produces inverted ranges transiently (for
/// example a pan bound computed from a zoom that dipped below 1 mid-pinch),
/// so callers must be able to clamp without checking the range first.
///
/// ```rust
/// use vantage_geom::coerce_in;
///
/// assert_eq!(coerce_in(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(coerce_in(-3.0, 0.0, 10.0), 0.0);
/// assert_eq!(coerce_in(42.0, 0.0, 10.0), 10.0);
/// // Inverted range collapses to the lower bound.
/// assert_eq!(coerce_in(5.0, 10.0, 0.0), 10.0);
/// ```
#[must_use]
pub fn coerce_in(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}


#[cfg(test)]
mod proptests {
    use super::coerce_in;
    use proptest::prelude::*;

    proptest! {
        /// Repeated clamping is idempotent.
        #[test]
        fn clamp_is_idempotent(
            value in -1e9f64..1e9,
            min in -1e9f64..1e9,
            max in -1e9f64..1e9,
        ) {
            let once = coerce_in(value, min, max);
            let twice = coerce_in(once, min, max);
            prop_assert_eq!(once.to_bits(), twice.to_bits());
        }

        /// For a well-formed range the result always lies inside it.
        #[test]
        fn result_lies_in_well_formed_range(
            value in -1e9f64..1e9,
            lo in -1e9f64..1e9,
            span in 0.0f64..1e9,
        ) {
            let hi = lo + span;
            let out = coerce_in(value, lo, hi);
            prop_assert!(out >= lo, "{out} < {lo}");
            prop_assert!(out <= hi, "{out} > {hi}");
        }

        /// Inverted ranges always collapse to the lower bound argument.
        #[test]
        fn inverted_range_always_returns_min(
            value in -1e9f64..1e9,
            hi in -1e9f64..1e9,
            span in 1e-6f64..1e9,
        ) {
            let min = hi + span;
            prop_assert_eq!(coerce_in(value, min, hi), min);
        }
    }
}
