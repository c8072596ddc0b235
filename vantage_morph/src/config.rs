// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::HandlePlacement;

/// Configuration for a [`MorphState`](crate::MorphState).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphConfig {
    /// Which handles the region shows.
    pub placement: HandlePlacement,
    /// Radius of each handle's touch region, in pixels. Also sets the
    /// minimum region dimension, which keeps opposing touch regions from
    /// overlapping.
    pub touch_region_radius: f64,
    /// Whether every size-changing drag move is reported to the host for
    /// live re-layout. When off, only the drag end reports.
    pub update_physical_size: bool,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            placement: HandlePlacement::default(),
            touch_region_radius: 24.0,
            update_physical_size: true,
        }
    }
}

impl MorphConfig {
    /// Checks the configuration, returning the first violation found.
    ///
    /// Required: `touch_region_radius` finite and positive.
    pub fn validate(&self) -> Result<(), MorphConfigError> {
        if !self.touch_region_radius.is_finite() {
            return Err(MorphConfigError::NonFiniteTouchRadius {
                radius: self.touch_region_radius,
            });
        }
        if self.touch_region_radius <= 0.0 {
            return Err(MorphConfigError::NonPositiveTouchRadius {
                radius: self.touch_region_radius,
            });
        }
        Ok(())
    }
}

/// Error returned when a [`MorphConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphConfigError {
    /// `touch_region_radius` is NaN or infinite.
    NonFiniteTouchRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// `touch_region_radius` is zero or negative.
    NonPositiveTouchRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// The initial region rect contains NaN or infinity.
    NonFiniteInitialRect,
}

impl fmt::Display for MorphConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteTouchRadius { radius } => {
                write!(f, "touch_region_radius must be finite, got {radius}")
            }
            Self::NonPositiveTouchRadius { radius } => {
                write!(f, "touch_region_radius must be positive, got {radius}")
            }
            Self::NonFiniteInitialRect => write!(f, "initial rect must be finite"),
        }
    }
}

impl core::error::Error for MorphConfigError {}
