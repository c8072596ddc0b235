// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Limits and capability flags for a [`TransformState`](crate::TransformState).
///
/// The defaults describe the common photo-viewer setup: zoom between 1x and
/// 5x, panning on, rotation off, and pan unconstrained while a gesture is in
/// progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformConfig {
    /// Zoom the state starts at (and returns to on reset).
    pub initial_zoom: f64,
    /// Rotation in degrees the state starts at (and returns to on reset).
    pub initial_rotation: f64,
    /// Smallest zoom a gesture can reach.
    pub min_zoom: f64,
    /// Largest zoom a gesture can reach.
    pub max_zoom: f64,
    /// Whether gesture zoom deltas are applied.
    pub zoom_enabled: bool,
    /// Whether gesture pan deltas are applied.
    pub pan_enabled: bool,
    /// Whether gesture rotation deltas are applied.
    pub rotation_enabled: bool,
    /// Whether pan is clamped into the derived bounds during the gesture
    /// itself, rather than only when settling afterwards.
    pub limit_pan: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            initial_zoom: 1.0,
            initial_rotation: 0.0,
            min_zoom: 1.0,
            max_zoom: 5.0,
            zoom_enabled: true,
            pan_enabled: true,
            rotation_enabled: false,
            limit_pan: false,
        }
    }
}

impl TransformConfig {
    /// Checks the configuration, returning the first violation found.
    ///
    /// Required: all numeric fields finite, `0 <= min_zoom <= max_zoom`,
    /// `max_zoom > 0`, and `initial_zoom` within the zoom range.
    pub fn validate(&self) -> Result<(), TransformConfigError> {
        if !self.initial_zoom.is_finite()
            || !self.initial_rotation.is_finite()
            || !self.min_zoom.is_finite()
            || !self.max_zoom.is_finite()
        {
            return Err(TransformConfigError::NonFinite);
        }
        if self.min_zoom < 0.0 {
            return Err(TransformConfigError::NegativeMinZoom {
                min_zoom: self.min_zoom,
            });
        }
        if self.max_zoom <= 0.0 {
            return Err(TransformConfigError::NonPositiveMaxZoom {
                max_zoom: self.max_zoom,
            });
        }
        if self.min_zoom > self.max_zoom {
            return Err(TransformConfigError::InvertedZoomRange {
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }
        if self.initial_zoom < self.min_zoom || self.initial_zoom > self.max_zoom {
            return Err(TransformConfigError::InitialZoomOutOfRange {
                initial_zoom: self.initial_zoom,
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }
        Ok(())
    }
}

/// Error returned when a [`TransformConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformConfigError {
    /// A numeric field is NaN or infinite.
    NonFinite,
    /// `min_zoom` is negative.
    NegativeMinZoom {
        /// The rejected minimum zoom.
        min_zoom: f64,
    },
    /// `max_zoom` is zero or negative.
    NonPositiveMaxZoom {
        /// The rejected maximum zoom.
        max_zoom: f64,
    },
    /// `min_zoom` exceeds `max_zoom`.
    InvertedZoomRange {
        /// The rejected minimum zoom.
        min_zoom: f64,
        /// The rejected maximum zoom.
        max_zoom: f64,
    },
    /// `initial_zoom` falls outside `[min_zoom, max_zoom]`.
    InitialZoomOutOfRange {
        /// The rejected initial zoom.
        initial_zoom: f64,
        /// The configured minimum zoom.
        min_zoom: f64,
        /// The configured maximum zoom.
        max_zoom: f64,
    },
}

impl fmt::Display for TransformConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "transform config contains a non-finite value"),
            Self::NegativeMinZoom { min_zoom } => {
                write!(f, "min_zoom must be non-negative, got {min_zoom}")
            }
            Self::NonPositiveMaxZoom { max_zoom } => {
                write!(f, "max_zoom must be positive, got {max_zoom}")
            }
            Self::InvertedZoomRange { min_zoom, max_zoom } => {
                write!(f, "min_zoom {min_zoom} exceeds max_zoom {max_zoom}")
            }
            Self::InitialZoomOutOfRange {
                initial_zoom,
                min_zoom,
                max_zoom,
            } => write!(
                f,
                "initial_zoom {initial_zoom} lies outside [{min_zoom}, {max_zoom}]"
            ),
        }
    }
}

impl core::error::Error for TransformConfigError {}

#[cfg(test)]
mod tests {
    use super::{TransformConfig, TransformConfigError};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(TransformConfig::default().validate(), Ok(()));
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let config = TransformConfig {
            max_zoom: f64::NAN,
            ..TransformConfig::default()
        };
        assert_eq!(config.validate(), Err(TransformConfigError::NonFinite));

        let config = TransformConfig {
            initial_rotation: f64::INFINITY,
            ..TransformConfig::default()
        };
        assert_eq!(config.validate(), Err(TransformConfigError::NonFinite));
    }

    #[test]
    fn negative_min_zoom_is_rejected() {
        let config = TransformConfig {
            min_zoom: -0.5,
            ..TransformConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TransformConfigError::NegativeMinZoom { min_zoom: -0.5 })
        );
    }

    #[test]
    fn non_positive_max_zoom_is_rejected() {
        let config = TransformConfig {
            min_zoom: 0.0,
            max_zoom: 0.0,
            initial_zoom: 0.0,
            ..TransformConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TransformConfigError::NonPositiveMaxZoom { max_zoom: 0.0 })
        );
    }

    #[test]
    fn inverted_zoom_range_is_rejected() {
        let config = TransformConfig {
            min_zoom: 3.0,
            max_zoom: 2.0,
            ..TransformConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TransformConfigError::InvertedZoomRange {
                min_zoom: 3.0,
                max_zoom: 2.0,
            })
        );
    }

    #[test]
    fn initial_zoom_outside_the_range_is_rejected() {
        let config = TransformConfig {
            initial_zoom: 10.0,
            ..TransformConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TransformConfigError::InitialZoomOutOfRange {
                initial_zoom: 10.0,
                min_zoom: 1.0,
                max_zoom: 5.0,
            })
        );
    }

    #[test]
    fn errors_render_a_description() {
        let message = std::format!(
            "{}",
            TransformConfigError::InvertedZoomRange {
                min_zoom: 3.0,
                max_zoom: 2.0,
            }
        );
        assert!(message.contains("exceeds"), "unexpected message {message}");
    }
}
