//! Viewport commands issued to the map-rendering collaborator.
//!
//! The engine does not render tiles or markers; it steers the collaborator's
//! viewport through the three commands defined here. Selection produces an
//! animated fly-to at a fixed zoom, initial mount produces a fit-bounds over
//! the whole catalog, and degraded fallbacks use an instant set-view.

use crate::geo::{GeoBounds, LatLng};
use serde::{Deserialize, Serialize};

/// Zoom level for fly-to transitions triggered by selection.
pub const FLY_TO_ZOOM: f64 = 15.0;

/// Duration of the fly-to transition in milliseconds.
pub const FLY_TO_DURATION_MS: u64 = 1500;

/// Ease linearity of the fly-to curve, in the collaborator's units.
pub const FLY_TO_EASE_LINEARITY: f64 = 0.25;

/// Padding applied on each axis by fit-bounds commands, in pixels.
pub const FIT_BOUNDS_PADDING_PX: u32 = 50;

/// A viewport-control command for the map collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewportCommand {
    /// Animated transition to a target center and zoom.
    FlyTo {
        center: LatLng,
        zoom: f64,
        duration_ms: u64,
        ease_linearity: f64,
    },

    /// Compute center/zoom so the whole box is visible, with padding.
    FitBounds { bounds: GeoBounds, padding_px: u32 },

    /// Instant, non-animated viewport change. Used as the degraded fallback
    /// when the collaborator's animation API is unavailable or throws.
    SetView { center: LatLng, zoom: f64 },
}

impl ViewportCommand {
    /// The standard selection fly-to: fixed zoom, duration, and ease curve.
    #[must_use]
    pub const fn fly_to(center: LatLng) -> Self {
        Self::FlyTo {
            center,
            zoom: FLY_TO_ZOOM,
            duration_ms: FLY_TO_DURATION_MS,
            ease_linearity: FLY_TO_EASE_LINEARITY,
        }
    }

    /// The standard catalog fit-bounds with fixed padding.
    #[must_use]
    pub const fn fit_bounds(bounds: GeoBounds) -> Self {
        Self::FitBounds {
            bounds,
            padding_px: FIT_BOUNDS_PADDING_PX,
        }
    }

    /// Instant set-view at the given center and zoom.
    #[must_use]
    pub const fn set_view(center: LatLng, zoom: f64) -> Self {
        Self::SetView { center, zoom }
    }

    /// Whether this command runs an animated transition on the collaborator.
    ///
    /// Only animated commands are subject to debounce/lockout scheduling;
    /// fit-bounds and set-view are emitted immediately.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::FlyTo { .. })
    }

    /// Animation duration in milliseconds; zero for instant commands.
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        match self {
            Self::FlyTo { duration_ms, .. } => *duration_ms,
            Self::FitBounds { .. } | Self::SetView { .. } => 0,
        }
    }

    /// The non-animated equivalent of this command.
    ///
    /// Fly-to degrades to a set-view at the same target; instant commands are
    /// returned unchanged.
    #[must_use]
    pub fn as_instant(&self) -> Self {
        match *self {
            Self::FlyTo { center, zoom, .. } => Self::SetView { center, zoom },
            ref other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fly_to_carries_fixed_parameters() {
        let target = LatLng::new(21.4858, 39.1925);
        match ViewportCommand::fly_to(target) {
            ViewportCommand::FlyTo {
                center,
                zoom,
                duration_ms,
                ease_linearity,
            } => {
                assert_eq!(center, target);
                assert_eq!(zoom, FLY_TO_ZOOM);
                assert_eq!(duration_ms, FLY_TO_DURATION_MS);
                assert_eq!(ease_linearity, FLY_TO_EASE_LINEARITY);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn fly_to_degrades_to_set_view_at_same_target() {
        let target = LatLng::new(24.7136, 46.6753);
        let instant = ViewportCommand::fly_to(target).as_instant();
        assert_eq!(instant, ViewportCommand::set_view(target, FLY_TO_ZOOM));
        assert!(!instant.is_animated());
    }

    #[test]
    fn serializes_with_mode_tag() {
        let command = ViewportCommand::set_view(LatLng::new(21.0, 39.0), 5.0);
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["mode"], "set_view");
        assert_eq!(json["zoom"], 5.0);
    }
}
