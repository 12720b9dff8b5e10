//! WGS84 coordinate and bounding-box primitives.
//!
//! The engine never projects or renders coordinates itself; it only carries
//! them in viewport commands toward the map collaborator. The two types here
//! are the minimum the engine needs: a point and the axis-aligned box used by
//! fit-bounds commands.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,

    /// Longitude in degrees, valid range [-180, 180].
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate without validation.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both axes are within the valid WGS84 range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Returns a copy clamped into the valid WGS84 range.
    ///
    /// Jittered coordinates near the poles or the antimeridian could otherwise
    /// leave the valid range; the catalog builder clamps every derived
    /// position through this method.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lng: self.lng.clamp(-180.0, 180.0),
        }
    }
}

/// Axis-aligned geographic bounding box.
///
/// `south`/`west` hold the minimum latitude/longitude of the covered points
/// and `north`/`east` the maximum. The box is computed by pure min/max
/// accumulation, so a fixed point set always produces the same box regardless
/// of iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Computes the bounding box covering every point in the iterator.
    ///
    /// Returns `None` for an empty iterator; callers treat that as "nothing to
    /// fit" and emit no viewport command.
    #[must_use]
    pub fn from_points<I: IntoIterator<Item = LatLng>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grows the box to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lng);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lng);
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}
