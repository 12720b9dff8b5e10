//! Geographic primitives and best-effort geocoding.
//!
//! This layer owns everything coordinate-shaped: the [`LatLng`] point and
//! [`GeoBounds`] box carried by viewport commands, and the place-table
//! geocoding that assigns approximate coordinates to branch records at
//! catalog-build time.
//!
//! # Organization
//!
//! - [`coords`]: WGS84 point and bounding-box types
//! - [`geocode`]: ordered place-name table, fallback, and marker jitter

pub mod coords;
pub mod geocode;

pub use coords::{GeoBounds, LatLng};
pub use geocode::{resolve_place, PlaceEntry, DEFAULT_JITTER_DEGREES, DEFAULT_PLACE, PLACE_TABLE};
