//! Catalog construction from raw branch records.
//!
//! Runs once at load time: each record is geocoded through the place table,
//! assigned a stable id in record order, and jittered so co-located branches
//! render as distinct markers. The resulting `Vec<StoreLocation>` is the
//! immutable dataset every later filter and selection operates on.

use super::branches::{BranchRecord, BRANCHES};
use crate::domain::StoreLocation;
use crate::geo::{geocode, resolve_place};
use rand::Rng;

/// Wildcard value for the city filter chip row.
pub const CITY_FILTER_ALL: &str = "All";

/// Builds locations from arbitrary records.
///
/// Ids are `branch-N`, numbered from 1 in record order, which keeps them
/// stable across reloads and unique for the dataset lifetime. Coordinates
/// come from [`resolve_place`] plus jitter drawn from `rng`; pass a seeded
/// generator for reproducible fixtures.
pub fn build_from_records<R: Rng + ?Sized>(
    records: &[BranchRecord],
    jitter_degrees: f64,
    rng: &mut R,
) -> Vec<StoreLocation> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let place = resolve_place(&[record.address, record.name_en, record.name_ar]);
            let position = geocode::jitter(place.position(), jitter_degrees, rng);

            StoreLocation {
                id: format!("branch-{}", index + 1),
                name: record.name_en.to_string(),
                name_ar: record.name_ar.to_string(),
                city: place.city.to_string(),
                address: record.address.to_string(),
                phone: record.phone.to_string(),
                hours: record.hours.to_string(),
                status: record.status,
                position,
            }
        })
        .collect()
}

/// Builds the chain's full catalog from the embedded branch list.
pub fn build_locations<R: Rng + ?Sized>(jitter_degrees: f64, rng: &mut R) -> Vec<StoreLocation> {
    let locations = build_from_records(BRANCHES, jitter_degrees, rng);
    tracing::debug!(count = locations.len(), "catalog built");
    locations
}

/// City filter chips for the catalog: the wildcard first, then each city in
/// first-seen catalog order, deduplicated.
#[must_use]
pub fn city_chips(locations: &[StoreLocation]) -> Vec<String> {
    let mut chips = vec![CITY_FILTER_ALL.to_string()];
    for location in locations {
        if !chips.contains(&location.city) {
            chips.push(location.city.clone());
        }
    }
    chips
}
