//! Store location domain model.
//!
//! This module defines the core `StoreLocation` type describing a single branch of
//! the chain, together with its operational status. Locations are built once at
//! load time from the static content catalog and are immutable afterwards; only
//! derived UI state (selection, filters) changes during a session.

use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Operational status of a branch.
///
/// The status determines which contact affordances the UI offers: directions,
/// call, and copy-phone actions are shown only for open branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    /// Branch is operating and accepts visits.
    Open,

    /// Branch is permanently or temporarily closed.
    Closed,

    /// Branch is announced but not yet operating.
    ComingSoon,
}

impl StoreStatus {
    /// Whether directions/call/copy actions should be offered for this status.
    #[must_use]
    pub const fn allows_contact_actions(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// A single store location in the branch network.
///
/// # Fields
///
/// - `id`: stable unique identifier, assigned in catalog order (`branch-N`)
/// - `name` / `name_ar`: bilingual display names
/// - `city`: grouping label derived from the address by place-table lookup
/// - `address`, `phone`, `hours`: free-text contact and operational info
/// - `status`: operational status controlling UI affordances
/// - `position`: resolved coordinate, jittered so co-located branches render
///   as visually distinct markers
///
/// # Invariants
///
/// `id` is unique across the catalog for the lifetime of the dataset, and
/// `position` is a valid WGS84 coordinate after jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub status: StoreStatus,
    pub position: LatLng,
}

impl StoreLocation {
    /// Case-insensitive substring match of `query_lower` against the English
    /// name and address fields.
    ///
    /// `query_lower` must already be lowercased by the caller; an empty query
    /// matches everything. Translated display strings are never consulted,
    /// filtering always runs against the underlying English content fields.
    #[must_use]
    pub fn matches_query(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(query_lower)
            || self.address.to_lowercase().contains(query_lower)
    }
}
