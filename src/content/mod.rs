//! Static content layer.
//!
//! Supplies the raw branch records and turns them into the immutable location
//! catalog. There is no create/update/delete at runtime; the catalog is built
//! once per session and only derived UI state changes afterwards.
//!
//! # Organization
//!
//! - [`branches`]: embedded branch records, read-only input
//! - [`catalog`]: catalog building (geocoding, ids, jitter) and city chips

pub mod branches;
pub mod catalog;

pub use branches::{BranchRecord, BRANCHES, MAIN_PHONE};
pub use catalog::{build_from_records, build_locations, city_chips, CITY_FILTER_ALL};
