//! Domain layer for the locator engine.
//!
//! This module contains the core domain types and business rules for the engine,
//! independent of map-collaborator APIs or infrastructure concerns. It follows
//! domain-driven design principles by keeping business rules isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`location`]: Store location model and status rules

pub mod error;
pub mod location;

pub use error::{LocatorError, Result};
pub use location::{StoreLocation, StoreStatus};
