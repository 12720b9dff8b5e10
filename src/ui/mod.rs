//! User interface layer: view models and marker styling tokens.
//!
//! The engine renders nothing itself; this layer prepares display-ready data
//! for whichever host draws the panel and the map markers.
//!
//! ```text
//! AppState → compute_viewmodel → LocatorViewModel → host renderer
//! ```
//!
//! # Organization
//!
//! - [`viewmodel`]: view model types representing renderable locator state
//! - [`theme`]: marker styling tokens with optional TOML overrides

pub mod theme;
pub mod viewmodel;

pub use theme::MarkerTheme;
pub use viewmodel::{
    CityChip, EmptyState, HeaderInfo, LocatorViewModel, SearchBarInfo, StoreListItem,
};
