//! Map collaborator interface: commands out, events in.
//!
//! The engine never touches tiles, markers, or the DOM. Everything the map
//! needs crosses this layer as serializable messages, and everything the map
//! reports comes back the same way. Animated transitions are throttled by the
//! [`transition`] scheduler so rapid selection cannot queue conflicting
//! animations.
//!
//! # Organization
//!
//! - [`viewport`]: viewport command vocabulary and fixed transition constants
//! - [`transition`]: debounce/lockout scheduling of animated commands
//! - [`messages`]: JSON bridge protocol (markers, viewport, clicks, failures)

pub mod messages;
pub mod transition;
pub mod viewport;

pub use messages::{MapCommand, MapEvent, MarkerSpec};
pub use transition::{TransitionPolicy, TransitionScheduler};
pub use viewport::{
    ViewportCommand, FIT_BOUNDS_PADDING_PX, FLY_TO_DURATION_MS, FLY_TO_EASE_LINEARITY, FLY_TO_ZOOM,
};
