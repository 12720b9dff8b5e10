//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core engine logic, sitting between the host shell
//! and the domain/geo/map layers. It implements the event-driven architecture
//! that powers the locator UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input / Map Events → Events → Event Handler → State Mutations
//!                                         │
//!                                         ▼
//!                            Actions → Side Effects (map commands,
//!                                      clipboard, directions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing logic and state transition coordinator
//! - [`modes`]: layout and panel state machine types
//! - [`state`]: central state container, pure filter, view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{LayoutClass, PanelFocus, SelectionOrigin};
pub use state::{filter_locations, AppState};
