//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or map
//! events. Actions bridge pure state transformations and effectful
//! operations: driving the map collaborator, writing to the clipboard, or
//! opening a directions view.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host executes
//! them in sequence; none of them may fail loudly (clipboard failures are
//! swallowed with a log, map failures degrade to instant viewport sets).

use crate::geo::LatLng;
use crate::map::MapCommand;
use serde::Serialize;

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Sends a command to the map collaborator.
    ///
    /// Covers both marker updates (selection restyling) and viewport control
    /// (fly-to, fit-bounds, fallback set-view).
    Map { command: MapCommand },

    /// Places text on the clipboard, best effort.
    ///
    /// Used for phone-number copy. The executor routes this through the
    /// clipboard seam and swallows failures with a log record.
    CopyToClipboard { text: String },

    /// Opens the platform's directions view for a coordinate.
    ///
    /// Only emitted for open stores.
    OpenDirections { position: LatLng },
}
