//! Map bridge message types.
//!
//! This module defines the JSON protocol between the engine and the
//! map-rendering collaborator. The engine sends [`MapCommand`]s (marker data
//! and viewport control) and receives [`MapEvent`]s (readiness, marker clicks
//! keyed by location id, animation failures). Both directions serialize
//! through `serde_json`, so any host that can pass strings can host a map.

use super::viewport::ViewportCommand;
use crate::domain::{LocatorError, Result, StoreLocation, StoreStatus};
use crate::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Marker description for the collaborator's marker layer.
///
/// Carries only what marker rendering needs; the full location record stays
/// in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Location id echoed back by click events.
    pub id: String,

    /// Marker coordinate.
    pub position: LatLng,

    /// Whether this marker is the current selection (styled as active).
    pub selected: bool,

    /// Operational status, for status-dependent marker styling.
    pub status: StoreStatus,
}

/// Commands sent from the engine to the map collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapCommand {
    /// Replace the collaborator's marker set.
    SetMarkers { markers: Vec<MarkerSpec> },

    /// Apply a viewport change.
    Viewport { command: ViewportCommand },
}

/// Events received from the map collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    /// The map finished initializing and can accept commands.
    Ready,

    /// The user clicked the marker for the given location id.
    MarkerClicked { id: String },

    /// An animated transition failed on the collaborator side.
    ///
    /// The engine responds with an instant set-view fallback.
    AnimationFailed { message: String },
}

impl MapCommand {
    /// Builds the full marker set for the catalog, styling the selected
    /// location's marker as active.
    ///
    /// Markers always cover the complete catalog, not the filtered list, so
    /// filtering the sidebar never removes pins from the map.
    #[must_use]
    pub fn markers_for(locations: &[StoreLocation], selected_id: Option<&str>) -> Self {
        let markers = locations
            .iter()
            .map(|location| MarkerSpec {
                id: location.id.clone(),
                position: location.position,
                selected: selected_id == Some(location.id.as_str()),
                status: location.status,
            })
            .collect();
        Self::SetMarkers { markers }
    }

    /// Encodes the command as a JSON string for the host bridge.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Map`] when serialization fails.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| LocatorError::Map(e.to_string()))
    }
}

impl MapEvent {
    /// Decodes an event from the host bridge's JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Map`] when the payload is not a valid event.
    pub fn decode(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| LocatorError::Map(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, selected_city: &str) -> StoreLocation {
        StoreLocation {
            id: id.to_string(),
            name: format!("Thahama Market- {selected_city}"),
            name_ar: format!("Thahama Market- {selected_city}"),
            city: selected_city.to_string(),
            address: selected_city.to_string(),
            phone: "+966503695826".to_string(),
            hours: "24 Hours".to_string(),
            status: StoreStatus::Open,
            position: LatLng::new(21.4858, 39.1925),
        }
    }

    #[test]
    fn markers_flag_only_the_selection() {
        let locations = vec![location("branch-1", "Jeddah"), location("branch-2", "Khulais")];
        match MapCommand::markers_for(&locations, Some("branch-2")) {
            MapCommand::SetMarkers { markers } => {
                assert_eq!(markers.len(), 2);
                assert!(!markers[0].selected);
                assert!(markers[1].selected);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = MapEvent::MarkerClicked {
            id: "branch-7".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(MapEvent::decode(&json).unwrap(), event);
    }

    #[test]
    fn malformed_event_payload_is_an_error_not_a_panic() {
        assert!(MapEvent::decode("{\"type\":\"warp_drive\"}").is_err());
        assert!(MapEvent::decode("not json").is_err());
    }

    #[test]
    fn command_encoding_is_tagged() {
        let command = MapCommand::markers_for(&[location("branch-1", "Jeddah")], None);
        let json: serde_json::Value = serde_json::from_str(&command.encode().unwrap()).unwrap();
        assert_eq!(json["type"], "set_markers");
        assert_eq!(json["markers"][0]["id"], "branch-1");
    }
}
