//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and map collaborator events, translating them into state changes and
//! action sequences. It is the primary control flow coordinator for the
//! engine.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host UI or the map bridge
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Time is passed in explicitly, so transition scheduling decisions are
//! deterministic and the whole handler is testable without sleeping.
//!
//! # Failure Semantics
//!
//! No event raises a user-visible error: unknown selection ids are no-ops,
//! animation failures degrade to instant viewport sets, and an empty filter
//! result is a designed UI state.

use crate::domain::Result;
use crate::geo::GeoBounds;
use crate::i18n::Language;
use crate::map::{MapCommand, MapEvent, ViewportCommand, FLY_TO_ZOOM};
use super::modes::{LayoutClass, PanelFocus, SelectionOrigin};
use super::{Action, AppState};
use std::time::Instant;

/// Events triggered by user input or the map collaborator.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search query changed (full replacement, per keystroke).
    QueryChanged(String),

    /// A city filter chip was activated.
    CityChanged(String),

    /// A location was selected from the list or the map.
    LocationSelected {
        /// Id of the selected location; unknown ids are a no-op.
        id: String,
        /// Gesture origin, deciding the compact-layout panel reveal.
        origin: SelectionOrigin,
    },

    /// The compact-layout panel handle was toggled.
    PanelToggled,

    /// The host viewport crossed the layout breakpoint.
    LayoutChanged(LayoutClass),

    /// The interface language changed.
    LanguageChanged(Language),

    /// The map collaborator finished initializing.
    ///
    /// Emits the one-time fit-bounds over the catalog when nothing is
    /// selected, plus the initial marker set.
    MapReady,

    /// An animated transition failed on the collaborator side.
    ///
    /// Recovered locally with an instant set-view at the selection target.
    AnimationFailed { message: String },

    /// Copy a store's phone number to the clipboard.
    CopyPhone { id: String },

    /// Open directions to a store.
    DirectionsRequested { id: String },

    /// Periodic host tick driving deferred transition emission.
    Tick,

    /// The locator view is being destroyed.
    ///
    /// Cancels pending debounce timers and the in-flight transition window;
    /// no viewport command may be emitted afterwards.
    Unmount,
}

impl From<MapEvent> for Event {
    /// Maps bridge events onto engine events.
    fn from(event: MapEvent) -> Self {
        match event {
            MapEvent::Ready => Self::MapReady,
            MapEvent::MarkerClicked { id } => Self::LocationSelected {
                id,
                origin: SelectionOrigin::Marker,
            },
            MapEvent::AnimationFailed { message } => Self::AnimationFailed { message },
        }
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. The returned boolean reports whether the view model should
/// be recomputed and re-rendered; the actions are executed by the host in
/// order.
///
/// # Errors
///
/// Reserved for future state transitions that can fail; every current arm
/// absorbs failures locally and returns `Ok`.
#[allow(clippy::too_many_lines)]
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    now: Instant,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryChanged(query) => {
            state.search_query.clone_from(query);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CityChanged(city) => {
            state.selected_city.clone_from(city);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::LocationSelected { id, origin } => {
            let Some(location) = state.location_by_id(id) else {
                tracing::debug!(id = %id, "selection of unknown id ignored");
                return Ok((false, vec![]));
            };
            let target = location.position;

            tracing::debug!(
                id = %id,
                city = %location.city,
                origin = ?origin,
                "location selected"
            );

            state.selected_id = Some(id.clone());

            if state.layout == LayoutClass::Compact {
                state.panel = match origin {
                    // Hide the list so the map fly-to is visible.
                    SelectionOrigin::List => PanelFocus::Map,
                    // Reveal the list so the store details are readable.
                    SelectionOrigin::Marker => PanelFocus::List,
                };
            }

            let mut actions = vec![Action::Map {
                command: MapCommand::markers_for(&state.locations, state.selected_id.as_deref()),
            }];
            if let Some(command) = state
                .scheduler
                .request(ViewportCommand::fly_to(target), now)
            {
                actions.push(Action::Map {
                    command: MapCommand::Viewport { command },
                });
            }

            Ok((true, actions))
        }
        Event::PanelToggled => {
            state.panel = state.panel.toggled();
            Ok((true, vec![]))
        }
        Event::LayoutChanged(layout) => {
            state.layout = *layout;
            Ok((true, vec![]))
        }
        Event::LanguageChanged(language) => {
            state.language = *language;
            Ok((true, vec![]))
        }
        Event::MapReady => {
            let mut actions = vec![Action::Map {
                command: MapCommand::markers_for(&state.locations, state.selected_id.as_deref()),
            }];

            // Fit the whole catalog exactly once, and only when nothing is
            // selected; filter changes must never re-trigger it.
            if state.selected_id.is_none() && !state.bounds_fitted {
                if let Some(bounds) =
                    GeoBounds::from_points(state.locations.iter().map(|l| l.position))
                {
                    state.bounds_fitted = true;
                    if let Some(command) = state
                        .scheduler
                        .request(ViewportCommand::fit_bounds(bounds), now)
                    {
                        actions.push(Action::Map {
                            command: MapCommand::Viewport { command },
                        });
                    }
                }
            }

            Ok((false, actions))
        }
        Event::AnimationFailed { message } => {
            tracing::warn!(error = %message, "map animation failed, falling back to instant view");
            let actions = state
                .selected_location()
                .map(|location| {
                    vec![Action::Map {
                        command: MapCommand::Viewport {
                            command: ViewportCommand::set_view(location.position, FLY_TO_ZOOM),
                        },
                    }]
                })
                .unwrap_or_default();
            Ok((false, actions))
        }
        Event::CopyPhone { id } => {
            let actions = state
                .location_by_id(id)
                .filter(|location| location.status.allows_contact_actions())
                .map(|location| {
                    vec![Action::CopyToClipboard {
                        text: location.phone.clone(),
                    }]
                })
                .unwrap_or_default();
            Ok((false, actions))
        }
        Event::DirectionsRequested { id } => {
            let actions = state
                .location_by_id(id)
                .filter(|location| location.status.allows_contact_actions())
                .map(|location| {
                    vec![Action::OpenDirections {
                        position: location.position,
                    }]
                })
                .unwrap_or_default();
            Ok((false, actions))
        }
        Event::Tick => {
            let actions = state
                .scheduler
                .poll(now)
                .map(|command| {
                    vec![Action::Map {
                        command: MapCommand::Viewport { command },
                    }]
                })
                .unwrap_or_default();
            Ok((false, actions))
        }
        Event::Unmount => {
            state.scheduler.cancel_all();
            Ok((false, vec![]))
        }
    }
}
