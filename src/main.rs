//! Stdio host bridge and entry point.
//!
//! This binary is the thin integration layer between the locator engine and a
//! line-oriented host: a web view, a kiosk shell, or a developer driving the
//! engine by hand. The host writes one JSON input per line on stdin; the
//! bridge maps each input to an engine event, executes the resulting actions,
//! and writes one JSON object per line on stdout.
//!
//! # Protocol
//!
//! Inbound (stdin), tagged by `type`:
//!
//! ```json
//! {"type": "query", "value": "jeddah"}
//! {"type": "city", "value": "Makkah Province"}
//! {"type": "select", "id": "branch-3"}
//! {"type": "toggle_panel"}
//! {"type": "layout", "value": "compact"}
//! {"type": "language", "value": "ar"}
//! {"type": "map", "event": {"type": "marker_clicked", "id": "branch-3"}}
//! {"type": "tick"}
//! {"type": "quit"}
//! ```
//!
//! Outbound (stdout): serialized [`Action`]s, plus `{"action": "set_theme",
//! "theme": ...}` once at startup and `{"action": "render", "view": ...}`
//! whenever the view model should be redrawn.
//!
//! Malformed input lines are logged and skipped; the bridge never crashes the
//! host over bad input.

use std::io::{BufRead, Write};
use std::time::Instant;

use serde::Deserialize;
use thahama_locator::app::SelectionOrigin;
use thahama_locator::domain::{LocatorError, Result};
use thahama_locator::infrastructure::{copy_best_effort, Clipboard};
use thahama_locator::observability::init_tracing;
use thahama_locator::{
    handle_event, initialize, Action, AppState, Config, Event, Language, LayoutClass, MapEvent,
};

/// One line of host input.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum HostInput {
    /// Search query replacement.
    Query { value: String },

    /// City chip activation.
    City { value: String },

    /// Selection from the list panel.
    Select { id: String },

    /// Compact-layout panel handle toggle.
    TogglePanel,

    /// Viewport layout class change.
    Layout { value: LayoutClass },

    /// Interface language change.
    Language { value: Language },

    /// Event forwarded from the map collaborator.
    Map { event: MapEvent },

    /// Periodic tick driving deferred transitions.
    Tick,

    /// Clean shutdown.
    Quit,
}

impl HostInput {
    /// Maps host input onto an engine event; `Quit` has no event.
    fn into_event(self) -> Option<Event> {
        match self {
            Self::Query { value } => Some(Event::QueryChanged(value)),
            Self::City { value } => Some(Event::CityChanged(value)),
            Self::Select { id } => Some(Event::LocationSelected {
                id,
                origin: SelectionOrigin::List,
            }),
            Self::TogglePanel => Some(Event::PanelToggled),
            Self::Layout { value } => Some(Event::LayoutChanged(value)),
            Self::Language { value } => Some(Event::LanguageChanged(value)),
            Self::Map { event } => Some(event.into()),
            Self::Tick => Some(Event::Tick),
            Self::Quit => None,
        }
    }
}

/// Clipboard backed by the outbound protocol.
///
/// Copies are forwarded to the host as JSON lines; the host owns the real
/// clipboard. A failed stdout write is reported as a clipboard failure and
/// swallowed by the caller like any other clipboard error.
struct BridgeClipboard;

impl Clipboard for BridgeClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let line = serde_json::json!({ "action": "copy_to_clipboard", "text": text });
        writeln!(std::io::stdout(), "{line}")
            .map_err(|e| LocatorError::Clipboard(e.to_string()))
    }
}

/// Emits one outbound JSON line, logging serialization failures.
fn emit(value: &serde_json::Value) {
    if let Err(error) = writeln!(std::io::stdout(), "{value}") {
        tracing::warn!(error = %error, "failed to write bridge output");
    }
}

/// Executes the actions produced by one event.
fn execute_actions(actions: Vec<Action>, clipboard: &dyn Clipboard) {
    for action in actions {
        match &action {
            Action::CopyToClipboard { text } => copy_best_effort(clipboard, text),
            Action::Map { .. } | Action::OpenDirections { .. } => {
                match serde_json::to_value(&action) {
                    Ok(value) => emit(&value),
                    Err(error) => tracing::warn!(error = %error, "failed to encode action"),
                }
            }
        }
    }
}

/// Renders the current view model to the host.
fn render(state: &AppState) {
    let view = state.compute_viewmodel();
    match serde_json::to_value(&view) {
        Ok(view) => emit(&serde_json::json!({ "action": "render", "view": view })),
        Err(error) => tracing::warn!(error = %error, "failed to encode view model"),
    }
}

/// Loads configuration from `--config <path>` when given, defaults otherwise.
fn load_config() -> Config {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                match Config::from_file(&path) {
                    Ok(config) => return config,
                    Err(error) => {
                        eprintln!("warning: {error}, using default configuration");
                        return Config::default();
                    }
                }
            }
        }
    }
    Config::default()
}

fn main() {
    let config = load_config();
    init_tracing(&config);

    let mut state = initialize(&config);
    let clipboard = BridgeClipboard;

    // The map host styles markers from these tokens; send them before any
    // marker or viewport commands.
    match serde_json::to_value(config.marker_theme()) {
        Ok(theme) => emit(&serde_json::json!({ "action": "set_theme", "theme": theme })),
        Err(error) => tracing::warn!(error = %error, "failed to encode marker theme"),
    }
    render(&state);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(error = %error, "stdin read failed, shutting down");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let input: HostInput = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(error) => {
                tracing::warn!(error = %error, line = %line, "skipping malformed input");
                continue;
            }
        };

        let Some(event) = input.into_event() else {
            break;
        };

        match handle_event(&mut state, &event, Instant::now()) {
            Ok((needs_render, actions)) => {
                execute_actions(actions, &clipboard);
                if needs_render {
                    render(&state);
                }
            }
            Err(error) => tracing::error!(error = %error, "event handling failed"),
        }
    }

    // Leaving the loop is an unmount: cancel anything still scheduled.
    let _ = handle_event(&mut state, &Event::Unmount, Instant::now());
}
