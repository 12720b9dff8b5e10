//! Thahama Locator: the headless engine behind a supermarket chain's
//! store-locator page.
//!
//! The engine owns the branch catalog, the search/filter/selection state
//! machine, and viewport-command emission toward a map-rendering
//! collaborator. It renders nothing itself: any host that can execute a small
//! set of actions (map commands, clipboard writes, opening directions) can
//! embed it.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shell (main.rs / embedding UI)                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Content Layer │   │ Map Layer     │
//! │ (ui/)         │   │ (content/)    │   │ (map/)        │
//! │ - View models │   │ - Branch data │   │ - Viewport    │
//! │ - Marker theme│   │ - Catalog     │   │ - Transitions │
//! │               │   │   building    │   │ - Bridge IPC  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Geo, I18n, Infrastructure & Domain Layers          │
//! │  - Coordinates and geocoding (geo/)                 │
//! │  - Bilingual labels, RTL (i18n/)                    │
//! │  - Timers, clipboard seam (infrastructure/)         │
//! │  - Location model, errors (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: application state machine with event/action model
//! - [`domain`]: core domain types (locations, errors)
//! - [`geo`]: coordinate primitives and place-table geocoding
//! - [`map`]: viewport commands, transition scheduling, bridge protocol
//! - [`content`]: embedded branch records and catalog building
//! - [`i18n`]: bilingual labels and text direction
//! - [`infrastructure`]: cancellable timers and the clipboard seam
//! - [`ui`]: view models and marker styling tokens
//! - `observability`: tracing subscriber setup
//!
//! # Event Flow
//!
//! 1. **Load**: build the catalog ([`initialize`]), geocoding each branch
//!    record through the place table with marker jitter
//! 2. **Map ready**: emit the marker set and a one-time fit-bounds over the
//!    whole catalog
//! 3. **Filtering**: every query keystroke or city chip click recomputes the
//!    filtered list synchronously; empty results are a designed UI state
//! 4. **Selection**: list taps and marker clicks update the selection and
//!    schedule an animated fly-to, coalesced so rapid selection cannot queue
//!    conflicting transitions
//! 5. **Unmount**: pending timers and the in-flight window are cancelled so
//!    no callback fires against a destroyed view
//!
//! # Example
//!
//! ```
//! use thahama_locator::{handle_event, initialize, Config, Event};
//! use std::time::Instant;
//!
//! let mut state = initialize(&Config::default());
//! assert!(!state.locations.is_empty());
//!
//! let (render, _actions) = handle_event(
//!     &mut state,
//!     &Event::QueryChanged("jeddah".to_string()),
//!     Instant::now(),
//! )?;
//! assert!(render);
//! assert!(state.filtered_locations.iter().all(|l| {
//!     l.name.to_lowercase().contains("jeddah") || l.address.to_lowercase().contains("jeddah")
//! }));
//! # Ok::<(), thahama_locator::LocatorError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod content;
pub mod domain;
pub mod geo;
pub mod i18n;
pub mod infrastructure;
pub mod map;

pub mod ui;

pub mod observability;

pub use app::{
    filter_locations, handle_event, Action, AppState, Event, LayoutClass, PanelFocus,
    SelectionOrigin,
};
pub use content::build_locations;
pub use domain::{LocatorError, Result, StoreLocation, StoreStatus};
pub use geo::{GeoBounds, LatLng};
pub use i18n::Language;
pub use map::{MapCommand, MapEvent, TransitionPolicy, ViewportCommand};
pub use ui::MarkerTheme;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Transition policy selector for configuration files.
///
/// Maps onto [`TransitionPolicy`] with the durations configured alongside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    /// Coalesce rapid commands; the last one wins after a quiet period.
    #[default]
    Debounce,

    /// Emit immediately, ignore commands while a transition is in flight.
    Lockout,
}

/// Engine configuration.
///
/// Loadable from a TOML file; every field has a default so partial files are
/// fine:
///
/// ```toml
/// language = "ar"
/// transition = "lockout"
/// lockout_hold_ms = 3100
/// jitter_degrees = 0.15
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface language. Default: English.
    pub language: Language,

    /// Animated-transition coalescing mode. Default: debounce.
    pub transition: TransitionMode,

    /// Debounce quiet period in milliseconds. Default: 150.
    pub debounce_quiet_ms: u64,

    /// Lockout hold in milliseconds, covering the transition duration plus
    /// settling. Default: 3100.
    pub lockout_hold_ms: u64,

    /// Marker jitter amplitude in degrees. Default: 0.15.
    pub jitter_degrees: f64,

    /// Path to a TOML marker-theme file. Default: unset, built-in theme.
    pub theme_file: Option<String>,

    /// Tracing level directive for the subscriber (e.g. `"info"`,
    /// `"thahama_locator=debug"`). Default: unset, treated as `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            transition: TransitionMode::Debounce,
            debounce_quiet_ms: 150,
            lockout_hold_ms: 3100,
            jitter_degrees: geo::DEFAULT_JITTER_DEGREES,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields take their defaults; a missing or malformed file is a
    /// [`LocatorError::Config`].
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Config`] when the file cannot be read or
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LocatorError::Config(format!("failed to read config: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| LocatorError::Config(format!("failed to parse config: {e}")))
    }

    /// Resolves the marker theme: the configured file when set and loadable,
    /// the built-in theme otherwise.
    #[must_use]
    pub fn marker_theme(&self) -> MarkerTheme {
        self.theme_file.as_ref().map_or_else(MarkerTheme::default, |theme_file| {
            MarkerTheme::from_file(theme_file).unwrap_or_else(|error| {
                tracing::debug!(theme_file = %theme_file, error = %error, "failed to load theme, using default");
                MarkerTheme::default()
            })
        })
    }

    /// The transition policy implied by this configuration.
    #[must_use]
    pub fn transition_policy(&self) -> TransitionPolicy {
        match self.transition {
            TransitionMode::Debounce => TransitionPolicy::Debounce {
                quiet: Duration::from_millis(self.debounce_quiet_ms),
            },
            TransitionMode::Lockout => TransitionPolicy::Lockout {
                hold: Duration::from_millis(self.lockout_hold_ms),
            },
        }
    }
}

/// Builds the catalog and initial application state.
///
/// Marker jitter draws from the thread-local generator, so marker positions
/// vary between sessions; use [`initialize_with_rng`] with a seeded generator
/// for reproducible fixtures.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    initialize_with_rng(config, &mut rand::rng())
}

/// [`initialize`] with an injected random source for deterministic jitter.
pub fn initialize_with_rng<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> AppState {
    tracing::debug!("initializing locator engine");
    let locations = content::build_locations(config.jitter_degrees, rng);
    AppState::new(locations, config.transition_policy(), config.language)
}
