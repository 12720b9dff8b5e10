//! Layout and panel state types for the locator.
//!
//! These enums control responsive presentation: which layout class the host
//! viewport falls into, which panel (list or map) is revealed when only one
//! fits, and where a selection originated, which decides the reveal
//! direction.
//!
//! # State Machine
//!
//! On a [`LayoutClass::Wide`] viewport both panels are visible and
//! [`PanelFocus`] is ignored. On [`LayoutClass::Compact`] the panels stack:
//! selecting from the list reveals the map, selecting a marker reveals the
//! list, and the handle toggles between the two.

use serde::{Deserialize, Serialize};

/// Host viewport classification.
///
/// The host reports layout changes (e.g. on resize across the breakpoint);
/// the engine only uses the class to decide panel-reveal behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutClass {
    /// List and map are shown side by side; no panel toggling.
    #[default]
    Wide,

    /// One panel at a time; selection toggles which is revealed.
    Compact,
}

/// Which panel is revealed on compact layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelFocus {
    /// The map fills the viewport; the list is collapsed.
    #[default]
    Map,

    /// The list panel is slid up over the map.
    List,
}

impl PanelFocus {
    /// The opposite panel.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Map => Self::List,
            Self::List => Self::Map,
        }
    }
}

/// Where a selection gesture originated.
///
/// Decides the compact-layout reveal: list selections hide the list to show
/// the map flying to the store; marker clicks reveal the list so the store's
/// details are readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrigin {
    /// The user tapped a row in the store list.
    List,

    /// The user clicked a marker on the map.
    Marker,
}
