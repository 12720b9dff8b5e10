//! View model types representing renderable locator state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like status labels, translated
//! strings, and search-match highlight ranges. They contain no business
//! logic, only display-ready data.

use crate::app::modes::PanelFocus;
use crate::i18n::TextDirection;
use serde::Serialize;

/// Complete view model for the locator panel.
///
/// Computed from `AppState` by `compute_viewmodel()` and consumed by the host
/// renderer. Serializable so stdio/bridge hosts can forward it as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct LocatorViewModel {
    /// Header information (title, result count summary).
    pub header: HeaderInfo,

    /// Search input state.
    pub search_bar: SearchBarInfo,

    /// City filter chip row, wildcard first.
    pub city_chips: Vec<CityChip>,

    /// Filtered store list in catalog order.
    pub items: Vec<StoreListItem>,

    /// Present when the filter matched nothing; a designed state, not an error.
    pub empty_state: Option<EmptyState>,

    /// Which panel is revealed on compact layouts.
    pub panel: PanelFocus,

    /// Text direction for the current language.
    pub direction: TextDirection,
}

/// Header display information.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderInfo {
    /// Panel title ("Our Locations" / localized).
    pub title: String,

    /// Result count summary, e.g. "18 stores found".
    pub results_summary: String,
}

/// Search input display state.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Localized placeholder shown when the query is empty.
    pub placeholder: String,
}

/// One button in the city filter row.
#[derive(Debug, Clone, Serialize)]
pub struct CityChip {
    /// Chip label; also the exact value fed back as the city filter.
    pub label: String,

    /// Whether this chip is the active filter.
    pub is_active: bool,
}

/// One row in the store list.
#[derive(Debug, Clone, Serialize)]
pub struct StoreListItem {
    /// Location id, echoed back on click.
    pub id: String,

    /// Display name in the current language.
    pub name: String,

    pub address: String,
    pub hours: String,
    pub phone: String,

    /// Localized status badge text.
    pub status_label: String,

    /// Whether this row is the current selection.
    pub is_selected: bool,

    /// Whether directions/call/copy buttons are offered (selected and open).
    pub show_actions: bool,

    /// Byte ranges of the name matching the search query, for highlight
    /// rendering. Empty when the query is empty or matched the address only.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty-result display information.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyState {
    /// Localized "no stores found" message.
    pub message: String,
}
