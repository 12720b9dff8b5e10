//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! locator, along with the pure filter operation, selection management, and
//! UI view model generation. It serves as the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the immutable location catalog) from
//! derived state (filtered list, selection, panel focus) to maintain
//! consistency and simplify state transitions. Filter state is owned here and
//! passed into pure functions; there are no module-level mutable singletons.
//!
//! # State Components
//!
//! - **Locations**: immutable catalog built once at load time
//! - **Filtered Locations**: subset after applying city and search filters
//! - **Selection**: currently selected location id, if any
//! - **Panel / Layout**: compact-layout presentation state
//! - **Scheduler**: animated viewport transition coalescing

use crate::content::{catalog, CITY_FILTER_ALL};
use crate::domain::StoreLocation;
use crate::i18n::{LabelKey, Language};
use crate::map::{TransitionPolicy, TransitionScheduler};
use crate::ui::viewmodel::{
    CityChip, EmptyState, HeaderInfo, LocatorViewModel, SearchBarInfo, StoreListItem,
};
use super::modes::{LayoutClass, PanelFocus};

/// Returns the locations satisfying the city and search predicates, in their
/// original order.
///
/// The predicate is the AND of an exact city match (with
/// [`CITY_FILTER_ALL`] as the wildcard) and a case-insensitive substring
/// match of `query` against the English name and address fields (empty query
/// matches everything). This is a stable filter, not a sort: relative order
/// of survivors is preserved, and an empty result is a normal outcome.
///
/// Pure function of its inputs; callers re-run it on every change to either
/// filter input.
///
/// # Example
///
/// ```
/// use thahama_locator::app::state::filter_locations;
/// use thahama_locator::content;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let locations = content::build_locations(0.15, &mut rng);
/// let all = filter_locations(&locations, "All", "");
/// assert_eq!(all.len(), locations.len());
/// ```
#[must_use]
pub fn filter_locations<'a>(
    locations: &'a [StoreLocation],
    selected_city: &str,
    query: &str,
) -> Vec<&'a StoreLocation> {
    let query_lower = query.to_lowercase();
    locations
        .iter()
        .filter(|location| {
            let matches_city =
                selected_city == CITY_FILTER_ALL || location.city == selected_city;
            matches_city && location.matches_query(&query_lower)
        })
        .collect()
}

/// Central application state container.
///
/// Holds the catalog plus all transient UI state: filters, selection, panel
/// focus, and the viewport transition scheduler. Mutated by the event handler
/// in response to user input and map events. View models are computed
/// on-demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Immutable location catalog built at load time.
    pub locations: Vec<StoreLocation>,

    /// Locations matching the current city and search filters.
    ///
    /// Recomputed by `apply_filters()` after each filter change. Used for
    /// rendering; selection always resolves against the full catalog.
    pub filtered_locations: Vec<StoreLocation>,

    /// Id of the selected location, if any.
    ///
    /// A weak reference: lookup only, never ownership. Selection of an id
    /// absent from the catalog is a no-op.
    pub selected_id: Option<String>,

    /// Active city filter; [`CITY_FILTER_ALL`] is the wildcard.
    pub selected_city: String,

    /// Current search query. Matched case-insensitively as a substring
    /// against English name and address fields.
    pub search_query: String,

    /// City chip labels in catalog first-seen order, wildcard first.
    pub city_chips: Vec<String>,

    /// Interface language for labels and text direction.
    pub language: Language,

    /// Host viewport layout class.
    pub layout: LayoutClass,

    /// Which panel is revealed on compact layouts.
    pub panel: PanelFocus,

    /// Latched once the initial fit-bounds has been emitted, so filtering
    /// never re-triggers it.
    pub bounds_fitted: bool,

    /// Animated viewport transition scheduler.
    pub scheduler: TransitionScheduler,
}

impl AppState {
    /// Creates application state over a built catalog.
    ///
    /// Filters start at the wildcard city with an empty query, so the
    /// filtered list initially mirrors the catalog.
    #[must_use]
    pub fn new(
        locations: Vec<StoreLocation>,
        policy: TransitionPolicy,
        language: Language,
    ) -> Self {
        let city_chips = catalog::city_chips(&locations);
        let filtered_locations = locations.clone();
        Self {
            locations,
            filtered_locations,
            selected_id: None,
            selected_city: CITY_FILTER_ALL.to_string(),
            search_query: String::new(),
            city_chips,
            language,
            layout: LayoutClass::default(),
            panel: PanelFocus::default(),
            bounds_fitted: false,
            scheduler: TransitionScheduler::new(policy),
        }
    }

    /// Recomputes `filtered_locations` from the current filter inputs.
    ///
    /// Called after every query or city change. Selection is intentionally
    /// left untouched: a selected store filtered out of the list keeps its
    /// active marker on the map.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.locations.len(),
            city = %self.selected_city,
            query_len = self.search_query.len(),
        )
        .entered();

        self.filtered_locations =
            filter_locations(&self.locations, &self.selected_city, &self.search_query)
                .into_iter()
                .cloned()
                .collect();

        tracing::debug!(filtered = self.filtered_locations.len(), "filters applied");
    }

    /// Looks up a location by id in the full catalog.
    #[must_use]
    pub fn location_by_id(&self, id: &str) -> Option<&StoreLocation> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// The currently selected location, if any.
    #[must_use]
    pub fn selected_location(&self) -> Option<&StoreLocation> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.location_by_id(id))
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Transforms application state into display-ready data: localized
    /// labels, status badges, action visibility, and search-match highlight
    /// ranges. Contains no side effects.
    #[must_use]
    pub fn compute_viewmodel(&self) -> LocatorViewModel {
        let items: Vec<StoreListItem> = self
            .filtered_locations
            .iter()
            .map(|location| self.compute_list_item(location))
            .collect();

        let empty_state = if items.is_empty() {
            Some(EmptyState {
                message: self.language.label(LabelKey::EmptyResults).to_string(),
            })
        } else {
            None
        };

        LocatorViewModel {
            header: HeaderInfo {
                title: self.language.label(LabelKey::Title).to_string(),
                results_summary: format!(
                    "{} {}",
                    self.filtered_locations.len(),
                    self.language.label(LabelKey::StoresFound)
                ),
            },
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
                placeholder: self
                    .language
                    .label(LabelKey::SearchPlaceholder)
                    .to_string(),
            },
            city_chips: self
                .city_chips
                .iter()
                .map(|label| CityChip {
                    label: label.clone(),
                    is_active: *label == self.selected_city,
                })
                .collect(),
            items,
            empty_state,
            panel: self.panel,
            direction: self.language.direction(),
        }
    }

    /// Builds the list row for one location.
    fn compute_list_item(&self, location: &StoreLocation) -> StoreListItem {
        let is_selected = self.selected_id.as_deref() == Some(location.id.as_str());
        let status_label = match location.status {
            crate::domain::StoreStatus::Open => self.language.label(LabelKey::StatusOpen),
            crate::domain::StoreStatus::ComingSoon => {
                self.language.label(LabelKey::StatusComingSoon)
            }
            crate::domain::StoreStatus::Closed => self.language.label(LabelKey::StatusClosed),
        };

        let name = match self.language {
            Language::En => location.name.clone(),
            Language::Ar => location.name_ar.clone(),
        };

        let highlight_ranges = if self.search_query.is_empty() {
            vec![]
        } else {
            match_ranges(&location.name, &self.search_query)
        };

        StoreListItem {
            id: location.id.clone(),
            name,
            address: location.address.clone(),
            hours: location.hours.clone(),
            phone: location.phone.clone(),
            status_label: status_label.to_string(),
            is_selected,
            show_actions: is_selected && location.status.allows_contact_actions(),
            highlight_ranges,
        }
    }
}

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
///
/// Ranges are reported against the original string, so multi-byte characters
/// (Arabic names) stay addressable. Overlapping occurrences are skipped; the
/// scan resumes after each match.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    // Lowercasing can change byte lengths, so track the mapping from each
    // lowered char back to its original byte span.
    let mut lowered = String::new();
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for (original_start, ch) in text.char_indices() {
        let original_end = original_start + ch.len_utf8();
        for lower_ch in ch.to_lowercase() {
            lowered.push(lower_ch);
            spans.push((original_start, original_end));
        }
    }

    let needle = query.to_lowercase();
    let needle_chars = needle.chars().count();
    if needle_chars == 0 {
        return vec![];
    }

    let lowered_chars: Vec<char> = lowered.chars().collect();
    let mut ranges = Vec::new();
    let mut index = 0;
    while index + needle_chars <= lowered_chars.len() {
        let window: String = lowered_chars[index..index + needle_chars].iter().collect();
        if window == needle {
            let start = spans[index].0;
            let end = spans[index + needle_chars - 1].1;
            ranges.push((start, end));
            index += needle_chars;
        } else {
            index += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StoreLocation, StoreStatus};
    use crate::geo::LatLng;

    fn location(id: &str, name: &str, city: &str, address: &str) -> StoreLocation {
        StoreLocation {
            id: id.to_string(),
            name: name.to_string(),
            name_ar: name.to_string(),
            city: city.to_string(),
            address: address.to_string(),
            phone: "+966503695826".to_string(),
            hours: "24 Hours".to_string(),
            status: StoreStatus::Open,
            position: LatLng::new(21.4858, 39.1925),
        }
    }

    fn fixture() -> Vec<StoreLocation> {
        vec![
            location("branch-1", "Thahama Market- Al Hamdaniyah", "Jeddah", "Jeddah"),
            location("branch-2", "Thahama Market- North Jeddah", "Jeddah", "Jeddah"),
            location("branch-3", "Thahama Market- Al Olaya", "Riyadh", "Riyadh"),
            location("branch-4", "Thahama Market- Corniche", "Jeddah", "Jeddah"),
            location("branch-5", "Thahama Market- Al Malaz", "Riyadh", "Riyadh"),
        ]
    }

    fn state(locations: Vec<StoreLocation>) -> AppState {
        AppState::new(locations, TransitionPolicy::default(), Language::En)
    }

    #[test]
    fn city_filter_returns_exact_subset_in_original_order() {
        let locations = fixture();
        let filtered = filter_locations(&locations, "Jeddah", "");
        let ids: Vec<_> = filtered.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["branch-1", "branch-2", "branch-4"]);
    }

    #[test]
    fn wildcard_city_with_empty_query_is_identity() {
        let locations = fixture();
        let filtered = filter_locations(&locations, "All", "");
        assert_eq!(filtered.len(), locations.len());
        let ids: Vec<_> = filtered.iter().map(|l| l.id.as_str()).collect();
        let expected: Vec<_> = locations.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn search_is_case_insensitive() {
        let locations = fixture();
        let upper = filter_locations(&locations, "All", "JEDDAH");
        let lower = filter_locations(&locations, "All", "jeddah");
        let upper_ids: Vec<_> = upper.iter().map(|l| l.id.as_str()).collect();
        let lower_ids: Vec<_> = lower.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(upper_ids, lower_ids);
        assert!(!upper_ids.is_empty());
    }

    #[test]
    fn city_and_query_predicates_are_anded() {
        let locations = fixture();
        let filtered = filter_locations(&locations, "Riyadh", "olaya");
        let ids: Vec<_> = filtered.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["branch-3"]);
    }

    #[test]
    fn no_match_returns_empty_without_error() {
        let locations = fixture();
        assert!(filter_locations(&locations, "All", "zzz-no-match").is_empty());
        assert!(filter_locations(&locations, "Nowhere", "").is_empty());
    }

    #[test]
    fn apply_filters_keeps_selection() {
        let mut state = state(fixture());
        state.selected_id = Some("branch-3".to_string());
        state.selected_city = "Jeddah".to_string();
        state.apply_filters();

        assert_eq!(state.filtered_locations.len(), 3);
        assert_eq!(state.selected_id.as_deref(), Some("branch-3"));
        assert!(state.selected_location().is_some());
    }

    #[test]
    fn viewmodel_reports_empty_state_only_when_empty() {
        let mut state = state(fixture());
        assert!(state.compute_viewmodel().empty_state.is_none());

        state.search_query = "zzz-no-match".to_string();
        state.apply_filters();
        let vm = state.compute_viewmodel();
        assert!(vm.items.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn viewmodel_offers_actions_only_on_selected_open_stores() {
        let mut locations = fixture();
        locations[1].status = StoreStatus::ComingSoon;
        let mut state = state(locations);

        state.selected_id = Some("branch-1".to_string());
        let vm = state.compute_viewmodel();
        assert!(vm.items[0].show_actions);
        assert!(!vm.items[1].show_actions);

        state.selected_id = Some("branch-2".to_string());
        let vm = state.compute_viewmodel();
        assert!(!vm.items[1].show_actions, "coming_soon store offers no actions");
    }

    #[test]
    fn viewmodel_marks_active_city_chip() {
        let mut state = state(fixture());
        state.selected_city = "Riyadh".to_string();
        let vm = state.compute_viewmodel();
        let active: Vec<_> = vm
            .city_chips
            .iter()
            .filter(|chip| chip.is_active)
            .map(|chip| chip.label.as_str())
            .collect();
        assert_eq!(active, vec!["Riyadh"]);
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        let ranges = match_ranges("Thahama Market- North Jeddah", "jeddah");
        assert_eq!(ranges, vec![(22, 28)]);
    }

    #[test]
    fn match_ranges_handles_multibyte_text() {
        // Must not panic or split a char boundary on Arabic text.
        let ranges = match_ranges("فرع جدة", "جدة");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&"فرع جدة"[start..end], "جدة");
    }

    #[test]
    fn match_ranges_empty_query_yields_nothing() {
        assert!(match_ranges("Thahama", "").is_empty());
    }
}
