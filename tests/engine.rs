//! End-to-end tests driving the engine the way a host would: build the
//! catalog, feed events, and observe the emitted actions.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thahama_locator::app::SelectionOrigin;
use thahama_locator::map::MapCommand;
use thahama_locator::{
    filter_locations, handle_event, initialize_with_rng, Action, AppState, Config, Event,
    Language, LayoutClass, MapEvent, TransitionMode, ViewportCommand,
};

fn seeded_state(transition: TransitionMode) -> AppState {
    let config = Config {
        transition,
        ..Config::default()
    };
    initialize_with_rng(&config, &mut StdRng::seed_from_u64(99))
}

fn viewport_commands(actions: &[Action]) -> Vec<ViewportCommand> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::Map {
                command: MapCommand::Viewport { command },
            } => Some(command.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn catalog_filter_respects_city_and_query_together() {
    let state = seeded_state(TransitionMode::Debounce);

    let jeddah = filter_locations(&state.locations, "Jeddah", "");
    assert_eq!(jeddah.len(), 2);
    assert!(jeddah.iter().all(|l| l.city == "Jeddah"));

    // Original relative order is preserved.
    let positions: Vec<usize> = jeddah
        .iter()
        .map(|l| state.locations.iter().position(|o| o.id == l.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    let narrowed = filter_locations(&state.locations, "Makkah Province", "barbee");
    assert!(!narrowed.is_empty());
    assert!(narrowed
        .iter()
        .all(|l| l.city == "Makkah Province" && l.name.to_lowercase().contains("barbee")));
}

#[test]
fn query_search_is_case_insensitive_end_to_end() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();

    handle_event(&mut state, &Event::QueryChanged("KHULAIS".to_string()), now).unwrap();
    let upper: Vec<String> = state.filtered_locations.iter().map(|l| l.id.clone()).collect();

    handle_event(&mut state, &Event::QueryChanged("khulais".to_string()), now).unwrap();
    let lower: Vec<String> = state.filtered_locations.iter().map(|l| l.id.clone()).collect();

    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn hopeless_query_yields_designed_empty_state() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();

    let (render, actions) = handle_event(
        &mut state,
        &Event::QueryChanged("zzz-no-match".to_string()),
        now,
    )
    .unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert!(state.filtered_locations.is_empty());

    let vm = state.compute_viewmodel();
    assert!(vm.items.is_empty());
    assert_eq!(
        vm.empty_state.unwrap().message,
        "No stores found matching your criteria."
    );
}

#[test]
fn selection_and_tick_drive_exactly_one_fly_to() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let start = Instant::now();
    let select = Event::LocationSelected {
        id: "branch-6".to_string(),
        origin: SelectionOrigin::List,
    };

    // Rapid double selection of the same store.
    handle_event(&mut state, &select, start).unwrap();
    let (_, actions) = handle_event(&mut state, &select, start + Duration::from_millis(40)).unwrap();
    assert!(viewport_commands(&actions).is_empty());

    let mut emitted = vec![];
    for ms in [100_u64, 190, 400, 2000] {
        let (_, actions) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_millis(ms)).unwrap();
        emitted.extend(viewport_commands(&actions));
    }

    assert_eq!(emitted.len(), 1);
    let expected = state.location_by_id("branch-6").unwrap().position;
    assert_eq!(emitted[0], ViewportCommand::fly_to(expected));
    assert_eq!(state.selected_id.as_deref(), Some("branch-6"));
}

#[test]
fn lockout_policy_drops_selection_during_hold() {
    let mut state = seeded_state(TransitionMode::Lockout);
    let start = Instant::now();

    let (_, first) = handle_event(
        &mut state,
        &Event::LocationSelected {
            id: "branch-1".to_string(),
            origin: SelectionOrigin::List,
        },
        start,
    )
    .unwrap();
    assert_eq!(viewport_commands(&first).len(), 1);

    let (_, second) = handle_event(
        &mut state,
        &Event::LocationSelected {
            id: "branch-2".to_string(),
            origin: SelectionOrigin::List,
        },
        start + Duration::from_millis(1000),
    )
    .unwrap();
    // Selection state still updates; only the animation is dropped.
    assert!(viewport_commands(&second).is_empty());
    assert_eq!(state.selected_id.as_deref(), Some("branch-2"));
}

#[test]
fn map_ready_fits_the_whole_catalog_once() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();

    let (_, actions) = handle_event(&mut state, &Event::from(MapEvent::Ready), now).unwrap();
    let commands = viewport_commands(&actions);
    assert_eq!(commands.len(), 1);

    match &commands[0] {
        ViewportCommand::FitBounds { bounds, padding_px } => {
            assert_eq!(*padding_px, 50);
            for location in &state.locations {
                assert!(location.position.lat >= bounds.south);
                assert!(location.position.lat <= bounds.north);
                assert!(location.position.lng >= bounds.west);
                assert!(location.position.lng <= bounds.east);
            }
        }
        other => panic!("unexpected command: {other:?}"),
    }

    // A later ready (e.g. remount of the map widget) must not re-fit.
    handle_event(&mut state, &Event::CityChanged("Tabuk".to_string()), now).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::from(MapEvent::Ready), now).unwrap();
    assert!(viewport_commands(&actions).is_empty());
}

#[test]
fn fit_bounds_is_deterministic_for_a_fixed_catalog() {
    let a = seeded_state(TransitionMode::Debounce);
    let b = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();

    let mut state_a = a;
    let mut state_b = b;
    let (_, actions_a) = handle_event(&mut state_a, &Event::MapReady, now).unwrap();
    let (_, actions_b) = handle_event(&mut state_b, &Event::MapReady, now).unwrap();

    assert_eq!(viewport_commands(&actions_a), viewport_commands(&actions_b));
}

#[test]
fn unmount_mid_animation_silences_all_later_ticks() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let start = Instant::now();

    handle_event(
        &mut state,
        &Event::LocationSelected {
            id: "branch-4".to_string(),
            origin: SelectionOrigin::List,
        },
        start,
    )
    .unwrap();
    handle_event(&mut state, &Event::Unmount, start + Duration::from_millis(50)).unwrap();

    for ms in [150_u64, 500, 5000, 60_000] {
        let (_, actions) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_millis(ms)).unwrap();
        assert!(actions.is_empty());
    }
}

#[test]
fn marker_click_on_compact_layout_reveals_the_list() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();
    handle_event(&mut state, &Event::LayoutChanged(LayoutClass::Compact), now).unwrap();

    let click: Event = MapEvent::MarkerClicked {
        id: "branch-9".to_string(),
    }
    .into();
    handle_event(&mut state, &click, now).unwrap();

    assert_eq!(state.selected_id.as_deref(), Some("branch-9"));
    let vm = state.compute_viewmodel();
    assert_eq!(
        serde_json::to_value(vm.panel).unwrap(),
        serde_json::json!("list")
    );
}

#[test]
fn selection_restyles_markers_through_the_bridge() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();

    let (_, actions) = handle_event(
        &mut state,
        &Event::LocationSelected {
            id: "branch-3".to_string(),
            origin: SelectionOrigin::List,
        },
        now,
    )
    .unwrap();

    let markers = actions.iter().find_map(|action| match action {
        Action::Map {
            command: MapCommand::SetMarkers { markers },
        } => Some(markers.clone()),
        _ => None,
    });
    let markers = markers.expect("selection must refresh markers");
    assert_eq!(markers.len(), state.locations.len());
    assert!(markers.iter().all(|m| m.selected == (m.id == "branch-3")));

    // The command survives the JSON bridge intact.
    let encoded = MapCommand::SetMarkers { markers }.encode().unwrap();
    assert!(encoded.contains("\"set_markers\""));
}

#[test]
fn arabic_language_switch_flips_direction_and_labels() {
    let mut state = seeded_state(TransitionMode::Debounce);
    let now = Instant::now();

    let (render, _) =
        handle_event(&mut state, &Event::LanguageChanged(Language::Ar), now).unwrap();
    assert!(render);

    let vm = state.compute_viewmodel();
    assert_eq!(
        serde_json::to_value(vm.direction).unwrap(),
        serde_json::json!("rtl")
    );
    assert_eq!(vm.header.title, "فروعنا");

    // Filtering still matches English content fields under Arabic UI.
    handle_event(&mut state, &Event::QueryChanged("jeddah".to_string()), now).unwrap();
    assert!(!state.filtered_locations.is_empty());
}
