use std::sync::Once;

use kb_core::{update, AppState, CategoryFilter, Effect, Msg};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(kb_logging::initialize_for_tests);
}

fn send(state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    update(state, msg)
}

#[test]
fn fresh_state_shows_everything() {
    init_logging();
    let state = AppState::new();
    let view = state.view();

    assert_eq!(view.section_title, "All Articles");
    assert_eq!(view.selected_category, "all");
    assert_eq!(view.query, "");
    assert_eq!(view.result_count, 6);
    assert!(!view.no_results);
    assert!(!view.dirty);
}

#[test]
fn query_change_refilters_and_marks_dirty() {
    init_logging();
    let (mut state, effects) = send(AppState::new(), Msg::QueryChanged("wifi".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.visible_ids(), vec![3]);
    assert_eq!(state.filter_state().query(), "wifi");
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn same_query_twice_is_not_dirty() {
    init_logging();
    let (mut state, _) = send(AppState::new(), Msg::QueryChanged("wifi".to_string()));
    assert!(state.consume_dirty());

    let (mut state, _) = send(state, Msg::QueryChanged("wifi".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn filter_button_selects_category_and_title() {
    init_logging();
    let (state, effects) = send(AppState::new(), Msg::FilterButtonClicked("software".to_string()));
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.section_title, "Software & Applications");
    assert_eq!(state.visible_ids(), vec![2, 4]);
    let active: Vec<&str> = view
        .filters
        .iter()
        .filter(|button| button.active)
        .map(|button| button.key.as_str())
        .collect();
    assert_eq!(active, vec!["software"]);
}

#[test]
fn sidebar_click_scrolls_even_without_change() {
    init_logging();
    let (mut state, effects) =
        send(AppState::new(), Msg::SidebarCategoryClicked("network".to_string()));
    assert_eq!(effects, vec![Effect::ScrollToArticles]);
    assert!(state.consume_dirty());
    assert!(state.view().sidebar.iter().any(|entry| entry.key == "network" && entry.active));

    let (mut state, effects) = send(state, Msg::SidebarCategoryClicked("network".to_string()));
    assert_eq!(effects, vec![Effect::ScrollToArticles]);
    assert!(!state.consume_dirty());
}

#[test]
fn query_is_kept_across_category_changes() {
    init_logging();
    let (state, _) = send(AppState::new(), Msg::QueryChanged("guide".to_string()));
    assert_eq!(state.visible_ids(), vec![1, 2, 4]);

    let (state, _) = send(state, Msg::FilterButtonClicked("software".to_string()));
    assert_eq!(state.visible_ids(), vec![2, 4]);

    let (state, _) = send(state, Msg::FilterButtonClicked("all".to_string()));
    assert_eq!(state.visible_ids(), vec![1, 2, 4]);
}

#[test]
fn unknown_category_shows_empty_state_with_default_title() {
    init_logging();
    let (state, _) = send(AppState::new(), Msg::FilterButtonClicked("bogus".to_string()));
    let view = state.view();

    assert_eq!(
        state.filter_state().category(),
        &CategoryFilter::Unrecognized("bogus".to_string())
    );
    assert_eq!(view.section_title, "All Articles");
    assert!(view.no_results);
    assert!(view.filters.iter().all(|button| !button.active));
}

#[test]
fn clear_filters_restores_defaults() {
    init_logging();
    let (state, _) = send(AppState::new(), Msg::QueryChanged("zzz".to_string()));
    let (mut state, _) = send(state, Msg::FilterButtonClicked("printer".to_string()));
    assert!(state.view().no_results);
    state.consume_dirty();

    let (mut state, effects) = send(state, Msg::ClearFilters);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().result_count, 6);
    assert_eq!(state.filter_state().query(), "");

    let (mut state, _) = send(state, Msg::ClearFilters);
    assert!(!state.consume_dirty());
}

#[test]
fn custom_catalog_is_used() {
    init_logging();
    let catalog: Vec<_> = kb_core::builtin_catalog().into_iter().take(2).collect();
    let state = AppState::with_catalog(catalog);
    assert_eq!(state.visible_ids(), vec![1, 2]);

    let (state, _) = send(state, Msg::FilterButtonClicked("printer".to_string()));
    assert!(state.visible_ids().is_empty());
}
