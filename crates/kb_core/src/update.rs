use crate::{AppState, CategoryFilter, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::FilterButtonClicked(key) => {
            state.select_category(CategoryFilter::from_key(&key));
            Vec::new()
        }
        Msg::SidebarCategoryClicked(key) => {
            // The sidebar scrolls even when the selection does not change.
            state.select_category(CategoryFilter::from_key(&key));
            vec![Effect::ScrollToArticles]
        }
        Msg::ClearFilters => {
            state.reset_filters();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
