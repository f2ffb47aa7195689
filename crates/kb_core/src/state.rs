use kb_logging::kb_debug;

use crate::filter::{filter, matching_indices, CategoryFilter, ALL_KEY};
use crate::view_model::{AppViewModel, CardView, FilterButtonView, SidebarEntryView};
use crate::{builtin_catalog, Article, ArticleId, Category};

/// The user's current query and category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    category: CategoryFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        filter(articles, &self.query, &self.category)
    }

    /// Returns whether the query actually changed.
    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        true
    }

    pub(crate) fn set_category(&mut self, category: CategoryFilter) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    pub(crate) fn reset(&mut self) -> bool {
        let changed = *self != Self::default();
        *self = Self::default();
        changed
    }
}

/// Session state: the read-only catalog plus the filter driving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    catalog: Vec<Article>,
    filter: FilterState,
    /// Catalog indices of the articles passing the current filter.
    visible: Vec<usize>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(builtin_catalog())
    }
}

impl AppState {
    /// Session over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Vec<Article>) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            filter: FilterState::new(),
            visible,
            dirty: false,
        }
    }

    pub fn catalog(&self) -> &[Article] {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_ids(&self) -> Vec<ArticleId> {
        self.visible.iter().map(|&i| self.catalog[i].id).collect()
    }

    pub fn visible_articles(&self) -> Vec<&Article> {
        self.visible.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn view(&self) -> AppViewModel {
        let selected = self.filter.category();
        let filters = std::iter::once(FilterButtonView {
            key: ALL_KEY.to_string(),
            label: CategoryFilter::All.section_title().to_string(),
            active: *selected == CategoryFilter::All,
        })
        .chain(Category::ALL.into_iter().map(|category| FilterButtonView {
            key: category.key().to_string(),
            label: category.button_label().to_string(),
            active: *selected == CategoryFilter::Only(category),
        }))
        .collect();
        let sidebar = Category::ALL
            .into_iter()
            .map(|category| SidebarEntryView {
                key: category.key().to_string(),
                icon: category.icon().to_string(),
                label: category.button_label().to_string(),
                active: *selected == CategoryFilter::Only(category),
            })
            .collect();
        let cards: Vec<CardView> = self
            .visible_articles()
            .into_iter()
            .map(CardView::from)
            .collect();

        AppViewModel {
            section_title: selected.section_title().to_string(),
            query: self.filter.query().to_string(),
            selected_category: selected.key().to_string(),
            filters,
            sidebar,
            result_count: cards.len(),
            no_results: cards.is_empty(),
            cards,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.filter.set_query(query) {
            self.refilter();
        }
    }

    pub(crate) fn select_category(&mut self, category: CategoryFilter) {
        if self.filter.set_category(category) {
            self.refilter();
        }
    }

    pub(crate) fn reset_filters(&mut self) {
        if self.filter.reset() {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.visible = matching_indices(&self.catalog, self.filter.query(), self.filter.category());
        kb_debug!(
            "Filter query={:?} category={} visible={}",
            self.filter.query(),
            self.filter.category().key(),
            self.visible.len()
        );
        self.dirty = true;
    }
}
