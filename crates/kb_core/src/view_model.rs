use std::collections::HashSet;

use crate::{Article, ArticleId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub section_title: String,
    pub query: String,
    pub selected_category: String,
    pub filters: Vec<FilterButtonView>,
    pub sidebar: Vec<SidebarEntryView>,
    pub cards: Vec<CardView>,
    pub result_count: usize,
    pub no_results: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButtonView {
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntryView {
    pub key: String,
    pub icon: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ArticleId,
    pub category: String,
    pub date: String,
    pub title: String,
    pub excerpt: String,
    pub link: String,
}

impl From<&Article> for CardView {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            category: article.category.key().to_string(),
            date: article.date.format("%Y-%m-%d").to_string(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            link: article.link.clone(),
        }
    }
}

/// A single display update needed to move from one view to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayChange {
    SetSectionTitle(String),
    SetActiveCategory(String),
    HideCard(ArticleId),
    ShowCard(ArticleId),
    SetNoResults(bool),
}

/// Computes the minimal display updates from `previous` to `next`.
///
/// With no previous view everything visible in `next` is emitted. Hidden
/// cards come before shown ones, each in view order.
pub fn diff(previous: Option<&AppViewModel>, next: &AppViewModel) -> Vec<DisplayChange> {
    let mut changes = Vec::new();

    if previous.map_or(true, |prev| prev.section_title != next.section_title) {
        changes.push(DisplayChange::SetSectionTitle(next.section_title.clone()));
    }
    if previous.map_or(true, |prev| prev.selected_category != next.selected_category) {
        changes.push(DisplayChange::SetActiveCategory(
            next.selected_category.clone(),
        ));
    }

    let before: HashSet<ArticleId> = previous
        .map(|prev| prev.cards.iter().map(|card| card.id).collect())
        .unwrap_or_default();
    let after: HashSet<ArticleId> = next.cards.iter().map(|card| card.id).collect();

    if let Some(prev) = previous {
        changes.extend(
            prev.cards
                .iter()
                .filter(|card| !after.contains(&card.id))
                .map(|card| DisplayChange::HideCard(card.id)),
        );
    }
    changes.extend(
        next.cards
            .iter()
            .filter(|card| !before.contains(&card.id))
            .map(|card| DisplayChange::ShowCard(card.id)),
    );

    if previous.map_or(true, |prev| prev.no_results != next.no_results) {
        changes.push(DisplayChange::SetNoResults(next.no_results));
    }

    changes
}
